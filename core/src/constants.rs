//! Default benchmark configuration.

use crate::key::KeyType;

/// Key domain benchmarked when none is requested.
pub const DEFAULT_KEY_TYPE: KeyType = KeyType::String;

/// Number of records in the generated dataset.
pub const DEFAULT_COLLECTION_SIZE: usize = 10;

/// Timed iterations per strategy. Each iteration looks up every key once.
pub const DEFAULT_ITERATIONS: u32 = 1_000_000;

/// Untimed iterations per strategy before the clock starts.
pub const DEFAULT_WARMUP_ITERATIONS: u32 = 0;
