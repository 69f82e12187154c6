//! Collection Lookup Benchmark
//!
//! Measures how long it takes to find records by key in a small, fixed
//! dataset using four strategies:
//! - **`Vec (any)`**: `records.iter().any(..)`
//! - **`Vec (for in)`**: a `for` loop over the slice
//! - **`Vec (for index)`**: a `for` loop over `0..len` with `records[i]`
//! - **`HashMap`**: `contains_key` on a prebuilt index
//!
//! Run the benchmark: `cargo run --release -p lookup-bench -- --key-type uuid`
//! Run criterion: `cargo bench -p lookup-bench`
//! Run tests: `cargo test`

pub mod config;
pub mod driver;
pub mod error;
pub mod report;
pub mod search;
