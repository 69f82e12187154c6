use thiserror::Error;

/// Failure of a benchmark run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// A strategy could not find a key that is present in the dataset.
    #[error("{strategy}: key not found: {key}")]
    KeyNotFound { strategy: &'static str, key: String },
}
