//! Error types for benchmarking and dataset generation

use thiserror::Error;

/// Errors surfaced by the sort benchmark
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortBenchError {
    /// A sort finished but its output is not in non-decreasing order
    #[error(
        "{algorithm} produced unsorted output at index {index}: {previous} > {current}"
    )]
    PostconditionViolation {
        algorithm: String,
        index: usize,
        previous: i32,
        current: i32,
    },

    /// A sort's output is ordered but is not a permutation of its input
    #[error("{algorithm} output does not contain the same values as its input")]
    ContentMismatch { algorithm: String },

    /// Label does not name one of the four algorithms
    #[error("Unknown algorithm label: {0}")]
    UnknownAlgorithm(String),

    /// Requested dataset size is outside the range its kind allows
    #[error("Invalid dataset size {size} for {kind}: must be between {min} and {max}")]
    InvalidDatasetSize {
        kind: &'static str,
        size: usize,
        min: usize,
        max: usize,
    },

    /// I/O error while writing a report
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SortBenchError {
    fn from(err: std::io::Error) -> Self {
        SortBenchError::Io(err.to_string())
    }
}

/// Result type for sortbench operations
pub type Result<T, E = SortBenchError> = std::result::Result<T, E>;
