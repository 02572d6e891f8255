//! Error types for bizquery-jsonl operations.

use std::io;
use thiserror::Error;

/// The error type for bizquery-jsonl operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid JSONL format, reported with the offending line.
    #[error("Invalid JSONL format at line {line_number}: {message}")]
    InvalidFormat {
        /// The 1-based line number of the bad line.
        line_number: usize,
        /// What was wrong with the line.
        message: String,
    },
}

/// A specialized Result type for bizquery-jsonl operations.
pub type Result<T> = std::result::Result<T, Error>;
