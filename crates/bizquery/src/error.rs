//! Error types for bizquery operations.
//!
//! Query operations themselves never fail; these errors come from loading
//! datasets and configuration around them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for bizquery operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The dataset could not be read.
    #[error("Failed to load dataset: {0}")]
    Dataset(#[from] bizquery_jsonl::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// No dataset was given on the command line or in the configuration.
    #[error("No dataset given. Pass --data <PATH> or set 'data-file' in the configuration")]
    NoDataset,
}

/// A specialized Result type for bizquery operations.
pub type Result<T> = std::result::Result<T, Error>;
