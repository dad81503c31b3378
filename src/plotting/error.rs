//! Error types for the plotting backend.

use std::io;

use thiserror::Error;

/// The main error type for plotting operations.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Error during IO operations (file writing, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Invalid data provided for plotting
    #[error("Invalid data: {0}")]
    InvalidData(String),
    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Unrecognised matplotlib-style format string
    #[error("Invalid format string '{fmt}': {message}")]
    InvalidFormat { fmt: String, message: String },
    /// Empty data provided where non-empty data is required
    #[error("Empty data provided")]
    EmptyData,
}

/// Result type alias for plotting operations.
pub type PlotResult<T> = Result<T, PlotError>;
