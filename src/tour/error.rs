//! Errors surfaced by the tour.

use std::io;

use thiserror::Error;

use crate::slice::SliceError;

/// Errors that can occur while loading the tour configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable held a value that could not be interpreted.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Errors that can stop a tour run.
#[derive(Debug, Error)]
pub enum TourError {
    /// Writing to the output failed.
    #[error("failed to write tour output: {0}")]
    Io(#[from] io::Error),
    /// A slice operation was misused.
    #[error("slice operation failed: {0}")]
    Slice(#[from] SliceError),
    /// The configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
