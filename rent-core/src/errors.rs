//! errors.rs - Custom error types for the rent-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! The CLI relies on [`RentError::InputNotFound`] being distinguishable from
//! every other I/O failure.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `rent-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RentError {
    #[error("File '{}' not found!", .0.display())]
    InputNotFound(PathBuf),

    #[error("Unsupported output format '{0}' (expected one of: svg, png, bmp, jpg, jpeg)")]
    UnsupportedFormat(String),

    #[error("Failed to render plot: {0}")]
    Plot(String),

    #[error("Failed to serialize entropy report: {0}")]
    Serialization(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for RentError {
    fn from(err: serde_json::Error) -> Self {
        RentError::Serialization(err.to_string())
    }
}
