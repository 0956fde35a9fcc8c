//! Error types for flexloc operations.
//!
//! This module defines [`FlexlocError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A template that cannot be found is not an error: resolution returns `None`
//! - Use `FlexlocError` for failures that need distinct handling
//! - Use `anyhow::Error` (via `FlexlocError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for flexloc operations.
#[derive(Debug, Error)]
pub enum FlexlocError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Layout records could not be read or parsed.
    #[error("Failed to parse layout records at {path}: {message}")]
    RecordsParseError { path: PathBuf, message: String },

    /// A located template could not be loaded.
    ///
    /// The file passed the existence check but reading it failed, usually
    /// because it disappeared in between. This is fatal, never "not found".
    #[error("Failed to load template {path}: {source}")]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for flexloc operations.
pub type Result<T> = std::result::Result<T, FlexlocError>;
