//! Error types for dryg operations.
//!
//! This module defines [`DrygError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The resolution core never fails: unresolvable queries produce an empty
//!   [`Resolution`](crate::resolver::Resolution), not an error
//! - Use `DrygError` for failures at the edges (validation, config, I/O)
//! - Use `anyhow::Error` (via `DrygError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dryg operations.
#[derive(Debug, Error)]
pub enum DrygError {
    /// A custom trigger definition was rejected at creation time.
    #[error("Invalid bang '!{trigger}': {message}")]
    InvalidTrigger { trigger: String, message: String },

    /// A trigger was looked up explicitly and does not exist.
    #[error("Unknown bang: !{trigger}")]
    UnknownTrigger { trigger: String },

    /// Failed to parse a configuration or data file.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A persisted store value could not be decoded.
    #[error("Corrupted store value for '{key}': {message}")]
    StoreParseError { key: String, message: String },

    /// A search page URL could not be parsed.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Opening the destination failed.
    #[error("Could not open {url}: {message}")]
    NavigationFailed { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrygError {
    /// Shorthand for a validation failure on `trigger`.
    pub fn invalid(trigger: &str, message: impl Into<String>) -> Self {
        Self::InvalidTrigger {
            trigger: trigger.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for dryg operations.
pub type Result<T> = std::result::Result<T, DrygError>;
