//! Core error types
//!
//! Segmentation itself never fails; only loading alphabet configuration can.

use thiserror::Error;

/// Errors raised while building an alphabet from configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// TOML could not be parsed into the alphabet schema
    #[error("failed to parse alphabet config: {0}")]
    Parse(String),

    /// Alphabet file could not be read
    #[error("failed to read {path}: {reason}")]
    Io {
        /// Path of the file that failed
        path: String,
        /// Underlying I/O error message
        reason: String,
    },

    /// Schema is well-formed but the content is unusable
    #[error("invalid alphabet config: {0}")]
    Invalid(String),

    /// No embedded alphabet is registered under this code
    #[error("unknown alphabet code: {0}")]
    UnknownAlphabet(String),
}

/// Result type for core configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
