//! Errors returned by the splitter API

use std::string::FromUtf8Error;
use thiserror::Error;

/// Everything that can go wrong outside the segmentation itself
#[derive(Error, Debug)]
pub enum ApiError {
    /// The alphabet could not be loaded or is unknown
    #[error("alphabet error: {0}")]
    Alphabet(#[from] silben_core::ConfigError),

    /// Reading an input source failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not UTF-8
    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Rejected splitter configuration
    #[error("invalid splitter configuration: {0}")]
    Config(String),

    /// Question records could not be decoded
    #[cfg(feature = "serde")]
    #[error("invalid question record: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result alias for the API crate
pub type Result<T> = std::result::Result<T, ApiError>;
