//! High-level configuration API

use std::sync::Arc;

use crate::error::{ApiError, Result};
use silben_core::{Alphabet, FallbackPolicy};

/// Separator used to display syllables
pub const DEFAULT_SEPARATOR: &str = " • ";

/// Where the vowel rules come from
#[derive(Debug, Clone)]
pub enum AlphabetSource {
    /// Embedded alphabet looked up by code
    BuiltIn(String),
    /// Alphabet built by the caller, e.g. from a TOML file
    Custom(Arc<Alphabet>),
}

impl AlphabetSource {
    /// Code of the alphabet
    pub fn code(&self) -> &str {
        match self {
            AlphabetSource::BuiltIn(code) => code,
            AlphabetSource::Custom(alphabet) => alphabet.code(),
        }
    }
}

/// High-level configuration for syllable splitting
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) alphabet: AlphabetSource,
    pub(crate) fallback: FallbackPolicy,
    pub(crate) separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: AlphabetSource::BuiltIn("de".to_string()),
            fallback: FallbackPolicy::Balanced,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Config {
    /// Configuration reproducing the unadjusted ceil-chunk fallback
    pub fn ceil_chunks() -> Self {
        Self {
            fallback: FallbackPolicy::CeilChunks,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Alphabet source
    pub fn alphabet(&self) -> &AlphabetSource {
        &self.alphabet
    }

    /// Fallback policy
    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Display separator
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Use an embedded alphabet
    pub fn alphabet(mut self, code: impl Into<String>) -> Result<Self> {
        self.config.alphabet = AlphabetSource::BuiltIn(code.into());
        Ok(self)
    }

    /// Use a caller-provided alphabet
    pub fn custom_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.config.alphabet = AlphabetSource::Custom(Arc::new(alphabet));
        self
    }

    /// Set the fallback policy
    pub fn fallback(mut self, policy: FallbackPolicy) -> Self {
        self.config.fallback = policy;
        self
    }

    /// Set the display separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if let AlphabetSource::BuiltIn(code) = &self.config.alphabet {
            if code.trim().is_empty() {
                return Err(ApiError::Config("alphabet code required".to_string()));
            }
        }

        Ok(self.config)
    }
}
