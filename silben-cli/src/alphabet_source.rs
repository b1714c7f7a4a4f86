//! Alphabet source management for CLI

use anyhow::{Context, Result};
use silben_api::{Alphabet, Config, FallbackPolicy};
use std::path::PathBuf;

/// Source of vowel rules
#[derive(Debug, Clone)]
pub enum AlphabetSource {
    /// Embedded alphabet
    BuiltIn(String),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

impl AlphabetSource {
    /// Pick the external file when given, else the embedded code
    pub fn resolve(alphabet_config: Option<PathBuf>, code: &str) -> Self {
        match alphabet_config {
            Some(path) => AlphabetSource::External { path },
            None => AlphabetSource::BuiltIn(code.to_string()),
        }
    }

    /// Get the display name for the alphabet source
    pub fn display_name(&self) -> String {
        match self {
            AlphabetSource::BuiltIn(code) => format!("Built-in: {code}"),
            AlphabetSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Build the splitter configuration for this source
    pub fn build_config(&self, fallback: FallbackPolicy, separator: &str) -> Result<Config> {
        let builder = Config::builder().fallback(fallback).separator(separator);

        let builder = match self {
            AlphabetSource::BuiltIn(code) => builder.alphabet(code.as_str())?,
            AlphabetSource::External { path } => {
                let alphabet = Alphabet::from_file(path).with_context(|| {
                    format!("Failed to load alphabet config: {}", path.display())
                })?;
                builder.custom_alphabet(alphabet)
            }
        };

        Ok(builder.build()?)
    }
}
