//! Runtime alphabet
//!
//! Bridges the TOML configuration and the hot-path [`VowelRules`] interface.

use std::path::Path;

use super::config::AlphabetConfig;
use super::interface::VowelRules;
use super::tables::{DiphthongTable, VowelTable};
use crate::error::Result;

/// Configurable alphabet implementation
#[derive(Debug, Clone)]
pub struct Alphabet {
    code: String,
    name: String,
    vowels: VowelTable,
    diphthongs: DiphthongTable,
}

impl Alphabet {
    /// Create from a validated configuration
    pub fn from_config(config: &AlphabetConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            vowels: VowelTable::new(&config.vowels.chars),
            diphthongs: DiphthongTable::new(config.diphthong_pairs()),
        })
    }

    /// Parse and validate a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Self::from_config(&AlphabetConfig::from_toml(toml_str)?)
    }

    /// Load and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(&AlphabetConfig::from_file(path)?)
    }

    /// Alphabet code, e.g. `de`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of vowel characters, counting both cases
    pub fn vowel_count(&self) -> usize {
        self.vowels.len()
    }

    /// Number of diphthong pairs
    pub fn diphthong_count(&self) -> usize {
        self.diphthongs.len()
    }
}

impl VowelRules for Alphabet {
    #[inline]
    fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(ch)
    }

    #[inline]
    fn is_diphthong(&self, first: char, second: char) -> bool {
        self.is_vowel(first) && self.is_vowel(second) && self.diphthongs.contains(first, second)
    }
}
