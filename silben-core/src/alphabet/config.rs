//! Configuration structures and validation
//!
//! This module defines the TOML schema for alphabet configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Root alphabet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphabetConfig {
    pub metadata: Metadata,
    pub vowels: Vowels,
    #[serde(default)]
    pub diphthongs: Diphthongs,
}

/// Alphabet metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Vowel characters, listed in lowercase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vowels {
    pub chars: Vec<char>,
}

/// Two-character sequences treated as one nucleus
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diphthongs {
    #[serde(default)]
    pub pairs: Vec<String>,
}

impl AlphabetConfig {
    /// Parse from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Diphthong pairs split into characters
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeded.
    pub(crate) fn diphthong_pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.diphthongs.pairs.iter().filter_map(|pair| {
            let mut chars = pair.chars();
            Some((chars.next()?, chars.next()?))
        })
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(ConfigError::Invalid("alphabet code is empty".to_string()));
        }

        if self.vowels.chars.is_empty() {
            return Err(ConfigError::Invalid("no vowels defined".to_string()));
        }

        let is_listed = |ch: char| {
            let lower = super::tables::fold(ch);
            self.vowels.chars.iter().any(|&v| super::tables::fold(v) == lower)
        };

        for pair in &self.diphthongs.pairs {
            let chars: Vec<char> = pair.chars().collect();
            if chars.len() != 2 {
                return Err(ConfigError::Invalid(format!(
                    "diphthong '{pair}' must be exactly two characters"
                )));
            }
            if let Some(&ch) = chars.iter().find(|&&ch| !is_listed(ch)) {
                return Err(ConfigError::Invalid(format!(
                    "diphthong '{pair}' contains non-vowel '{ch}'"
                )));
            }
        }

        Ok(())
    }
}
