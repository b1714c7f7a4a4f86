//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use silben_core::FallbackPolicy;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load from a file if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Default alphabet code
    pub default_alphabet: String,

    /// Fallback policy when the heuristic misses the count
    pub fallback: FallbackPolicy,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            default_alphabet: "de".to_string(),
            fallback: FallbackPolicy::Balanced,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Separator placed between syllables
    pub separator: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            separator: silben_api::DEFAULT_SEPARATOR.to_string(),
            pretty_json: true,
        }
    }
}
