//! Alphabet loader
//!
//! Manages embedded alphabets with caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::runtime::Alphabet;
use crate::error::{ConfigError, Result};

/// Embedded alphabet configurations
static EMBEDDED: OnceLock<HashMap<String, Arc<Alphabet>>> = OnceLock::new();

const GERMAN: &str = include_str!("../../configs/alphabets/german.toml");

/// Load an embedded alphabet by code or name
pub fn get_alphabet(code: &str) -> Result<Arc<Alphabet>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match Alphabet::from_toml(GERMAN) {
            Ok(alphabet) => {
                let alphabet = Arc::new(alphabet);
                map.insert("de".to_string(), alphabet.clone());
                map.insert("german".to_string(), alphabet);
            }
            Err(e) => {
                log::warn!("failed to load embedded German alphabet: {e}");
            }
        }

        map
    });

    embedded
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| ConfigError::UnknownAlphabet(code.to_string()))
}

/// Codes of the embedded alphabets
pub fn available_alphabets() -> &'static [&'static str] {
    &["de"]
}
