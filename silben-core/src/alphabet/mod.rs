//! Alphabet rules for nucleus detection
//!
//! An alphabet is data-driven: a TOML file lists the vowels and the
//! diphthongs, and the runtime tables answer lookups in O(1).

pub mod interface;

pub(crate) mod config;
pub(crate) mod loader;
pub(crate) mod runtime;
pub(crate) mod tables;

pub use config::AlphabetConfig;
pub use interface::VowelRules;
pub use loader::{available_alphabets, get_alphabet};
pub use runtime::Alphabet;
