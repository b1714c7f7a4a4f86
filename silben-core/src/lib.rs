//! Heuristic syllable segmentation for German words
//!
//! The segmenter walks a word once, treating every vowel (or diphthong) as a
//! syllable nucleus and splitting the consonant run between two nuclei
//! roughly in half. The heuristic is self-checking: when the number of
//! syllables it finds differs from the expected count, the word is split
//! into even chunks instead.
//!
//! # Architecture
//!
//! - **Alphabet layer**: vowel and diphthong tables, built from TOML
//!   configuration and looked up through the [`VowelRules`] trait
//! - **Segmentation layer**: the nucleus scan ([`Segmenter`]) and the
//!   even-chunk fallback ([`simple_split`])
//!
//! # Example
//!
//! ```rust
//! use silben_core::Segmenter;
//!
//! let segmenter = Segmenter::german();
//!
//! assert_eq!(segmenter.segment("Hund", 1), vec!["Hund"]);
//! assert_eq!(segmenter.segment("Sonne", 2), vec!["Son", "ne"]);
//! assert_eq!(segmenter.segment("Baum", 1), vec!["Baum"]);
//! ```

pub mod alphabet;
pub mod error;
pub mod fallback;
pub mod segmenter;

pub use alphabet::{available_alphabets, get_alphabet, Alphabet, AlphabetConfig, VowelRules};
pub use error::{ConfigError, Result};
pub use fallback::{simple_split, FallbackPolicy};
pub use segmenter::{Segmentation, Segmenter, SplitMethod};
