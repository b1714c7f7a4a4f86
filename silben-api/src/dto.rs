//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use crate::quiz::SyllableQuestion;
use silben_core::{Segmentation, SplitMethod};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Source of quiz question records
pub enum Input {
    /// Raw JSON text
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }

    /// Parse syllable questions from JSON
    ///
    /// Accepts a single record or an array of records, the two shapes the
    /// question endpoint and exported question sets use.
    #[cfg(feature = "serde")]
    pub fn read_questions(self) -> Result<Vec<SyllableQuestion>> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            Many(Vec<SyllableQuestion>),
            One(SyllableQuestion),
        }

        let text = self.read_text()?;
        match serde_json::from_str::<OneOrMany>(&text)? {
            OneOrMany::One(question) => Ok(vec![question]),
            OneOrMany::Many(questions) => Ok(questions),
        }
    }
}

/// Syllable breakdown of one word, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakdown {
    /// The segmented word
    pub word: String,
    /// Requested syllable count
    pub syllable_count: usize,
    /// Syllables in order
    pub syllables: Vec<String>,
    /// Syllables joined with the configured separator
    pub display: String,
    /// `heuristic` or `fallback`
    pub method: String,
}

impl Breakdown {
    /// Create from a core segmentation
    pub fn new(
        word: impl Into<String>,
        syllable_count: usize,
        segmentation: Segmentation,
        separator: &str,
    ) -> Self {
        let method = match segmentation.method {
            SplitMethod::Heuristic => "heuristic",
            SplitMethod::Fallback => "fallback",
        };

        Self {
            word: word.into(),
            syllable_count,
            display: segmentation.join(separator),
            syllables: segmentation.syllables,
            method: method.to_string(),
        }
    }

    /// Whether the even-chunk fallback produced the syllables
    pub fn used_fallback(&self) -> bool {
        self.method == "fallback"
    }

    /// Convenience constructor for a question record
    pub fn for_question(
        question: &SyllableQuestion,
        segmentation: Segmentation,
        separator: &str,
    ) -> Self {
        Self::new(
            question.word.clone(),
            question.syllable_count,
            segmentation,
            separator,
        )
    }
}
