//! Public API for German syllable quizzes
//!
//! This crate wraps the segmentation core behind a stable interface and adds
//! the quiz layer around it: question records, answer checking and
//! per-session score keeping.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod quiz;
pub mod score;

use config::AlphabetSource;
use error::Result;
use silben_core::{get_alphabet, Segmenter};

// Re-export key types
pub use config::{Config, ConfigBuilder, DEFAULT_SEPARATOR};
pub use dto::{Breakdown, Input};
pub use error::ApiError;
pub use quiz::{
    check_article_answer, check_category_answer, check_syllable_answer, ArticleQuestion,
    CategoryQuestion, Genus, SyllableQuestion, SyllableVerdict, Verdict,
};
pub use score::{Outcome, QuizMode, ScoreBook, ScoreCard, SessionId};
pub use silben_core::{Alphabet, FallbackPolicy, SplitMethod};

/// Main entry point for syllable splitting
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct SyllableSplitter {
    segmenter: Segmenter,
    config: Config,
}

impl SyllableSplitter {
    /// Create a splitter with default configuration (German, balanced fallback)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a splitter for an embedded alphabet
    pub fn with_alphabet(code: &str) -> Result<Self> {
        let config = Config::builder().alphabet(code)?.build()?;
        Self::with_config(config)
    }

    /// Create a splitter with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let segmenter = match &config.alphabet {
            AlphabetSource::BuiltIn(code) => Segmenter::new(get_alphabet(code)?),
            AlphabetSource::Custom(alphabet) => Segmenter::new(alphabet.clone()),
        }
        .with_policy(config.fallback);

        Ok(Self { segmenter, config })
    }

    /// Split a word into `syllable_count` syllables
    pub fn split(&self, word: &str, syllable_count: usize) -> Breakdown {
        let segmentation = self.segmenter.segment_detailed(word, syllable_count);
        if segmentation.method == SplitMethod::Fallback {
            log::debug!(
                "heuristic missed {syllable_count} syllables for {word:?}, using {} fallback",
                self.config.fallback.as_str()
            );
        }

        Breakdown::new(word, syllable_count, segmentation, &self.config.separator)
    }

    /// Split the word of a question record
    pub fn split_question(&self, question: &SyllableQuestion) -> Breakdown {
        self.split(&question.word, question.syllable_count)
    }

    /// Split every question from an input source
    #[cfg(feature = "serde")]
    pub fn process(&self, input: Input) -> Result<Vec<Breakdown>> {
        let questions = input.read_questions()?;
        log::info!("splitting {} question(s)", questions.len());
        Ok(questions.iter().map(|q| self.split_question(q)).collect())
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying core segmenter
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }
}

impl Default for SyllableSplitter {
    fn default() -> Self {
        Self::new().expect("default splitter creation should not fail")
    }
}

// Convenience functions

/// Split a word with default configuration
pub fn split_word(word: &str, syllable_count: usize) -> Result<Vec<String>> {
    let splitter = SyllableSplitter::new()?;
    Ok(splitter.split(word, syllable_count).syllables)
}

/// Split a word and join the syllables for display
pub fn display_syllables(word: &str, syllable_count: usize) -> Result<String> {
    let splitter = SyllableSplitter::new()?;
    Ok(splitter.split(word, syllable_count).display)
}

/// Split every question in a JSON file with default configuration
#[cfg(feature = "serde")]
pub fn process_file<P: AsRef<std::path::Path>>(path: P) -> Result<Vec<Breakdown>> {
    let splitter = SyllableSplitter::new()?;
    splitter.process(Input::from_file(path.as_ref().to_path_buf()))
}
