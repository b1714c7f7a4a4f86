//! Split command implementation

use super::{create_formatter, init_logging, SegmentationOptions};
use crate::error::{CliError, CliResult};
use anyhow::Result;
use clap::Args;
use std::io;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Word to split
    #[arg(value_name = "WORD", requires = "count")]
    pub word: Option<String>,

    /// Number of syllables of WORD
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub count: Option<usize>,

    /// Further words, given as WORD:COUNT (repeatable)
    #[arg(short, long = "word", value_name = "WORD:COUNT")]
    pub words: Vec<String>,

    #[command(flatten)]
    pub options: SegmentationOptions,

    /// Mark words that were split by the fallback
    #[arg(long)]
    pub show_method: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {self:?}");

        let words = self.collect_words()?;
        let resolved = self.options.resolve()?;

        let mut formatter = create_formatter(
            resolved.format,
            Box::new(io::stdout()),
            resolved.pretty_json,
            self.show_method,
        );
        for (word, count) in &words {
            formatter.format_breakdown(&resolved.splitter.split(word, *count))?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// The positional word followed by every `--word` entry
    fn collect_words(&self) -> Result<Vec<(String, usize)>> {
        let mut words = Vec::with_capacity(self.words.len() + 1);
        if let (Some(word), Some(count)) = (&self.word, self.count) {
            words.push((word.clone(), count));
        }
        for entry in &self.words {
            words.push(parse_word_entry(entry)?);
        }

        if words.is_empty() {
            return Err(CliError::InvalidWord("no word given".to_string()).into());
        }
        Ok(words)
    }
}

/// Parse `WORD:COUNT`
pub fn parse_word_entry(entry: &str) -> Result<(String, usize), CliError> {
    let (word, count) = entry
        .rsplit_once(':')
        .ok_or_else(|| CliError::InvalidWord(format!("expected WORD:COUNT, got {entry:?}")))?;

    let word = word.trim();
    if word.is_empty() {
        return Err(CliError::InvalidWord(format!("empty word in {entry:?}")));
    }
    let count = count
        .trim()
        .parse::<usize>()
        .map_err(|_| CliError::InvalidWord(format!("bad syllable count in {entry:?}")))?;

    Ok((word.to_string(), count))
}
