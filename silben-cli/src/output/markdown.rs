//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use silben_api::Breakdown;
use std::io::Write;

/// Markdown formatter - outputs breakdowns as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
    fallback_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
            fallback_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_breakdown(&mut self, breakdown: &Breakdown) -> Result<()> {
        if self.word_count == 0 {
            writeln!(self.writer, "| Wort | Silben | Trennung |")?;
            writeln!(self.writer, "|------|--------|----------|")?;
        }
        self.word_count += 1;
        if breakdown.used_fallback() {
            self.fallback_count += 1;
        }

        writeln!(
            self.writer,
            "| {} | {} | {} |",
            breakdown.word, breakdown.syllable_count, breakdown.display
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total words: {} ({} by fallback)*",
            self.word_count, self.fallback_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
