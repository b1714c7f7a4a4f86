//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use silben_api::Breakdown;
use std::io::{self, Write};

/// Plain text formatter - outputs one word per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_method: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_method: false,
        }
    }

    /// Mark words that went through the fallback
    pub fn with_method(mut self, show_method: bool) -> Self {
        self.show_method = show_method;
        self
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_breakdown(&mut self, breakdown: &Breakdown) -> Result<()> {
        if self.show_method && breakdown.used_fallback() {
            writeln!(
                self.writer,
                "{}: {} (fallback)",
                breakdown.word, breakdown.display
            )?;
        } else {
            writeln!(self.writer, "{}: {}", breakdown.word, breakdown.display)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{breakdowns, SharedBuffer};

    #[test]
    fn test_one_line_per_word() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        for breakdown in breakdowns() {
            formatter.format_breakdown(&breakdown).unwrap();
        }
        formatter.finish().unwrap();

        assert_eq!(buffer.contents(), "Sonne: Son • ne\nBrot: Br • o • t\n");
    }

    #[test]
    fn test_marks_fallback() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone()).with_method(true);
        for breakdown in breakdowns() {
            formatter.format_breakdown(&breakdown).unwrap();
        }

        assert!(buffer.contents().contains("Brot: Br • o • t (fallback)"));
        assert!(buffer.contents().contains("Sonne: Son • ne\n"));
    }
}
