//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use silben_api::Breakdown;
use std::io::Write;

/// JSON formatter - outputs breakdowns as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    breakdowns: Vec<Breakdown>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            breakdowns: Vec::new(),
            pretty: true,
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_breakdown(&mut self, breakdown: &Breakdown) -> Result<()> {
        self.breakdowns.push(breakdown.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.breakdowns)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.breakdowns)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
