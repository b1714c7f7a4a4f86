//! Output formatting module

use anyhow::Result;
use silben_api::Breakdown;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single word breakdown
    fn format_breakdown(&mut self, breakdown: &Breakdown) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
