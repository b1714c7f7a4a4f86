//! CLI command implementations

use crate::alphabet_source::AlphabetSource;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use silben_api::{FallbackPolicy, SyllableSplitter};
use std::io::Write;
use std::path::PathBuf;

pub mod generate_config;
pub mod quiz;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split words given on the command line
    Split(split::SplitArgs),

    /// Split every word of JSON question files
    Quiz(quiz::QuizArgs),

    /// Validate an alphabet configuration file
    Validate(validate::ValidateArgs),

    /// Generate an alphabet configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded alphabets
    Alphabets,

    /// List available output formats
    Formats,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `word: syllables` line per word
    Text,
    /// JSON array of breakdowns
    Json,
    /// Markdown table
    Markdown,
}

/// Fallback policy as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FallbackArg {
    /// Exactly the requested number of pieces when the word is long enough
    Balanced,
    /// Plain ceil-sized chunks, may return fewer pieces
    CeilChunks,
}

impl From<FallbackArg> for FallbackPolicy {
    fn from(arg: FallbackArg) -> Self {
        match arg {
            FallbackArg::Balanced => FallbackPolicy::Balanced,
            FallbackArg::CeilChunks => FallbackPolicy::CeilChunks,
        }
    }
}

/// Segmentation and output options shared by `split` and `quiz`
#[derive(Debug, Clone, Default, Args)]
pub struct SegmentationOptions {
    /// Output format [default: from config, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Embedded alphabet code
    #[arg(short, long, value_name = "CODE")]
    pub alphabet: Option<String>,

    /// External alphabet configuration file (overrides --alphabet)
    #[arg(long, value_name = "FILE")]
    pub alphabet_config: Option<PathBuf>,

    /// Fallback policy when the heuristic misses the syllable count
    #[arg(long, value_enum)]
    pub fallback: Option<FallbackArg>,

    /// Separator placed between syllables
    #[arg(short, long, value_name = "TEXT")]
    pub separator: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Options after merging flags over the configuration file
pub struct Resolved {
    /// Splitter built for the selected alphabet
    pub splitter: SyllableSplitter,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl SegmentationOptions {
    /// Merge command-line flags over the configuration file
    pub fn resolve(&self) -> Result<Resolved> {
        let file_config = CliConfig::load_or_default(self.config.as_deref())?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&file_config.output.default_format, true)
                .map_err(|_| {
                    CliError::ConfigError(format!(
                        "unknown output format: {}",
                        file_config.output.default_format
                    ))
                })?,
        };

        let code = self
            .alphabet
            .as_deref()
            .unwrap_or(&file_config.segmentation.default_alphabet);
        let source = AlphabetSource::resolve(self.alphabet_config.clone(), code);
        log::info!("Using alphabet: {}", source.display_name());

        let fallback = self
            .fallback
            .map(FallbackPolicy::from)
            .unwrap_or(file_config.segmentation.fallback);
        let separator = self
            .separator
            .as_deref()
            .unwrap_or(&file_config.output.separator);

        let config = source.build_config(fallback, separator)?;
        let splitter = SyllableSplitter::with_config(config)?;

        Ok(Resolved {
            splitter,
            format,
            pretty_json: file_config.output.pretty_json,
        })
    }
}

/// Build the formatter for the selected format
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
    show_method: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer).with_method(show_method)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process.
        let _ =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init();
    }
}

/// Print the embedded alphabets
pub fn list_alphabets() {
    println!("Available alphabets:");
    for code in silben_core::available_alphabets() {
        match silben_core::get_alphabet(code) {
            Ok(alphabet) => println!(
                "  {:<4} - {} ({} vowels, {} diphthongs)",
                alphabet.code(),
                alphabet.name(),
                alphabet.vowel_count(),
                alphabet.diphthong_count()
            ),
            Err(e) => println!("  {code:<4} - unavailable: {e}"),
        }
    }
}

/// Print the output formats
pub fn list_formats() {
    println!("Available output formats:");
    for format in OutputFormat::value_variants() {
        if let Some(value) = format.to_possible_value() {
            let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
            println!("  {:<9} - {help}", value.get_name());
        }
    }
}
