//! Quiz command implementation

use super::{create_formatter, init_logging, SegmentationOptions};
use crate::error::CliResult;
use crate::input::{resolve_patterns, FileReader};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use silben_api::{Breakdown, SyllableSplitter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the quiz command
#[derive(Debug, Args)]
pub struct QuizArgs {
    /// Question files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub options: SegmentationOptions,

    /// Read and split files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Mark words that were split by the fallback
    #[arg(long)]
    pub show_method: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl QuizArgs {
    /// Execute the quiz command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting question processing");
        log::debug!("Arguments: {self:?}");

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} question files", files.len());

        let resolved = self.options.resolve()?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);
        let breakdowns = self.split_files(&files, &resolved.splitter, &progress)?;
        progress.finish();

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(
            resolved.format,
            writer,
            resolved.pretty_json,
            self.show_method,
        );
        for breakdown in &breakdowns {
            formatter.format_breakdown(breakdown)?;
        }
        formatter.finish()?;

        let fallbacks = breakdowns.iter().filter(|b| b.used_fallback()).count();
        log::info!(
            "Split {} words ({fallbacks} by fallback)",
            breakdowns.len()
        );

        Ok(())
    }

    /// Split all questions, keeping file order
    fn split_files(
        &self,
        files: &[PathBuf],
        splitter: &SyllableSplitter,
        progress: &ProgressReporter,
    ) -> Result<Vec<Breakdown>> {
        let split_file = |path: &PathBuf| -> Result<Vec<Breakdown>> {
            let questions = FileReader::read_questions(path)?;
            let breakdowns: Vec<Breakdown> = questions
                .iter()
                .map(|question| splitter.split_question(question))
                .collect();
            progress.file_completed(&path.display().to_string(), breakdowns.len());
            Ok(breakdowns)
        };

        let per_file: Vec<Vec<Breakdown>> = if self.parallel {
            files.par_iter().map(split_file).collect::<Result<_>>()?
        } else {
            files.iter().map(split_file).collect::<Result<_>>()?
        };

        Ok(per_file.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_questions(dir: &TempDir, name: &str, json: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, json).unwrap();
        path
    }

    fn args(input: Vec<String>, parallel: bool) -> QuizArgs {
        QuizArgs {
            input,
            output: None,
            options: SegmentationOptions::default(),
            parallel,
            show_method: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_split_files_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let first = write_questions(
            &temp_dir,
            "a.json",
            r#"[{"word": "Sonne", "syllable_count": 2}, {"word": "Hund", "syllable_count": 1}]"#,
        );
        let second = write_questions(
            &temp_dir,
            "b.json",
            r#"{"word": "Banane", "syllable_count": 3, "difficulty": 2}"#,
        );

        let splitter = SyllableSplitter::new().unwrap();
        let progress = ProgressReporter::new(true);
        for parallel in [false, true] {
            let quiz = args(vec![], parallel);
            let breakdowns = quiz
                .split_files(&[first.clone(), second.clone()], &splitter, &progress)
                .unwrap();
            let words: Vec<&str> = breakdowns.iter().map(|b| b.word.as_str()).collect();
            assert_eq!(words, vec!["Sonne", "Hund", "Banane"]);
            assert_eq!(breakdowns[2].syllables, vec!["Ba", "na", "ne"]);
        }
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let broken = write_questions(&temp_dir, "kaputt.json", "{not json");

        let splitter = SyllableSplitter::new().unwrap();
        let progress = ProgressReporter::new(true);
        let err = args(vec![], false)
            .split_files(&[broken], &splitter, &progress)
            .unwrap_err();
        assert!(format!("{err:#}").contains("kaputt.json"));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_questions(
            &temp_dir,
            "fragen.json",
            r#"[{"word": "Katze", "syllable_count": 2}]"#,
        );
        let output = temp_dir.path().join("out.txt");

        let mut quiz = args(vec![input.to_string_lossy().to_string()], false);
        quiz.output = Some(output.clone());
        quiz.execute().unwrap();

        let written = fs::read_to_string(output).unwrap();
        assert_eq!(written, "Katze: Kat • ze\n");
    }
}
