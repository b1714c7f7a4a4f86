//! Generate config command implementation

use crate::error::CliResult;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Alphabet code for the new configuration
    #[arg(short = 'c', long, value_name = "CODE", required = true)]
    pub alphabet_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        println!("Generating alphabet configuration template...");
        println!("  Alphabet code: {}", self.alphabet_code);
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the vowel and diphthong lists");
        println!("2. Validate your configuration:");
        println!(
            "   silben validate --alphabet-config {}",
            self.output.display()
        );
        println!("3. Use it for splitting:");
        println!(
            "   silben split Sonne -n 2 --alphabet-config {}",
            self.output.display()
        );

        Ok(())
    }

    fn generate_template(&self) -> String {
        format!(
            r#"# Alphabet configuration for {code}

[metadata]
code = "{code}"
name = "Custom Alphabet"

# Letters that can carry a syllable nucleus.
# List lowercase forms only; uppercase forms are added when loading.
[vowels]
chars = ["a", "e", "i", "o", "u"]

# Vowel pairs read as a single nucleus.
# Each pair has exactly two characters and both must be listed as vowels.
[diphthongs]
pairs = ["ai", "au", "ei"]
"#,
            code = self.alphabet_code
        )
    }
}
