//! Validate command implementation

use crate::error::CliResult;
use clap::Args;
use silben_core::Alphabet;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to alphabet configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub alphabet_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!(
            "Validating alphabet configuration: {}",
            self.alphabet_config.display()
        );

        match Alphabet::from_file(&self.alphabet_config) {
            Ok(alphabet) => {
                println!("✓ Configuration is valid!");
                println!("  Alphabet code: {}", alphabet.code());
                println!("  Alphabet name: {}", alphabet.name());
                println!("  Vowels (both cases): {}", alphabet.vowel_count());
                println!("  Diphthongs: {}", alphabet.diphthong_count());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    #[test]
    fn test_validate_valid_config() {
        let temp_file = config_file(
            r#"
[metadata]
code = "nl"
name = "Dutch"

[vowels]
chars = ["a", "e", "i", "o", "u", "y"]

[diphthongs]
pairs = ["ei", "ui", "ou"]
"#,
        );

        let args = ValidateArgs {
            alphabet_config: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_diphthong_with_consonant() {
        let temp_file = config_file(
            r#"
[metadata]
code = "xx"
name = "Broken"

[vowels]
chars = ["a", "e"]

[diphthongs]
pairs = ["ab"]
"#,
        );

        let args = ValidateArgs {
            alphabet_config: temp_file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            alphabet_config: PathBuf::from("/nonexistent/alphabet.toml"),
        };
        assert!(args.execute().is_err());
    }
}
