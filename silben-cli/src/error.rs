//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Word argument could not be parsed
    InvalidWord(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidWord(msg) => write!(f, "Invalid word: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("fragen.json".to_string());
        assert_eq!(error.to_string(), "File not found: fragen.json");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_invalid_word_error_display() {
        let error = CliError::InvalidWord("expected WORD:COUNT, got 'Sonne'".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid word: expected WORD:COUNT, got 'Sonne'"
        );
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(CliError::FileNotFound("x".to_string()).into());
        assert!(failure.unwrap_err().to_string().contains("File not found"));
    }

    #[test]
    fn test_error_with_umlauts() {
        let error = CliError::FileNotFound("Wörter/Übungen.json".to_string());
        assert_eq!(error.to_string(), "File not found: Wörter/Übungen.json");
    }
}
