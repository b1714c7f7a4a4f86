//! Question file reading

use anyhow::{Context, Result};
use silben_api::{Input, SyllableQuestion};
use std::fs;
use std::path::Path;

/// Reader for JSON question files
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read syllable questions from a JSON file
    ///
    /// The file holds either one question record or an array of them.
    pub fn read_questions(path: &Path) -> Result<Vec<SyllableQuestion>> {
        let content = Self::read_text(path)?;
        Input::from_text(content)
            .read_questions()
            .with_context(|| format!("Invalid question file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_questions_array() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("fragen.json");
        fs::write(
            &file_path,
            r#"[{"word": "Hund", "syllable_count": 1, "difficulty": 1},
                {"word": "Sonne", "syllable_count": 2, "difficulty": 2}]"#,
        )
        .unwrap();

        let questions = FileReader::read_questions(&file_path).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].word, "Sonne");
        assert_eq!(questions[1].difficulty, 2);
    }

    #[test]
    fn test_read_single_question() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("frage.json");
        fs::write(&file_path, r#"{"word": "Mädchen", "syllable_count": 2}"#).unwrap();

        let questions = FileReader::read_questions(&file_path).unwrap();
        assert_eq!(questions[0].word, "Mädchen");
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/fragen.json");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_empty_file_is_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.json");
        File::create(&file_path).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "");
        let err = FileReader::read_questions(&file_path).unwrap_err();
        assert!(err.to_string().contains("Invalid question file"));
    }
}
