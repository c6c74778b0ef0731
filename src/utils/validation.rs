// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{DocrefError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            DocrefError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(DocrefError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(DocrefError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(DocrefError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Case-insensitive extension check; `extensions` are given without the dot.
    /// A dot-file such as `.md` has no extension and never matches.
    pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }

    /// Parses a 0-based choice among `count` candidates.
    pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
        let invalid = || DocrefError::InvalidSelection {
            input: input.trim().to_string(),
            count,
        };

        let choice: usize = input.trim().parse().map_err(|_| invalid())?;

        if choice >= count {
            return Err(invalid());
        }

        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("test.md");
        fs::write(&file_path, "test").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(temp.path()).is_err());
        assert!(Validator::validate_file_path(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("test.md");
        fs::write(&file_path, "test").unwrap();

        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(&file_path).is_err());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_has_extension() {
        let md = vec!["md".to_string()];

        assert!(Validator::has_extension(Path::new("array.md"), &md));
        assert!(Validator::has_extension(Path::new("ARRAY.MD"), &md));
        assert!(!Validator::has_extension(Path::new("array.md.bak"), &md));
        assert!(!Validator::has_extension(Path::new("README"), &md));
        assert!(!Validator::has_extension(Path::new(".md"), &md));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(Validator::parse_selection("0", 2).unwrap(), 0);
        assert_eq!(Validator::parse_selection(" 1\n", 2).unwrap(), 1);
    }

    #[test]
    fn test_parse_selection_rejects_bad_input() {
        assert!(matches!(
            Validator::parse_selection("2", 2),
            Err(DocrefError::InvalidSelection { count: 2, .. })
        ));
        assert!(Validator::parse_selection("one", 2).is_err());
        assert!(Validator::parse_selection("-1", 2).is_err());
        assert!(Validator::parse_selection("", 2).is_err());
    }
}
