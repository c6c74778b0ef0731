// file: src/repository/scanner.rs
// description: Flat document folder listing with extension filtering
// reference: https://docs.rs/walkdir

use crate::config::DocsConfig;
use crate::error::Result;
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct FileScanner {
    extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl FileScanner {
    pub fn new(config: &DocsConfig) -> Self {
        let extensions = config
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        Self { extensions }
    }

    /// Lists the top level of `root`, sorted by file name. Sub-directories and
    /// files without a recognized extension are left out.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        Validator::validate_directory(root)?;
        info!("Scanning directory: {}", root.display());

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if !self.is_document(path) {
                debug!("Skipping non-document file: {}", path.display());
                continue;
            }

            files.push(ScannedFile {
                path: path.to_path_buf(),
                file_name: entry.file_name().to_string_lossy().to_string(),
            });
        }

        info!("Found {} document files", files.len());
        Ok(files)
    }

    pub fn is_document(&self, path: &Path) -> bool {
        Validator::has_extension(path, &self.extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::DocrefError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("test.md"), "# Test").unwrap();
        fs::write(temp.path().join("notes.txt"), "plain").unwrap();

        let scanner = FileScanner::new(&Config::default_config().docs);
        let files = scanner.scan_directory(temp.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "test.md");
        assert_eq!(files[0].path, temp.path().join("test.md"));
    }

    #[test]
    fn test_scan_is_flat_and_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("zeta.md"), "z").unwrap();
        fs::write(temp.path().join("alpha.md"), "a").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("inner.md"), "i").unwrap();

        let scanner = FileScanner::new(&Config::default_config().docs);
        let names: Vec<String> = scanner
            .scan_directory(temp.path())
            .unwrap()
            .into_iter()
            .map(|f| f.file_name)
            .collect();

        assert_eq!(names, vec!["alpha.md".to_string(), "zeta.md".to_string()]);
    }

    #[test]
    fn test_configured_extensions() {
        let mut docs = Config::default_config().docs;
        docs.extensions = vec![".markdown".to_string(), "MD".to_string()];

        let scanner = FileScanner::new(&docs);

        assert!(scanner.is_document(Path::new("a.markdown")));
        assert!(scanner.is_document(Path::new("b.Md")));
        assert!(!scanner.is_document(Path::new("c.txt")));
        assert!(!scanner.is_document(Path::new("md")));
    }

    #[test]
    fn test_missing_directory_is_error() {
        let temp = TempDir::new().unwrap();
        let scanner = FileScanner::new(&Config::default_config().docs);

        assert!(matches!(
            scanner.scan_directory(&temp.path().join("absent")),
            Err(DocrefError::Validation(_))
        ));
    }
}
