// file: src/models/document.rs
// description: indexed reference document record
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a record's keyword came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordSource {
    FrontMatter,
    FileName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub path: PathBuf,
    pub description: String,
    pub keyword: String,
    pub source: KeywordSource,
}

impl DocumentRecord {
    pub fn from_front_matter(
        path: impl Into<PathBuf>,
        keyword: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            keyword: keyword.into(),
            source: KeywordSource::FrontMatter,
        }
    }

    /// Record keyed by the file's base name without its extension.
    pub fn from_file_name(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let keyword = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path,
            description: String::new(),
            keyword,
            source: KeywordSource::FileName,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_record_strips_extension() {
        let record = DocumentRecord::from_file_name("/refs/misc.notes.md");

        assert_eq!(record.keyword, "misc.notes");
        assert_eq!(record.description, "");
        assert_eq!(record.path, PathBuf::from("/refs/misc.notes.md"));
        assert_eq!(record.source, KeywordSource::FileName);
    }

    #[test]
    fn test_front_matter_record() {
        let record = DocumentRecord::from_front_matter("/refs/array.md", "arr", "array ops");

        assert_eq!(record.keyword, "arr");
        assert_eq!(record.description, "array ops");
        assert_eq!(record.source, KeywordSource::FrontMatter);
    }

    #[test]
    fn test_serializes_source_in_snake_case() {
        let record = DocumentRecord::from_file_name("misc.md");
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"source\":\"file_name\""));
        assert!(json.contains("\"keyword\":\"misc\""));
    }
}
