// file: src/indexer/builder.rs
// description: builds the keyword index from a folder of markdown documents
// reference: internal indexing pipeline

use crate::config::DocsConfig;
use crate::error::{DocrefError, Result};
use crate::indexer::{Extraction, FallbackReason};
use crate::models::{DocumentIndex, DocumentRecord};
use crate::parser::FrontmatterParser;
use crate::repository::FileScanner;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct Indexer {
    parser: FrontmatterParser,
    scanner: FileScanner,
    key_field: String,
    desc_field: String,
}

impl Indexer {
    pub fn new(config: &DocsConfig) -> Self {
        Self {
            parser: FrontmatterParser::new(),
            scanner: FileScanner::new(config),
            key_field: config.key_field.clone(),
            desc_field: config.desc_field.clone(),
        }
    }

    /// Indexes every document in `directory`. Per-file problems only change
    /// how that file is keyed; the directory itself must exist.
    pub fn build_index(&self, directory: &Path) -> Result<DocumentIndex> {
        let files = self.scanner.scan_directory(directory)?;
        let mut index = DocumentIndex::new();
        let mut fallbacks = 0;

        for file in files {
            let extraction = self.extract(&file.path);

            if let Extraction::Fallback { reason, .. } = &extraction {
                fallbacks += 1;
                debug!("Keying {} by file name: {}", file.file_name, reason);
            }

            let record = extraction.into_record();
            let keyword = record.keyword.clone();
            let path = record.path.clone();

            if let Some(replaced) = index.insert(record) {
                warn!(
                    "Keyword '{}' from {} replaces {}",
                    keyword,
                    path.display(),
                    replaced.path.display()
                );
            }
        }

        info!(
            "Indexed {} keywords ({} keyed by file name)",
            index.len(),
            fallbacks
        );

        Ok(index)
    }

    pub fn extract(&self, path: &Path) -> Extraction {
        match fs::read_to_string(path) {
            Ok(content) => self.extract_from_content(path, &content),
            Err(err) => Extraction::Fallback {
                record: DocumentRecord::from_file_name(path),
                reason: FallbackReason::Unreadable(err.to_string()),
            },
        }
    }

    pub fn extract_from_content(&self, path: &Path, content: &str) -> Extraction {
        let reason = match self.parser.extract(content) {
            Ok(Some(frontmatter)) => {
                let keyword = self
                    .parser
                    .get_field(&frontmatter, &self.key_field)
                    .filter(|k| !k.trim().is_empty());

                match keyword {
                    Some(keyword) => {
                        let description = self
                            .parser
                            .get_field(&frontmatter, &self.desc_field)
                            .unwrap_or_default();

                        return Extraction::FrontMatter(DocumentRecord::from_front_matter(
                            path,
                            keyword,
                            description,
                        ));
                    }
                    None => FallbackReason::MissingKey,
                }
            }
            Ok(None) => FallbackReason::NoFrontMatter,
            Err(DocrefError::FrontmatterParse(message)) => FallbackReason::Malformed(message),
            Err(other) => FallbackReason::Malformed(other.to_string()),
        };

        Extraction::Fallback {
            record: DocumentRecord::from_file_name(path),
            reason,
        }
    }
}
