// file: src/indexer/extraction.rs
// description: per-file keyword extraction outcome
// reference: internal data structures

use crate::models::DocumentRecord;
use std::fmt;

/// Why a file was keyed by its name instead of its front matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    NoFrontMatter,
    MissingKey,
    Malformed(String),
    Unreadable(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::NoFrontMatter => write!(f, "no front matter"),
            FallbackReason::MissingKey => write!(f, "front matter has no key field"),
            FallbackReason::Malformed(message) => write!(f, "malformed front matter: {}", message),
            FallbackReason::Unreadable(message) => write!(f, "unreadable: {}", message),
        }
    }
}

/// Every eligible file yields a record, one way or the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    FrontMatter(DocumentRecord),
    Fallback {
        record: DocumentRecord,
        reason: FallbackReason,
    },
}

impl Extraction {
    pub fn record(&self) -> &DocumentRecord {
        match self {
            Extraction::FrontMatter(record) => record,
            Extraction::Fallback { record, .. } => record,
        }
    }

    pub fn into_record(self) -> DocumentRecord {
        match self {
            Extraction::FrontMatter(record) => record,
            Extraction::Fallback { record, .. } => record,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Extraction::Fallback { .. })
    }
}
