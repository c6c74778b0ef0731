// file: src/models/index.rs
// description: keyword to document mapping built once per run
// reference: internal data structures

use crate::models::DocumentRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Keyword → record mapping. Keys are stored as declared and always equal the
/// record's `keyword`; iteration is in ordinal keyword order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentIndex {
    entries: BTreeMap<String, DocumentRecord>,
}

/// One row of the full listing. `rank` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub rank: usize,
    pub keyword: String,
    pub description: String,
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts under the record's own keyword. Last write wins; the displaced
    /// record is returned.
    pub fn insert(&mut self, record: DocumentRecord) -> Option<DocumentRecord> {
        self.entries.insert(record.keyword.clone(), record)
    }

    pub fn get(&self, keyword: &str) -> Option<&DocumentRecord> {
        self.entries.get(keyword)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn records(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.entries.values()
    }
}

impl FromIterator<DocumentRecord> for DocumentIndex {
    fn from_iter<I: IntoIterator<Item = DocumentRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert(record);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keys_by_record_keyword() {
        let mut index = DocumentIndex::new();
        index.insert(DocumentRecord::from_front_matter("array.md", "arr", "array ops"));

        let record = index.get("arr").unwrap();
        assert_eq!(record.keyword, "arr");
        assert!(index.get("array").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut index = DocumentIndex::new();
        index.insert(DocumentRecord::from_front_matter("a.md", "dup", "first"));
        let displaced = index.insert(DocumentRecord::from_front_matter("b.md", "dup", "second"));

        assert_eq!(displaced.unwrap().description, "first");
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("dup").unwrap().description, "second");
    }

    #[test]
    fn test_keywords_are_ordinal_sorted() {
        let index: DocumentIndex = ["misc", "Zeta", "arr", "abc"]
            .into_iter()
            .map(|k| DocumentRecord::from_front_matter(format!("{k}.md"), k, ""))
            .collect();

        let keywords: Vec<&str> = index.keywords().collect();
        assert_eq!(keywords, vec!["Zeta", "abc", "arr", "misc"]);
    }
}
