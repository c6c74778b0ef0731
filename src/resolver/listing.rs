// file: src/resolver/listing.rs
// description: ranked listing of every indexed keyword
// reference: internal resolution pipeline

use crate::models::{DocumentIndex, ListEntry};

/// Keywords in ordinal order, ranked from 1.
pub fn list_all(index: &DocumentIndex) -> Vec<ListEntry> {
    index
        .records()
        .enumerate()
        .map(|(i, record)| ListEntry {
            rank: i + 1,
            keyword: record.keyword.clone(),
            description: record.description.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentRecord;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_index_lists_nothing() {
        assert!(list_all(&DocumentIndex::new()).is_empty());
    }

    #[test]
    fn test_rank_follows_sorted_keywords() {
        let mut index = DocumentIndex::new();
        index.insert(DocumentRecord::from_file_name("misc.md"));
        index.insert(DocumentRecord::from_front_matter("b.md", "beta", "second"));
        index.insert(DocumentRecord::from_front_matter("a.md", "arr", "array ops"));

        let entries = list_all(&index);

        assert_eq!(
            entries,
            vec![
                ListEntry {
                    rank: 1,
                    keyword: "arr".to_string(),
                    description: "array ops".to_string(),
                },
                ListEntry {
                    rank: 2,
                    keyword: "beta".to_string(),
                    description: "second".to_string(),
                },
                ListEntry {
                    rank: 3,
                    keyword: "misc".to_string(),
                    description: String::new(),
                },
            ]
        );
    }
}
