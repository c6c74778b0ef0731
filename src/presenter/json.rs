// file: src/presenter/json.rs
// description: json rendering of listings and resolved documents
// reference: https://docs.rs/serde_json

use crate::error::Result;
use serde::Serialize;

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentRecord, ListEntry};
    use serde_json::Value;

    #[test]
    fn test_listing_json_shape() {
        let entries = vec![ListEntry {
            rank: 1,
            keyword: "arr".to_string(),
            description: "array ops".to_string(),
        }];

        let value: Value = serde_json::from_str(&render_json(&entries).unwrap()).unwrap();

        assert_eq!(value[0]["rank"], 1);
        assert_eq!(value[0]["keyword"], "arr");
        assert_eq!(value[0]["description"], "array ops");
    }

    #[test]
    fn test_missing_record_is_null() {
        let none: Option<&DocumentRecord> = None;
        assert_eq!(render_json(&none).unwrap(), "null");
    }
}
