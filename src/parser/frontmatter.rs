// file: src/parser/frontmatter.rs
// description: YAML frontmatter extraction from markdown
// reference: https://docs.rs/yaml-rust

use crate::error::{DocrefError, Result};
use std::collections::HashMap;
use yaml_rust::{Yaml, YamlLoader};

pub struct FrontmatterParser;

/// Scalar fields of a front-matter mapping, rendered as strings. Nested
/// values (lists, maps) are not kept.
#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
    pub fields: HashMap<String, String>,
}

impl FrontmatterParser {
    pub fn new() -> Self {
        Self
    }

    /// Returns `Ok(None)` when the document does not open with a `---` line,
    /// and an error when the block is not a YAML mapping. The block runs to
    /// the next `---` or `...` line, or to the end of the file.
    pub fn extract(&self, content: &str) -> Result<Option<Frontmatter>> {
        let Some(yaml_content) = Self::metadata_block(content) else {
            return Ok(None);
        };

        let docs =
            YamlLoader::load_from_str(&yaml_content).map_err(|e| {
                DocrefError::FrontmatterParse(format!("YAML parse error: {}", e))
            })?;

        let mut fields = HashMap::new();

        match docs.first() {
            None | Some(Yaml::Null) => {}
            Some(Yaml::Hash(hash)) => {
                for (key, value) in hash {
                    if let (Some(k), Some(v)) = (Self::scalar(key), Self::scalar(value)) {
                        fields.insert(k, v);
                    }
                }
            }
            Some(other) => {
                return Err(DocrefError::FrontmatterParse(format!(
                    "expected a mapping, found {:?}",
                    other
                )));
            }
        }

        Ok(Some(Frontmatter { fields }))
    }

    pub fn get_field(&self, frontmatter: &Frontmatter, key: &str) -> Option<String> {
        frontmatter.fields.get(key).cloned()
    }

    fn metadata_block(content: &str) -> Option<String> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut lines = content.lines();

        if lines.next()?.trim_end() != "---" {
            return None;
        }

        let mut yaml = String::new();
        for line in lines {
            let marker = line.trim_end();
            if marker == "---" || marker == "..." {
                break;
            }
            yaml.push_str(line);
            yaml.push('\n');
        }

        Some(yaml)
    }

    fn scalar(value: &Yaml) -> Option<String> {
        match value {
            Yaml::String(s) => Some(s.clone()),
            Yaml::Integer(i) => Some(i.to_string()),
            Yaml::Real(r) => Some(r.clone()),
            Yaml::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl Default for FrontmatterParser {
    fn default() -> Self {
        Self::new()
    }
}
