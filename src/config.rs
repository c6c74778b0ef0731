// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{DocrefError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const BUNDLED_DOCS_DIR: &str = "docs";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub docs: DocsConfig,
    pub display: DisplayConfig,
    #[serde(default)]
    pub opener: OpenerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsConfig {
    #[serde(default)]
    pub directory: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub key_field: String,
    pub desc_field: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub keyword_width: usize,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OpenerConfig {
    #[serde(default)]
    pub command: Option<String>,
}

impl Config {
    /// Layers defaults, an optional TOML file and `DOCREF__*` environment
    /// variables. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .set_default("docs.extensions", defaults.docs.extensions)
            .and_then(|b| b.set_default("docs.key_field", defaults.docs.key_field))
            .and_then(|b| b.set_default("docs.desc_field", defaults.docs.desc_field))
            .and_then(|b| {
                b.set_default("display.keyword_width", defaults.display.keyword_width as u64)
            })
            .map_err(|e| DocrefError::Config(e.to_string()))?;

        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        builder = builder.add_source(config::File::from(path).required(false));

        builder = builder.add_source(
            config::Environment::with_prefix("DOCREF")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("docs.extensions")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| DocrefError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| DocrefError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            docs: DocsConfig {
                directory: None,
                extensions: vec!["md".to_string()],
                key_field: "key".to_string(),
                desc_field: "desc".to_string(),
            },
            display: DisplayConfig { keyword_width: 40 },
            opener: OpenerConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.docs.extensions.iter().all(|e| e.trim_start_matches('.').is_empty()) {
            return Err(DocrefError::Config(
                "docs.extensions must name at least one extension".to_string(),
            ));
        }

        if self.docs.key_field.trim().is_empty() {
            return Err(DocrefError::Config(
                "docs.key_field must not be empty".to_string(),
            ));
        }

        if self.display.keyword_width == 0 {
            return Err(DocrefError::Config(
                "display.keyword_width must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl DocsConfig {
    /// Picks the documents folder: explicit override, then the configured
    /// directory, then `docs/` next to the running executable.
    pub fn resolve_directory(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }

        if let Some(dir) = &self.directory {
            return Ok(dir.clone());
        }

        let exe = std::env::current_exe()?;
        let exe = exe.canonicalize().unwrap_or(exe);
        let base = exe.parent().ok_or_else(|| {
            DocrefError::Config(format!(
                "cannot locate bundled docs: {} has no parent directory",
                exe.display()
            ))
        })?;

        Ok(base.join(BUNDLED_DOCS_DIR))
    }
}
