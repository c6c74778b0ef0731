// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod indexer;
pub mod models;
pub mod opener;
pub mod parser;
pub mod presenter;
pub mod repository;
pub mod resolver;
pub mod utils;

pub use config::{Config, DisplayConfig, DocsConfig, OpenerConfig};
pub use error::{DocrefError, Result};
pub use indexer::{Extraction, FallbackReason, Indexer};
pub use models::{DocumentIndex, DocumentRecord, KeywordSource, ListEntry};
pub use opener::DocumentOpener;
pub use parser::{Frontmatter, FrontmatterParser};
pub use presenter::{PromptChooser, Presenter, render_json};
pub use repository::{FileScanner, ScannedFile};
pub use resolver::{Chooser, MatchOutcome, MatchPass, find_candidates, list_all, resolve};
pub use utils::Validator;
