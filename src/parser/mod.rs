// file: src/parser/mod.rs
// description: markdown parsing module exports
// reference: internal module structure

pub mod frontmatter;

pub use frontmatter::{Frontmatter, FrontmatterParser};
