// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod index;

pub use document::{DocumentRecord, KeywordSource};
pub use index::{DocumentIndex, ListEntry};
