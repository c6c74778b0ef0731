// file: src/indexer/mod.rs
// description: keyword index construction module exports
// reference: internal module structure

pub mod builder;
pub mod extraction;

pub use builder::Indexer;
pub use extraction::{Extraction, FallbackReason};
