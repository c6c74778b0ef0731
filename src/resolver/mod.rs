// file: src/resolver/mod.rs
// description: keyword matching and listing module exports
// reference: internal module structure

pub mod chooser;
pub mod listing;
pub mod matcher;

pub use chooser::Chooser;
pub use listing::list_all;
pub use matcher::{MatchOutcome, MatchPass, find_candidates, resolve};
