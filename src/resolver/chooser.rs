// file: src/resolver/chooser.rs
// description: pluggable disambiguation between several matching documents
// reference: internal resolution pipeline

use crate::error::Result;
use crate::models::DocumentRecord;

/// Asked to pick one of several candidates. Returns the raw answer; the
/// resolver parses and range-checks it.
pub trait Chooser {
    fn choose(&mut self, candidates: &[&DocumentRecord]) -> Result<String>;
}

impl<F> Chooser for F
where
    F: FnMut(&[&DocumentRecord]) -> Result<String>,
{
    fn choose(&mut self, candidates: &[&DocumentRecord]) -> Result<String> {
        self(candidates)
    }
}
