// file: src/resolver/matcher.rs
// description: two-pass keyword matching (prefix, then substring) and resolution
// reference: internal resolution pipeline

use crate::error::Result;
use crate::models::{DocumentIndex, DocumentRecord};
use crate::resolver::Chooser;
use crate::utils::Validator;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPass {
    Prefix,
    Substring,
}

/// Candidates from whichever pass produced them, in keyword order. The
/// substring pass only runs when the prefix pass found nothing.
#[derive(Debug, Clone)]
pub struct MatchOutcome<'a> {
    pub pass: MatchPass,
    pub candidates: Vec<&'a DocumentRecord>,
}

impl MatchOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

pub fn find_candidates<'a>(term: &str, index: &'a DocumentIndex) -> MatchOutcome<'a> {
    let term = term.to_lowercase();

    let prefix: Vec<&DocumentRecord> = index
        .records()
        .filter(|record| record.keyword.to_lowercase().starts_with(&term))
        .collect();

    if !prefix.is_empty() {
        return MatchOutcome {
            pass: MatchPass::Prefix,
            candidates: prefix,
        };
    }

    let substring = index
        .records()
        .filter(|record| record.keyword.to_lowercase().contains(&term))
        .collect();

    MatchOutcome {
        pass: MatchPass::Substring,
        candidates: substring,
    }
}

/// `Ok(None)` when nothing matches. Several matches are put to `chooser`,
/// whose answer must be a 0-based position among them.
pub fn resolve<'a, C>(
    term: &str,
    index: &'a DocumentIndex,
    chooser: &mut C,
) -> Result<Option<&'a DocumentRecord>>
where
    C: Chooser + ?Sized,
{
    let outcome = find_candidates(term, index);
    debug!(
        "'{}' matched {} keyword(s) by {:?}",
        term,
        outcome.candidates.len(),
        outcome.pass
    );

    match outcome.candidates.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        candidates => {
            let answer = chooser.choose(candidates)?;
            let choice = Validator::parse_selection(&answer, candidates.len())?;
            Ok(Some(candidates[choice]))
        }
    }
}
