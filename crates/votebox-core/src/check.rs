//! Consistency audit of catalog counts against the ledger.
//!
//! Cast and retract write the ledger and the catalog separately, so an
//! interrupted write can leave them disagreeing. The audit reports the
//! disagreement; it never repairs.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::Result;
use crate::storage::BlobStore;
use crate::store::VoteStore;
use crate::types::{UserVote, VotingItem};

/// An item whose stored count differs from its ledger entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountMismatch {
    pub item_id: String,
    /// Count stored on the item
    pub recorded: u32,
    /// Number of ledger entries for the item
    pub expected: u32,
}

/// Findings of a consistency audit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    pub mismatched: Vec<CountMismatch>,
    /// Ledger item ids with no catalog item
    pub orphaned: Vec<String>,
    /// Item ids appearing more than once in the catalog
    pub duplicate_items: Vec<String>,
    /// Item ids appearing more than once in the ledger
    pub duplicate_votes: Vec<String>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatched.is_empty()
            && self.orphaned.is_empty()
            && self.duplicate_items.is_empty()
            && self.duplicate_votes.is_empty()
    }

    /// Total number of findings.
    pub fn issue_count(&self) -> usize {
        self.mismatched.len()
            + self.orphaned.len()
            + self.duplicate_items.len()
            + self.duplicate_votes.len()
    }
}

/// Compare a catalog with a ledger. Findings are listed in catalog order,
/// then ledger order.
pub fn audit(items: &[VotingItem], votes: &[UserVote]) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();

    let mut ledger_counts: HashMap<&str, u32> = HashMap::new();
    for vote in votes {
        let count = ledger_counts.entry(vote.item_id.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            report.duplicate_votes.push(vote.item_id.clone());
        }
    }

    let mut seen_items: HashMap<&str, usize> = HashMap::new();
    for item in items {
        let seen = seen_items.entry(item.id.as_str()).or_insert(0);
        *seen += 1;
        if *seen == 2 {
            report.duplicate_items.push(item.id.clone());
        }
        if *seen > 1 {
            continue;
        }

        let expected = ledger_counts.get(item.id.as_str()).copied().unwrap_or(0);
        if item.votes != expected {
            report.mismatched.push(CountMismatch {
                item_id: item.id.clone(),
                recorded: item.votes,
                expected,
            });
        }
    }

    for vote in votes {
        let id = vote.item_id.as_str();
        if !seen_items.contains_key(id) && !report.orphaned.iter().any(|o| o == id) {
            report.orphaned.push(vote.item_id.clone());
        }
    }

    report
}

impl<S: BlobStore> VoteStore<S> {
    /// Audit the persisted catalog against the persisted ledger.
    ///
    /// Seeds the catalog if absent, like any other catalog read.
    pub fn check_consistency(&mut self) -> Result<ConsistencyReport> {
        let items = self.list_items()?;
        let votes = self.list_user_votes()?;
        Ok(audit(&items, &votes))
    }
}
