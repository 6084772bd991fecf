//! Derived views over the catalog and ledger.
//!
//! Pure functions; nothing here is persisted. The voting list uses
//! [`filter_by_category`] and [`voted_item_ids`], the results screen uses
//! [`ResultsView`].

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{CategoryFilter, UserVote, VotingItem};

/// Items matching `filter`, in catalog order.
pub fn filter_by_category(items: &[VotingItem], filter: CategoryFilter) -> Vec<&VotingItem> {
    items
        .iter()
        .filter(|item| filter.matches(item.category))
        .collect()
}

/// Items ordered by vote count, highest first.
///
/// The sort is stable: items with equal counts keep their catalog order.
pub fn rank_by_votes(items: &[VotingItem]) -> Vec<&VotingItem> {
    let mut ranked: Vec<&VotingItem> = items.iter().collect();
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
    ranked
}

/// Highest vote count in the catalog, 0 when empty.
pub fn max_votes(items: &[VotingItem]) -> u32 {
    items.iter().map(|item| item.votes).max().unwrap_or(0)
}

/// Sum of all vote counts.
pub fn total_votes(items: &[VotingItem]) -> u64 {
    items.iter().map(|item| u64::from(item.votes)).sum()
}

/// `votes` as a percentage of the leading item's count; 0 when `max` is 0.
pub fn percentage_of_max(votes: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(votes) / f64::from(max) * 100.0
}

/// `votes` as a whole-number percentage of all votes; 0 when `total` is 0.
///
/// Computed in integers so exact halves always round up: 1 of 8 votes is
/// 13% and 29 of 200 is 15%.
pub fn share_of_total(votes: u32, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    let total = u128::from(total);
    ((u128::from(votes) * 200 + total) / (2 * total)) as u32
}

/// Ids of the items the user has voted for.
pub fn voted_item_ids(votes: &[UserVote]) -> HashSet<&str> {
    votes.iter().map(|vote| vote.item_id.as_str()).collect()
}

/// Medal shown next to the top three results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Podium {
    Gold,
    Silver,
    Bronze,
}

impl Podium {
    /// Medal for a 1-based rank.
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }
}

/// One row of the results screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem<'a> {
    /// 1-based position after ranking
    pub rank: usize,
    pub item: &'a VotingItem,
    pub percentage_of_max: f64,
    pub share_of_total: u32,
    pub podium: Option<Podium>,
}

/// Headline numbers for the results screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSummary<'a> {
    pub total_votes: u64,
    pub item_count: usize,
    /// First ranked item; `None` for an empty catalog
    pub leader: Option<&'a VotingItem>,
}

/// Ranked results with percentages and summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView<'a> {
    pub summary: ResultsSummary<'a>,
    pub rows: Vec<RankedItem<'a>>,
}

impl<'a> ResultsView<'a> {
    pub fn build(items: &'a [VotingItem]) -> Self {
        let max = max_votes(items);
        let total = total_votes(items);
        let rows: Vec<RankedItem<'a>> = rank_by_votes(items)
            .into_iter()
            .enumerate()
            .map(|(index, item)| RankedItem {
                rank: index + 1,
                item,
                percentage_of_max: percentage_of_max(item.votes, max),
                share_of_total: share_of_total(item.votes, total),
                podium: Podium::for_rank(index + 1),
            })
            .collect();

        Self {
            summary: ResultsSummary {
                total_votes: total,
                item_count: items.len(),
                leader: rows.first().map(|row| row.item),
            },
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
