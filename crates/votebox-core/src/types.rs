//! Core data types for the catalog and the vote ledger.
//!
//! Field names serialize in camelCase and categories as the tokens used by
//! the first-run dataset, so records written by other front ends of the
//! same widget load unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VoteError;

/// Closed set of item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "prosjekt", alias = "project")]
    Project,
    #[serde(rename = "funksjonalitet", alias = "feature")]
    Feature,
    #[serde(rename = "forbedring", alias = "improvement")]
    Improvement,
    #[serde(rename = "annet", alias = "other")]
    Other,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Project,
        Category::Feature,
        Category::Improvement,
        Category::Other,
    ];

    /// Persisted token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "prosjekt",
            Self::Feature => "funksjonalitet",
            Self::Improvement => "forbedring",
            Self::Other => "annet",
        }
    }

    /// English token, accepted on input.
    pub fn english(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Feature => "feature",
            Self::Improvement => "improvement",
            Self::Other => "other",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Project => "Prosjekt",
            Self::Feature => "Funksjonalitet",
            Self::Improvement => "Forbedring",
            Self::Other => "Annet",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = VoteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == needle || c.english() == needle)
            .ok_or_else(|| VoteError::InvalidInput(format!("Unknown category: {}", value)))
    }
}

/// Category selection for the voting list, with an "all" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = VoteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" | "alle" => Ok(Self::All),
            _ => value.parse().map(Self::Only),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

/// A votable item in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingItem {
    /// Opaque identifier, stable for the lifetime of the catalog
    pub id: String,

    pub title: String,

    pub description: String,

    pub category: Category,

    /// Running vote count; the only field mutated after seeding
    pub votes: u32,

    pub created_at: DateTime<Utc>,
}

impl VotingItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            votes: 0,
            created_at,
        }
    }

    pub fn with_votes(mut self, votes: u32) -> Self {
        self.votes = votes;
        self
    }
}

/// One ledger entry: the current user voted for `item_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVote {
    pub item_id: String,
    pub voted_at: DateTime<Utc>,
}

/// Result of casting a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// A new ledger entry was written and the item count incremented
    Recorded,
    /// The user had already voted for this item; nothing changed
    AlreadyVoted,
}

/// Result of retracting a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetractOutcome {
    /// The ledger entry was removed and the item count decremented
    Retracted,
    /// The user had not voted for this item; nothing changed
    NotVoted,
}
