//! # Votebox Core
//!
//! Core library for Votebox - a local, single-user voting ledger.
//!
//! Users browse a fixed catalog of proposals, cast at most one vote per
//! item, and view results ranked by popularity. This crate holds the
//! persisted state and the vote accounting, independent of any front end.
//!
//! ## Architecture
//!
//! - **storage**: Key-value blob store trait and backends (memory, directory)
//! - **store**: The catalog and ledger records and the cast/retract write path
//! - **seed**: Default catalog written on first read
//! - **view**: Category filter, ranking and percentages
//! - **check**: Audit of catalog counts against the ledger
//!
//! ## Example
//!
//! ```
//! use votebox_core::storage::MemoryStore;
//! use votebox_core::{VoteOutcome, VoteStore};
//!
//! let mut store = VoteStore::new(MemoryStore::new());
//! assert_eq!(store.cast_vote("2")?, VoteOutcome::Recorded);
//! assert_eq!(store.cast_vote("2")?, VoteOutcome::AlreadyVoted);
//! assert!(store.has_voted("2")?);
//! # Ok::<(), votebox_core::VoteError>(())
//! ```

pub mod check;
pub mod error;
pub mod fs;
pub mod seed;
pub mod storage;
pub mod store;
pub mod types;
pub mod view;

pub use check::ConsistencyReport;
pub use error::{Result, VoteError};
pub use storage::BlobStore;
pub use store::{VoteStore, ITEMS_KEY, VOTES_KEY};
pub use types::{Category, CategoryFilter, RetractOutcome, UserVote, VoteOutcome, VotingItem};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
