//! Vote records on top of a blob store.
//!
//! `VoteStore` owns the two persisted records and is the only component that
//! reads or writes them:
//!
//! - `voting-items`: JSON array of [`VotingItem`], the catalog
//! - `user-votes`: JSON array of [`UserVote`], the ledger
//!
//! Catalog operations live in `catalog`, ledger operations in `ledger`.
//! Every mutation reads a whole record, changes it, and writes the whole
//! record back. The ledger and catalog writes of a single vote are two
//! separate writes; nothing makes them atomic together.

mod catalog;
mod ledger;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, VoteError};
use crate::seed::default_items;
use crate::storage::BlobStore;
use crate::types::{UserVote, VotingItem};

/// Record key of the catalog.
pub const ITEMS_KEY: &str = "voting-items";

/// Record key of the current user's ledger.
pub const VOTES_KEY: &str = "user-votes";

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Catalog and ledger access for a single local user.
pub struct VoteStore<S: BlobStore> {
    blobs: S,
    clock: Clock,
}

impl<S: BlobStore> VoteStore<S> {
    /// Wrap a blob store. Timestamps come from the system clock.
    pub fn new(blobs: S) -> Self {
        Self {
            blobs,
            clock: Box::new(Utc::now),
        }
    }

    /// Replace the timestamp source used for seeding and new votes.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    /// Borrow the underlying blob store.
    pub fn blobs(&self) -> &S {
        &self.blobs
    }

    /// Consume the store, returning the underlying blob store.
    pub fn into_inner(self) -> S {
        self.blobs
    }

    /// Seed the catalog if no catalog record exists.
    ///
    /// A present record is never replaced, even when it holds an empty list
    /// or fails to parse.
    ///
    /// # Returns
    ///
    /// Returns `true` if the default catalog was written.
    pub fn initialize_if_absent(&mut self) -> Result<bool> {
        if self.blobs.contains(ITEMS_KEY)? {
            return Ok(false);
        }
        self.seed_catalog()?;
        Ok(true)
    }

    fn seed_catalog(&mut self) -> Result<Vec<VotingItem>> {
        let items = default_items(self.now());
        self.write_record(ITEMS_KEY, &items)?;
        info!(count = items.len(), "seeded default catalog");
        Ok(items)
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        let Some(raw) = self.blobs.get(key)? else {
            debug!(key, "record absent");
            return Ok(None);
        };
        let records: Vec<T> =
            serde_json::from_str(&raw).map_err(|e| VoteError::corrupt(key, e))?;
        debug!(key, count = records.len(), "read record");
        Ok(Some(records))
    }

    fn write_record<T: Serialize>(&mut self, key: &str, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.blobs.set(key, &raw)?;
        debug!(key, count = records.len(), "wrote record");
        Ok(())
    }

    fn write_items(&mut self, items: &[VotingItem]) -> Result<()> {
        self.write_record(ITEMS_KEY, items)
    }

    fn read_votes(&self) -> Result<Vec<UserVote>> {
        Ok(self.read_record(VOTES_KEY)?.unwrap_or_default())
    }

    fn write_votes(&mut self, votes: &[UserVote]) -> Result<()> {
        self.write_record(VOTES_KEY, votes)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};

    use super::VoteStore;
    use crate::storage::MemoryStore;

    pub fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    pub fn memory_store() -> VoteStore<MemoryStore> {
        VoteStore::new(MemoryStore::new()).with_clock(fixed_time)
    }
}
