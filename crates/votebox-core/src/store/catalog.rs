//! Item catalog operations.

use tracing::debug;

use super::{VoteStore, ITEMS_KEY};
use crate::error::Result;
use crate::storage::BlobStore;
use crate::types::VotingItem;

impl<S: BlobStore> VoteStore<S> {
    /// List the catalog in persisted order.
    ///
    /// Seeds and persists the default catalog if no catalog record exists.
    ///
    /// # Errors
    ///
    /// Returns `VoteError::Corrupt` if the catalog record cannot be parsed.
    pub fn list_items(&mut self) -> Result<Vec<VotingItem>> {
        match self.read_record(ITEMS_KEY)? {
            Some(items) => Ok(items),
            None => self.seed_catalog(),
        }
    }

    /// Overwrite the whole catalog.
    ///
    /// Ids are not checked for uniqueness; callers keep them unique.
    pub fn replace_items(&mut self, items: &[VotingItem]) -> Result<()> {
        debug!(count = items.len(), "replacing catalog");
        self.write_items(items)
    }

    /// Look up a single item by id.
    pub fn find_item(&mut self, item_id: &str) -> Result<Option<VotingItem>> {
        Ok(self
            .list_items()?
            .into_iter()
            .find(|item| item.id == item_id))
    }
}
