//! Vote ledger operations.
//!
//! Per item the user is either voted or not voted. Casting from voted and
//! retracting from not voted are no-ops, reported through the outcome type
//! rather than as errors.

use tracing::{debug, info, warn};

use super::{VoteStore, ITEMS_KEY, VOTES_KEY};
use crate::error::{Result, VoteError};
use crate::storage::BlobStore;
use crate::types::{RetractOutcome, UserVote, VoteOutcome};

impl<S: BlobStore> VoteStore<S> {
    /// List every vote the current user has cast, oldest first.
    ///
    /// Returns an empty list if no ledger record exists.
    pub fn list_user_votes(&self) -> Result<Vec<UserVote>> {
        self.read_votes()
    }

    /// Whether the ledger holds a vote for `item_id`.
    pub fn has_voted(&self, item_id: &str) -> Result<bool> {
        Ok(self
            .read_votes()?
            .iter()
            .any(|vote| vote.item_id == item_id))
    }

    /// Cast a vote for `item_id`.
    ///
    /// Appends a ledger entry and persists the ledger, then increments the
    /// item's count and persists the catalog.
    ///
    /// # Errors
    ///
    /// Returns `VoteError::ItemNotFound` if the catalog has no such item, and
    /// `VoteError::InvalidInput` if the item's count is already `u32::MAX`.
    /// Both checks run before any write, so the ledger is left untouched.
    pub fn cast_vote(&mut self, item_id: &str) -> Result<VoteOutcome> {
        let mut votes = self.read_votes()?;
        if votes.iter().any(|vote| vote.item_id == item_id) {
            debug!(item_id, "vote already recorded");
            return Ok(VoteOutcome::AlreadyVoted);
        }

        let mut items = self.list_items()?;
        let item = items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| VoteError::ItemNotFound(item_id.to_string()))?;
        let count = item.votes.checked_add(1).ok_or_else(|| {
            VoteError::InvalidInput(format!("Vote count for item {} is at its maximum", item_id))
        })?;

        votes.push(UserVote {
            item_id: item_id.to_string(),
            voted_at: self.now(),
        });
        self.write_votes(&votes)?;

        item.votes = count;
        self.write_items(&items)?;

        info!(item_id, votes = count, "vote recorded");
        Ok(VoteOutcome::Recorded)
    }

    /// Retract the vote for `item_id`.
    ///
    /// Removes the ledger entry and persists the ledger, then decrements the
    /// item's count (never below zero) and persists the catalog. An item that
    /// has vanished from the catalog only loses its ledger entry.
    pub fn retract_vote(&mut self, item_id: &str) -> Result<RetractOutcome> {
        let votes = self.read_votes()?;
        if !votes.iter().any(|vote| vote.item_id == item_id) {
            debug!(item_id, "no vote to retract");
            return Ok(RetractOutcome::NotVoted);
        }

        let remaining: Vec<UserVote> = votes
            .into_iter()
            .filter(|vote| vote.item_id != item_id)
            .collect();
        self.write_votes(&remaining)?;

        let mut items = self.list_items()?;
        let decremented = match items.iter_mut().find(|item| item.id == item_id) {
            Some(item) if item.votes > 0 => {
                item.votes -= 1;
                Some(item.votes)
            }
            Some(_) => {
                warn!(item_id, "vote retracted but item count was already zero");
                None
            }
            None => {
                warn!(item_id, "vote retracted for item missing from catalog");
                None
            }
        };
        if let Some(count) = decremented {
            self.write_items(&items)?;
            info!(item_id, votes = count, "vote retracted");
        }

        Ok(RetractOutcome::Retracted)
    }

    /// Delete both records.
    ///
    /// The catalog is reseeded by the next [`list_items`](Self::list_items).
    pub fn reset_all(&mut self) -> Result<()> {
        self.blobs.remove(ITEMS_KEY)?;
        self.blobs.remove(VOTES_KEY)?;
        info!("cleared catalog and ledger");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{fixed_time, memory_store};
    use super::*;
    use crate::seed::default_items;
    use crate::storage::MemoryStore;
    use crate::types::{Category, VotingItem};

    fn votes_for(store: &mut VoteStore<MemoryStore>, item_id: &str) -> u32 {
        store.find_item(item_id).unwrap().unwrap().votes
    }

    fn ledger_count(store: &VoteStore<MemoryStore>, item_id: &str) -> usize {
        store
            .list_user_votes()
            .unwrap()
            .iter()
            .filter(|vote| vote.item_id == item_id)
            .count()
    }

    #[test]
    fn test_empty_ledger() {
        let store = memory_store();
        assert!(store.list_user_votes().unwrap().is_empty());
        assert!(!store.has_voted("1").unwrap());
    }

    #[test]
    fn test_cast_vote_records_and_increments() {
        let mut store = memory_store();

        let outcome = store.cast_vote("3").unwrap();

        assert_eq!(outcome, VoteOutcome::Recorded);
        assert!(store.has_voted("3").unwrap());
        assert_eq!(votes_for(&mut store, "3"), 1);
        assert_eq!(
            store.list_user_votes().unwrap(),
            vec![UserVote {
                item_id: "3".to_string(),
                voted_at: fixed_time(),
            }]
        );
    }

    #[test]
    fn test_cast_vote_is_idempotent() {
        let mut store = memory_store();

        store.cast_vote("1").unwrap();
        let after_first = store.list_items().unwrap();
        let outcome = store.cast_vote("1").unwrap();

        assert_eq!(outcome, VoteOutcome::AlreadyVoted);
        assert_eq!(store.list_items().unwrap(), after_first);
        assert_eq!(votes_for(&mut store, "1"), 1);
        assert_eq!(ledger_count(&store, "1"), 1);
    }

    #[test]
    fn test_retract_unvoted_is_noop() {
        let mut store = memory_store();
        let before = store.list_items().unwrap();

        let outcome = store.retract_vote("2").unwrap();

        assert_eq!(outcome, RetractOutcome::NotVoted);
        assert_eq!(store.list_items().unwrap(), before);
        assert!(store.list_user_votes().unwrap().is_empty());
    }

    #[test]
    fn test_cast_then_retract_round_trip() {
        let mut store = memory_store();
        store.cast_vote("5").unwrap();
        let items_before = store.list_items().unwrap();
        let votes_before = store.list_user_votes().unwrap();

        store.cast_vote("2").unwrap();
        let outcome = store.retract_vote("2").unwrap();

        assert_eq!(outcome, RetractOutcome::Retracted);
        assert_eq!(store.list_items().unwrap(), items_before);
        assert_eq!(store.list_user_votes().unwrap(), votes_before);
    }

    #[test]
    fn test_cast_unknown_item_writes_nothing() {
        let mut store = memory_store();
        store.list_items().unwrap();

        let err = store.cast_vote("missing").unwrap_err();

        assert!(matches!(err, VoteError::ItemNotFound(ref id) if id == "missing"));
        assert!(!store.blobs().contains(VOTES_KEY).unwrap());
        assert_eq!(store.list_items().unwrap(), default_items(fixed_time()));
    }

    #[test]
    fn test_retract_floors_at_zero() {
        let mut store = memory_store();
        store.cast_vote("4").unwrap();
        let mut items = store.list_items().unwrap();
        items.iter_mut().for_each(|item| item.votes = 0);
        store.replace_items(&items).unwrap();

        store.retract_vote("4").unwrap();

        assert_eq!(votes_for(&mut store, "4"), 0);
        assert!(!store.has_voted("4").unwrap());
    }

    #[test]
    fn test_cast_at_max_count_writes_nothing() {
        let mut store = memory_store();
        store
            .replace_items(&[VotingItem::new("x", "Full", "", Category::Other, fixed_time())
                .with_votes(u32::MAX)])
            .unwrap();

        let err = store.cast_vote("x").unwrap_err();

        assert!(matches!(err, VoteError::InvalidInput(_)));
        assert_eq!(votes_for(&mut store, "x"), u32::MAX);
        assert!(!store.has_voted("x").unwrap());
        assert_eq!(store.retract_vote("x").unwrap(), RetractOutcome::NotVoted);
        assert_eq!(votes_for(&mut store, "x"), u32::MAX);
    }

    #[test]
    fn test_retract_for_removed_item_drops_ledger_entry() {
        let mut store = memory_store();
        store.cast_vote("6").unwrap();
        store
            .replace_items(&[VotingItem::new(
                "other",
                "Other",
                "",
                Category::Other,
                fixed_time(),
            )])
            .unwrap();

        assert_eq!(store.retract_vote("6").unwrap(), RetractOutcome::Retracted);
        assert!(store.list_user_votes().unwrap().is_empty());
        assert_eq!(store.find_item("other").unwrap().unwrap().votes, 0);
    }

    #[test]
    fn test_votes_are_independent_per_item() {
        let mut store = memory_store();
        store.cast_vote("1").unwrap();
        store.cast_vote("2").unwrap();
        store.retract_vote("1").unwrap();

        assert_eq!(votes_for(&mut store, "1"), 0);
        assert_eq!(votes_for(&mut store, "2"), 1);
        assert!(store.has_voted("2").unwrap());
    }

    #[test]
    fn test_reset_all_clears_and_reseeds() {
        let mut store = memory_store();
        store.cast_vote("1").unwrap();
        store.cast_vote("3").unwrap();

        store.reset_all().unwrap();

        assert!(store.blobs().is_empty());
        assert!(store.list_user_votes().unwrap().is_empty());
        assert_eq!(store.list_items().unwrap(), default_items(fixed_time()));
    }

    #[test]
    fn test_reset_on_empty_store() {
        let mut store = memory_store();
        store.reset_all().unwrap();
        assert!(store.blobs().is_empty());
    }

    #[test]
    fn test_corrupt_ledger_fails_loudly() {
        let blobs = MemoryStore::with_blobs([(VOTES_KEY, "nope")]);
        let mut store = VoteStore::new(blobs);

        assert!(matches!(
            store.has_voted("1"),
            Err(VoteError::Corrupt { ref key, .. }) if key == VOTES_KEY
        ));
        assert!(store.cast_vote("1").is_err());
        assert!(!store.blobs().contains(ITEMS_KEY).unwrap());
    }
}
