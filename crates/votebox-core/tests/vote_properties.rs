use std::collections::HashSet;

use proptest::prelude::*;
use votebox_core::storage::MemoryStore;
use votebox_core::VoteStore;

#[derive(Debug, Clone)]
enum Op {
    Cast(usize),
    Retract(usize),
}

const IDS: [&str; 6] = ["1", "2", "3", "4", "5", "6"];

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..IDS.len()).prop_map(Op::Cast),
        (0..IDS.len()).prop_map(Op::Retract),
    ]
}

proptest! {
    #[test]
    fn counts_track_ledger(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = VoteStore::new(MemoryStore::new());

        for op in &ops {
            match op {
                Op::Cast(i) => { store.cast_vote(IDS[*i]).unwrap(); }
                Op::Retract(i) => { store.retract_vote(IDS[*i]).unwrap(); }
            }
        }

        let items = store.list_items().unwrap();
        let votes = store.list_user_votes().unwrap();

        let unique: HashSet<&str> = votes.iter().map(|v| v.item_id.as_str()).collect();
        prop_assert_eq!(unique.len(), votes.len());

        for item in &items {
            let entries = votes.iter().filter(|v| v.item_id == item.id).count();
            prop_assert_eq!(item.votes as usize, entries);
            prop_assert!(item.votes <= 1);
        }
        prop_assert!(store.check_consistency().unwrap().is_consistent());
    }

    #[test]
    fn cast_then_retract_restores_state(ops in prop::collection::vec(op(), 0..20), target in 0..IDS.len()) {
        let mut store = VoteStore::new(MemoryStore::new());
        for op in &ops {
            match op {
                Op::Cast(i) => { store.cast_vote(IDS[*i]).unwrap(); }
                Op::Retract(i) => { store.retract_vote(IDS[*i]).unwrap(); }
            }
        }
        prop_assume!(!store.has_voted(IDS[target]).unwrap());

        let items_before = store.list_items().unwrap();
        let votes_before = store.list_user_votes().unwrap();

        store.cast_vote(IDS[target]).unwrap();
        store.retract_vote(IDS[target]).unwrap();

        prop_assert_eq!(store.list_items().unwrap(), items_before);
        prop_assert_eq!(store.list_user_votes().unwrap(), votes_before);
    }
}
