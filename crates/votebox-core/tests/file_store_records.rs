use std::fs;

use tempfile::tempdir;
use votebox_core::seed::SEED_ITEM_COUNT;
use votebox_core::storage::FileStore;
use votebox_core::{
    BlobStore, Category, RetractOutcome, VoteError, VoteOutcome, VoteStore, ITEMS_KEY, VOTES_KEY,
};

fn open(dir: &std::path::Path) -> VoteStore<FileStore> {
    VoteStore::new(FileStore::open(dir).expect("open should succeed"))
}

#[test]
fn test_first_read_seeds_file() {
    let dir = tempdir().expect("tempdir");
    let mut store = open(dir.path());

    let items = store.list_items().expect("list should succeed");

    assert_eq!(items.len(), SEED_ITEM_COUNT);
    let on_disk = fs::read_to_string(dir.path().join("voting-items.json")).expect("read");
    let parsed: serde_json::Value = serde_json::from_str(&on_disk).expect("valid json");
    assert_eq!(parsed.as_array().map(Vec::len), Some(SEED_ITEM_COUNT));
    assert_eq!(parsed[1]["category"], "prosjekt");
    assert!(!dir.path().join("user-votes.json").exists());
}

#[test]
fn test_votes_survive_reopen() {
    let dir = tempdir().expect("tempdir");
    {
        let mut store = open(dir.path());
        assert_eq!(store.cast_vote("3").expect("cast"), VoteOutcome::Recorded);
        assert_eq!(store.cast_vote("5").expect("cast"), VoteOutcome::Recorded);
    }

    let mut reopened = open(dir.path());
    assert!(reopened.has_voted("3").expect("has_voted"));
    assert_eq!(reopened.cast_vote("3").expect("cast"), VoteOutcome::AlreadyVoted);
    let item = reopened.find_item("5").expect("find").expect("present");
    assert_eq!(item.votes, 1);
    assert_eq!(reopened.list_user_votes().expect("votes").len(), 2);
}

#[test]
fn test_reads_records_written_by_browser_front_end() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("voting-items.json"),
        r#"[{"id":"1","title":"Dark mode","description":"d","category":"funksjonalitet","votes":1,"createdAt":"2025-02-01T12:00:00.000Z"}]"#,
    )
    .expect("write items");
    fs::write(
        dir.path().join("user-votes.json"),
        r#"[{"itemId":"1","votedAt":"2025-02-02T08:30:00.000Z"}]"#,
    )
    .expect("write votes");

    let mut store = open(dir.path());
    let items = store.list_items().expect("list");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, Category::Feature);
    assert!(store.has_voted("1").expect("has_voted"));

    assert_eq!(store.retract_vote("1").expect("retract"), RetractOutcome::Retracted);
    assert_eq!(store.find_item("1").expect("find").expect("present").votes, 0);
    assert!(store.check_consistency().expect("check").is_consistent());
}

#[test]
fn test_corrupt_file_is_reported_not_reseeded() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("voting-items.json");
    fs::write(&path, "<html>").expect("write");

    let mut store = open(dir.path());
    let err = store.list_items().expect_err("corrupt catalog must fail");

    assert!(matches!(err, VoteError::Corrupt { ref key, .. } if key == ITEMS_KEY));
    assert_eq!(fs::read_to_string(&path).expect("read"), "<html>");
}

#[test]
fn test_reset_removes_files_and_reseeds_lazily() {
    let dir = tempdir().expect("tempdir");
    let mut store = open(dir.path());
    store.cast_vote("1").expect("cast");

    store.reset_all().expect("reset");

    assert!(!dir.path().join("voting-items.json").exists());
    assert!(!dir.path().join("user-votes.json").exists());
    assert!(!store.blobs().contains(VOTES_KEY).expect("contains"));

    let items = store.list_items().expect("list");
    assert_eq!(items.len(), SEED_ITEM_COUNT);
    assert!(items.iter().all(|item| item.votes == 0));
    assert!(store.list_user_votes().expect("votes").is_empty());
}
