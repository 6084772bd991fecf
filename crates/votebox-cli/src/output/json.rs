//! JSON output formatting.

use std::collections::HashSet;

use votebox_core::view::ResultsView;
use votebox_core::{UserVote, VotingItem};

/// Convert an item to JSON, flagging whether the user has voted for it.
pub fn item_json(item: &VotingItem, voted: bool) -> serde_json::Value {
    serde_json::json!({
        "id": item.id,
        "title": item.title,
        "description": item.description,
        "category": item.category,
        "categoryLabel": item.category.label(),
        "votes": item.votes,
        "createdAt": item.created_at,
        "voted": voted,
    })
}

pub fn items_json(items: &[&VotingItem], voted: &HashSet<&str>) -> Vec<serde_json::Value> {
    items
        .iter()
        .map(|item| item_json(item, voted.contains(item.id.as_str())))
        .collect()
}

/// Ledger entries joined with item titles where the item still exists.
pub fn votes_json(votes: &[UserVote], items: &[VotingItem]) -> Vec<serde_json::Value> {
    votes
        .iter()
        .map(|vote| {
            let title = items
                .iter()
                .find(|item| item.id == vote.item_id)
                .map(|item| item.title.as_str());
            serde_json::json!({
                "itemId": vote.item_id,
                "votedAt": vote.voted_at,
                "title": title,
            })
        })
        .collect()
}

pub fn results_json(view: &ResultsView<'_>) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = view
        .rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "rank": row.rank,
                "id": row.item.id,
                "title": row.item.title,
                "category": row.item.category,
                "votes": row.item.votes,
                "percentageOfMax": row.percentage_of_max,
                "shareOfTotal": row.share_of_total,
                "podium": row.podium,
            })
        })
        .collect();
    serde_json::json!({
        "totalVotes": view.summary.total_votes,
        "itemCount": view.summary.item_count,
        "leader": view.summary.leader.map(|item| &item.id),
        "rows": rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use votebox_core::Category;

    fn item(id: &str, votes: u32) -> VotingItem {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap();
        VotingItem::new(id, format!("Item {}", id), "", Category::Feature, at).with_votes(votes)
    }

    #[test]
    fn test_item_json_fields() {
        let value = item_json(&item("3", 7), true);
        assert_eq!(value["id"], "3");
        assert_eq!(value["category"], "funksjonalitet");
        assert_eq!(value["categoryLabel"], "Funksjonalitet");
        assert_eq!(value["votes"], 7);
        assert_eq!(value["voted"], true);
    }

    #[test]
    fn test_votes_json_missing_item_has_null_title() {
        let at = Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap();
        let votes = vec![
            UserVote {
                item_id: "1".to_string(),
                voted_at: at,
            },
            UserVote {
                item_id: "gone".to_string(),
                voted_at: at,
            },
        ];
        let values = votes_json(&votes, &[item("1", 1)]);
        assert_eq!(values[0]["title"], "Item 1");
        assert!(values[1]["title"].is_null());
    }

    #[test]
    fn test_results_json_order_and_leader() {
        let items = vec![item("a", 2), item("b", 6), item("c", 2)];
        let view = ResultsView::build(&items);
        let value = results_json(&view);
        assert_eq!(value["totalVotes"], 10);
        assert_eq!(value["leader"], "b");
        let ids: Vec<&str> = value["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(value["rows"][0]["podium"], "gold");
        assert_eq!(value["rows"][0]["shareOfTotal"], 60);
    }
}
