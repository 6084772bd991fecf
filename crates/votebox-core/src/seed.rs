//! Default catalog written on first run.

use chrono::{DateTime, Utc};

use crate::types::{Category, VotingItem};

/// Number of items in the default catalog.
pub const SEED_ITEM_COUNT: usize = 6;

const SEED: [(&str, &str, &str, Category); SEED_ITEM_COUNT] = [
    (
        "1",
        "Mørk modus i hele plattformen",
        "Implementer dark mode for å redusere øyebelastning ved langt arbeid",
        Category::Feature,
    ),
    (
        "2",
        "Mobilapp for iOS og Android",
        "Utvikle native mobilapp for bedre tilgjengelighet på farten",
        Category::Project,
    ),
    (
        "3",
        "Slack-integrasjon",
        "Automatiske notifikasjoner og oppdateringer direkte i Slack",
        Category::Feature,
    ),
    (
        "4",
        "Forbedret søkefunksjon",
        "Mer avansert søk med filtre og autocomplete",
        Category::Improvement,
    ),
    (
        "5",
        "API for tredjeparts integrasjoner",
        "Åpent API for å koble til eksterne systemer",
        Category::Project,
    ),
    (
        "6",
        "Eksport til Excel/CSV",
        "Mulighet for å eksportere data til regneark",
        Category::Feature,
    ),
];

/// Build the default catalog, every item stamped with `created_at` and zero votes.
pub fn default_items(created_at: DateTime<Utc>) -> Vec<VotingItem> {
    SEED.iter()
        .map(|(id, title, description, category)| {
            VotingItem::new(*id, *title, *description, *category, created_at)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_items_shape() {
        let now = Utc::now();
        let items = default_items(now);

        assert_eq!(items.len(), SEED_ITEM_COUNT);
        assert!(items.iter().all(|item| item.votes == 0));
        assert!(items.iter().all(|item| item.created_at == now));

        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), SEED_ITEM_COUNT);
    }

    #[test]
    fn test_default_categories() {
        let categories: Vec<Category> = default_items(Utc::now())
            .into_iter()
            .map(|item| item.category)
            .collect();
        assert_eq!(
            categories,
            [
                Category::Feature,
                Category::Project,
                Category::Feature,
                Category::Improvement,
                Category::Project,
                Category::Feature,
            ]
        );
    }
}
