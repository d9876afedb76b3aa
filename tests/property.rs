//! Property-based tests using proptest.
//!
//! These tests verify that the documented invariants hold for randomly
//! generated catalogues, queries, and mutation sequences - not just the
//! handful of fixtures in the behavior suites.

use proptest::prelude::*;
use waymark::testing::make_link;
use waymark::{
    fuzzy_match, merge, phonetic_match, search, Favorites, Link, MemoryStore, ScoredCandidate,
    SearchHistory, MAX_HISTORY,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Random word-like query strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,8}").unwrap()
}

/// Han-script words with well-known pinyin readings.
fn han_word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "知乎".to_string(),
        "百度".to_string(),
        "微博".to_string(),
        "搜索".to_string(),
        "社区".to_string(),
        "导航".to_string(),
        "工具".to_string(),
    ])
}

/// A catalogue of links with unique ids and mixed-script fields.
fn catalogue_strategy() -> impl Strategy<Value = Vec<Link>> {
    prop::collection::vec(
        (
            prop_oneof![word_strategy(), han_word_strategy()],
            word_strategy(),
            prop::collection::vec(word_strategy(), 0..3),
        ),
        0..8,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, description, tags))| {
                let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                make_link(&format!("link-{i}"), &title, &description, &tags)
            })
            .collect()
    })
}

/// Whitespace-only query strings.
fn whitespace_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n']), 0..6)
        .prop_map(|chars| chars.into_iter().collect())
}

// ============================================================================
// SEARCH PROPERTIES
// ============================================================================

proptest! {
    /// Property: a blank query is identity in content and order.
    #[test]
    fn prop_blank_query_is_identity(
        catalogue in catalogue_strategy(),
        query in whitespace_strategy(),
    ) {
        prop_assert_eq!(search(&catalogue, &query), catalogue);
    }

    /// Property: no link id appears twice in any result list.
    #[test]
    fn prop_results_have_unique_ids(
        catalogue in catalogue_strategy(),
        query in word_strategy(),
    ) {
        let results = search(&catalogue, &query);
        let mut seen = std::collections::HashSet::new();
        for link in &results {
            prop_assert!(seen.insert(link.id.clone()), "duplicate id {}", link.id);
        }
    }

    /// Property: results are a subset of the catalogue.
    #[test]
    fn prop_results_drawn_from_catalogue(
        catalogue in catalogue_strategy(),
        query in word_strategy(),
    ) {
        let results = search(&catalogue, &query);
        prop_assert!(results.len() <= catalogue.len());
        for link in &results {
            prop_assert!(catalogue.iter().any(|l| l == link));
        }
    }

    /// Property: search is deterministic for a (catalogue, query) pair.
    #[test]
    fn prop_search_deterministic(
        catalogue in catalogue_strategy(),
        query in word_strategy(),
    ) {
        prop_assert_eq!(search(&catalogue, &query), search(&catalogue, &query));
    }

    /// Property: fuzzy scores are dissimilarities in [0, 1]; phonetic scores
    /// are coverage sums in [0.2, 1.0].
    #[test]
    fn prop_matcher_score_ranges(
        catalogue in catalogue_strategy(),
        query in word_strategy(),
    ) {
        for c in fuzzy_match(&catalogue, &query) {
            prop_assert!((0.0..=1.0).contains(&c.score), "fuzzy score {}", c.score);
        }
        for c in phonetic_match(&catalogue, &query) {
            prop_assert!((0.2..=1.0).contains(&c.score), "phonetic score {}", c.score);
        }
    }
}

// ============================================================================
// MERGER PROPERTIES
// ============================================================================

proptest! {
    /// Property: merged output is ordered ascending by the reconciled
    /// (minimum-per-id) score.
    #[test]
    fn prop_merge_orders_ascending(
        fuzzy in prop::collection::vec((0usize..6, 0.0f64..1.0), 0..10),
        phonetic in prop::collection::vec((0usize..6, 0.2f64..1.0), 0..10),
    ) {
        let to_candidates = |rows: &[(usize, f64)]| -> Vec<ScoredCandidate> {
            rows.iter()
                .map(|(id, score)| ScoredCandidate {
                    link: make_link(&format!("link-{id}"), "t", "", &[]),
                    score: *score,
                })
                .collect()
        };

        // Reconciled score per id = minimum across everything inserted.
        let mut expected = std::collections::HashMap::new();
        for (id, score) in fuzzy.iter().chain(phonetic.iter()) {
            let entry = expected.entry(*id).or_insert(f64::INFINITY);
            *entry = entry.min(*score);
        }

        let ranked = merge(to_candidates(&fuzzy), to_candidates(&phonetic));
        prop_assert_eq!(ranked.len(), expected.len());

        let scores: Vec<f64> = ranked
            .iter()
            .map(|link| {
                let id: usize = link.id.trim_start_matches("link-").parse().unwrap();
                expected[&id]
            })
            .collect();
        for pair in scores.windows(2) {
            prop_assert!(pair[0] <= pair[1], "descending pair {:?}", pair);
        }
    }
}

// ============================================================================
// HISTORY & FAVORITES PROPERTIES
// ============================================================================

proptest! {
    /// Property: after any add sequence the history is bounded, free of
    /// duplicates and blanks, and leads with the latest distinct term.
    #[test]
    fn prop_history_invariant(terms in prop::collection::vec(
        prop_oneof![word_strategy(), whitespace_strategy()],
        0..40,
    )) {
        let mut store = MemoryStore::new();
        let mut history = SearchHistory::new();
        for term in &terms {
            history.add(&mut store, term);
        }

        prop_assert!(history.len() <= MAX_HISTORY);
        let mut seen = std::collections::HashSet::new();
        for entry in history.entries() {
            prop_assert!(!entry.trim().is_empty());
            prop_assert!(seen.insert(entry.clone()));
        }

        if let Some(last_real) = terms.iter().rev().find(|t| !t.trim().is_empty()) {
            prop_assert_eq!(history.entries()[0].as_str(), last_real.trim());
        }

        // And the invariant survives a reload.
        let reloaded = SearchHistory::load(&store);
        prop_assert_eq!(reloaded.entries(), history.entries());
    }

    /// Property: toggling any id twice restores the favorites set.
    #[test]
    fn prop_favorite_double_toggle_is_identity(
        seed in prop::collection::vec(word_strategy(), 0..10),
        id in word_strategy(),
    ) {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        for s in &seed {
            favorites.add(&mut store, s);
        }
        let before = favorites.is_favorite(&id);

        favorites.toggle(&mut store, &id);
        favorites.toggle(&mut store, &id);

        prop_assert_eq!(favorites.is_favorite(&id), before);
    }
}
