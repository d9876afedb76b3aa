// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Searchable bookmark directory engine.
//!
//! A catalogue of links grouped into categories, searchable through two
//! independent strategies - approximate (edit-distance) matching and
//! phonetic pinyin matching for Han-script content - merged into one ranked
//! list, with a bounded persisted query history driving the interactive
//! session.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  fuzzy.rs   │────▶│              │     │  session.rs  │
//! │ (dissimilar-│     │   merge.rs   │────▶│ (open/closed,│
//! │  ity, 0=best)     │ (dedup by id,│     │  recompute,  │
//! ├─────────────┤     │  asc. sort)  │     │  submit)     │
//! │ phonetic.rs │────▶│              │     └──────┬───────┘
//! │ (coverage,  │     └──────────────┘            │
//! │  1.0=best)  │            ▲                    ▼
//! └─────────────┘            │             ┌──────────────┐
//!        weights from scoring.rs           │  history.rs  │
//!                                          │ favorites.rs │
//!                                          │   theme.rs   │
//!                                          └──────┬───────┘
//!                                                 ▼
//!                                          store.rs (KvStore)
//! ```
//!
//! The two matchers score with opposite polarities; `merge` reconciles them
//! (see that module for why the rule looks the way it does). `search` is the
//! composed pure function; `session` owns the interactive state around it.
//! Catalogue persistence and CRUD live in `catalogue`, gated by the
//! `auth` capability.
//!
//! # Usage
//!
//! ```
//! use waymark::{search, testing::make_link};
//!
//! let catalogue = vec![
//!     make_link("1", "GitHub", "code hosting", &["dev"]),
//!     make_link("2", "知乎", "问答社区", &["社区"]),
//! ];
//!
//! let hits = search(&catalogue, "git");
//! assert_eq!(hits[0].id, "1");
//!
//! // Phonetic: typed pinyin finds the Han-script title.
//! let hits = search(&catalogue, "zhihu");
//! assert_eq!(hits[0].id, "2");
//! ```

// Module declarations
pub mod auth;
pub mod catalogue;
pub mod favorites;
pub mod fuzzy;
pub mod history;
pub mod icons;
pub mod merge;
pub mod phonetic;
pub mod scoring;
pub mod search;
pub mod session;
pub mod store;
pub mod testing;
pub mod theme;
pub mod types;
mod utils;

// Re-exports for public API
pub use auth::{AdminSession, Authorizer, PasswordAuthorizer};
pub use catalogue::{
    CatalogueError, CatalogueStore, CategoryDraft, JsonCatalogueStore, LinkDraft,
};
pub use favorites::{Favorites, FAVORITES_KEY};
pub use fuzzy::fuzzy_match;
pub use history::{SearchHistory, HISTORY_KEY, MAX_HISTORY};
pub use icons::CategoryIcon;
pub use merge::{merge, ResultMerger};
pub use phonetic::{phonetic_match, reading};
pub use scoring::{SearchField, FUZZY_THRESHOLD};
pub use search::search;
pub use session::{Key, KeyEvent, SearchSession};
pub use store::{FileStore, KvStore, MemoryStore, StoreError};
pub use theme::{ResolvedTheme, ThemePreference};
pub use types::{Catalogue, Category, Link, ScoredCandidate, Settings, SiteMeta};
pub use utils::normalize;

#[cfg(test)]
mod tests {
    //! Cross-module smoke tests; the behavioral suites live in `tests/`.

    use super::*;
    use crate::testing::make_link;

    #[test]
    fn test_search_session_end_to_end() {
        let catalogue = vec![
            make_link("1", "GitHub", "code hosting", &["dev"]),
            make_link("2", "Weather", "forecast", &["tools"]),
            make_link("3", "知乎", "问答社区", &["社区"]),
        ];
        let mut session = SearchSession::new(MemoryStore::new(), catalogue);

        session.handle_key(KeyEvent::modified('k'));
        assert!(session.is_open());

        session.set_query("zhihu");
        assert_eq!(session.results().len(), 1);
        assert_eq!(session.results()[0].id, "3");

        session.submit();
        assert_eq!(session.history(), ["zhihu"]);

        session.handle_key(KeyEvent::escape());
        assert!(!session.is_open());
    }

    #[test]
    fn test_matcher_outputs_compose() {
        let catalogue = vec![make_link("1", "GitHub", "code hosting", &["dev"])];
        let fuzzy = fuzzy_match(&catalogue, "git");
        let phonetic = phonetic_match(&catalogue, "git");
        let merged = merge(fuzzy, phonetic);
        assert_eq!(merged.len(), 1, "one slot despite two matcher hits");
    }
}
