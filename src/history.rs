// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded, deduplicated search history.
//!
//! The history is a most-recent-first list of previously submitted query
//! strings, persisted independently of session state.
//!
//! **Invariant**: at most [`MAX_HISTORY`] entries, no duplicates, no
//! empty/whitespace entries, most recent first. The invariant is re-imposed
//! on load, so a damaged persisted payload is clamped back into shape rather
//! than rejected.

use crate::store::{read_string_list, write_string_list, KvStore};

/// Maximum number of retained history entries.
pub const MAX_HISTORY: usize = 10;

/// Store key for the persisted history payload (a JSON string list).
pub const HISTORY_KEY: &str = "waymark.search_history";

/// Most-recent-first list of submitted queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        SearchHistory::default()
    }

    /// Load the persisted history, clamping it back to the invariant.
    pub fn load(store: &dyn KvStore) -> Self {
        let mut history = SearchHistory::new();
        for raw in read_string_list(store, HISTORY_KEY) {
            let term = raw.trim();
            if term.is_empty() || history.entries.len() >= MAX_HISTORY {
                continue;
            }
            if !history.entries.iter().any(|e| e == term) {
                history.entries.push(term.to_string());
            }
        }
        history
    }

    /// Record a submitted query: remove any existing occurrence, prepend,
    /// truncate to [`MAX_HISTORY`], persist. Empty/whitespace terms are a
    /// no-op.
    pub fn add(&mut self, store: &mut dyn KvStore, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        self.entries.retain(|e| e != term);
        self.entries.insert(0, term.to_string());
        self.entries.truncate(MAX_HISTORY);
        self.persist(store);
    }

    /// Remove all occurrences of an exact term. Silent if absent.
    pub fn remove(&mut self, store: &mut dyn KvStore, term: &str) {
        let before = self.entries.len();
        self.entries.retain(|e| e != term);
        if self.entries.len() != before {
            self.persist(store);
        }
    }

    /// Empty the history unconditionally.
    pub fn clear(&mut self, store: &mut dyn KvStore) {
        self.entries.clear();
        self.persist(store);
    }

    /// Current entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self, store: &mut dyn KvStore) {
        write_string_list(store, HISTORY_KEY, &self.entries);
    }
}
