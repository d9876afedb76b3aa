// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interactive search session.
//!
//! A session owns the query text, the open/closed visibility state, the
//! catalogue snapshot, and the persisted history. Every query or catalogue
//! change recomputes the visible result list synchronously - no debounce, no
//! background work, nothing in flight to cancel. A new keystroke simply
//! recomputes from scratch against the then-current snapshot, so results for
//! a given (catalogue, query) pair never depend on what was typed before.
//!
//! # State machine
//!
//! ```text
//!            toggle / open
//!    Closed ──────────────▶ Open ── set_query ──▶ Open (results recomputed)
//!       ▲                    │
//!       └── toggle / close ──┘
//!            Escape (only while Open)
//! ```
//!
//! The only externally observable control inputs are the modifier+K toggle
//! and Escape-while-open; everything else on the keyboard belongs to the
//! query text, which arrives via [`SearchSession::set_query`].
//!
//! Submitting is deliberately separate from typing: [`SearchSession::submit`]
//! is called when the user commits the query (picks a result, presses
//! enter), and only then does the query enter the history.

use crate::history::SearchHistory;
use crate::search::search;
use crate::store::KvStore;
use crate::types::Link;

/// A key the session controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
}

/// A keyboard event as delivered by the host surface.
///
/// `modifier` is the platform's primary command modifier (Ctrl or Cmd);
/// the session does not distinguish between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifier: bool,
}

impl KeyEvent {
    pub fn char(c: char) -> Self {
        KeyEvent {
            key: Key::Char(c),
            modifier: false,
        }
    }

    pub fn modified(c: char) -> Self {
        KeyEvent {
            key: Key::Char(c),
            modifier: true,
        }
    }

    pub fn escape() -> Self {
        KeyEvent {
            key: Key::Escape,
            modifier: false,
        }
    }
}

/// Interactive search session over a catalogue snapshot.
pub struct SearchSession<S: KvStore> {
    store: S,
    links: Vec<Link>,
    query: String,
    open: bool,
    results: Vec<Link>,
    history: SearchHistory,
}

impl<S: KvStore> SearchSession<S> {
    /// Create a session over a catalogue snapshot, loading the persisted
    /// history from `store`.
    pub fn new(store: S, links: Vec<Link>) -> Self {
        let history = SearchHistory::load(&store);
        let results = links.clone();
        SearchSession {
            store,
            links,
            query: String::new(),
            open: false,
            results,
            history,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open_search(&mut self) {
        self.open = true;
    }

    pub fn close_search(&mut self) {
        self.open = false;
    }

    pub fn toggle_search(&mut self) {
        self.open = !self.open;
    }

    /// Feed a keyboard event through the session's global shortcuts.
    ///
    /// Returns true when the event was consumed (so the host surface can
    /// suppress its default handling, mirroring `preventDefault`).
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        match event {
            KeyEvent {
                key: Key::Char(c),
                modifier: true,
            } if c.eq_ignore_ascii_case(&'k') => {
                self.toggle_search();
                true
            }
            KeyEvent {
                key: Key::Escape, ..
            } if self.open => {
                self.close_search();
                true
            }
            _ => false,
        }
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text and synchronously recompute results.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.recompute();
    }

    /// Reset the query to empty (results become the full snapshot).
    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// Replace the catalogue snapshot and recompute against it.
    pub fn set_catalogue(&mut self, links: Vec<Link>) {
        self.links = links;
        self.recompute();
    }

    /// The visible result list for the current (catalogue, query) pair.
    pub fn results(&self) -> &[Link] {
        &self.results
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Commit the current query to history. Caller-initiated only; typing
    /// never submits.
    pub fn submit(&mut self) {
        if !self.query.trim().is_empty() {
            let query = self.query.clone();
            self.history.add(&mut self.store, &query);
        }
    }

    /// The persisted history, most recent first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn remove_from_history(&mut self, term: &str) {
        self.history.remove(&mut self.store, term);
    }

    pub fn clear_history(&mut self) {
        self.history.clear(&mut self.store);
    }

    fn recompute(&mut self) {
        self.results = search(&self.links, &self.query);
    }
}
