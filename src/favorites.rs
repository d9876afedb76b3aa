// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The user's favorite links, persisted as a set of link ids.
//!
//! Membership is what matters; the list is kept in insertion order only so
//! the persisted payload is stable across sessions. Favorites never
//! participate in search scoring.

use crate::store::{read_string_list, write_string_list, KvStore};
use crate::types::Link;

/// Store key for the persisted favorites payload (a JSON string list).
pub const FAVORITES_KEY: &str = "waymark.favorites";

/// Persisted set of favorited link ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Favorites::default()
    }

    /// Load the persisted set; malformed payloads degrade to empty, and
    /// duplicate ids collapse.
    pub fn load(store: &dyn KvStore) -> Self {
        let mut favorites = Favorites::new();
        for id in read_string_list(store, FAVORITES_KEY) {
            if !favorites.ids.contains(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    /// Is this link id favorited?
    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Flip membership for `id`. Toggling twice restores the prior state.
    pub fn toggle(&mut self, store: &mut dyn KvStore, id: &str) {
        if self.is_favorite(id) {
            self.ids.retain(|f| f != id);
        } else {
            self.ids.push(id.to_string());
        }
        self.persist(store);
    }

    /// Add `id` if not already present.
    pub fn add(&mut self, store: &mut dyn KvStore, id: &str) {
        if !self.is_favorite(id) {
            self.ids.push(id.to_string());
            self.persist(store);
        }
    }

    /// Remove `id` if present.
    pub fn remove(&mut self, store: &mut dyn KvStore, id: &str) {
        let before = self.ids.len();
        self.ids.retain(|f| f != id);
        if self.ids.len() != before {
            self.persist(store);
        }
    }

    /// Drop every favorite.
    pub fn clear(&mut self, store: &mut dyn KvStore) {
        self.ids.clear();
        self.persist(store);
    }

    /// The favorited links from a catalogue snapshot, in catalogue order.
    pub fn favorite_links(&self, links: &[Link]) -> Vec<Link> {
        links
            .iter()
            .filter(|link| self.is_favorite(&link.id))
            .cloned()
            .collect()
    }

    /// Favorited ids, in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self, store: &mut dyn KvStore) {
        write_string_list(store, FAVORITES_KEY, &self.ids);
    }
}
