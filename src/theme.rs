// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Persisted theme preference.
//!
//! Three-valued preference (light, dark, follow-the-system) that resolves to
//! a concrete theme given the system's current appearance. Unknown persisted
//! values fall back to `System` rather than erroring - same degradation rule
//! as every other preference in the store.

use crate::store::KvStore;

/// Store key for the persisted theme preference.
pub const THEME_KEY: &str = "waymark.theme";

/// What the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// What actually gets rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Parse a persisted value; anything unrecognized is `System`.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "light" => ThemePreference::Light,
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    /// Load the persisted preference, defaulting to `System`.
    pub fn load(store: &dyn KvStore) -> Self {
        store
            .get(THEME_KEY)
            .map(|raw| ThemePreference::from_str_lossy(&raw))
            .unwrap_or_default()
    }

    /// Persist this preference. Write failures stay with the store.
    pub fn save(self, store: &mut dyn KvStore) {
        let _ = store.set(THEME_KEY, self.as_str());
    }

    /// Resolve against the system's current appearance.
    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System => {
                if system_prefers_dark {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }
}
