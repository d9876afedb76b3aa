// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a navigation catalogue.
//!
//! These types define how links, categories, and the surrounding site
//! document fit together. The wire format is the camelCase JSON document the
//! directory has always persisted, so every struct here carries
//! `rename_all = "camelCase"` - renaming a field is a data migration, not a
//! refactor.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Link.id**: unique within the catalogue, stable and immutable after
//!   creation. The merger and the favorites set both key on it.
//! - **Link.category_id**: must reference an existing `Category.id`. Enforced
//!   by the CRUD surface in `catalogue`, assumed everywhere else.
//! - **Optional fields**: a missing `description` deserializes as an empty
//!   string and missing `tags` as an empty list, so the matchers never have
//!   to treat absence as an error.

use serde::{Deserialize, Serialize};

/// A single bookmarked destination in the directory.
///
/// The search core treats links as read-only input; all mutation goes through
/// the CRUD surface in [`crate::catalogue`], which preserves `id` and
/// `created_at` across updates and refreshes `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub category_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A group of links. May not be deleted while any link references its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// Site identity block of the catalogue document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub logo: String,
    pub favicon: String,
    pub author: String,
    pub url: String,
}

/// Theme block of the settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeSettings {
    pub default: String,
    pub enable_toggle: bool,
    pub primary_color: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        ThemeSettings {
            default: "system".to_string(),
            enable_toggle: true,
            primary_color: String::new(),
        }
    }
}

/// Search block of the settings document.
///
/// `pinyin` and `fuzzy` are presentation-level switches: the engine always
/// computes both strategies, the front end decides what to expose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchSettings {
    pub enabled: bool,
    pub pinyin: bool,
    pub fuzzy: bool,
    pub placeholder: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            enabled: true,
            pinyin: true,
            fuzzy: true,
            placeholder: String::new(),
        }
    }
}

/// Redirect-page block of the settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GotoSettings {
    pub enabled: bool,
    pub countdown: u32,
    pub show_warning: bool,
}

impl Default for GotoSettings {
    fn default() -> Self {
        GotoSettings {
            enabled: true,
            countdown: 3,
            show_warning: true,
        }
    }
}

/// Grid layout block of the settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutColumns {
    pub mobile: u8,
    pub tablet: u8,
    pub desktop: u8,
}

impl Default for LayoutColumns {
    fn default() -> Self {
        LayoutColumns {
            mobile: 1,
            tablet: 2,
            desktop: 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutSettings {
    pub columns: LayoutColumns,
}

/// Behavioral settings of the directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: ThemeSettings,
    pub search: SearchSettings,
    pub goto: GotoSettings,
    pub layout: LayoutSettings,
}

/// The complete catalogue document: site identity, settings, categories, and
/// links. This is what the durable store loads and saves as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalogue {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub site: SiteMeta,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A link paired with a matcher score. Ephemeral: produced by the matchers,
/// consumed by the merger, never persisted.
///
/// The score's meaning depends on the producer - the fuzzy matcher emits
/// dissimilarity (0 = perfect), the phonetic matcher emits weighted coverage
/// (1.0 = every field matched). See `merge` for how the two are reconciled.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub link: Link,
    pub score: f64,
}
