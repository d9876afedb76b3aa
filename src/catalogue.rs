// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalogue persistence and the administrative CRUD surface.
//!
//! The search core treats the catalogue as a read-only snapshot; everything
//! that mutates it lives here. Mutations are full-replace field updates:
//! drafts carry every editable field, ids and creation timestamps survive
//! the update, and `updated_at` is refreshed on every write.
//!
//! **Invariant**: referential integrity. Every `Link.category_id` references
//! an existing category, and a category cannot be deleted while any link
//! still points at it. `add_link`/`update_link` check the reference on the
//! way in; `delete_category` refuses with [`CatalogueError::CategoryInUse`].

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Catalogue, Category, Link};

/// Durable storage collaborator for the catalogue document.
pub trait CatalogueStore {
    fn load(&self) -> Result<Catalogue, CatalogueError>;
    fn save(&self, catalogue: &Catalogue) -> Result<(), CatalogueError>;
}

/// Catalogue document persisted as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonCatalogueStore {
    path: PathBuf,
}

impl JsonCatalogueStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonCatalogueStore {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogueStore for JsonCatalogueStore {
    fn load(&self) -> Result<Catalogue, CatalogueError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| CatalogueError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CatalogueError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, catalogue: &Catalogue) -> Result<(), CatalogueError> {
        let payload = serde_json::to_string_pretty(catalogue)
            .map_err(|source| CatalogueError::Serialize { source })?;
        fs::write(&self.path, payload).map_err(|source| CatalogueError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Failures from catalogue persistence and CRUD operations.
#[derive(Debug)]
pub enum CatalogueError {
    /// Catalogue file could not be read or written.
    Io { path: PathBuf, source: io::Error },
    /// Catalogue file is not a valid catalogue document.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Catalogue could not be serialized.
    Serialize { source: serde_json::Error },
    /// A required draft field was empty.
    MissingField { field: &'static str },
    /// A link referenced a category id that does not exist.
    CategoryNotFound { id: String },
    /// No link with this id.
    LinkNotFound { id: String },
    /// No category with this id.
    CategoryMissing { id: String },
    /// Category still referenced by links; refuse deletion.
    CategoryInUse { id: String, link_count: usize },
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::Io { path, source } => {
                write!(f, "catalogue file {}: {}", path.display(), source)
            }
            CatalogueError::Parse { path, source } => {
                write!(f, "invalid catalogue document {}: {}", path.display(), source)
            }
            CatalogueError::Serialize { source } => {
                write!(f, "failed to serialize catalogue: {}", source)
            }
            CatalogueError::MissingField { field } => {
                write!(f, "missing required field: {}", field)
            }
            CatalogueError::CategoryNotFound { id } => {
                write!(f, "category {} does not exist", id)
            }
            CatalogueError::LinkNotFound { id } => write!(f, "link {} does not exist", id),
            CatalogueError::CategoryMissing { id } => {
                write!(f, "category {} does not exist", id)
            }
            CatalogueError::CategoryInUse { id, link_count } => write!(
                f,
                "category {} still has {} link(s); move or delete them first",
                id, link_count
            ),
        }
    }
}

impl std::error::Error for CatalogueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogueError::Io { source, .. } => Some(source),
            CatalogueError::Parse { source, .. } => Some(source),
            CatalogueError::Serialize { source } => Some(source),
            _ => None,
        }
    }
}

/// Editable fields of a link, as submitted by the admin surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub description: String,
    pub logo: Option<String>,
    pub category_id: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub order: i64,
    pub visible: bool,
}

/// Editable fields of a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryDraft {
    pub name: String,
    pub icon: String,
    pub description: Option<String>,
    pub order: i64,
    pub visible: bool,
}

impl Catalogue {
    pub fn link(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Create a link from a draft: validates required fields and the
    /// category reference, assigns a fresh id and timestamps.
    pub fn add_link(&mut self, draft: LinkDraft) -> Result<&Link, CatalogueError> {
        require(&draft.title, "title")?;
        require(&draft.url, "url")?;
        require(&draft.category_id, "categoryId")?;
        if self.category(&draft.category_id).is_none() {
            return Err(CatalogueError::CategoryNotFound {
                id: draft.category_id,
            });
        }

        let id = fresh_id("link", |candidate| self.link(candidate).is_some());
        let now = now_rfc3339();
        self.links.push(Link {
            id,
            title: draft.title,
            url: draft.url,
            description: draft.description,
            logo: draft.logo,
            category_id: draft.category_id,
            tags: draft.tags,
            featured: draft.featured,
            order: draft.order,
            visible: draft.visible,
            created_at: now.clone(),
            updated_at: now,
        });
        let slot = self.links.len() - 1;
        Ok(&self.links[slot])
    }

    /// Full-replace update. Preserves `id` and `created_at`, refreshes
    /// `updated_at`.
    pub fn update_link(&mut self, id: &str, draft: LinkDraft) -> Result<&Link, CatalogueError> {
        require(&draft.title, "title")?;
        require(&draft.url, "url")?;
        require(&draft.category_id, "categoryId")?;
        if self.category(&draft.category_id).is_none() {
            return Err(CatalogueError::CategoryNotFound {
                id: draft.category_id,
            });
        }

        let slot = self
            .links
            .iter()
            .position(|link| link.id == id)
            .ok_or_else(|| CatalogueError::LinkNotFound { id: id.to_string() })?;

        let existing = &self.links[slot];
        self.links[slot] = Link {
            id: existing.id.clone(),
            created_at: existing.created_at.clone(),
            updated_at: now_rfc3339(),
            title: draft.title,
            url: draft.url,
            description: draft.description,
            logo: draft.logo,
            category_id: draft.category_id,
            tags: draft.tags,
            featured: draft.featured,
            order: draft.order,
            visible: draft.visible,
        };
        Ok(&self.links[slot])
    }

    pub fn delete_link(&mut self, id: &str) -> Result<(), CatalogueError> {
        let before = self.links.len();
        self.links.retain(|link| link.id != id);
        if self.links.len() == before {
            return Err(CatalogueError::LinkNotFound { id: id.to_string() });
        }
        Ok(())
    }

    pub fn add_category(&mut self, draft: CategoryDraft) -> Result<&Category, CatalogueError> {
        require(&draft.name, "name")?;
        require(&draft.icon, "icon")?;

        let id = fresh_id("cat", |candidate| self.category(candidate).is_some());
        self.categories.push(Category {
            id,
            name: draft.name,
            icon: draft.icon,
            description: draft.description,
            order: draft.order,
            visible: draft.visible,
        });
        let slot = self.categories.len() - 1;
        Ok(&self.categories[slot])
    }

    pub fn update_category(
        &mut self,
        id: &str,
        draft: CategoryDraft,
    ) -> Result<&Category, CatalogueError> {
        require(&draft.name, "name")?;
        require(&draft.icon, "icon")?;

        let slot = self
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| CatalogueError::CategoryMissing { id: id.to_string() })?;

        self.categories[slot] = Category {
            id: self.categories[slot].id.clone(),
            name: draft.name,
            icon: draft.icon,
            description: draft.description,
            order: draft.order,
            visible: draft.visible,
        };
        Ok(&self.categories[slot])
    }

    /// Delete a category. Refuses while any link references it.
    pub fn delete_category(&mut self, id: &str) -> Result<(), CatalogueError> {
        if self.category(id).is_none() {
            return Err(CatalogueError::CategoryMissing { id: id.to_string() });
        }
        let link_count = self
            .links
            .iter()
            .filter(|link| link.category_id == id)
            .count();
        if link_count > 0 {
            return Err(CatalogueError::CategoryInUse {
                id: id.to_string(),
                link_count,
            });
        }
        self.categories.retain(|category| category.id != id);
        Ok(())
    }

    /// Visible links, sorted by their order key.
    pub fn visible_links(&self) -> Vec<Link> {
        let mut links: Vec<Link> = self.links.iter().filter(|l| l.visible).cloned().collect();
        links.sort_by_key(|l| l.order);
        links
    }

    /// Visible categories, sorted by their order key.
    pub fn visible_categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .filter(|c| c.visible)
            .cloned()
            .collect();
        categories.sort_by_key(|c| c.order);
        categories
    }

    /// Visible links in one category, sorted by order.
    pub fn links_by_category(&self, category_id: &str) -> Vec<Link> {
        let mut links: Vec<Link> = self
            .links
            .iter()
            .filter(|l| l.category_id == category_id && l.visible)
            .cloned()
            .collect();
        links.sort_by_key(|l| l.order);
        links
    }
}

// ---------------------------------------------------------------------------
// Catalogue-wide query helpers over link slices
// ---------------------------------------------------------------------------

/// Links belonging to a category; empty id is identity.
pub fn filter_by_category(links: &[Link], category_id: &str) -> Vec<Link> {
    if category_id.is_empty() {
        return links.to_vec();
    }
    links
        .iter()
        .filter(|link| link.category_id == category_id)
        .cloned()
        .collect()
}

/// Links carrying at least one of the given tags; empty list is identity.
pub fn filter_by_tags(links: &[Link], tags: &[String]) -> Vec<Link> {
    if tags.is_empty() {
        return links.to_vec();
    }
    links
        .iter()
        .filter(|link| tags.iter().any(|tag| link.tags.contains(tag)))
        .cloned()
        .collect()
}

/// The featured subset, in input order.
pub fn featured_links(links: &[Link]) -> Vec<Link> {
    links.iter().filter(|link| link.featured).cloned().collect()
}

/// Links sorted by their order key.
pub fn sort_by_order(links: &[Link]) -> Vec<Link> {
    let mut sorted = links.to_vec();
    sorted.sort_by_key(|link| link.order);
    sorted
}

/// Links sorted by creation timestamp. RFC 3339 strings sort correctly as
/// plain strings for a fixed UTC offset, which is what the CRUD surface
/// writes.
pub fn sort_by_created(links: &[Link], ascending: bool) -> Vec<Link> {
    let mut sorted = links.to_vec();
    sorted.sort_by(|a, b| {
        if ascending {
            a.created_at.cmp(&b.created_at)
        } else {
            b.created_at.cmp(&a.created_at)
        }
    });
    sorted
}

/// Every distinct tag across the catalogue, sorted.
pub fn all_tags(links: &[Link]) -> Vec<String> {
    let mut tags: Vec<String> = links
        .iter()
        .flat_map(|link| link.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

fn require(value: &str, field: &'static str) -> Result<(), CatalogueError> {
    if value.trim().is_empty() {
        return Err(CatalogueError::MissingField { field });
    }
    Ok(())
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Millisecond-timestamp id with a collision suffix for same-instant
/// creations.
fn fresh_id(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{}-{}", prefix, Utc::now().timestamp_millis());
    if !taken(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
