//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Catalogue, Category, Link};

/// Create a test link with the fields the matchers care about.
///
/// This is the canonical implementation used across all tests.
pub fn make_link(id: &str, title: &str, description: &str, tags: &[&str]) -> Link {
    Link {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://example.com/{}", id),
        description: description.to_string(),
        logo: None,
        category_id: "cat-dev".to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        featured: false,
        order: 0,
        visible: true,
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}

/// Create a test category.
pub fn make_category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: "folder".to_string(),
        description: None,
        order: 0,
        visible: true,
    }
}

/// A minimal catalogue: one category (`cat-dev`) holding one link (`1`).
pub fn make_catalogue() -> Catalogue {
    Catalogue {
        version: "1.0".to_string(),
        categories: vec![make_category("cat-dev", "Development")],
        links: vec![make_link("1", "GitHub", "code hosting", &["dev"])],
        ..Catalogue::default()
    }
}
