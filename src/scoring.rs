// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The field weight model shared by both matchers.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## WEIGHT_HIERARCHY
//! The weights MUST satisfy:
//!
//! ```text
//! Title > Description > Tags    and    Title + Description + Tags = 1.0
//! ```
//!
//! With current values: `0.5 > 0.3 > 0.2` ✓ and `0.5 + 0.3 + 0.2 = 1.0` ✓
//!
//! The hierarchy is what makes a title hit rank above a tag hit in both
//! matchers; the unit sum is what keeps the phonetic coverage score inside
//! `[0.2, 1.0]` and the fuzzy combination inside `[0, 1]`. Changing a weight
//! changes every persisted ranking expectation in the test suite.

/// A searchable field of a [`crate::types::Link`].
///
/// Tags count as one field: the fuzzy matcher compares them as a single
/// joined string, the phonetic matcher tests each tag and treats any hit as
/// a hit on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Description,
    Tags,
}

impl SearchField {
    /// All searchable fields, in weight order.
    pub const ALL: [SearchField; 3] = [
        SearchField::Title,
        SearchField::Description,
        SearchField::Tags,
    ];

    /// Relative importance of this field in candidate scoring.
    pub fn weight(self) -> f64 {
        // INVARIANT: WEIGHT_HIERARCHY (see module docs)
        match self {
            SearchField::Title => 0.5,
            SearchField::Description => 0.3,
            SearchField::Tags => 0.2,
        }
    }
}

/// Maximum acceptable normalized dissimilarity for a fuzzy field match.
/// Fields scoring above this are not matches at all.
pub const FUZZY_THRESHOLD: f64 = 0.4;

/// Minimum query length (in characters) for the matchers to engage.
pub const MIN_MATCH_LEN: usize = 1;

/// Floor applied to a perfect per-field fuzzy score before the weighted
/// combination, so that a multi-field perfect match still ranks ahead of a
/// single-field perfect match instead of collapsing to exactly zero.
pub const MIN_FIELD_SCORE: f64 = 0.001;
