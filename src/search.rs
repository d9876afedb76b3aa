// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The composed search entry point.
//!
//! `search` is a pure function over a catalogue snapshot: run both matchers,
//! merge, done. It never panics and always returns a list. The one special
//! case is the empty (or whitespace-only) query, which is identity - the
//! caller gets the catalogue back in its original order, without the
//! matchers ever running. That property is what lets the session controller
//! show the full directory in an empty search box.

use crate::fuzzy::fuzzy_match;
use crate::merge::merge;
use crate::phonetic::phonetic_match;
use crate::types::Link;

/// Search the catalogue with a free-text query.
///
/// Empty/whitespace query returns the catalogue unchanged in content and
/// order. Otherwise the result is the deduplicated union of the fuzzy and
/// phonetic matchers, ascending by reconciled score.
pub fn search(links: &[Link], query: &str) -> Vec<Link> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return links.to_vec();
    }

    let query = trimmed.to_lowercase();
    merge(
        fuzzy_match(links, &query),
        phonetic_match(links, &query),
    )
}
