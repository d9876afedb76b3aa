// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phonetic matching for logographic-script content.
//!
//! Users type a transliterated reading ("zhihu") to find links whose fields
//! are written in Han script ("知乎"). Each field is converted to its pinyin
//! reading - every Han character contributes its full toneless syllable,
//! every other character passes through lowercased - and the query is tested
//! for *continuous* containment within that reading.
//!
//! No separators are inserted between syllables, so the query does not have
//! to align with a syllable or word boundary: "hihu" finds "知乎" just as
//! "zhihu" does. This is the permissive any-position mode.
//!
//! Field matches are boolean; a candidate's score is the sum of the matched
//! fields' weights. The range is `[0.2, 1.0]` and - unlike the fuzzy
//! matcher - **higher is better**. The merger is the only place that has to
//! care about the opposing polarities.

use pinyin::ToPinyin;

use crate::scoring::{SearchField, MIN_MATCH_LEN};
use crate::types::{Link, ScoredCandidate};
use crate::utils::normalize;

/// Phonetic reading of a text: Han characters become toneless pinyin
/// syllables, everything else is normalized and kept as-is.
pub fn reading(text: &str) -> String {
    let mut out = String::new();
    for ch in normalize(text).chars() {
        match ch.to_pinyin() {
            Some(syllable) => out.push_str(syllable.plain()),
            None => out.push(ch),
        }
    }
    out
}

/// Does the query occur as a continuous substring of the text's reading?
fn reading_contains(text: &str, query: &str) -> bool {
    !text.is_empty() && reading(text).contains(query)
}

/// Phonetic search over the catalogue.
///
/// Tests the query against the reading of each link's title, description,
/// and every tag independently; a link with no matching field is excluded.
/// Score = sum of matched field weights, higher is better. Output order
/// follows catalogue order; ranking happens at merge time.
pub fn phonetic_match(links: &[Link], query: &str) -> Vec<ScoredCandidate> {
    let query = normalize(query);
    if query.chars().count() < MIN_MATCH_LEN {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for link in links {
        let title_match = reading_contains(&link.title, &query);
        let description_match = reading_contains(&link.description, &query);
        let tags_match = link.tags.iter().any(|tag| reading_contains(tag, &query));

        if title_match || description_match || tags_match {
            let mut score = 0.0;
            if title_match {
                score += SearchField::Title.weight();
            }
            if description_match {
                score += SearchField::Description.weight();
            }
            if tags_match {
                score += SearchField::Tags.weight();
            }
            candidates.push(ScoredCandidate {
                link: link.clone(),
                score,
            });
        }
    }
    candidates
}
