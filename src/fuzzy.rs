// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate matching across weighted link fields.
//!
//! The core is a best-window edit distance: the minimal Levenshtein distance
//! between the query and *any* substring of the field text. The first DP row
//! is all zeros so a match may start anywhere, and the answer is the minimum
//! of the final row so it may end anywhere - match position inside the field
//! carries no penalty.
//!
//! Two early-exit paths keep the O(nm) DP cheap in the common case:
//! 1. If a row's minimum already exceeds the edit budget, no later row can
//!    recover - abandon the candidate.
//! 2. The budget itself is derived from the threshold, so hopeless fields
//!    are rejected mid-scan instead of being scored and discarded.
//!
//! Scores are normalized dissimilarity in `[0, 1]`: 0 is a perfect match,
//! anything above [`FUZZY_THRESHOLD`] per field is no match at all. Per-field
//! scores combine multiplicatively, weighted by [`SearchField::weight`], so a
//! link matching on several fields ranks ahead of one matching on a single
//! field at equal per-field quality.

use crate::scoring::{SearchField, FUZZY_THRESHOLD, MIN_FIELD_SCORE, MIN_MATCH_LEN};
use crate::types::{Link, ScoredCandidate};
use crate::utils::normalize;

/// Minimal edit distance between `query` and any substring of `text`,
/// bounded by `max`.
///
/// Returns `None` when no window of `text` is within `max` edits of the
/// query. Uses character counts, not byte lengths, for Unicode correctness.
fn best_window_distance(query: &[char], text: &str, max: usize) -> Option<usize> {
    let text: Vec<char> = text.chars().collect();

    // First row all zeros: the match window may open at any position.
    let mut dp: Vec<usize> = vec![0; text.len() + 1];

    for (i, qc) in query.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, tc) in text.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(qc != tc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        // Early-exit: if the minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    // Minimum of the final row: the window may close at any position.
    let best = dp.iter().copied().min().unwrap_or(query.len());
    (best <= max).then_some(best)
}

/// Dissimilarity of `query` against one field text, if within the threshold.
///
/// Returns the normalized distance in `[0, FUZZY_THRESHOLD]`, or `None` when
/// the field does not match.
fn field_dissimilarity(query: &[char], text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    let budget = (FUZZY_THRESHOLD * query.len() as f64).floor() as usize;
    let distance = best_window_distance(query, text, budget)?;
    Some(distance as f64 / query.len() as f64)
}

/// Approximate search over the catalogue.
///
/// For every link with at least one field within the edit threshold, emits a
/// [`ScoredCandidate`] whose score is the weighted multiplicative combination
/// of the matched fields' dissimilarities: 0 is a perfect match, larger is
/// weaker. Output order follows catalogue order; ranking happens at merge
/// time, not here.
pub fn fuzzy_match(links: &[Link], query: &str) -> Vec<ScoredCandidate> {
    let query: Vec<char> = normalize(query).chars().collect();
    if query.len() < MIN_MATCH_LEN {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for link in links {
        let fields = [
            (SearchField::Title, normalize(&link.title)),
            (SearchField::Description, normalize(&link.description)),
            (SearchField::Tags, normalize(&link.tags.join(" "))),
        ];

        let mut score = 1.0;
        let mut matched = false;
        for (field, text) in &fields {
            if let Some(dissimilarity) = field_dissimilarity(&query, text) {
                matched = true;
                score *= dissimilarity.max(MIN_FIELD_SCORE).powf(field.weight());
            }
        }

        if matched {
            candidates.push(ScoredCandidate {
                link: link.clone(),
                score,
            });
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_link;

    fn distance(query: &str, text: &str, max: usize) -> Option<usize> {
        let query: Vec<char> = query.chars().collect();
        best_window_distance(&query, text, max)
    }

    #[test]
    fn test_exact_substring_is_zero() {
        assert_eq!(distance("hub", "github", 2), Some(0));
        assert_eq!(distance("github", "github", 0), Some(0));
    }

    #[test]
    fn test_one_edit_window() {
        assert_eq!(distance("gthub", "github", 2), Some(1));
        assert_eq!(distance("gitlab", "github", 3), Some(2));
    }

    #[test]
    fn test_early_exit_over_budget() {
        assert_eq!(distance("zzzzzz", "github", 1), None);
    }

    #[test]
    fn test_empty_text_costs_full_query() {
        assert_eq!(distance("abc", "", 3), Some(3));
        assert_eq!(distance("abc", "", 2), None);
    }

    #[test]
    fn test_match_position_is_ignored() {
        // Same window distance whether the hit is at the start or the end
        let head = distance("code", "code hosting platform", 1);
        let tail = distance("code", "platform hosting code", 1);
        assert_eq!(head, tail);
    }

    #[test]
    fn test_fuzzy_match_scores_in_unit_interval() {
        let links = vec![
            make_link("1", "GitHub", "code hosting", &["dev"]),
            make_link("2", "Weather", "forecast", &["tools"]),
        ];
        for candidate in fuzzy_match(&links, "git") {
            assert!(candidate.score >= 0.0 && candidate.score <= 1.0);
        }
    }

    #[test]
    fn test_fuzzy_match_excludes_unrelated() {
        let links = vec![
            make_link("1", "GitHub", "code hosting", &["dev"]),
            make_link("2", "Weather", "forecast", &["tools"]),
        ];
        let results = fuzzy_match(&links, "git");
        assert!(results.iter().any(|c| c.link.id == "1"));
        assert!(!results.iter().any(|c| c.link.id == "2"));
    }

    #[test]
    fn test_multi_field_match_beats_single_field() {
        // "dev" appears in both description and tags of the first link but
        // only in the description of the second
        let links = vec![
            make_link("1", "Forum", "dev community", &["dev"]),
            make_link("2", "Plaza", "dev corner", &["browser"]),
        ];
        let results = fuzzy_match(&links, "dev");
        let both = results.iter().find(|c| c.link.id == "1").unwrap();
        let single = results.iter().find(|c| c.link.id == "2").unwrap();
        assert!(both.score < single.score);
    }

    #[test]
    fn test_diacritics_fold_together() {
        let links = vec![make_link("1", "Café Finder", "local espresso", &[])];
        assert_eq!(fuzzy_match(&links, "cafe").len(), 1);
    }

    #[test]
    fn test_empty_fields_never_match() {
        let links = vec![make_link("1", "", "", &[])];
        assert!(fuzzy_match(&links, "anything").is_empty());
    }
}
