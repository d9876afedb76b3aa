// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result merging and deduplication.
//!
//! A link should appear at most once in search results. Sounds obvious, but
//! it's easy to mess up when two independent matchers can each emit the same
//! link. `ResultMerger` enforces id-only deduplication at the type level:
//! candidates go in one by one, each id claims exactly one slot, and the
//! ranked list comes out of `into_ranked`.
//!
//! **Invariant**: each link id appears at most once in the output, and output
//! scores are ascending.
//!
//! # Score reconciliation
//!
//! When a link is present in both matchers' output, the numerically smaller
//! score wins, regardless of which matcher produced it. The two scales have
//! opposite polarities (fuzzy: lower is better; phonetic coverage: higher is
//! better), so the comparison is only well-founded for links in a single set.
//! This is the directory's historical ranking behavior and callers depend on
//! it: in practice fuzzy scores cluster near 0 and coverage scores start at
//! 0.2, so bilingual matches keep their fuzzy score. Do not "fix" the
//! polarity here without renormalizing both matchers onto one scale.
//!
//! Determinism: slots are kept in insertion order and the final sort is
//! stable, so a given (catalogue, query) pair always produces the same list.

use std::collections::HashMap;

use crate::types::{Link, ScoredCandidate};

/// Id-keyed, insertion-ordered merger for scored candidates.
pub struct ResultMerger {
    slots: Vec<ScoredCandidate>,
    index: HashMap<String, usize>,
}

impl ResultMerger {
    pub fn new() -> Self {
        ResultMerger {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Merge a single candidate, keeping the numerically smaller score for
    /// an id that already has a slot.
    pub fn merge(&mut self, candidate: ScoredCandidate) {
        match self.index.get(&candidate.link.id) {
            Some(&slot) => {
                if candidate.score < self.slots[slot].score {
                    self.slots[slot] = candidate;
                }
            }
            None => {
                self.index
                    .insert(candidate.link.id.clone(), self.slots.len());
                self.slots.push(candidate);
            }
        }
    }

    /// Merge multiple candidates at once, in order.
    pub fn merge_all(&mut self, candidates: impl IntoIterator<Item = ScoredCandidate>) {
        for candidate in candidates {
            self.merge(candidate);
        }
    }

    /// Number of unique links currently held.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Consume the merger, returning links sorted ascending by reconciled
    /// score. The sort is stable: equal scores keep insertion order.
    pub fn into_ranked(mut self) -> Vec<Link> {
        self.slots
            .sort_by(|a, b| a.score.total_cmp(&b.score));
        self.slots.into_iter().map(|c| c.link).collect()
    }
}

impl Default for ResultMerger {
    fn default() -> Self {
        Self::new()
    }
}

/// Union the two matchers' outputs into one deduplicated, ascending-by-score
/// list of links. Fuzzy candidates claim their slots first; phonetic
/// candidates then fill gaps or override on a smaller score.
pub fn merge(
    fuzzy: Vec<ScoredCandidate>,
    phonetic: Vec<ScoredCandidate>,
) -> Vec<Link> {
    let mut merger = ResultMerger::new();
    merger.merge_all(fuzzy);
    merger.merge_all(phonetic);
    merger.into_ranked()
}
