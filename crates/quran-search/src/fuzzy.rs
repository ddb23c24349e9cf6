//! Typo-tolerant matching with normalized edit-distance scores.
//!
//! A record's score is `distance / query length` for the best-matching
//! substring of its best field: 0 is an exact occurrence, larger is worse.

use crate::distance::substring_distance;
use crate::index::RecordIndex;
use crate::rank::sort_by_score;
use crate::simple::{ExactPattern, resolve_fields};
use crate::types::SearchResult;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyOptions {
    /// Highest accepted score in [0, 1]; 0 accepts exact occurrences only
    pub threshold: f32,
    /// Shortest query (in normalized characters) that is matched approximately
    pub min_match_length: usize,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            min_match_length: 2,
        }
    }
}

impl FuzzyOptions {
    /// Threshold clamped to [0, 1], NaN as 0.
    pub fn effective_threshold(&self) -> f32 {
        if self.threshold.is_nan() {
            0.0
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }

    /// Edits allowed for a query of `query_len` characters.
    pub fn max_distance(&self, query_len: usize) -> usize {
        let threshold = self.effective_threshold();
        let len = query_len as f32;
        let mut distance = (threshold * len).floor() as usize;

        // the largest distance whose score `distance / len` stays within the
        // threshold, so f32 rounding cannot admit or drop a boundary match
        while distance < query_len && (distance + 1) as f32 / len <= threshold {
            distance += 1;
        }
        while distance > 0 && distance as f32 / len > threshold {
            distance -= 1;
        }
        distance
    }
}

/// Prepared approximate pattern over normalized text.
#[derive(Debug, Clone)]
pub(crate) struct FuzzyPattern {
    chars: SmallVec<[char; 32]>,
    exact: ExactPattern,
    max_distance: usize,
    min_kept: usize,
}

impl FuzzyPattern {
    /// `None` when the normalized query is shorter than `min_match_length`
    /// (or empty).
    pub(crate) fn new(normalized: &str, options: &FuzzyOptions) -> Option<Self> {
        let chars: SmallVec<[char; 32]> = normalized.chars().collect();
        if chars.is_empty() || chars.len() < options.min_match_length {
            return None;
        }

        // degenerate matches keep fewer than `min_match_length` query characters
        let max_distance = options
            .max_distance(chars.len())
            .min(chars.len() - options.min_match_length);

        Some(Self {
            exact: ExactPattern::new(normalized),
            max_distance,
            min_kept: options.min_match_length,
            chars,
        })
    }

    /// Score against one normalized haystack, `None` when out of threshold.
    pub(crate) fn score(&self, haystack: &str) -> Option<f32> {
        if self.exact.is_match(haystack) {
            return Some(0.0);
        }
        if self.max_distance == 0 {
            return None;
        }

        let distance = substring_distance(&self.chars, haystack, self.max_distance)?;
        debug_assert!(self.chars.len() - distance >= self.min_kept);
        Some(distance as f32 / self.chars.len() as f32)
    }
}

/// Fuzzy search with the given threshold and minimum query length.
pub fn search<'a>(
    index: &'a RecordIndex,
    query: &str,
    fields: &[&str],
    threshold: f32,
    min_match_length: usize,
) -> SearchResult<'a> {
    let options = FuzzyOptions {
        threshold,
        min_match_length,
    };
    search_with(index, query, fields, &options)
}

/// Records ordered by ascending score, ties in corpus order.
pub fn search_with<'a>(
    index: &'a RecordIndex,
    query: &str,
    fields: &[&str],
    options: &FuzzyOptions,
) -> SearchResult<'a> {
    let normalized = index.normalize_query(query);
    let Some(pattern) = FuzzyPattern::new(&normalized, options) else {
        tracing::debug!(
            query_len = normalized.chars().count(),
            min_match_length = options.min_match_length,
            "Fuzzy query below minimum length"
        );
        return SearchResult::default();
    };

    let slots = resolve_fields(index, fields);
    if slots.is_empty() {
        return SearchResult::default();
    }

    let mut scored = index.scan(|record_slot| {
        slots
            .iter()
            .filter_map(|&field_slot| pattern.score(index.normalized(field_slot, record_slot)))
            .min_by(f32::total_cmp)
            .map(|score| (record_slot, score))
    });
    sort_by_score(&mut scored);

    SearchResult::ranked(
        scored
            .into_iter()
            .map(|(slot, score)| (index.record(slot), score))
            .collect(),
    )
}
