//! Advanced query evaluation.
//!
//! Every required term narrows the candidate set, every excluded term
//! removes its matches from it. Survivors are ranked by the sum of their
//! per-term scores (exact phrase hits score 0), corpus order on ties.

use crate::fuzzy::{FuzzyOptions, FuzzyPattern};
use crate::index::RecordIndex;
use crate::rank::sort_by_score;
use crate::simple::{ExactPattern, resolve_fields};
use crate::types::SearchResult;
use quran_query_parser::{QueryParser, Term};
use smallvec::{SmallVec, smallvec};

#[derive(Debug)]
enum Leaf {
    Exact(ExactPattern),
    Fuzzy(FuzzyPattern),
}

impl Leaf {
    #[inline]
    fn score(&self, haystack: &str) -> Option<f32> {
        match self {
            Leaf::Exact(pattern) => pattern.is_match(haystack).then_some(0.0),
            Leaf::Fuzzy(pattern) => pattern.score(haystack),
        }
    }
}

/// A term ready to be checked against records.
#[derive(Debug)]
struct TermMatcher {
    leaf: Leaf,
    field_slots: SmallVec<[usize; 4]>,
}

impl TermMatcher {
    /// Best score of this term over its fields for one record.
    fn score(&self, index: &RecordIndex, record_slot: usize) -> Option<f32> {
        self.field_slots
            .iter()
            .filter_map(|&field_slot| self.leaf.score(index.normalized(field_slot, record_slot)))
            .min_by(f32::total_cmp)
    }
}

#[derive(Debug)]
enum Compiled {
    Matcher(TermMatcher),
    /// Normalizes to nothing, contributes nothing
    Ignored,
    /// Can never match, e.g. scoped to a field that is not indexed
    Unsatisfiable,
}

fn compile(
    index: &RecordIndex,
    term: &Term<'_>,
    default_slots: &[usize],
    options: &FuzzyOptions,
) -> Compiled {
    let normalized = index.normalize_query(term.text());
    if normalized.is_empty() {
        return Compiled::Ignored;
    }

    let field_slots: SmallVec<[usize; 4]> = match term.field() {
        Some(field) => match index.field_slot(field) {
            Some(slot) => smallvec![slot],
            None => {
                tracing::debug!(field, "Scoped term names a field that is not indexed");
                return Compiled::Unsatisfiable;
            }
        },
        None => SmallVec::from_slice(default_slots),
    };
    if field_slots.is_empty() {
        return Compiled::Unsatisfiable;
    }

    let leaf = if term.is_exact() {
        Leaf::Exact(ExactPattern::new(&normalized))
    } else {
        // too short for approximate matching: require it verbatim
        FuzzyPattern::new(&normalized, options)
            .map(Leaf::Fuzzy)
            .unwrap_or_else(|| Leaf::Exact(ExactPattern::new(&normalized)))
    };

    Compiled::Matcher(TermMatcher { leaf, field_slots })
}

/// Evaluate an advanced query over `fields`. Unscoped terms search all of
/// `fields`, scoped terms only their own field.
pub fn search<'a>(
    index: &'a RecordIndex,
    query: &str,
    fields: &[&str],
    options: &FuzzyOptions,
) -> SearchResult<'a> {
    let parsed = QueryParser::default().parse(query);
    if !parsed.has_required() {
        tracing::debug!(
            terms = parsed.terms.len(),
            ignored = parsed.ignored,
            "Advanced query has no required terms"
        );
        return SearchResult::default();
    }

    let default_slots = resolve_fields(index, fields);

    let mut required: SmallVec<[TermMatcher; 8]> = SmallVec::new();
    for term in parsed.required() {
        match compile(index, term, &default_slots, options) {
            Compiled::Matcher(matcher) => required.push(matcher),
            Compiled::Ignored => {}
            Compiled::Unsatisfiable => return SearchResult::default(),
        }
    }
    if required.is_empty() {
        return SearchResult::default();
    }

    let excluded: SmallVec<[TermMatcher; 8]> = parsed
        .excluded()
        .filter_map(|term| match compile(index, term, &default_slots, options) {
            Compiled::Matcher(matcher) => Some(matcher),
            Compiled::Ignored | Compiled::Unsatisfiable => None,
        })
        .collect();

    tracing::debug!(
        required = required.len(),
        excluded = excluded.len(),
        ignored = parsed.ignored,
        "Evaluating advanced query"
    );

    let mut scored = index.scan(|record_slot| {
        let mut total = 0.0;
        for matcher in &required {
            total += matcher.score(index, record_slot)?;
        }

        if excluded
            .iter()
            .any(|matcher| matcher.score(index, record_slot).is_some())
        {
            return None;
        }

        Some((record_slot, total))
    });
    sort_by_score(&mut scored);

    SearchResult::ranked(
        scored
            .into_iter()
            .map(|(slot, score)| (index.record(slot), score))
            .collect(),
    )
}
