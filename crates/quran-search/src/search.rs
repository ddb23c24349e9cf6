//! Single entry point for UI searches: mode dispatch, deduplication and
//! pagination.

use crate::config::SearchOptions;
use crate::index::RecordIndex;
use crate::rank::dedup_and_paginate;
use crate::types::{QueryState, SearchMode, SearchResult};
use crate::{advanced, fuzzy, simple};

/// Search with the default options.
pub fn search<'a>(index: &'a RecordIndex, state: &QueryState<'_>) -> SearchResult<'a> {
    search_with(index, state, &SearchOptions::default())
}

/// Never fails: empty, malformed or unmatched queries give an empty result.
pub fn search_with<'a>(
    index: &'a RecordIndex,
    state: &QueryState<'_>,
    options: &SearchOptions,
) -> SearchResult<'a> {
    if state.raw_query.trim().is_empty() {
        tracing::debug!("Empty query, skipping search");
        return SearchResult::default();
    }

    let default_fields = options.default_field_refs();
    let fields = if state.fields.is_empty() {
        default_fields.as_slice()
    } else {
        state.fields
    };

    tracing::debug!(
        mode = ?state.mode,
        query = state.raw_query,
        ?fields,
        "Dispatching search"
    );

    let matched = match state.mode {
        SearchMode::Simple => simple::search_fields(index, state.raw_query, fields),
        SearchMode::Advanced => advanced::search(index, state.raw_query, fields, &options.fuzzy),
        SearchMode::Fuzzy => fuzzy::search_with(index, state.raw_query, fields, &options.fuzzy),
    };

    dedup_and_paginate(matched.hits, state.pagination)
}
