use crate::types::{Hit, PaginationArgs, SearchResult};
use ahash::AHashSet;

/// Stable ascending sort by score; equal scores keep their incoming
/// (corpus) order.
pub(crate) fn sort_by_score(scored: &mut [(usize, f32)]) {
    glidesort::sort_by(scored, |a, b| a.1.total_cmp(&b.1));
}

/// Drops repeated record ids (first occurrence wins), records the number of
/// unique matches and returns the requested page.
#[tracing::instrument(skip_all, level = tracing::Level::DEBUG)]
pub(crate) fn dedup_and_paginate<'a>(
    hits: Vec<Hit<'a>>,
    pagination: PaginationArgs,
) -> SearchResult<'a> {
    let mut seen = AHashSet::with_capacity(hits.len());
    let mut hits: Vec<Hit<'a>> = hits
        .into_iter()
        .filter(|hit| seen.insert(hit.record.id))
        .collect();
    let total_matched = hits.len();

    let offset = pagination.offset;
    let limit = if pagination.limit > 0 {
        pagination.limit
    } else {
        total_matched
    };

    if offset >= total_matched {
        if total_matched > 0 {
            tracing::warn!(
                offset = offset,
                total_matched = total_matched,
                "Pagination: offset >= total_matched, returning empty"
            );
        }
        return SearchResult {
            hits: vec![],
            total_matched,
        };
    }

    let page_end = offset.saturating_add(limit).min(total_matched);
    hits.truncate(page_end);
    hits.drain(..offset);

    SearchResult {
        hits,
        total_matched,
    }
}
