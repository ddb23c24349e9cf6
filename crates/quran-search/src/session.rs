//! Corpus lifecycle for a UI session.
//!
//! The corpus arrives once from a loader and moves through
//! `Loading -> Ready | Failed`. Searches are only possible once it is ready.
//! Replacing the corpus builds a fresh index outside the lock and swaps it in;
//! readers holding the previous `Arc` keep a consistent snapshot.

use crate::config::SearchOptions;
use crate::corpus;
use crate::error::{Error, Result};
use crate::index::RecordIndex;
use crate::record::TextRecord;
use crate::search::search_with;
use crate::types::{QueryState, ResultRow};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CorpusStatus {
    Loading,
    Ready { records: usize },
    Failed { reason: String },
}

#[derive(Debug)]
enum CorpusState {
    Loading,
    Ready(Arc<RecordIndex>),
    Failed(String),
}

/// One page of rendered results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPage {
    pub rows: Vec<ResultRow>,
    pub total_matched: usize,
}

#[derive(Debug)]
pub struct SearchSession {
    options: SearchOptions,
    state: RwLock<CorpusState>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}

impl SearchSession {
    /// A new session starts in the loading state.
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            state: RwLock::new(CorpusState::Loading),
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn begin_loading(&self) {
        *self.state.write() = CorpusState::Loading;
    }

    /// Build an index from `records` and make it the active corpus.
    /// A corpus that cannot be indexed moves the session to `Failed`.
    pub fn install(&self, records: Vec<TextRecord>) -> Result<Arc<RecordIndex>> {
        let fields = self.options.fields_to_index();
        match RecordIndex::build_with(records, &fields, self.options.normalize) {
            Ok(index) => {
                let index = Arc::new(index);
                *self.state.write() = CorpusState::Ready(Arc::clone(&index));
                tracing::info!(records = index.len(), "Corpus installed");
                Ok(index)
            }
            Err(err) => {
                self.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Decode the corpus JSON and install it.
    pub fn install_json(&self, json: &str) -> Result<Arc<RecordIndex>> {
        match corpus::records_from_json(json) {
            Ok(records) => self.install(records),
            Err(err) => {
                self.fail(err.to_string());
                Err(err)
            }
        }
    }

    pub fn fail(&self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(reason = %reason, "Corpus failed to load");
        *self.state.write() = CorpusState::Failed(reason);
    }

    pub fn status(&self) -> CorpusStatus {
        match &*self.state.read() {
            CorpusState::Loading => CorpusStatus::Loading,
            CorpusState::Ready(index) => CorpusStatus::Ready {
                records: index.len(),
            },
            CorpusState::Failed(reason) => CorpusStatus::Failed {
                reason: reason.clone(),
            },
        }
    }

    /// Snapshot of the active index.
    pub fn index(&self) -> Result<Arc<RecordIndex>> {
        match &*self.state.read() {
            CorpusState::Loading => Err(Error::CorpusLoading),
            CorpusState::Ready(index) => Ok(Arc::clone(index)),
            CorpusState::Failed(reason) => Err(Error::CorpusFailed(reason.clone())),
        }
    }

    /// Run a search against the active corpus and render the page into rows.
    /// Rows show the configured display field, or the first searched field
    /// for records without it.
    pub fn search_page(&self, state: &QueryState<'_>) -> Result<SearchPage> {
        let index = self.index()?;
        let result = search_with(&index, state, &self.options);

        let fallback_field = state
            .fields
            .first()
            .copied()
            .or_else(|| self.options.default_fields.first().map(String::as_str))
            .unwrap_or_default();

        Ok(SearchPage {
            rows: result.rows(&self.options.display_field, fallback_field),
            total_matched: result.total_matched,
        })
    }
}
