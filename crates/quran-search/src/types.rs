use crate::record::TextRecord;
use serde::{Deserialize, Serialize};

/// How the raw query is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Normalized substring match
    #[default]
    Simple,
    /// Query grammar with phrases, exclusions and field scopes
    Advanced,
    /// Approximate substring match of the whole query
    Fuzzy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationArgs {
    pub offset: usize,
    /// 0 returns every match after `offset`
    pub limit: usize,
}

/// Everything a single search call needs from the caller.
#[derive(Debug, Clone, Copy)]
pub struct QueryState<'a> {
    pub raw_query: &'a str,
    /// Fields to search; empty means the configured default fields
    pub fields: &'a [&'a str],
    pub mode: SearchMode,
    pub pagination: PaginationArgs,
}

impl<'a> QueryState<'a> {
    pub fn new(raw_query: &'a str) -> Self {
        Self {
            raw_query,
            fields: &[],
            mode: SearchMode::Simple,
            pagination: PaginationArgs::default(),
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_fields(mut self, fields: &'a [&'a str]) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_pagination(mut self, offset: usize, limit: usize) -> Self {
        self.pagination = PaginationArgs { offset, limit };
        self
    }
}

/// A matched record. Lower scores are better, `None` for unranked matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a> {
    pub record: &'a TextRecord,
    pub score: Option<f32>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult<'a> {
    pub hits: Vec<Hit<'a>>,
    /// Number of matches before pagination
    pub total_matched: usize,
}

impl<'a> SearchResult<'a> {
    pub(crate) fn unranked(records: Vec<&'a TextRecord>) -> Self {
        let total_matched = records.len();
        Self {
            hits: records
                .into_iter()
                .map(|record| Hit {
                    record,
                    score: None,
                })
                .collect(),
            total_matched,
        }
    }

    pub(crate) fn ranked(scored: Vec<(&'a TextRecord, f32)>) -> Self {
        let total_matched = scored.len();
        Self {
            hits: scored
                .into_iter()
                .map(|(record, score)| Hit {
                    record,
                    score: Some(score),
                })
                .collect(),
            total_matched,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.hits.iter().map(|hit| hit.record.id).collect()
    }

    /// Flatten hits into display rows. The text comes from `display_field`,
    /// or from `fallback_field` for records that lack it.
    pub fn rows(&self, display_field: &str, fallback_field: &str) -> Vec<ResultRow> {
        self.hits
            .iter()
            .map(|hit| ResultRow::new(hit.record, display_field, fallback_field))
            .collect()
    }
}

/// Owned, serializable view of one hit for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub id: u32,
    pub page_id: u16,
    pub sura_id: u16,
    pub sura_name: String,
    pub ayah_id: u16,
    pub display_text: String,
}

impl ResultRow {
    fn new(record: &TextRecord, display_field: &str, fallback_field: &str) -> Self {
        let display_text = record
            .field(display_field)
            .or_else(|| record.field(fallback_field))
            .unwrap_or_default();

        Self {
            id: record.id,
            page_id: record.page_id,
            sura_id: record.sura_id,
            sura_name: record.sura_name.clone(),
            ayah_id: record.ayah_id,
            display_text: display_text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_fall_back_when_display_field_missing() {
        let with_uthmani = TextRecord::new(1, 1, 1, "الفاتحة", 1)
            .with_field("standard", "بسم الله")
            .with_field("uthmani", "بِسْمِ ٱللَّهِ");
        let standard_only =
            TextRecord::new(2, 1, 1, "الفاتحة", 2).with_field("standard", "الحمد لله");

        let result = SearchResult::unranked(vec![&with_uthmani, &standard_only]);
        let rows = result.rows("uthmani", "standard");

        assert_eq!(rows[0].display_text, "بِسْمِ ٱللَّهِ");
        assert_eq!(rows[1].display_text, "الحمد لله");
        assert_eq!(rows[1].ayah_id, 2);
    }

    #[test]
    fn test_row_serializes_flat() {
        let record = TextRecord::new(9, 2, 2, "البقرة", 2).with_field("uthmani", "ذَٰلِكَ");
        let rows = SearchResult::unranked(vec![&record]).rows("uthmani", "standard");
        let json = serde_json::to_value(&rows[0]).unwrap();

        assert_eq!(json["id"], 9);
        assert_eq!(json["sura_name"], "البقرة");
        assert_eq!(json["display_text"], "ذَٰلِكَ");
    }

    #[test]
    fn test_query_state_builder() {
        let fields = ["uthmani"];
        let state = QueryState::new("الله")
            .with_mode(SearchMode::Advanced)
            .with_fields(&fields)
            .with_pagination(10, 5);

        assert_eq!(state.mode, SearchMode::Advanced);
        assert_eq!(state.fields, &["uthmani"]);
        assert_eq!(state.pagination, PaginationArgs { offset: 10, limit: 5 });
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let mode: SearchMode = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(mode, SearchMode::Advanced);
    }
}
