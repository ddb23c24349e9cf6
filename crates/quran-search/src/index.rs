//! Immutable record index with cached normalized field views.
//!
//! The index owns the corpus for the lifetime of a search session. Every
//! requested text field of every record is normalized once at build time and
//! stored column by column so matchers can scan one field without touching
//! the others. The index is never mutated after `build`; a corpus change
//! produces a brand-new index.

use crate::error::{CorpusDefect, Result};
use crate::normalize::{NormalizeOptions, Normalizer};
use crate::record::TextRecord;
use ahash::AHashMap;
use rayon::prelude::*;
use smallvec::SmallVec;

/// Minimum record count before switching to parallel iteration with rayon.
/// Below this threshold, the overhead of thread pool dispatch outweighs the benefit.
pub(crate) const PAR_THRESHOLD: usize = 4_096;

/// Indexed field names, stack-allocated for up to 4 fields
pub type FieldVec = SmallVec<[String; 4]>;

#[derive(Debug)]
pub struct RecordIndex {
    records: Vec<TextRecord>,
    fields: FieldVec,
    /// `normalized[field_slot][record_slot]`
    normalized: Vec<Vec<String>>,
    slots_by_id: AHashMap<u32, usize>,
    normalizer: Normalizer,
}

impl RecordIndex {
    /// Build an index over `fields` with the default normalization options.
    pub fn build<S: AsRef<str>>(records: Vec<TextRecord>, fields: &[S]) -> Result<Self> {
        Self::build_with(records, fields, NormalizeOptions::default())
    }

    pub fn build_with<S: AsRef<str>>(
        records: Vec<TextRecord>,
        fields: &[S],
        options: NormalizeOptions,
    ) -> Result<Self> {
        if records.is_empty() {
            return Err(CorpusDefect::Empty.into());
        }

        let mut field_names = FieldVec::new();
        for field in fields {
            let field = field.as_ref().trim();
            if !field.is_empty() && !field_names.iter().any(|known| known == field) {
                field_names.push(field.to_string());
            }
        }
        if field_names.is_empty() {
            return Err(CorpusDefect::NoFields.into());
        }

        let mut slots_by_id = AHashMap::with_capacity(records.len());
        for (slot, record) in records.iter().enumerate() {
            if slots_by_id.insert(record.id, slot).is_some() {
                return Err(CorpusDefect::DuplicateId(record.id).into());
            }

            if let Some(missing) = field_names.iter().find(|f| record.field(f).is_none()) {
                return Err(CorpusDefect::MissingField {
                    record_id: record.id,
                    field: missing.clone(),
                }
                .into());
            }
        }

        let normalizer = Normalizer::new(options);
        let normalize_column = |field: &str| -> Vec<String> {
            let normalize_record =
                |record: &TextRecord| normalizer.normalize(record.field(field).unwrap_or(""));

            if records.len() >= PAR_THRESHOLD {
                records.par_iter().map(normalize_record).collect()
            } else {
                records.iter().map(normalize_record).collect()
            }
        };
        let normalized = field_names
            .iter()
            .map(|field| normalize_column(field))
            .collect();

        tracing::info!(
            records = records.len(),
            fields = ?field_names,
            "Record index built"
        );

        Ok(Self {
            records,
            fields: field_names,
            normalized,
            slots_by_id,
            normalizer,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a built index; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in corpus order.
    #[inline]
    pub fn records(&self) -> &[TextRecord] {
        &self.records
    }

    /// Indexed field names in the order they were requested.
    #[inline]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Resolve a field name (ASCII case-insensitive) to its column.
    pub fn field_slot(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.eq_ignore_ascii_case(name.trim()))
    }

    #[inline]
    pub fn record(&self, slot: usize) -> &TextRecord {
        &self.records[slot]
    }

    pub fn slot_of(&self, id: u32) -> Option<usize> {
        self.slots_by_id.get(&id).copied()
    }

    pub fn get(&self, id: u32) -> Option<&TextRecord> {
        self.slot_of(id).map(|slot| &self.records[slot])
    }

    /// All normalized values of one field, indexed by record slot.
    #[inline]
    pub fn column(&self, field_slot: usize) -> &[String] {
        &self.normalized[field_slot]
    }

    #[inline]
    pub fn normalized(&self, field_slot: usize, record_slot: usize) -> &str {
        &self.normalized[field_slot][record_slot]
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalize a query with the same options the index was built with.
    #[inline]
    pub fn normalize_query(&self, query: &str) -> String {
        self.normalizer.normalize(query)
    }

    /// Visit every record slot and keep what `visit` returns, in corpus order.
    pub(crate) fn scan<T, F>(&self, visit: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> Option<T> + Sync + Send,
    {
        if self.len() >= PAR_THRESHOLD {
            (0..self.len()).into_par_iter().filter_map(visit).collect()
        } else {
            (0..self.len()).filter_map(visit).collect()
        }
    }

    /// Lazily iterate records with their normalized fields, in corpus order.
    pub fn iterate(&self) -> impl ExactSizeIterator<Item = IndexedRecord<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(move |(slot, record)| IndexedRecord {
                slot,
                record,
                index: self,
            })
    }
}

/// A record together with read-only access to its normalized fields.
#[derive(Debug, Clone, Copy)]
pub struct IndexedRecord<'a> {
    pub slot: usize,
    pub record: &'a TextRecord,
    index: &'a RecordIndex,
}

impl<'a> IndexedRecord<'a> {
    /// Normalized value of a field, `None` if the field was not indexed.
    pub fn normalized(&self, field: &str) -> Option<&'a str> {
        let field_slot = self.index.field_slot(field)?;
        Some(self.index.normalized(field_slot, self.slot))
    }

    /// `(field name, normalized value)` pairs in index field order.
    pub fn normalized_fields(&self) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        let index = self.index;
        let slot = self.slot;
        index
            .fields
            .iter()
            .enumerate()
            .map(move |(field_slot, name)| (name.as_str(), index.normalized(field_slot, slot)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn record(id: u32, standard: &str) -> TextRecord {
        TextRecord::new(id, 1, 1, "الفاتحة", id as u16).with_field("standard", standard)
    }

    fn assert_defect(result: Result<RecordIndex>, expected: CorpusDefect) {
        match result {
            Err(Error::InvalidCorpus(defect)) => assert_eq!(defect, expected),
            other => panic!("Expected InvalidCorpus({:?}), got {:?}", expected, other),
        }
    }

    #[test]
    fn test_index_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RecordIndex>();
    }

    #[test]
    fn test_build_normalizes_every_field() {
        let records = vec![
            record(1, "بِسْمِ اللَّهِ").with_field("uthmani", "بِسْمِ ٱللَّهِ"),
            record(2, "الرَّحْمٰنِ").with_field("uthmani", "ٱلرَّحْمَـٰنِ"),
        ];
        let index = RecordIndex::build(records, &["standard", "uthmani"]).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.fields(), &["standard", "uthmani"]);
        assert_eq!(index.normalized(0, 0), "بسم الله");
        assert_eq!(index.normalized(1, 0), "بسم الله");
        assert_eq!(index.normalized(0, 1), "الرحمن");
        assert_eq!(index.normalized(1, 1), "الرحمن");
    }

    #[test]
    fn test_build_rejects_empty_corpus() {
        assert_defect(RecordIndex::build(vec![], &["standard"]), CorpusDefect::Empty);
    }

    #[test]
    fn test_build_rejects_no_fields() {
        let empty: [&str; 0] = [];
        assert_defect(
            RecordIndex::build(vec![record(1, "x")], &empty),
            CorpusDefect::NoFields,
        );
        assert_defect(
            RecordIndex::build(vec![record(1, "x")], &["  "]),
            CorpusDefect::NoFields,
        );
    }

    #[test]
    fn test_build_rejects_missing_field() {
        let records = vec![
            record(1, "بسم").with_field("uthmani", "بِسْمِ"),
            record(2, "الله"),
        ];
        assert_defect(
            RecordIndex::build(records, &["standard", "uthmani"]),
            CorpusDefect::MissingField {
                record_id: 2,
                field: "uthmani".to_string(),
            },
        );
    }

    #[test]
    fn test_build_rejects_duplicate_ids() {
        let records = vec![record(1, "بسم"), record(1, "الله")];
        assert_defect(
            RecordIndex::build(records, &["standard"]),
            CorpusDefect::DuplicateId(1),
        );
    }

    #[test]
    fn test_duplicate_field_requests_are_collapsed() {
        let index =
            RecordIndex::build(vec![record(1, "بسم")], &["standard", "standard"]).unwrap();
        assert_eq!(index.fields().len(), 1);
    }

    #[test]
    fn test_iterate_preserves_corpus_order() {
        let records = vec![record(30, "ج"), record(10, "ا"), record(20, "ب")];
        let index = RecordIndex::build(records, &["standard"]).unwrap();

        let ids: Vec<u32> = index.iterate().map(|entry| entry.record.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);

        let second = index.iterate().nth(1).unwrap();
        assert_eq!(second.slot, 1);
        assert_eq!(second.normalized("standard"), Some("ا"));
        assert_eq!(second.normalized("uthmani"), None);
        assert_eq!(
            second.normalized_fields().collect::<Vec<_>>(),
            vec![("standard", "ا")]
        );
    }

    #[test]
    fn test_lookup_by_id_and_field_name() {
        let index = RecordIndex::build(vec![record(5, "بسم")], &["standard"]).unwrap();

        assert_eq!(index.get(5).map(|r| r.id), Some(5));
        assert!(index.get(6).is_none());
        assert_eq!(index.field_slot("STANDARD"), Some(0));
        assert_eq!(index.field_slot("nosuchfield"), None);
    }

    #[test]
    fn test_query_normalization_uses_index_options() {
        let options = NormalizeOptions {
            fold_alif_maksura: false,
            fold_ta_marbuta: true,
        };
        let index =
            RecordIndex::build_with(vec![record(1, "رحمة موسى")], &["standard"], options)
                .unwrap();

        assert_eq!(index.normalized(0, 0), "رحمه موسى");
        assert_eq!(index.normalize_query("رحمة"), "رحمه");
    }
}
