//! Instant normalized substring matching.

use crate::index::RecordIndex;
use crate::types::SearchResult;
use memchr::memmem;
use smallvec::SmallVec;

/// Exact substring pattern over normalized text.
#[derive(Debug, Clone)]
pub(crate) struct ExactPattern {
    finder: memmem::Finder<'static>,
}

impl ExactPattern {
    /// `normalized` must already be normalized with the index options.
    pub(crate) fn new(normalized: &str) -> Self {
        Self {
            finder: memmem::Finder::new(normalized.as_bytes()).into_owned(),
        }
    }

    #[inline]
    pub(crate) fn is_match(&self, haystack: &str) -> bool {
        self.finder.find(haystack.as_bytes()).is_some()
    }
}

/// Resolve field names to index columns, skipping unknown names.
pub(crate) fn resolve_fields(index: &RecordIndex, fields: &[&str]) -> SmallVec<[usize; 4]> {
    let mut slots = SmallVec::new();
    for field in fields {
        if let Some(slot) = index.field_slot(field)
            && !slots.contains(&slot)
        {
            slots.push(slot);
        }
    }
    slots
}

/// Records whose normalized `field` contains the normalized query, in corpus order.
pub fn search<'a>(index: &'a RecordIndex, query: &str, field: &str) -> SearchResult<'a> {
    search_fields(index, query, &[field])
}

/// Like [`search`] over several fields: a record matches if any field contains
/// the query. Each record appears once, in corpus order.
pub fn search_fields<'a>(index: &'a RecordIndex, query: &str, fields: &[&str]) -> SearchResult<'a> {
    let normalized = index.normalize_query(query);
    if normalized.is_empty() {
        return SearchResult::default();
    }

    let slots = resolve_fields(index, fields);
    if slots.is_empty() {
        tracing::debug!(?fields, "Simple search over unknown fields");
        return SearchResult::default();
    }

    let pattern = ExactPattern::new(&normalized);
    let matched = index.scan(|record_slot| {
        slots
            .iter()
            .any(|&field_slot| pattern.is_match(index.normalized(field_slot, record_slot)))
            .then(|| index.record(record_slot))
    });

    SearchResult::unranked(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TextRecord;

    fn fatiha() -> RecordIndex {
        let verses = [
            ("بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ", "بِسْمِ ٱللَّهِ ٱلرَّحْمَـٰنِ ٱلرَّحِيمِ"),
            ("الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ", "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَـٰلَمِينَ"),
            ("الرَّحْمَٰنِ الرَّحِيمِ", "ٱلرَّحْمَـٰنِ ٱلرَّحِيمِ"),
        ];
        let records = verses
            .iter()
            .enumerate()
            .map(|(i, (standard, uthmani))| {
                TextRecord::new(i as u32 + 1, 1, 1, "الفاتحة", i as u16 + 1)
                    .with_field("standard", *standard)
                    .with_field("uthmani", *uthmani)
            })
            .collect();
        RecordIndex::build(records, &["standard", "uthmani"]).unwrap()
    }

    #[test]
    fn test_diacritic_insensitive_substring() {
        let index = fatiha();
        assert_eq!(search(&index, "الرحمن", "standard").ids(), vec![1, 3]);
        assert_eq!(search(&index, "الرَّحْمَٰنِ", "standard").ids(), vec![1, 3]);
        assert_eq!(search(&index, "لله", "standard").ids(), vec![1, 2]);
    }

    #[test]
    fn test_no_scores_for_simple_matches() {
        let index = fatiha();
        let result = search(&index, "رب", "standard");
        assert_eq!(result.total_matched, 1);
        assert!(result.hits.iter().all(|hit| hit.score.is_none()));
    }

    #[test]
    fn test_empty_and_mark_only_queries() {
        let index = fatiha();
        assert!(search(&index, "", "standard").is_empty());
        assert!(search(&index, "   ", "standard").is_empty());
        assert!(search(&index, "\u{064E}\u{0651}", "standard").is_empty());
    }

    #[test]
    fn test_unknown_field_is_empty() {
        let index = fatiha();
        assert!(search(&index, "الله", "nosuchfield").is_empty());
    }

    #[test]
    fn test_uthmani_field_matches_plain_query() {
        let index = fatiha();
        // the Uthmani spelling of العالمين drops the alif once the dagger alif is stripped
        assert!(search(&index, "العالمين", "uthmani").is_empty());
        assert_eq!(search(&index, "العلمين", "uthmani").ids(), vec![2]);
    }

    #[test]
    fn test_multiple_fields_union_in_corpus_order() {
        let index = fatiha();
        let result = search_fields(&index, "العالمين", &["uthmani", "standard", "standard"]);
        assert_eq!(result.ids(), vec![2]);

        let result = search_fields(&index, "الرحيم", &["uthmani", "standard"]);
        assert_eq!(result.ids(), vec![1, 3]);
    }

    #[test]
    fn test_hamza_seat_matches_combining_hamza() {
        let records = vec![
            TextRecord::new(1, 34, 2, "البقرة", 189)
                .with_field("standard", "يَسْ\u{064A}\u{0654}لُونَكَ عَنِ الْأَهِلَّةِ"),
            TextRecord::new(2, 1, 1, "الفاتحة", 4).with_field("standard", "مَالِكِ يَوْمِ الدِّينِ"),
        ];
        let index = RecordIndex::build(records, &["standard"]).unwrap();

        assert_eq!(search(&index, "يسئلونك", "standard").ids(), vec![1]);
        assert_eq!(search(&index, "يسألونك", "standard").ids(), Vec::<u32>::new());
    }
}
