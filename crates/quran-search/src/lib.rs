//! quran-search - Diacritic-insensitive search over Quranic verse text
//!
//! This crate normalizes Arabic text, indexes a corpus of verse records and
//! answers simple (substring), fuzzy (typo-tolerant) and advanced (phrases,
//! exclusions, field scopes) queries with deduplicated, paginated results.
//!
//! ```
//! use quran_search::{QueryState, RecordIndex, SearchMode, TextRecord, search};
//!
//! let records = vec![
//!     TextRecord::new(1, 1, 1, "الفاتحة", 1).with_field("standard", "بِسْمِ اللَّهِ"),
//!     TextRecord::new(2, 1, 1, "الفاتحة", 3).with_field("standard", "الرَّحْمٰنِ الرَّحِيمِ"),
//!     TextRecord::new(3, 1, 1, "الفاتحة", 2).with_field("standard", "الحمد لله"),
//! ];
//! let index = RecordIndex::build(records, &["standard"]).unwrap();
//!
//! let result = search(&index, &QueryState::new("لله"));
//! assert_eq!(result.ids(), vec![1, 3]);
//!
//! let state = QueryState::new(r#"standard:"بسم" "الله""#).with_mode(SearchMode::Advanced);
//! assert_eq!(search(&index, &state).ids(), vec![1]);
//! ```

pub mod advanced;
pub mod config;
pub mod corpus;
pub mod distance;
mod error;
pub mod fuzzy;
pub mod index;
pub mod log;
pub mod normalize;
mod rank;
pub mod record;
pub mod search;
pub mod session;
pub mod simple;
pub mod types;

pub use config::SearchOptions;
pub use error::{CorpusDefect, Error, Result};
pub use fuzzy::FuzzyOptions;
pub use index::{IndexedRecord, RecordIndex};
pub use normalize::{NormalizeOptions, Normalizer, normalize};
pub use record::TextRecord;
pub use search::{search, search_with};
pub use session::{CorpusStatus, SearchPage, SearchSession};
pub use types::{Hit, PaginationArgs, QueryState, ResultRow, SearchMode, SearchResult};

// Re-export the query grammar for callers that inspect advanced queries
pub use quran_query_parser::{ParseResult, QueryParser, Term};
