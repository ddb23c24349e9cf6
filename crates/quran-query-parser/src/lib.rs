//! Total query parser for advanced Quran text search
//!
//! The parser splits a query into typed terms borrowing from the input:
//! - Bare words are fuzzy requirements
//! - `"quoted phrases"` are exact requirements
//! - `-term` excludes records matching the term
//! - `field:term` restricts a single term to one field
//!
//! Parsing never fails. Ambiguous input falls back to the most literal reading:
//! an unterminated quote is a literal character and its phrase runs to the end,
//! while a lone `-`, an empty `field:` and empty quotes are dropped as no-ops.
//!
//! # Examples
//!
//! ```
//! use quran_query_parser::{QueryParser, Term};
//!
//! let parser = QueryParser::default();
//!
//! let result = parser.parse(r#""الرحمن" -الرحيم"#);
//! assert_eq!(result.terms[0], Term::Exact("الرحمن"));
//! match &result.terms[1] {
//!     Term::Exclude(inner) => assert_eq!(**inner, Term::Fuzzy("الرحيم")),
//!     _ => panic!("Expected Exclude term"),
//! }
//!
//! // Field scope wrapping a phrase
//! let result = parser.parse(r#"standard:"بسم""#);
//! assert_eq!(result.terms[0].field(), Some("standard"));
//! assert!(result.terms[0].is_exact());
//!
//! // Malformed scope is a no-op
//! let result = parser.parse("nosuchfield:");
//! assert!(result.is_empty());
//! assert_eq!(result.ignored, 1);
//! ```

mod config;
mod parser;
mod terms;

pub use config::{AdvancedConfig, ParserConfig, PlainConfig};
pub use parser::{ParseResult, QueryParser};
pub use terms::{Term, TermVec};

// Re-export SmallVec for convenience
pub use smallvec::SmallVec;
