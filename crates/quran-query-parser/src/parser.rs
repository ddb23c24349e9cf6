use crate::TermVec;
use crate::config::{AdvancedConfig, ParserConfig};
use crate::terms::Term;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseResult<'a> {
    /// Parsed terms in query order (stack-allocated for ≤8 terms)
    pub terms: TermVec<'a>,
    /// Number of no-op terms that were dropped: a lone `-`, `field:` with
    /// nothing after it, and empty quotes
    pub ignored: usize,
}

impl<'a> ParseResult<'a> {
    /// Terms every result must satisfy (everything that is not an exclusion).
    pub fn required(&self) -> impl Iterator<Item = &Term<'a>> {
        self.terms.iter().filter(|term| !term.is_excluded())
    }

    /// Inner terms of all exclusions.
    pub fn excluded(&self) -> impl Iterator<Item = &Term<'a>> {
        self.terms.iter().filter_map(|term| match term {
            Term::Exclude(inner) => Some(inner.as_ref()),
            _ => None,
        })
    }

    #[inline]
    pub fn has_required(&self) -> bool {
        self.required().next().is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Main query parser - zero-cost wrapper around configuration.
///
/// Parsing is total: every input string produces some parse, ambiguous
/// input is resolved by permissive fallbacks rather than errors.
#[derive(Debug)]
pub struct QueryParser<C: ParserConfig> {
    config: C,
}

impl<C: ParserConfig> QueryParser<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn parse<'a>(&self, query: &'a str) -> ParseResult<'a> {
        let mut result = ParseResult::default();
        let mut rest = query.trim_start();

        while !rest.is_empty() {
            let (term, tail) = self.parse_term(rest);
            match term {
                Some(term) => result.terms.push(term),
                None => result.ignored += 1,
            }
            rest = tail.trim_start();
        }

        result
    }

    /// Parse one term from the start of `input`, returning the unconsumed tail.
    /// `None` means the term was a no-op.
    #[inline]
    fn parse_term<'a>(&self, input: &'a str) -> (Option<Term<'a>>, &'a str) {
        if self.config.enable_exclude()
            && let Some(inner) = input.strip_prefix('-')
        {
            if at_boundary(inner) {
                return (None, inner);
            }
            let (term, tail) = self.parse_positive(inner);
            return (term.map(|term| Term::Exclude(Box::new(term))), tail);
        }

        self.parse_positive(input)
    }

    /// Parse a term that cannot be an exclusion (to avoid `--x` nesting)
    #[inline]
    fn parse_positive<'a>(&self, input: &'a str) -> (Option<Term<'a>>, &'a str) {
        if self.config.enable_field_scope()
            && let Some((field, value)) = self.split_field_scope(input)
        {
            // `field:` followed by whitespace or end of input
            if at_boundary(value) {
                return (None, value);
            }
            let (inner, tail) = self.parse_leaf(value);
            return (
                inner.map(|inner| Term::Scoped {
                    field,
                    inner: Box::new(inner),
                }),
                tail,
            );
        }

        self.parse_leaf(input)
    }

    /// Parse a bare word or a quoted phrase
    #[inline]
    fn parse_leaf<'a>(&self, input: &'a str) -> (Option<Term<'a>>, &'a str) {
        if self.config.enable_phrases()
            && let Some(body) = input.strip_prefix('"')
        {
            return match body.find('"') {
                Some(close) => {
                    let phrase = &body[..close];
                    let tail = &body[close + 1..];
                    if phrase.trim().is_empty() {
                        (None, tail)
                    } else {
                        (Some(Term::Exact(phrase)), tail)
                    }
                }
                // unterminated: the quote is a literal character and the phrase runs to the end
                None => (Some(Term::Exact(input)), ""),
            };
        }

        let (word, tail) = split_word(input);
        (Some(Term::Fuzzy(word)), tail)
    }

    /// Split `field:value` into its parts. The field name must be non-empty
    /// and consist only of field name characters.
    #[inline]
    fn split_field_scope<'a>(&self, input: &'a str) -> Option<(&'a str, &'a str)> {
        let colon = input.find(|c: char| !self.config.is_field_name_char(c))?;
        if colon == 0 || !input[colon..].starts_with(':') {
            return None;
        }

        Some((&input[..colon], &input[colon + 1..]))
    }
}

impl Default for QueryParser<AdvancedConfig> {
    fn default() -> Self {
        Self::new(AdvancedConfig)
    }
}

/// Split the leading word off at the first whitespace character
#[inline]
fn split_word(input: &str) -> (&str, &str) {
    match input.find(char::is_whitespace) {
        Some(end) => input.split_at(end),
        None => (input, ""),
    }
}

/// True if `input` is empty or starts with whitespace
#[inline]
fn at_boundary(input: &str) -> bool {
    input.chars().next().is_none_or(char::is_whitespace)
}
