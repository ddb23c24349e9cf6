use smallvec::SmallVec;

/// Term types that can be extracted from an advanced query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term<'a> {
    /// Bare word, matched approximately: رحمن -> Fuzzy("رحمن")
    Fuzzy(&'a str),

    /// Quoted phrase, matched as an exact contiguous substring after normalization:
    /// "بسم الله" -> Exact("بسم الله")
    Exact(&'a str),

    /// Term restricted to a single field: standard:الله -> Scoped { "standard", Fuzzy("الله") }
    /// The inner term is always a Fuzzy or Exact leaf.
    Scoped {
        field: &'a str,
        inner: Box<Term<'a>>,
    },

    /// Exclusion: -الرحيم -> Exclude(Fuzzy("الرحيم"))
    /// Records matching the inner term are removed from the candidate set.
    Exclude(Box<Term<'a>>),
}

impl<'a> Term<'a> {
    /// True for `-term` exclusions, false for required terms.
    #[inline]
    pub fn is_excluded(&self) -> bool {
        matches!(self, Term::Exclude(_))
    }

    /// The innermost leaf text of this term.
    pub fn text(&self) -> &'a str {
        match self {
            Term::Fuzzy(text) | Term::Exact(text) => text,
            Term::Scoped { inner, .. } | Term::Exclude(inner) => inner.text(),
        }
    }

    /// Whether the leaf requires an exact (quoted) match.
    pub fn is_exact(&self) -> bool {
        match self {
            Term::Fuzzy(_) => false,
            Term::Exact(_) => true,
            Term::Scoped { inner, .. } | Term::Exclude(inner) => inner.is_exact(),
        }
    }

    /// The field this term is scoped to, if any.
    pub fn field(&self) -> Option<&'a str> {
        match self {
            Term::Fuzzy(_) | Term::Exact(_) => None,
            Term::Scoped { field, .. } => Some(field),
            Term::Exclude(inner) => inner.field(),
        }
    }
}

/// Stack-allocated buffer for parsed terms (up to 8 terms without heap allocation)
pub type TermVec<'a> = SmallVec<[Term<'a>; 8]>;
