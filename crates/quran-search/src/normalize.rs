//! Arabic text normalization for comparison.
//!
//! Normalization removes diacritics and Quranic annotation marks, unifies
//! orthographically equivalent letter forms, lowercases Latin text and
//! collapses whitespace. It is total and idempotent: unrecognized characters
//! pass through unchanged and `normalize(normalize(s)) == normalize(s)`.

use serde::{Deserialize, Serialize};

/// Letter folding switches. Alif variants always collapse to bare alif.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Treat alif maksura (ى) as ya (ي)
    pub fold_alif_maksura: bool,
    /// Treat ta marbuta (ة) as ha (ه)
    pub fold_ta_marbuta: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            fold_alif_maksura: true,
            fold_ta_marbuta: false,
        }
    }
}

/// Characters removed by normalization: combining vowel and tone marks,
/// Quranic annotation marks and the tatweel elongation character.
#[inline]
pub fn is_stripped(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}' |  // honorifics and small Quranic marks
        '\u{064B}'..='\u{065F}' |  // tanwin, fatha, damma, kasra, shadda, sukun, maddah, hamza marks
        '\u{0670}' |               // superscript (dagger) alif
        '\u{06D6}'..='\u{06ED}' |  // Quranic annotation signs
        '\u{0640}'                 // tatweel
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    #[inline]
    fn fold_letter(&self, c: char) -> char {
        match c {
            // hamza above, hamza below, madda, wasla, wavy hamza above/below
            '\u{0623}' | '\u{0625}' | '\u{0622}' | '\u{0671}' | '\u{0672}' | '\u{0673}' => {
                '\u{0627}'
            }
            // hamza on waw and ya seats, same as the base letter plus a stripped hamza mark
            '\u{0624}' => '\u{0648}',
            '\u{0626}' => '\u{064A}',
            '\u{0649}' if self.options.fold_alif_maksura => '\u{064A}',
            '\u{0629}' if self.options.fold_ta_marbuta => '\u{0647}',
            _ => c,
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = String::with_capacity(text.len());
        let mut pending_space = false;

        for c in text.chars() {
            if c.is_whitespace() {
                pending_space = !normalized.is_empty();
                continue;
            }
            if is_stripped(c) {
                continue;
            }

            if pending_space {
                normalized.push(' ');
                pending_space = false;
            }

            let c = self.fold_letter(c);
            if c.is_uppercase() {
                normalized.extend(c.to_lowercase());
            } else {
                normalized.push(c);
            }
        }

        normalized
    }
}

/// Normalize with the default options.
#[inline]
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text)
}
