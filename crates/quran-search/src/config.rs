use crate::error::Result;
use crate::fuzzy::FuzzyOptions;
use crate::normalize::NormalizeOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for a search session. Every key is optional in TOML.
///
/// ```toml
/// default_fields = ["standard"]
/// display_field = "uthmani"
///
/// [fuzzy]
/// threshold = 0.2
/// min_match_length = 2
///
/// [normalize]
/// fold_ta_marbuta = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub fuzzy: FuzzyOptions,
    /// Fields normalized at index time, available to `field:` scopes
    pub indexed_fields: Vec<String>,
    /// Fields searched when a query does not name any
    pub default_fields: Vec<String>,
    /// Field rendered in result rows
    pub display_field: String,
    pub normalize: NormalizeOptions,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy: FuzzyOptions::default(),
            indexed_fields: vec!["standard".to_string(), "uthmani".to_string()],
            default_fields: vec!["standard".to_string()],
            display_field: "uthmani".to_string(),
            normalize: NormalizeOptions::default(),
        }
    }
}

impl SearchOptions {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Indexed fields plus the default search fields, without repeats.
    pub fn fields_to_index(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::with_capacity(self.indexed_fields.len() + 1);
        for field in self.indexed_fields.iter().chain(&self.default_fields) {
            if !fields.contains(&field.as_str()) {
                fields.push(field.as_str());
            }
        }
        fields
    }

    pub fn default_field_refs(&self) -> Vec<&str> {
        self.default_fields.iter().map(String::as_str).collect()
    }
}
