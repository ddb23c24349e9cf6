use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One corpus entry: a verse segment with its location and one or more
/// renderings of its text (e.g. `standard`, `uthmani`).
///
/// The serde shape follows the bundled corpus JSON
/// (`gid`, `page_id`, `sura_id`, `sura_name`, `aya_id`, text fields...).
/// Every string-valued key that is not an identifier becomes a text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct TextRecord {
    #[serde(rename = "gid")]
    pub id: u32,
    pub page_id: u16,
    pub sura_id: u16,
    pub sura_name: String,
    #[serde(rename = "aya_id")]
    pub ayah_id: u16,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl TextRecord {
    pub fn new(
        id: u32,
        page_id: u16,
        sura_id: u16,
        sura_name: impl Into<String>,
        ayah_id: u16,
    ) -> Self {
        Self {
            id,
            page_id,
            sura_id,
            sura_name: sura_name.into(),
            ayah_id,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.fields.insert(name.into(), text.into());
        self
    }

    #[inline]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Wire shape of a record before non-text extras are dropped
#[derive(Deserialize)]
struct RawRecord {
    gid: u32,
    page_id: u16,
    sura_id: u16,
    sura_name: String,
    aya_id: u16,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl From<RawRecord> for TextRecord {
    fn from(raw: RawRecord) -> Self {
        // numeric or nested extras in the corpus are not text fields
        let fields = raw
            .extra
            .into_iter()
            .filter_map(|(name, value)| match value {
                serde_json::Value::String(text) => Some((name, text)),
                _ => None,
            })
            .collect();

        Self {
            id: raw.gid,
            page_id: raw.page_id,
            sura_id: raw.sura_id,
            sura_name: raw.sura_name,
            ayah_id: raw.aya_id,
            fields,
        }
    }
}
