//! Decoding of the bundled corpus JSON: an array of records shaped like
//! `{"gid", "page_id", "sura_id", "sura_name", "aya_id", "standard", "uthmani"}`.

use crate::error::Result;
use crate::record::TextRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub fn records_from_json(json: &str) -> Result<Vec<TextRecord>> {
    Ok(serde_json::from_str(json)?)
}

pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<TextRecord>> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

pub fn records_from_file(path: impl AsRef<Path>) -> Result<Vec<TextRecord>> {
    let file = File::open(path.as_ref())?;
    let records = records_from_reader(file)?;
    tracing::debug!(path = %path.as_ref().display(), records = records.len(), "Decoded corpus file");
    Ok(records)
}
