//! Whole-file JSON persistence
//!
//! Loading is best-effort: a missing, unreadable, or corrupt file yields no
//! records instead of failing startup. Record-level decoding happens in the
//! individual repositories so that one malformed record cannot take down the
//! rest of the collection.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use fuhrpark_types::Result;

/// Load the raw records of a JSON array file.
pub fn load_records(path: &Path) -> Vec<Value> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(&raw).unwrap_or_default()
}

/// Rewrite the whole file from the given records, pretty-printed.
///
/// Serializes into a sibling temp file and renames it over the target, so a
/// crash mid-write leaves the previous version intact.
pub fn save<T: Serialize>(path: &Path, records: &T) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    {
        let file = File::create(&tmp)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}
