//! JSON result sink
//!
//! Serializes a record collection as a pretty-printed JSON array with sorted
//! keys, overwriting any previous export at the destination. Alongside the
//! write it reports the shape of the data: the union of field names across
//! all records (nested objects flattened to dotted paths) and the record
//! count. The report is diagnostic only.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// Shape summary for one written export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub destination: PathBuf,
    pub record_count: usize,
    pub fields: Vec<String>,
}

/// Write `records` to `destination` as a sorted-key, pretty-printed JSON
/// array, creating parent directories as needed.
pub fn write_records(records: &[Value], destination: &Path) -> Result<ExportReport> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // serde_json maps are BTreeMaps, so serialization comes out key-sorted.
    let json = serde_json::to_string_pretty(records)?;
    fs::write(destination, json)?;

    Ok(ExportReport {
        destination: destination.to_path_buf(),
        record_count: records.len(),
        fields: collect_fields(records),
    })
}

/// Union of field names across all records, nested objects flattened to
/// dotted paths. Arrays and scalars are leaves.
fn collect_fields(records: &[Value]) -> Vec<String> {
    let mut fields = BTreeSet::new();
    for record in records {
        if let Value::Object(map) = record {
            flatten_into(&mut fields, "", map);
        }
    }
    fields.into_iter().collect()
}

fn flatten_into(fields: &mut BTreeSet<String>, prefix: &str, map: &Map<String, Value>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(nested) => flatten_into(fields, &path, nested),
            _ => {
                fields.insert(path);
            }
        }
    }
}
