//! Record Flattening
//!
//! Turns a canonical record into a flat column map for tabular export.
//! Nested fields become dot-joined column names (`txns.h24.buys`);
//! link lists (websites, socials) collapse to their URLs joined by `;`.
//! Absent values render as empty cells.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::record::PairRecord;

/// Flatten one record into a sorted column -> cell map.
pub fn flatten_record(record: &PairRecord) -> BTreeMap<String, String> {
    let mut row = BTreeMap::new();
    // The canonical schema always serializes to an object.
    if let Ok(value) = serde_json::to_value(record) {
        flatten_value("", &value, &mut row);
    }
    row
}

fn flatten_value(prefix: &str, value: &Value, row: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(fields) => {
            for (key, field) in fields {
                let column = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_value(&column, field, row);
            }
        }
        Value::Array(items) => {
            row.insert(prefix.to_string(), joined_urls(items));
        }
        other => {
            row.insert(prefix.to_string(), scalar_cell(other));
        }
    }
}

/// URLs of a link list, `;`-separated, entries without a URL skipped.
fn joined_urls(items: &[Value]) -> String {
    items
        .iter()
        .filter_map(|item| item.get("url").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join(";")
}

fn scalar_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Nested containers are handled before we get here.
        _ => String::new(),
    }
}
