//! JSON fact snapshots
//!
//! Discovery passes hand over their tables as one JSON object:
//!
//! ```json
//! {
//!   "service-endpoints": [
//!     { "service_class": "com.example.GreetingController", "http_method": "GET",
//!       "path": "/greeting", "framework": "Spring" }
//!   ],
//!   "server-configuration": [ { "port": 8443, "ssl_enabled": true } ]
//! }
//! ```
//!
//! Unknown tables and rows that fail to decode are skipped with a warning so
//! a single bad row never costs the whole architecture.

use crate::error::{FactError, FactResult};
use crate::kind::TableKind;
use crate::tables::FactTables;
use serde_json::Value;
use std::path::Path;

/// Outcome of decoding a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows accepted
    pub rows_loaded: usize,
    /// Rows dropped because they did not decode
    pub rows_skipped: usize,
    /// Table names that were not recognized
    pub unknown_tables: Vec<String>,
}

/// Decode a snapshot from JSON text
///
/// # Errors
/// Returns error if the text is not JSON or not shaped as a table map
pub fn from_json_str(text: &str) -> FactResult<(FactTables, LoadReport)> {
    let value: Value = serde_json::from_str(text)?;
    from_json_value(value)
}

/// Decode a snapshot from a parsed JSON value
///
/// # Errors
/// - `FactError::NotAnObject` if the root is not an object
/// - `FactError::TableNotArray` if a known table is not an array
pub fn from_json_value(value: Value) -> FactResult<(FactTables, LoadReport)> {
    let Value::Object(map) = value else {
        return Err(FactError::NotAnObject(json_type(&value)));
    };

    let mut tables = FactTables::new();
    let mut report = LoadReport::default();

    for (name, rows) in map {
        let Ok(kind) = name.parse::<TableKind>() else {
            tracing::warn!(table = %name, "ignoring unknown fact table");
            report.unknown_tables.push(name);
            continue;
        };

        let Value::Array(rows) = rows else {
            return Err(FactError::TableNotArray {
                table: name,
                found: json_type(&rows),
            });
        };

        let table = tables.table_mut(kind);
        for (index, row) in rows.into_iter().enumerate() {
            match table.push_json(row) {
                Ok(()) => report.rows_loaded += 1,
                Err(e) => {
                    tracing::warn!(table = %kind, index, error = %e, "skipping malformed fact row");
                    report.rows_skipped += 1;
                }
            }
        }
    }

    tracing::debug!(
        rows = report.rows_loaded,
        skipped = report.rows_skipped,
        "decoded fact snapshot"
    );
    Ok((tables, report))
}

/// Read and decode a snapshot file
///
/// # Errors
/// Returns error if the file cannot be read or is not a valid snapshot
pub fn load(path: impl AsRef<Path>) -> FactResult<(FactTables, LoadReport)> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| FactError::io_error(path, e))?;
    from_json_str(&text)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
