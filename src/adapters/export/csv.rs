//! CSV Exporter
//!
//! Tabular encoding: one flattened row per record. The header is the
//! union of columns across all rows, sorted lexicographically, so no row
//! can silently drop a column.

use std::collections::BTreeSet;
use std::path::Path;

use crate::adapters::export::{ensure_parent_dir, flatten_record};
use crate::domain::record::PairRecord;
use crate::ports::exporter::{ExportError, Exporter};

pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn export(&self, records: &[PairRecord], destination: &Path) -> Result<(), ExportError> {
        ensure_parent_dir(destination)?;

        let rows: Vec<_> = records.iter().map(flatten_record).collect();

        let mut headers: BTreeSet<String> = BTreeSet::new();
        for row in &rows {
            headers.extend(row.keys().cloned());
        }
        let headers: Vec<String> = headers.into_iter().collect();

        let mut writer = csv::Writer::from_path(destination)
            .map_err(|e| ExportError::Serialize(e.to_string()))?;
        if !headers.is_empty() {
            writer
                .write_record(&headers)
                .map_err(|e| ExportError::Serialize(e.to_string()))?;
        }

        for row in &rows {
            let cells: Vec<&str> = headers
                .iter()
                .map(|h| row.get(h).map(String::as_str).unwrap_or(""))
                .collect();
            writer
                .write_record(&cells)
                .map_err(|e| ExportError::Serialize(e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| ExportError::Serialize(e.to_string()))?;
        Ok(())
    }
}
