//! JSON Exporter
//!
//! Direct ordered serialization of the canonical record list, pretty
//! printed, nested structure preserved.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::adapters::export::ensure_parent_dir;
use crate::domain::record::PairRecord;
use crate::ports::exporter::{ExportError, Exporter};

pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export(&self, records: &[PairRecord], destination: &Path) -> Result<(), ExportError> {
        ensure_parent_dir(destination)?;
        let file = File::create(destination)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, records)
            .map_err(|e| ExportError::Serialize(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writes_full_fidelity_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        let record = PairRecord {
            pair_address: "0xPAIR".to_string(),
            market_cap: Some(12345.0),
            ..Default::default()
        };
        JsonExporter.export(&[record], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<PairRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].pair_address, "0xPAIR");
        assert_eq!(parsed[0].market_cap, Some(12345.0));
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.json");

        JsonExporter.export(&[], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_input_writes_empty_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");

        JsonExporter.export(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");
    }
}
