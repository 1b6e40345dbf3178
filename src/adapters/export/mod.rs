//! Export adapters
//!
//! File exporters implementing the `Exporter` port: full-fidelity JSON
//! and flattened CSV.

mod flatten;
mod csv;
mod json;

pub use self::csv::CsvExporter;
pub use self::json::JsonExporter;
pub use flatten::flatten_record;

use crate::ports::exporter::{Exporter, OutputFormat};

/// Exporter implementation for a given output format.
pub fn exporter_for(format: OutputFormat) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Json => Box::new(JsonExporter),
        OutputFormat::Csv => Box::new(CsvExporter),
    }
}

/// Ensure the destination's parent directory exists.
pub(crate) fn ensure_parent_dir(destination: &std::path::Path) -> std::io::Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
