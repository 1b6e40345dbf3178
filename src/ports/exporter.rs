//! Exporter Port
//!
//! Abstraction over the output side of the pipeline. An exporter takes
//! the final canonical records and a destination path. An unsupported
//! destination format is a fatal, distinct error - unlike upstream data
//! problems, which never abort the run.

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::domain::record::PairRecord;

/// Exporter error type
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Writes canonical records to a destination.
pub trait Exporter: Send + Sync {
    fn export(&self, records: &[PairRecord], destination: &Path) -> Result<(), ExportError>;
}

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Full-fidelity record-sequence serialization.
    Json,
    /// One flattened row per record, dot-joined column names.
    Csv,
}

impl OutputFormat {
    /// Parse a user-supplied format name (case-insensitive).
    pub fn parse(name: &str) -> Result<Self, ExportError> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Default file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("CSV").unwrap(), OutputFormat::Csv);
    }

    #[test]
    fn test_parse_unsupported_format_is_distinct_error() {
        let err = OutputFormat::parse("parquet").unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("parquet"));
    }
}
