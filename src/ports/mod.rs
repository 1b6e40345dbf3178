//! Ports Layer - Trait definitions for external dependencies
//!
//! Following hexagonal architecture, these traits abstract:
//! - The pair-data source (DexScreener HTTP API)
//! - The export destination (JSON/CSV files)

pub mod pair_source;
pub mod exporter;
pub mod mocks;

pub use pair_source::{PairSource, SourceError};
pub use exporter::{ExportError, Exporter, OutputFormat};
