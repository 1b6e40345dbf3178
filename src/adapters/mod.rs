//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - DexScreener: market-data API client
//! - Export: JSON and CSV file exporters
//! - CLI: command-line interface definitions

pub mod dexscreener;
pub mod export;
pub mod cli;

pub use cli::CliApp;
pub use dexscreener::{DexScreenerClient, DexScreenerConfig};
pub use export::{exporter_for, CsvExporter, JsonExporter};
