//! CLI Command Definitions
//!
//! Command-line surface of the dexscan pair scanner.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dexscan - DexScreener pair scanner
#[derive(Parser, Debug)]
#[command(
    name = "dexscan",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Fetch, normalize, filter, and export DEX trading pairs",
    long_about = "Dexscan pulls trading-pair listings from the DexScreener API, \
                  normalizes them into a stable schema, applies threshold filters, \
                  and exports the curated result to JSON or CSV."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch pairs from DexScreener and export them
    Scan(ScanCmd),

    /// Run the offline pipeline over a local raw-capture file
    Convert(ConvertCmd),
}

/// Fetch, filter, and export pairs
#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/scanner.toml")]
    pub config: PathBuf,

    /// Override output path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override output format (json, csv)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Include all pools, not only the top one per token
    #[arg(long)]
    pub all_pools: bool,

    /// Override sort key (volumeH24, txnsH24, trending, liquidity, priceChangeH24)
    #[arg(long, value_name = "KEY")]
    pub sort_by: Option<String>,

    /// Override result limit (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub limit: Option<i64>,

    /// Sample JSON file to fall back to when no live data is fetched
    #[arg(long, value_name = "FILE")]
    pub fallback: Option<PathBuf>,
}

/// Normalize, filter, and export a local raw-capture file
#[derive(Parser, Debug)]
pub struct ConvertCmd {
    /// Raw pairs JSON file (array, or object with a "pairs"/"data" key)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/scanner.toml")]
    pub config: PathBuf,

    /// Override output path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override output format (json, csv)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Include all pools, not only the top one per token
    #[arg(long)]
    pub all_pools: bool,

    /// Override sort key
    #[arg(long, value_name = "KEY")]
    pub sort_by: Option<String>,

    /// Override result limit (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub limit: Option<i64>,
}
