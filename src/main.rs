//! Dexscan - DexScreener Pair Scanner
//!
//! Fetches DEX trading-pair listings, normalizes them into a canonical
//! schema, applies threshold filters, and exports the result to JSON or CSV.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use dexscan::adapters::cli::{CliApp, Command, ConvertCmd, ScanCmd};
use dexscan::adapters::dexscreener::{DexScreenerClient, DexScreenerConfig};
use dexscan::adapters::export::exporter_for;
use dexscan::application::{PipelineError, ScanOrchestrator, ScanRequest};
use dexscan::config::{load_config, load_token_addresses, Config};
use dexscan::ports::exporter::OutputFormat;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (API base overrides go here, not in scanner.toml)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug)?;

    match app.command {
        Command::Scan(cmd) => scan_command(cmd).await,
        Command::Convert(cmd) => convert_command(cmd).await,
    }
}

fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt().with_env_filter(filter).init();
    Ok(())
}

async fn scan_command(cmd: ScanCmd) -> Result<()> {
    tracing::info!("Starting dexscan...");

    let mut config = load_config(&cmd.config).context("Failed to load configuration")?;
    apply_overrides(
        &mut config,
        cmd.output.as_deref(),
        cmd.format.as_deref(),
        cmd.all_pools,
        cmd.sort_by.as_deref(),
        cmd.limit,
    );

    let format = OutputFormat::parse(&config.output.format)
        .context("Unsupported output format")?;

    // Token addresses come from a watchlist file next to the config.
    let token_addresses = config
        .source
        .token_addresses_file
        .as_deref()
        .map(|p| load_token_addresses(shellexpand::tilde(p).as_ref()))
        .unwrap_or_default();

    if config.source.query.is_none() && token_addresses.is_empty() {
        bail!(
            "Nothing to fetch: set [source] query or token_addresses_file in {}",
            cmd.config.display()
        );
    }

    let mut client_config = DexScreenerConfig {
        timeout: Duration::from_secs(config.source.timeout_secs),
        ..Default::default()
    };
    if let Some(base) = config.source.get_api_base_url() {
        client_config.api_base_url = base;
    }
    let client = DexScreenerClient::with_config(client_config)
        .context("Failed to create DexScreener client")?;

    let request = ScanRequest::from_config(&config, token_addresses);
    let orchestrator = ScanOrchestrator::new(client);

    let records = match orchestrator.run(&request).await {
        Ok(records) => records,
        Err(PipelineError::NoData) => {
            let fallback = cmd
                .fallback
                .or_else(|| config.output.fallback_file.as_deref().map(expand_path));
            let Some(fallback) = fallback else {
                bail!("No pairs fetched and no fallback file configured");
            };
            tracing::warn!("No live data - using sample file {}", fallback.display());
            let raw = load_raw_pairs(&fallback)?;
            ScanOrchestrator::<DexScreenerClient>::process(raw, &request)
        }
    };

    export_records(&records, &config, format)
}

async fn convert_command(cmd: ConvertCmd) -> Result<()> {
    let mut config = load_config(&cmd.config).context("Failed to load configuration")?;
    apply_overrides(
        &mut config,
        cmd.output.as_deref(),
        cmd.format.as_deref(),
        cmd.all_pools,
        cmd.sort_by.as_deref(),
        cmd.limit,
    );

    let format = OutputFormat::parse(&config.output.format)
        .context("Unsupported output format")?;

    let raw = load_raw_pairs(&cmd.input)?;
    let request = ScanRequest::from_config(&config, Vec::new());
    let records = ScanOrchestrator::<DexScreenerClient>::process(raw, &request);

    export_records(&records, &config, format)
}

/// Fold CLI overrides into the loaded configuration.
fn apply_overrides(
    config: &mut Config,
    output: Option<&Path>,
    format: Option<&str>,
    all_pools: bool,
    sort_by: Option<&str>,
    limit: Option<i64>,
) {
    if let Some(output) = output {
        config.output.path = Some(output.to_string_lossy().into_owned());
    }
    if let Some(format) = format {
        config.output.format = format.to_string();
    }
    if all_pools {
        config.source.all_pools = true;
    }
    if let Some(sort_by) = sort_by {
        config.pipeline.sort_by = sort_by.to_string();
    }
    if let Some(limit) = limit {
        config.pipeline.limit = limit;
    }
}

/// Read a raw-pairs JSON file: a bare array, or an object wrapping the
/// array under a `pairs` or `data` key.
fn load_raw_pairs(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let body: Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    let pairs = match body {
        Value::Array(pairs) => pairs,
        Value::Object(mut map) => match map.remove("pairs").or_else(|| map.remove("data")) {
            Some(Value::Array(pairs)) => pairs,
            _ => bail!("{}: expected an array or a pairs/data key", path.display()),
        },
        _ => bail!("{}: expected an array or a pairs/data key", path.display()),
    };
    Ok(pairs)
}

fn export_records(
    records: &[dexscan::domain::PairRecord],
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let destination = config
        .output
        .path
        .as_deref()
        .map(expand_path)
        .unwrap_or_else(|| PathBuf::from(format!("data/output.{}", format.extension())));

    exporter_for(format)
        .export(records, &destination)
        .with_context(|| format!("Failed to export to {}", destination.display()))?;

    tracing::info!(
        "Exported {} records to {} ({})",
        records.len(),
        destination.display(),
        format
    );
    println!("Exported {} records to {}", records.len(), destination.display());
    Ok(())
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
