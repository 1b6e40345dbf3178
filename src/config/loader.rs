//! Configuration Loader
//!
//! Loads and validates scanner configuration from TOML files.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::domain::filter::FilterSpec;
use crate::domain::sort::DEFAULT_SORT_KEY;
use crate::ports::exporter::OutputFormat;

/// Main configuration structure matching scanner.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceSection,
    pub filters: FilterSpec,
    pub pipeline: PipelineSection,
    pub output: OutputSection,
    pub logging: LoggingSection,
}

/// Pair source configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Free-text search query (e.g. a token symbol)
    pub query: Option<String>,
    /// Restrict search results to these chain ids
    pub chains: Option<Vec<String>>,
    /// Newline-delimited file of token addresses to look up
    pub token_addresses_file: Option<String>,
    /// Include all pools instead of the top one per token
    pub all_pools: bool,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            query: None,
            chains: None,
            token_addresses_file: None,
            all_pools: false,
            timeout_secs: 20,
        }
    }
}

impl SourceSection {
    /// Get API base URL with environment variable override
    /// Checks DEXSCREENER_API_URL env var first, falls back to the public API
    pub fn get_api_base_url(&self) -> Option<String> {
        std::env::var("DEXSCREENER_API_URL").ok()
    }
}

/// Pipeline configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineSection {
    /// Sort key for the final ordering
    pub sort_by: String,
    /// Maximum number of records to export (0 or negative = unlimited)
    pub limit: i64,
    /// Deduplicate records by pair address
    pub dedupe: bool,
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            sort_by: DEFAULT_SORT_KEY.to_string(),
            limit: 150,
            dedupe: true,
        }
    }
}

/// Output configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Output format: "json" or "csv"
    pub format: String,
    /// Output file path; defaults to data/output.<format>
    pub path: Option<String>,
    /// Sample JSON file used when no live data could be fetched
    pub fallback_file: Option<String>,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            path: None,
            fallback_file: None,
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.filters
            .validate()
            .map_err(ConfigError::ValidationError)?;

        if self.source.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be > 0".to_string(),
            ));
        }

        OutputFormat::parse(&self.output.format).map_err(|_| {
            ConfigError::ValidationError(format!(
                "unsupported output format: {}",
                self.output.format
            ))
        })?;

        Ok(())
    }
}

/// Load token addresses from a newline-delimited file.
/// Blank lines and `#` comments are skipped; a missing path yields an
/// empty list rather than an error.
pub fn load_token_addresses<P: AsRef<Path>>(path: P) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
