//! DexScreener API Client
//!
//! HTTP client for the public DexScreener `latest/dex` API.
//! Implements the `PairSource` port: free-text pair search and batched
//! token-address lookups. Token addresses are chunked to keep URLs short
//! (the API accepts comma-separated lists), with a courtesy delay between
//! chunks; a failed chunk is logged and skipped rather than aborting the
//! whole fetch.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::ports::pair_source::{PairSource, SourceError};

/// Public API base, no key required.
const DEX_API_BASE: &str = "https://api.dexscreener.com/latest/dex";

/// Addresses per tokens-endpoint request.
const TOKEN_CHUNK_SIZE: usize = 20;

/// Delay between token chunks, keeps us well under the published limits.
const CHUNK_DELAY_MS: u64 = 200;

/// DexScreener client configuration
#[derive(Debug, Clone)]
pub struct DexScreenerConfig {
    /// Base URL for the DexScreener API
    pub api_base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for DexScreenerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEX_API_BASE.to_string(),
            timeout: Duration::from_secs(20),
        }
    }
}

/// DexScreener market-data client
#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    config: DexScreenerConfig,
    http: Client,
}

impl DexScreenerClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, SourceError> {
        Self::with_config(DexScreenerConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: DexScreenerConfig) -> Result<Self, SourceError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SourceError::RestError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Get the configured API base URL
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, SourceError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| SourceError::RestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::BadStatus(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| SourceError::ParseError(e.to_string()))
    }

    /// Pull the `pairs` array out of a response body, tolerating both a
    /// missing key and a non-array value.
    fn extract_pairs(body: Value) -> Vec<Value> {
        match body.get("pairs") {
            Some(Value::Array(pairs)) => pairs.clone(),
            _ => Vec::new(),
        }
    }

    fn filter_chains(pairs: Vec<Value>, chains: Option<&[String]>) -> Vec<Value> {
        let Some(chains) = chains else {
            return pairs;
        };
        let wanted: HashSet<String> = chains.iter().map(|c| c.to_lowercase()).collect();
        pairs
            .into_iter()
            .filter(|p| {
                p.get("chainId")
                    .and_then(Value::as_str)
                    .map(|c| wanted.contains(&c.to_lowercase()))
                    .unwrap_or(false)
            })
            .collect()
    }
}

#[async_trait]
impl PairSource for DexScreenerClient {
    async fn search_pairs(
        &self,
        query: &str,
        chains: Option<&[String]>,
    ) -> Result<Vec<Value>, SourceError> {
        let url = format!("{}/search", self.config.api_base_url);
        let body = self.get_json(&url, &[("q", query)]).await?;
        let pairs = Self::extract_pairs(body);
        tracing::debug!("Search '{}' returned {} pairs", query, pairs.len());
        Ok(Self::filter_chains(pairs, chains))
    }

    async fn pairs_for_tokens(&self, addresses: &[String]) -> Result<Vec<Value>, SourceError> {
        let mut results = Vec::new();

        for (i, chunk) in addresses.chunks(TOKEN_CHUNK_SIZE).enumerate() {
            if i > 0 {
                tokio::time::sleep(Duration::from_millis(CHUNK_DELAY_MS)).await;
            }

            let url = format!("{}/tokens/{}", self.config.api_base_url, chunk.join(","));
            match self.get_json(&url, &[]).await {
                Ok(body) => results.extend(Self::extract_pairs(body)),
                Err(e) => {
                    // Partial results beat an aborted run.
                    tracing::warn!("Token chunk fetch failed: {}", e);
                }
            }
        }

        Ok(results)
    }
}
