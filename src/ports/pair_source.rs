//! Pair Source Port
//!
//! Abstraction over the external market-data API. Implementations return
//! raw, untrusted JSON records; all shaping happens in the domain layer.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Pair source error type
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("REST API error: {0}")]
    RestError(String),

    #[error("Unexpected response status: {0}")]
    BadStatus(u16),

    #[error("Data parsing error: {0}")]
    ParseError(String),
}

/// Source of raw pair records.
#[async_trait]
pub trait PairSource: Send + Sync {
    /// Search pairs by free-text query, optionally restricted to a set
    /// of chain ids (matched case-insensitively).
    async fn search_pairs(
        &self,
        query: &str,
        chains: Option<&[String]>,
    ) -> Result<Vec<Value>, SourceError>;

    /// Fetch pairs for a list of token addresses.
    async fn pairs_for_tokens(&self, addresses: &[String]) -> Result<Vec<Value>, SourceError>;
}
