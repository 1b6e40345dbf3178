//! Scan Orchestrator
//!
//! Composes the pipeline: fetch raw records from the pair source, reduce
//! to the best pool per token (unless all-pools mode), normalize, filter,
//! sort, and truncate. Individual source failures are logged and the run
//! continues with partial results; only a fully empty fetch is escalated,
//! as a distinct signal, so the caller can decide on a fallback.

use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::domain::best_pool::reduce_best_pool;
use crate::domain::filter::{apply_filters, FilterSpec};
use crate::domain::normalize::normalize_pairs;
use crate::domain::record::PairRecord;
use crate::domain::sort::{sort_records, DEFAULT_SORT_KEY};
use crate::ports::pair_source::PairSource;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// No source call yielded any raw records. Distinct from an empty
    /// filtered result, which is a legitimate outcome.
    #[error("no pairs returned from any source")]
    NoData,
}

/// One pipeline invocation's inputs and knobs.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Free-text search query, if any
    pub query: Option<String>,
    /// Chain filter applied to search results
    pub chains: Option<Vec<String>>,
    /// Token addresses to look up, if any
    pub token_addresses: Vec<String>,
    /// Keep every pool instead of the best one per token
    pub all_pools: bool,
    /// Deduplicate by pair address during normalization
    pub dedupe: bool,
    /// Threshold filters
    pub filters: FilterSpec,
    /// Sort key (unrecognized keys leave input order untouched)
    pub sort_by: String,
    /// Maximum records in the result; zero or negative means unlimited
    pub limit: i64,
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self {
            query: None,
            chains: None,
            token_addresses: Vec::new(),
            all_pools: false,
            dedupe: true,
            filters: FilterSpec::default(),
            sort_by: DEFAULT_SORT_KEY.to_string(),
            limit: 150,
        }
    }
}

impl ScanRequest {
    /// Build a request from loaded configuration plus the resolved
    /// token-address list.
    pub fn from_config(config: &Config, token_addresses: Vec<String>) -> Self {
        Self {
            query: config.source.query.clone(),
            chains: config.source.chains.clone(),
            token_addresses,
            all_pools: config.source.all_pools,
            dedupe: config.pipeline.dedupe,
            filters: config.filters.clone(),
            sort_by: config.pipeline.sort_by.clone(),
            limit: config.pipeline.limit,
        }
    }
}

/// Coordinates the pair source with the domain pipeline.
pub struct ScanOrchestrator<S: PairSource> {
    source: S,
}

impl<S: PairSource> ScanOrchestrator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Access the underlying source (tests inspect recorded calls).
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch raw records and run the full pipeline.
    pub async fn run(&self, request: &ScanRequest) -> Result<Vec<PairRecord>, PipelineError> {
        let raw = self.fetch_raw(request).await;
        if raw.is_empty() {
            return Err(PipelineError::NoData);
        }
        Ok(Self::process(raw, request))
    }

    /// Gather raw records from every configured source call. Each call
    /// is independent: a failure is logged and the others still count.
    async fn fetch_raw(&self, request: &ScanRequest) -> Vec<Value> {
        let mut raw: Vec<Value> = Vec::new();

        if let Some(query) = request.query.as_deref() {
            tracing::info!("Fetching pairs by search query: {}", query);
            match self.source.search_pairs(query, request.chains.as_deref()).await {
                Ok(pairs) => raw.extend(pairs),
                Err(e) => tracing::warn!("Search query fetch failed: {}", e),
            }
        }

        if !request.token_addresses.is_empty() {
            tracing::info!(
                "Fetching pairs by token addresses ({})",
                request.token_addresses.len()
            );
            match self.source.pairs_for_tokens(&request.token_addresses).await {
                Ok(pairs) => raw.extend(pairs),
                Err(e) => tracing::warn!("Token address fetch failed: {}", e),
            }
        }

        raw
    }

    /// Offline pipeline stages over already-fetched raw records. Also
    /// used by callers that bring their own raw data (fallback samples,
    /// local captures).
    pub fn process(raw: Vec<Value>, request: &ScanRequest) -> Vec<PairRecord> {
        let total = raw.len();

        let raw = if request.all_pools {
            raw
        } else {
            reduce_best_pool(raw)
        };

        tracing::info!("Normalizing {} raw pairs ({} fetched)", raw.len(), total);
        let records = normalize_pairs(&raw, request.dedupe);

        let records = apply_filters(records, &request.filters);
        tracing::info!("{} records after filtering", records.len());

        let mut records = sort_records(records, &request.sort_by);

        if request.limit > 0 {
            records.truncate(request.limit as usize);
        }
        records
    }
}
