//! Mock collaborators for tests
//!
//! Hand-rolled recording mocks: each one captures the calls it receives
//! and serves preconfigured responses.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::record::PairRecord;
use crate::ports::exporter::{ExportError, Exporter};
use crate::ports::pair_source::{PairSource, SourceError};

/// Mock pair source that records calls and serves canned raw records.
#[derive(Debug, Default)]
pub struct MockPairSource {
    search_pairs: Vec<Value>,
    token_pairs: Vec<Value>,
    fail_search: bool,
    fail_tokens: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPairSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the search response
    pub fn with_search_pairs(mut self, pairs: Vec<Value>) -> Self {
        self.search_pairs = pairs;
        self
    }

    /// Builder method to set the token-addresses response
    pub fn with_token_pairs(mut self, pairs: Vec<Value>) -> Self {
        self.token_pairs = pairs;
        self
    }

    /// Make every search call fail
    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    /// Make every token-addresses call fail
    pub fn failing_tokens(mut self) -> Self {
        self.fail_tokens = true;
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PairSource for MockPairSource {
    async fn search_pairs(
        &self,
        query: &str,
        _chains: Option<&[String]>,
    ) -> Result<Vec<Value>, SourceError> {
        self.calls.lock().unwrap().push(format!("search:{}", query));
        if self.fail_search {
            return Err(SourceError::RestError("mock search failure".into()));
        }
        Ok(self.search_pairs.clone())
    }

    async fn pairs_for_tokens(&self, addresses: &[String]) -> Result<Vec<Value>, SourceError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("tokens:{}", addresses.join(",")));
        if self.fail_tokens {
            return Err(SourceError::RestError("mock token failure".into()));
        }
        Ok(self.token_pairs.clone())
    }
}

/// Mock exporter that records what it was asked to write.
#[derive(Debug, Default)]
pub struct MockExporter {
    exports: Arc<Mutex<Vec<(PathBuf, Vec<PairRecord>)>>>,
}

impl MockExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded export calls
    pub fn get_exports(&self) -> Vec<(PathBuf, Vec<PairRecord>)> {
        self.exports.lock().unwrap().clone()
    }
}

impl Exporter for MockExporter {
    fn export(&self, records: &[PairRecord], destination: &Path) -> Result<(), ExportError> {
        self.exports
            .lock()
            .unwrap()
            .push((destination.to_path_buf(), records.to_vec()));
        Ok(())
    }
}
