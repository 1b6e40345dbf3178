//! Pair Pipeline Integration Tests
//!
//! Integration tests that verify the scan components work together:
//! 1. PairSource -> ScanOrchestrator fetch flow
//! 2. Best-pool reduction, dedupe, filtering, sorting, and limiting in sequence
//! 3. Exporter integration (JSON and CSV files on disk)
//!
//! All tests are deterministic (no real network calls) and use mock data.

use serde_json::{json, Value};
use tempfile::tempdir;

use dexscan::adapters::export::exporter_for;
use dexscan::application::{PipelineError, ScanOrchestrator, ScanRequest};
use dexscan::domain::{FilterSpec, PairRecord};
use dexscan::ports::exporter::OutputFormat;
use dexscan::ports::mocks::{MockExporter, MockPairSource};
use dexscan::ports::Exporter;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Create a raw pool for a base token with the metrics the pipeline reads
fn raw_pool(token: &str, pair: &str, liquidity_usd: f64, volume_h24: f64) -> Value {
    json!({
        "chainId": "solana",
        "dexId": "raydium",
        "pairAddress": pair,
        "baseToken": {"address": token, "name": "Token", "symbol": "TKN"},
        "quoteToken": {"address": "So11111111111111111111111111111111111111112", "symbol": "SOL"},
        "priceUsd": "0.042",
        "txns": {"h24": {"buys": 40, "sells": 10}},
        "volume": {"h24": volume_h24},
        "liquidity": {"usd": liquidity_usd},
    })
}

fn addresses(records: &[PairRecord]) -> Vec<&str> {
    records.iter().map(|r| r.pair_address.as_str()).collect()
}

fn default_request() -> ScanRequest {
    ScanRequest {
        query: Some("TKN".to_string()),
        ..Default::default()
    }
}

// ============================================================================
// Test Module: Source -> Orchestrator Flow
// ============================================================================

mod fetch_flow {
    use super::*;

    /// Test: search and token lookups are combined into one raw set
    #[tokio::test]
    async fn test_search_and_token_results_combine() {
        let source = MockPairSource::new()
            .with_search_pairs(vec![raw_pool("A", "P1", 100.0, 500.0)])
            .with_token_pairs(vec![raw_pool("B", "P2", 100.0, 900.0)]);
        let orchestrator = ScanOrchestrator::new(source);

        let request = ScanRequest {
            query: Some("TKN".to_string()),
            token_addresses: vec!["0xB".to_string()],
            ..Default::default()
        };

        let records = orchestrator.run(&request).await.unwrap();
        assert_eq!(addresses(&records), ["P2", "P1"]);
    }

    /// Test: a failed search still lets token results through
    #[tokio::test]
    async fn test_partial_failure_yields_partial_results() {
        let source = MockPairSource::new()
            .failing_search()
            .with_token_pairs(vec![raw_pool("B", "P2", 100.0, 900.0)]);
        let orchestrator = ScanOrchestrator::new(source);

        let request = ScanRequest {
            query: Some("TKN".to_string()),
            token_addresses: vec!["0xB".to_string()],
            ..Default::default()
        };

        let records = orchestrator.run(&request).await.unwrap();
        assert_eq!(addresses(&records), ["P2"]);
    }

    /// Test: an entirely empty fetch is a NoData error, not an empty export
    #[tokio::test]
    async fn test_empty_fetch_is_no_data() {
        let orchestrator = ScanOrchestrator::new(MockPairSource::new());
        let result = orchestrator.run(&default_request()).await;
        assert!(matches!(result, Err(PipelineError::NoData)));
    }

    /// Test: token addresses are only requested when the list is non-empty
    #[tokio::test]
    async fn test_no_token_call_without_addresses() {
        let source = MockPairSource::new().with_search_pairs(vec![raw_pool("A", "P1", 1.0, 1.0)]);
        let orchestrator = ScanOrchestrator::new(source);

        orchestrator.run(&default_request()).await.unwrap();

        let calls = orchestrator.source().get_calls();
        assert_eq!(calls, vec!["search:TKN".to_string()]);
    }
}

// ============================================================================
// Test Module: Full Pipeline Semantics
// ============================================================================

mod pipeline_semantics {
    use super::*;

    /// Test: end-to-end over a multi-pool, multi-token raw set.
    /// Token A has pools P1 (liq 50) and P2 (liq 500); token B has P3
    /// (liq 10). Best-pool keeps P2 and P3, the liquidity filter drops
    /// P3, and only P2 survives.
    #[tokio::test]
    async fn test_best_pool_filter_sort_limit_compose() {
        let source = MockPairSource::new().with_token_pairs(vec![
            raw_pool("0xT", "P1", 50.0, 100.0),
            raw_pool("0xT", "P2", 500.0, 100.0),
            raw_pool("0xU", "P3", 10.0, 100.0),
        ]);
        let orchestrator = ScanOrchestrator::new(source);

        let request = ScanRequest {
            token_addresses: vec!["0xT".to_string(), "0xU".to_string()],
            filters: FilterSpec {
                min_liquidity_usd: 20.0,
                ..Default::default()
            },
            sort_by: "liquidity".to_string(),
            limit: 10,
            ..Default::default()
        };

        let records = orchestrator.run(&request).await.unwrap();
        assert_eq!(addresses(&records), ["P2"]);
        assert_eq!(records[0].liquidity_usd(), 500.0);
    }

    /// Test: all-pools mode keeps every pool of a token
    #[tokio::test]
    async fn test_all_pools_keeps_every_pool() {
        let source = MockPairSource::new().with_search_pairs(vec![
            raw_pool("0xT", "P1", 50.0, 100.0),
            raw_pool("0xT", "P2", 500.0, 100.0),
        ]);
        let orchestrator = ScanOrchestrator::new(source);

        let request = ScanRequest {
            all_pools: true,
            sort_by: "liquidity".to_string(),
            ..default_request()
        };

        let records = orchestrator.run(&request).await.unwrap();
        assert_eq!(addresses(&records), ["P2", "P1"]);
    }

    /// Test: duplicate pair addresses collapse to the first occurrence
    #[tokio::test]
    async fn test_dedupe_across_sources() {
        let source = MockPairSource::new()
            .with_search_pairs(vec![raw_pool("A", "P1", 100.0, 500.0)])
            .with_token_pairs(vec![raw_pool("B", "P1", 100.0, 900.0)]);
        let orchestrator = ScanOrchestrator::new(source);

        let request = ScanRequest {
            query: Some("TKN".to_string()),
            token_addresses: vec!["0xB".to_string()],
            all_pools: true,
            ..Default::default()
        };

        let records = orchestrator.run(&request).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].volume_h24(), 500.0);
    }

    /// Test: everything filtered out is an Ok(empty), not NoData
    #[tokio::test]
    async fn test_filtered_to_nothing_is_empty_not_no_data() {
        let source = MockPairSource::new().with_search_pairs(vec![raw_pool("A", "P1", 5.0, 1.0)]);
        let orchestrator = ScanOrchestrator::new(source);

        let request = ScanRequest {
            filters: FilterSpec {
                min_liquidity_usd: 1_000_000.0,
                ..Default::default()
            },
            ..default_request()
        };

        let records = orchestrator.run(&request).await.unwrap();
        assert!(records.is_empty());
    }

    /// Test: limit truncates after the descending sort
    #[tokio::test]
    async fn test_limit_keeps_top_of_sorted_order() {
        let source = MockPairSource::new().with_search_pairs(vec![
            raw_pool("A", "low", 1.0, 10.0),
            raw_pool("B", "high", 1.0, 1000.0),
            raw_pool("C", "mid", 1.0, 100.0),
        ]);
        let orchestrator = ScanOrchestrator::new(source);

        let request = ScanRequest {
            limit: 2,
            ..default_request()
        };

        let records = orchestrator.run(&request).await.unwrap();
        assert_eq!(addresses(&records), ["high", "mid"]);
    }

    /// Test: an unrecognized sort key leaves the filtered order untouched
    #[tokio::test]
    async fn test_unknown_sort_key_passes_through() {
        let source = MockPairSource::new().with_search_pairs(vec![
            raw_pool("A", "first", 1.0, 10.0),
            raw_pool("B", "second", 1.0, 1000.0),
        ]);
        let orchestrator = ScanOrchestrator::new(source);

        let request = ScanRequest {
            sort_by: "marketCap".to_string(),
            ..default_request()
        };

        let records = orchestrator.run(&request).await.unwrap();
        assert_eq!(addresses(&records), ["first", "second"]);
    }
}

// ============================================================================
// Test Module: Export Integration
// ============================================================================

mod export_integration {
    use super::*;

    /// Test: pipeline output round-trips through the JSON exporter
    #[tokio::test]
    async fn test_pipeline_to_json_file() {
        let source = MockPairSource::new().with_search_pairs(vec![
            raw_pool("A", "P1", 100.0, 500.0),
            raw_pool("B", "P2", 100.0, 900.0),
        ]);
        let orchestrator = ScanOrchestrator::new(source);
        let records = orchestrator.run(&default_request()).await.unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");
        exporter_for(OutputFormat::Json)
            .export(&records, &path)
            .unwrap();

        let written: Vec<Value> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0]["pairAddress"], "P2");
        assert_eq!(written[1]["pairAddress"], "P1");
    }

    /// Test: pipeline output lands in a CSV with flattened columns
    #[tokio::test]
    async fn test_pipeline_to_csv_file() {
        let source =
            MockPairSource::new().with_search_pairs(vec![raw_pool("A", "P1", 100.0, 500.0)]);
        let orchestrator = ScanOrchestrator::new(source);
        let records = orchestrator.run(&default_request()).await.unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        exporter_for(OutputFormat::Csv)
            .export(&records, &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("pairAddress"));
        assert!(header.contains("liquidity.usd"));
        assert_eq!(lines.count(), 1);
    }

    /// Test: the exporter port can be swapped for a recording mock
    #[tokio::test]
    async fn test_mock_exporter_receives_pipeline_output() {
        let source =
            MockPairSource::new().with_search_pairs(vec![raw_pool("A", "P1", 100.0, 500.0)]);
        let orchestrator = ScanOrchestrator::new(source);
        let records = orchestrator.run(&default_request()).await.unwrap();

        let exporter = MockExporter::new();
        exporter
            .export(&records, std::path::Path::new("out.json"))
            .unwrap();

        let exports = exporter.get_exports();
        assert_eq!(exports.len(), 1);
        assert_eq!(exports[0].1[0].pair_address, "P1");
    }
}
