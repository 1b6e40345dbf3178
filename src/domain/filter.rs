//! Filter Engine
//!
//! Threshold-based filtering of canonical records. Every threshold is a
//! lower bound (inclusive) except `maxAgeHours`, which is an upper bound
//! on pair age. A record with an unknown age always passes the age
//! filter; only a known age above the bound excludes it.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::age::age_hours_at;
use crate::domain::record::PairRecord;

/// Named numeric thresholds, deserialized from the config's camelCase
/// key names. Absent keys impose no bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub min_liquidity_usd: f64,
    pub min_volume_h24: f64,
    #[serde(rename = "minFdV")]
    pub min_fdv: f64,
    pub min_market_cap: f64,
    pub min_txns_h24: f64,
    pub max_age_hours: Option<f64>,
}

impl FilterSpec {
    /// All thresholds must be non-negative.
    pub fn validate(&self) -> Result<(), String> {
        let bounds = [
            ("minLiquidityUsd", self.min_liquidity_usd),
            ("minVolumeH24", self.min_volume_h24),
            ("minFdV", self.min_fdv),
            ("minMarketCap", self.min_market_cap),
            ("minTxnsH24", self.min_txns_h24),
        ];
        for (name, value) in bounds {
            if value < 0.0 {
                return Err(format!("{} must be >= 0, got {}", name, value));
            }
        }
        if let Some(max_age) = self.max_age_hours {
            if max_age < 0.0 {
                return Err(format!("maxAgeHours must be >= 0, got {}", max_age));
            }
        }
        Ok(())
    }
}

/// Filter against the current wall clock.
pub fn apply_filters(records: Vec<PairRecord>, spec: &FilterSpec) -> Vec<PairRecord> {
    apply_filters_at(records, spec, Utc::now().timestamp_millis())
}

/// Order-preserving subset of records meeting every threshold, with the
/// age bound evaluated against an explicit `now_ms`.
pub fn apply_filters_at(
    records: Vec<PairRecord>,
    spec: &FilterSpec,
    now_ms: i64,
) -> Vec<PairRecord> {
    if records.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| passes(record, spec, now_ms))
        .collect()
}

fn passes(record: &PairRecord, spec: &FilterSpec, now_ms: i64) -> bool {
    if record.liquidity_usd() < spec.min_liquidity_usd {
        return false;
    }
    if record.volume_h24() < spec.min_volume_h24 {
        return false;
    }
    if record.fdv.unwrap_or(0.0) < spec.min_fdv {
        return false;
    }
    if record.market_cap.unwrap_or(0.0) < spec.min_market_cap {
        return false;
    }
    if (record.txns_h24_total() as f64) < spec.min_txns_h24 {
        return false;
    }
    if let Some(max_age) = spec.max_age_hours {
        // Absent age passes; only a known age over the bound excludes.
        if let Some(age) = age_hours_at(record.pair_created_at, now_ms) {
            if age > max_age {
                return false;
            }
        }
    }
    true
}
