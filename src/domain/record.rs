//! Canonical Pair Record
//!
//! Fixed-shape output schema of the normalizer. Every field the upstream
//! API may omit is either an `Option` or carries a zero default, so
//! downstream stages never have to guard against missing keys. The serde
//! renames reproduce the DexScreener camelCase wire names on export.

use serde::{Deserialize, Serialize};

/// A normalized DEX trading pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PairRecord {
    pub chain_id: Option<String>,
    pub dex_id: Option<String>,
    pub url: Option<String>,
    /// Trimmed pair contract address; empty when the source omitted it.
    pub pair_address: String,
    pub base_token: TokenRef,
    pub quote_token: TokenRef,
    pub price_native: Option<String>,
    pub price_usd: Option<String>,
    pub txns: TxnBuckets,
    pub volume: MetricBuckets,
    pub price_change: MetricBuckets,
    pub liquidity: Liquidity,
    pub fdv: Option<f64>,
    pub market_cap: Option<f64>,
    /// Pair creation time, milliseconds since epoch.
    pub pair_created_at: Option<i64>,
    pub info: PairInfo,
    pub boosts: Boosts,
    /// Convenience field for trending sorts.
    #[serde(rename = "_trendingScore")]
    pub trending_score: Option<f64>,
}

/// Token identity within a pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenRef {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// Buy/sell counts for one observation window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TxnCounts {
    pub buys: u64,
    pub sells: u64,
}

/// Transaction counts across the four fixed time buckets.
///
/// Every bucket is guaranteed present; absent source buckets become
/// `{buys: 0, sells: 0}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TxnBuckets {
    pub m5: TxnCounts,
    pub h1: TxnCounts,
    pub h6: TxnCounts,
    pub h24: TxnCounts,
}

/// Numeric metric (volume, price change) across the four time buckets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricBuckets {
    pub m5: Option<f64>,
    pub h1: Option<f64>,
    pub h6: Option<f64>,
    pub h24: Option<f64>,
}

/// Pool liquidity in USD plus base/quote token units.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Liquidity {
    pub usd: Option<f64>,
    pub base: Option<f64>,
    pub quote: Option<f64>,
}

/// Project links and imagery.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PairInfo {
    pub image_url: Option<String>,
    pub websites: Vec<WebsiteLink>,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteLink {
    pub label: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
}

/// DexScreener boost state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Boosts {
    pub active: Option<f64>,
}

impl PairRecord {
    /// Liquidity in USD, zero when absent.
    pub fn liquidity_usd(&self) -> f64 {
        self.liquidity.usd.unwrap_or(0.0)
    }

    /// 24-hour volume, zero when absent.
    pub fn volume_h24(&self) -> f64 {
        self.volume.h24.unwrap_or(0.0)
    }

    /// 24-hour price change, zero when absent.
    pub fn price_change_h24(&self) -> f64 {
        self.price_change.h24.unwrap_or(0.0)
    }

    /// Total 24-hour transactions (buys + sells).
    pub fn txns_h24_total(&self) -> u64 {
        self.txns.h24.buys + self.txns.h24.sells
    }

    /// Trending score, zero when absent.
    pub fn trending(&self) -> f64 {
        self.trending_score.unwrap_or(0.0)
    }
}
