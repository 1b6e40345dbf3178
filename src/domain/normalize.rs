//! Pair Normalizer
//!
//! Maps raw DexScreener records (arbitrary, partially-missing JSON) into
//! the canonical `PairRecord` schema. No raw record is ever rejected for
//! malformation: unusable fields degrade to absent values or zero
//! defaults, and absent nested objects are treated as empty.

use std::collections::HashSet;

use serde_json::Value;

use crate::domain::coerce::to_number;
use crate::domain::record::{
    Boosts, Liquidity, MetricBuckets, PairInfo, PairRecord, SocialLink, TokenRef, TxnBuckets,
    TxnCounts, WebsiteLink,
};

/// Normalize raw records in input order, optionally deduplicating by
/// pair address (first occurrence of a non-empty address wins; records
/// with no address are never deduplicated against each other).
pub fn normalize_pairs(raw_pairs: &[Value], dedupe: bool) -> Vec<PairRecord> {
    let mut out = Vec::with_capacity(raw_pairs.len());
    let mut seen: HashSet<String> = HashSet::new();

    for raw in raw_pairs {
        let pair_address = pair_address_of(raw);
        if dedupe && !pair_address.is_empty() && !seen.insert(pair_address.clone()) {
            continue;
        }
        out.push(normalize_pair(raw, pair_address));
    }

    out
}

/// Pair address under either of its two upstream spellings, trimmed.
fn pair_address_of(raw: &Value) -> String {
    for key in ["pairAddress", "pair_address"] {
        let address = match raw.get(key) {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            _ => continue,
        };
        if !address.is_empty() {
            return address;
        }
    }
    String::new()
}

fn normalize_pair(raw: &Value, pair_address: String) -> PairRecord {
    let txns = raw.get("txns");
    let volume = raw.get("volume");
    let price_change = raw.get("priceChange");
    let liquidity = raw.get("liquidity");
    let info = raw.get("info");
    let boosts = raw.get("boosts");

    PairRecord {
        chain_id: opt_string(raw.get("chainId")),
        dex_id: opt_string(raw.get("dexId")),
        url: opt_string(raw.get("url")),
        pair_address,
        base_token: token_ref(raw.get("baseToken")),
        quote_token: token_ref(raw.get("quoteToken")),
        price_native: opt_string(raw.get("priceNative")),
        price_usd: opt_string(raw.get("priceUsd")),
        txns: TxnBuckets {
            m5: txn_bucket(txns, "m5"),
            h1: txn_bucket(txns, "h1"),
            h6: txn_bucket(txns, "h6"),
            h24: txn_bucket(txns, "h24"),
        },
        volume: metric_buckets(volume),
        price_change: metric_buckets(price_change),
        liquidity: Liquidity {
            usd: to_number(liquidity.and_then(|l| l.get("usd"))),
            base: to_number(liquidity.and_then(|l| l.get("base"))),
            quote: to_number(liquidity.and_then(|l| l.get("quote"))),
        },
        fdv: to_number(raw.get("fdv")),
        market_cap: to_number(raw.get("marketCap")),
        pair_created_at: to_number(raw.get("pairCreatedAt")).map(|ms| ms as i64),
        info: PairInfo {
            image_url: opt_string(info.and_then(|i| i.get("imageUrl"))),
            websites: website_links(info.and_then(|i| i.get("websites"))),
            socials: social_links(info.and_then(|i| i.get("socials"))),
        },
        boosts: Boosts {
            active: to_number(boosts.and_then(|b| b.get("active"))),
        },
        // Two alternate upstream spellings, first non-absent wins.
        trending_score: to_number(raw.get("trendScore"))
            .or_else(|| to_number(raw.get("trendingScore"))),
    }
}

fn opt_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn token_ref(token: Option<&Value>) -> TokenRef {
    TokenRef {
        address: opt_string(token.and_then(|t| t.get("address"))),
        name: opt_string(token.and_then(|t| t.get("name"))),
        symbol: opt_string(token.and_then(|t| t.get("symbol"))),
    }
}

/// One time bucket of buy/sell counts, zeroed when the bucket is absent.
fn txn_bucket(txns: Option<&Value>, window: &str) -> TxnCounts {
    txns.and_then(|t| t.get(window))
        .map(|bucket| TxnCounts {
            buys: bucket.get("buys").and_then(Value::as_u64).unwrap_or(0),
            sells: bucket.get("sells").and_then(Value::as_u64).unwrap_or(0),
        })
        .unwrap_or_default()
}

fn metric_buckets(metric: Option<&Value>) -> MetricBuckets {
    MetricBuckets {
        m5: to_number(metric.and_then(|m| m.get("m5"))),
        h1: to_number(metric.and_then(|m| m.get("h1"))),
        h6: to_number(metric.and_then(|m| m.get("h6"))),
        h24: to_number(metric.and_then(|m| m.get("h24"))),
    }
}

fn website_links(value: Option<&Value>) -> Vec<WebsiteLink> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| WebsiteLink {
                label: opt_string(item.get("label")),
                url: opt_string(item.get("url")),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn social_links(value: Option<&Value>) -> Vec<SocialLink> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| SocialLink {
                kind: opt_string(item.get("type")),
                url: opt_string(item.get("url")),
            })
            .collect(),
        _ => Vec::new(),
    }
}
