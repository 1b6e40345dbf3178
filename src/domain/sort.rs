//! Sort Engine
//!
//! Orders canonical records by a selectable key, descending, with absent
//! components substituted by zero. The sort is stable: ties keep their
//! relative input order. An unrecognized key is a pass-through, not an
//! error, so callers can feed config values straight in.

use crate::domain::record::PairRecord;

/// Default sort key used when the configuration names none.
pub const DEFAULT_SORT_KEY: &str = "volumeH24";

/// Recognized sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    VolumeH24,
    TxnsH24,
    Trending,
    Liquidity,
    PriceChangeH24,
}

impl SortKey {
    /// Case-insensitive key lookup; `None` for unrecognized names.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "volumeh24" => Some(Self::VolumeH24),
            "txnsh24" => Some(Self::TxnsH24),
            "trending" | "trendingscore" => Some(Self::Trending),
            "liquidity" => Some(Self::Liquidity),
            "pricechangeh24" => Some(Self::PriceChangeH24),
            _ => None,
        }
    }

    fn value(&self, record: &PairRecord) -> f64 {
        match self {
            Self::VolumeH24 => record.volume_h24(),
            Self::TxnsH24 => record.txns_h24_total() as f64,
            Self::Trending => record.trending(),
            Self::Liquidity => record.liquidity_usd(),
            Self::PriceChangeH24 => record.price_change_h24(),
        }
    }
}

/// Sort records descending by the named key. Unrecognized keys leave the
/// input order untouched.
pub fn sort_records(mut records: Vec<PairRecord>, sort_by: &str) -> Vec<PairRecord> {
    if let Some(key) = SortKey::parse(sort_by) {
        records.sort_by(|a, b| key.value(b).total_cmp(&key.value(a)));
    }
    records
}
