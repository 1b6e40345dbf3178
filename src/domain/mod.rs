//! Domain Layer - Core pipeline logic for the pair scanner
//!
//! This module contains pure transformation logic with no I/O:
//! raw DexScreener records come in as untyped JSON, canonical
//! `PairRecord`s come out. All external interactions happen through
//! the ports layer.

pub mod coerce;
pub mod age;
pub mod record;
pub mod best_pool;
pub mod normalize;
pub mod filter;
pub mod sort;

pub use record::{Boosts, Liquidity, MetricBuckets, PairInfo, PairRecord, SocialLink, TokenRef, TxnBuckets, TxnCounts, WebsiteLink};
pub use coerce::to_number;
pub use age::{age_hours, age_hours_at};
pub use best_pool::reduce_best_pool;
pub use normalize::normalize_pairs;
pub use filter::{apply_filters, apply_filters_at, FilterSpec};
pub use sort::{sort_records, SortKey, DEFAULT_SORT_KEY};
