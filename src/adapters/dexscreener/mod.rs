//! DexScreener API adapter

mod client;

pub use client::{DexScreenerClient, DexScreenerConfig};
