#![allow(dead_code, unused_imports, unused_variables)]
//! Dexscan - DexScreener Pair Scanner Library
//!
//! Fetches DEX trading-pair listings from the DexScreener API, normalizes
//! them into a canonical schema, applies threshold filters, and exports
//! the curated result to JSON or CSV.
//!
//! # Modules
//!
//! - `domain`: Core pipeline logic (coercion, normalization, best-pool reduction, filtering, sorting)
//! - `ports`: Trait abstractions (PairSource, Exporter)
//! - `adapters`: External implementations (DexScreener client, exporters, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Scan orchestrator

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
