//! Best-Pool Reducer
//!
//! A token usually trades in several pools across DEXes. When the caller
//! does not ask for every pool, the pipeline keeps only the deepest one
//! per base token: highest `liquidity.usd`, ties resolved in favor of the
//! record seen first. Lossy by design; skipped entirely in all-pools mode.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::coerce::to_number_or_zero;

/// Base token address used as the grouping key. Records without an
/// address share the empty-string group.
fn base_token_address(raw: &Value) -> String {
    raw.get("baseToken")
        .and_then(|t| t.get("address"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn liquidity_usd(raw: &Value) -> f64 {
    to_number_or_zero(raw.get("liquidity").and_then(|l| l.get("usd")))
}

/// Retain the highest-liquidity raw record per base-token address.
///
/// Output order is the first-appearance order of each token, not the
/// position of the record that ends up winning the group.
pub fn reduce_best_pool(raw_pairs: Vec<Value>) -> Vec<Value> {
    let mut slot_by_token: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<Value> = Vec::new();

    for pair in raw_pairs {
        let token = base_token_address(&pair);
        match slot_by_token.get(&token) {
            Some(&slot) => {
                // Strictly greater only: ties keep the first-seen record.
                if liquidity_usd(&pair) > liquidity_usd(&out[slot]) {
                    out[slot] = pair;
                }
            }
            None => {
                slot_by_token.insert(token, out.len());
                out.push(pair);
            }
        }
    }

    out
}
