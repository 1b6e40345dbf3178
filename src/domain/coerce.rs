//! Numeric Coercion
//!
//! Total conversion from arbitrary upstream JSON values to `f64`.
//! DexScreener fields arrive as numbers, numeric strings, or garbage;
//! every numeric read in the pipeline goes through `to_number` so a
//! malformed field degrades to "absent" instead of failing the record.

use serde_json::Value;

/// Convert an optional JSON value to `f64`.
///
/// Numbers pass through, strings are trimmed and parsed. Everything
/// else (null, bool, arrays, objects, missing) yields `None`. Never
/// panics.
pub fn to_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Like `to_number`, but absent values collapse to zero.
pub fn to_number_or_zero(value: Option<&Value>) -> f64 {
    to_number(value).unwrap_or(0.0)
}
