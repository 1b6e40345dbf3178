//! Pair Age Calculator
//!
//! Converts a `pairCreatedAt` millisecond timestamp into elapsed hours.
//! The wall clock is the one non-deterministic input of the pipeline, so
//! the "now" reference is injectable for tests.

use chrono::Utc;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Hours elapsed between `timestamp_ms` and `now_ms`.
///
/// Missing or zero timestamps yield `None`. Future timestamps are
/// clamped to zero hours, never negative.
pub fn age_hours_at(timestamp_ms: Option<i64>, now_ms: i64) -> Option<f64> {
    let ts = timestamp_ms?;
    if ts == 0 {
        return None;
    }
    let delta_ms = (now_ms - ts).max(0);
    Some(delta_ms as f64 / MS_PER_HOUR)
}

/// Hours elapsed since `timestamp_ms`, measured against the current wall clock.
pub fn age_hours(timestamp_ms: Option<i64>) -> Option<f64> {
    age_hours_at(timestamp_ms, Utc::now().timestamp_millis())
}
