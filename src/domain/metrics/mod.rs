//! Metric history domain — rolling per-(symbol, metric) time series with
//! 24h delta lookups.

pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use store::MetricStore;

/// One timestamped observation. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// Result of a 24h delta lookup.
///
/// `current` is the latest reading when the series has at least two samples;
/// `change_percent` additionally needs a sample at least 24h old with a
/// non-zero value. Both absent means insufficient history.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Delta {
    pub current: Option<f64>,
    pub change_percent: Option<f64>,
}

/// Inline retention applied after each write, anchored at the just-recorded
/// timestamp. Double the comparison window so a prior-day anchor survives
/// irregular polling cadence.
pub const RECORD_RETENTION_HOURS: i64 = 48;

/// Default age bound for the periodic sweep. Tighter than the write-time
/// window; the asymmetry matches the observed upstream behavior.
pub const SWEEP_RETENTION_HOURS: i64 = 24;

/// Lookback used by delta computation.
pub const DELTA_WINDOW_HOURS: i64 = 24;
