//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize as
//! plain strings, so they can be used directly as JSON map keys in the
//! persisted store layout.

pub mod fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// An asset ticker (e.g. `"BTC"`). Normalized to upper case on construction,
/// so `"btc"` and `"BTC"` address the same series.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// USDT spot instrument id, e.g. `BTC-USDT`.
    pub fn spot_pair(&self) -> String {
        format!("{}-USDT", self.0)
    }

    /// USDT perpetual swap instrument id, e.g. `BTC-USDT-SWAP`.
    pub fn swap_pair(&self) -> String {
        format!("{}-USDT-SWAP", self.0)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol::new(s))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol::new(s))
    }
}

// ─── MetricKind ──────────────────────────────────────────────────────────────

/// The category of a tracked reading. Opaque string key — the store never
/// interprets it — with constructors for the kinds the pollers write.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricKind(String);

impl MetricKind {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Open interest, contract-currency amount.
    pub fn oi_value() -> Self {
        Self("oi_value".to_string())
    }

    /// 24h perpetual volume, quote-currency notional.
    pub fn perp_volume() -> Self {
        Self("perp_volume".to_string())
    }

    /// Fear & Greed index reading (tracked under the `MARKET` pseudo-symbol).
    pub fn fear_greed() -> Self {
        Self("fear_greed".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MetricKind {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MetricKind {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for MetricKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MetricKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MetricKind(s))
    }
}
