//! Sentiment domain — the Crypto Fear & Greed index.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};

/// One Fear & Greed index reading.
#[derive(Debug, Clone, PartialEq)]
pub struct FearGreed {
    /// Index value, 0 (extreme fear) to 100 (extreme greed).
    pub value: u32,
    /// Upstream's label, e.g. `"Fear"`.
    pub classification: String,
    /// When the reading was published, if the upstream sent a usable
    /// timestamp.
    pub timestamp: Option<DateTime<Utc>>,
}

impl TryFrom<wire::FearGreedRaw> for FearGreed {
    type Error = String;

    fn try_from(raw: wire::FearGreedRaw) -> Result<Self, Self::Error> {
        let value = raw
            .value
            .parse::<u32>()
            .map_err(|_| format!("bad index value: {:?}", raw.value))?;
        let timestamp = raw
            .timestamp
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));
        Ok(Self {
            value,
            classification: raw.value_classification,
            timestamp,
        })
    }
}
