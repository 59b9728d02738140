//! Sentiment sub-client — Fear & Greed index queries.

use crate::client::PulseClient;
use crate::domain::sentiment::FearGreed;
use crate::error::PulseError;

/// Sub-client for market sentiment.
pub struct Sentiment<'a> {
    pub(crate) client: &'a PulseClient,
}

impl Sentiment<'_> {
    /// The latest Fear & Greed index reading.
    pub async fn fear_greed(&self) -> Result<FearGreed, PulseError> {
        let resp = self.client.http.get_fear_greed().await?;
        let raw = resp
            .data
            .into_iter()
            .next()
            .ok_or_else(|| PulseError::NoData("fear & greed index".to_string()))?;
        raw.try_into().map_err(PulseError::Validation)
    }
}
