//! High-level client — `PulseClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder and accessor methods.

use crate::domain::market::client::MarketData;
use crate::domain::sentiment::client::Sentiment;
use crate::error::PulseError;
use crate::http::PulseHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::MarketData as MarketDataClient;
pub use crate::domain::sentiment::client::Sentiment as SentimentClient;

/// The primary entry point.
///
/// Provides nested sub-client accessors per domain: `client.market()`,
/// `client.sentiment()`.
///
/// The [`MetricStore`] is deliberately not embedded here — it is an
/// app-owned component constructed and injected by whatever layer answers
/// commands and runs the pollers.
///
/// [`MetricStore`]: crate::domain::metrics::MetricStore
#[derive(Clone)]
pub struct PulseClient {
    pub(crate) http: PulseHttp,
}

impl PulseClient {
    pub fn builder() -> PulseClientBuilder {
        PulseClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn market(&self) -> MarketData<'_> {
        MarketData { client: self }
    }

    pub fn sentiment(&self) -> Sentiment<'_> {
        Sentiment { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PulseClientBuilder {
    exchange_url: String,
    sentiment_url: String,
}

impl Default for PulseClientBuilder {
    fn default() -> Self {
        Self {
            exchange_url: crate::network::DEFAULT_EXCHANGE_API_URL.to_string(),
            sentiment_url: crate::network::DEFAULT_SENTIMENT_API_URL.to_string(),
        }
    }
}

impl PulseClientBuilder {
    pub fn exchange_url(mut self, url: &str) -> Self {
        self.exchange_url = url.to_string();
        self
    }

    pub fn sentiment_url(mut self, url: &str) -> Self {
        self.sentiment_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<PulseClient, PulseError> {
        Ok(PulseClient {
            http: PulseHttp::new(&self.exchange_url, &self.sentiment_url)?,
        })
    }
}
