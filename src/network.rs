//! Upstream API URL constants.

/// Default OKX public REST base URL.
pub const DEFAULT_EXCHANGE_API_URL: &str = "https://www.okx.com";

/// Default alternative.me base URL (Fear & Greed index).
pub const DEFAULT_SENTIMENT_API_URL: &str = "https://api.alternative.me";
