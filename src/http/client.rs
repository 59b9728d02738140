//! Low-level HTTP client — `PulseHttp`.
//!
//! One method per upstream endpoint. Returns wire types (conversion to
//! domain types happens at the sub-client boundary). Internal — the
//! high-level client wraps this.

use crate::domain::market::wire::{
    ExchangeEnvelope, FundingRateRaw, OpenInterestRaw, TickerRaw,
};
use crate::domain::sentiment::wire::FearGreedResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level client for the two public upstream APIs: the exchange REST API
/// and the sentiment index. Everything this crate calls is an unauthenticated
/// GET.
#[derive(Clone)]
pub struct PulseHttp {
    exchange_url: String,
    sentiment_url: String,
    client: Client,
}

impl PulseHttp {
    pub fn new(exchange_url: &str, sentiment_url: &str) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(4)
            .build()?;

        Ok(Self {
            exchange_url: exchange_url.trim_end_matches('/').to_string(),
            sentiment_url: sentiment_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn exchange_url(&self) -> &str {
        &self.exchange_url
    }

    // ── Exchange endpoints ───────────────────────────────────────────────

    pub async fn get_ticker(
        &self,
        inst_id: &str,
    ) -> Result<ExchangeEnvelope<TickerRaw>, HttpError> {
        let url = format!(
            "{}/api/v5/market/ticker?instId={}",
            self.exchange_url, inst_id
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_funding_rate(
        &self,
        inst_id: &str,
    ) -> Result<ExchangeEnvelope<FundingRateRaw>, HttpError> {
        let url = format!(
            "{}/api/v5/public/funding-rate?instId={}",
            self.exchange_url, inst_id
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_open_interest(
        &self,
        inst_id: &str,
    ) -> Result<ExchangeEnvelope<OpenInterestRaw>, HttpError> {
        let url = format!(
            "{}/api/v5/public/open-interest?instType=SWAP&instId={}",
            self.exchange_url, inst_id
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Sentiment endpoints ──────────────────────────────────────────────

    pub async fn get_fear_greed(&self) -> Result<FearGreedResponse, HttpError> {
        let url = format!("{}/fng/", self.sentiment_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match retry {
            RetryPolicy::None => return self.do_get(url).await,
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => return Err(HttpError::Timeout),
            Err(e) => return Err(e.into()),
        };
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let status_code = status.as_u16();
        let body = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body)),
            429 => Err(HttpError::RateLimited { retry_after_ms: None }),
            400..=499 => Err(HttpError::BadRequest(body)),
            _ => Err(HttpError::ServerError { status: status_code, body }),
        }
    }
}
