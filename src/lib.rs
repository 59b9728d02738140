//! # market-pulse
//!
//! Rolling 24-hour market-metric tracking over public crypto APIs, with
//! chat-ready text summaries.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain types, the [`MetricStore`]
//!    (disk-backed rolling time series with 24h deltas), formatting.
//! 2. **HTTP API** — `PulseHttp` with per-endpoint retry policies.
//! 3. **High-Level Client** — [`PulseClient`] with nested sub-clients
//!    (`market()`, `sentiment()`) returning rich domain types.
//! 4. **Polling** — periodic metric pulls and the prune sweep, driving an
//!    app-owned store.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use market_pulse::prelude::*;
//!
//! let client = PulseClient::builder().build()?;
//! let mut store = MetricStore::open("data/metrics.json");
//!
//! let btc = Symbol::from("btc");
//! let oi = client.market().open_interest(&btc).await?;
//! store.record(&btc, &MetricKind::oi_value(), oi.base_amount_f64());
//! let delta = store.delta_24h(&btc, &MetricKind::oi_value());
//! println!("{}", report::open_interest_summary(&btc, &oi, &delta));
//! ```
//!
//! [`MetricStore`]: domain::metrics::MetricStore
//! [`PulseClient`]: client::PulseClient

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Upstream API URL constants.
pub mod network;

/// Chat-ready text summaries of fetched metrics.
pub mod report;

/// Generic structured-file reader/writer used by the persistent stores.
pub(crate) mod persist;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client + Polling ─────────────────────────────────────

/// `PulseClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

/// Periodic metric pulls and the prune sweep.
#[cfg(feature = "http")]
pub mod poll;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{MetricKind, Symbol};

    // Metric store
    pub use crate::domain::metrics::{Delta, MetricStore, Sample};

    // Domain types — market
    pub use crate::domain::market::{FundingRate, OpenInterest, Ticker};

    // Domain types — sentiment
    pub use crate::domain::sentiment::FearGreed;

    // Domain types — tracker
    pub use crate::domain::tracker::{username_from_url, ProfileRegistry, TrackedProfile};

    // Report layer
    pub use crate::report::{self, Flair};

    // Errors
    pub use crate::error::{PulseError, StoreError};

    // Network
    pub use crate::network::{DEFAULT_EXCHANGE_API_URL, DEFAULT_SENTIMENT_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{MarketDataClient, PulseClient, PulseClientBuilder, SentimentClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
