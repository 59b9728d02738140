//! Periodic pollers — the hourly metric pull and the prune sweep.
//!
//! Both loops run forever and never propagate errors: a failed fetch for one
//! symbol is logged and the cycle moves on, so a flaky upstream cannot take
//! the surrounding bot down.

use crate::client::PulseClient;
use crate::domain::metrics::{MetricStore, SWEEP_RETENTION_HOURS};
use crate::shared::{MetricKind, Symbol};

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

/// Default cadence for the metric pull.
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(60 * 60);

/// Default cadence for the prune sweep.
pub const DEFAULT_SWEEP_PERIOD: Duration = Duration::from_secs(60 * 60);

/// Fetch perpetual volume and open interest for each symbol and record both
/// into the store. Per-symbol failures are logged and skipped.
pub async fn pull_metrics_once(
    client: &PulseClient,
    store: &RwLock<MetricStore>,
    symbols: &[Symbol],
) {
    for symbol in symbols {
        match client.market().swap_ticker(symbol).await {
            Ok(ticker) => {
                store.write().await.record(
                    symbol,
                    &MetricKind::perp_volume(),
                    ticker.vol_ccy_24h_f64(),
                );
            }
            Err(err) => {
                tracing::warn!(%symbol, error = %err, "perp ticker pull failed");
            }
        }

        match client.market().open_interest(symbol).await {
            Ok(oi) => {
                store.write().await.record(
                    symbol,
                    &MetricKind::oi_value(),
                    oi.base_amount_f64(),
                );
            }
            Err(err) => {
                tracing::warn!(%symbol, error = %err, "open interest pull failed");
            }
        }
    }
}

/// Pull metrics for `symbols` on a fixed period, starting immediately.
pub async fn run_metric_poller(
    client: PulseClient,
    store: Arc<RwLock<MetricStore>>,
    symbols: Vec<Symbol>,
    period: Duration,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        tracing::debug!(symbols = symbols.len(), "metric pull cycle");
        pull_metrics_once(&client, &store, &symbols).await;
    }
}

/// Prune every series to the sweep retention window on a fixed period.
///
/// Decoupled from individual writes so series for symbols that are polled
/// infrequently still get trimmed; the store persists once per sweep.
pub async fn run_prune_sweep(store: Arc<RwLock<MetricStore>>, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        store
            .write()
            .await
            .prune(chrono::Duration::hours(SWEEP_RETENTION_HOURS));
    }
}
