//! Prune sweep loop behavior under a paused tokio clock.

#![cfg(feature = "http")]

use async_lock::RwLock;
use chrono::Utc;
use market_pulse::poll;
use market_pulse::prelude::*;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn prune_sweep_trims_stale_samples() {
    let btc = Symbol::from("BTC");
    let oi = MetricKind::oi_value();

    let store = Arc::new(RwLock::new(MetricStore::in_memory()));
    {
        let mut s = store.write().await;
        let now = Utc::now();
        s.record_at(&btc, &oi, 1.0, now - chrono::Duration::hours(30));
        s.record_at(&btc, &oi, 2.0, now);
    }

    let sweep = tokio::spawn(poll::run_prune_sweep(
        store.clone(),
        Duration::from_secs(3600),
    ));

    // The first tick fires immediately; give the loop a chance to run it.
    tokio::time::sleep(Duration::from_millis(50)).await;

    {
        let s = store.read().await;
        let series = s.series(&btc, &oi).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].value, 2.0);
    }

    sweep.abort();
}
