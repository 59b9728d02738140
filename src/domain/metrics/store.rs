//! Disk-backed rolling metric store.

use super::{Delta, Sample, DELTA_WINDOW_HOURS, RECORD_RETENTION_HOURS};
use crate::error::StoreError;
use crate::persist;
use crate::shared::{MetricKind, Symbol};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::path::PathBuf;

pub(crate) type SeriesMap = HashMap<Symbol, HashMap<MetricKind, Vec<Sample>>>;

/// In-memory, disk-backed rolling time series per (symbol, metric) pair.
///
/// App-owned: construct one with [`MetricStore::open`] and hand it to
/// whatever layer records polls and answers queries — there is no global
/// instance. Keys are created lazily on first write, never by a read, and
/// a pruned-empty series keeps its key.
///
/// Every successful `record` rewrites the whole store file synchronously, so
/// a `delta_24h` issued after a `record` always observes the just-written
/// sample. Persistence failures are logged and swallowed: the store degrades
/// to "changes not durable" rather than failing its caller.
pub struct MetricStore {
    path: Option<PathBuf>,
    data: SeriesMap,
}

impl MetricStore {
    /// Open a store backed by the JSON file at `path`.
    ///
    /// A missing file is the normal first run; a corrupt one is logged and
    /// treated the same way. Either loads as an empty store — this never
    /// fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match persist::read(&path) {
            Ok(data) => data,
            Err(err) if err.is_missing_file() => {
                tracing::debug!(path = %path.display(), "no persisted metrics, starting empty");
                SeriesMap::new()
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load persisted metrics, starting empty"
                );
                SeriesMap::new()
            }
        };
        Self { path: Some(path), data }
    }

    /// A store with no backing file. Mutations stay in memory.
    pub fn in_memory() -> Self {
        Self { path: None, data: SeriesMap::new() }
    }

    // ── Writes ───────────────────────────────────────────────────────────

    /// Append a sample timestamped now. See [`MetricStore::record_at`].
    pub fn record(&mut self, symbol: &Symbol, metric: &MetricKind, value: f64) {
        self.record_at(symbol, metric, value, Utc::now());
    }

    /// Append a sample, trim that one series to the write-time retention
    /// window anchored at `timestamp`, and persist the whole store.
    ///
    /// Appends are assumed chronological; the series stays sorted by
    /// insertion order. Never fails visibly — persist errors are logged.
    pub fn record_at(
        &mut self,
        symbol: &Symbol,
        metric: &MetricKind,
        value: f64,
        timestamp: DateTime<Utc>,
    ) {
        let series = self
            .data
            .entry(symbol.clone())
            .or_default()
            .entry(metric.clone())
            .or_default();
        series.push(Sample { value, timestamp });

        let cutoff = timestamp - Duration::hours(RECORD_RETENTION_HOURS);
        series.retain(|s| s.timestamp > cutoff);

        self.persist_quietly();
    }

    /// Drop every sample older than `max_age` from every series, then
    /// persist once.
    ///
    /// This is the periodic sweep, decoupled from any individual write so
    /// infrequently-polled symbols still get trimmed. The default sweep age
    /// ([`super::SWEEP_RETENTION_HOURS`]) is tighter than the write-time
    /// window.
    pub fn prune(&mut self, max_age: Duration) {
        self.prune_at(max_age, Utc::now());
    }

    /// [`MetricStore::prune`] with an explicit clock.
    pub fn prune_at(&mut self, max_age: Duration, now: DateTime<Utc>) {
        let cutoff = now - max_age;
        for metrics in self.data.values_mut() {
            for series in metrics.values_mut() {
                series.retain(|s| s.timestamp > cutoff);
            }
        }
        self.persist_quietly();
    }

    // ── Reads ────────────────────────────────────────────────────────────

    /// 24h delta for a series, relative to now. See
    /// [`MetricStore::delta_24h_at`].
    pub fn delta_24h(&self, symbol: &Symbol, metric: &MetricKind) -> Delta {
        self.delta_24h_at(symbol, metric, Utc::now())
    }

    /// Latest reading plus percent change against the most recent sample at
    /// least 24h old.
    ///
    /// The historical anchor is the nearest prior sample, never an
    /// interpolated value, so the effective comparison age drifts between
    /// 24h and 24h + the polling interval. An unknown key or a series with
    /// fewer than two samples yields neither value; a missing or zero-valued
    /// anchor yields the current reading with no percentage. Read-only.
    pub fn delta_24h_at(
        &self,
        symbol: &Symbol,
        metric: &MetricKind,
        now: DateTime<Utc>,
    ) -> Delta {
        let Some(series) = self.data.get(symbol).and_then(|m| m.get(metric)) else {
            return Delta::default();
        };
        if series.len() < 2 {
            return Delta::default();
        }

        let current = series[series.len() - 1].value;
        let target = now - Duration::hours(DELTA_WINDOW_HOURS);

        // Newest-to-oldest scan, excluding the latest sample.
        let historical = series[..series.len() - 1]
            .iter()
            .rev()
            .find(|s| s.timestamp <= target)
            .map(|s| s.value);

        let change_percent = match historical {
            Some(h) if h != 0.0 => Some((current - h) / h * 100.0),
            _ => None,
        };

        Delta { current: Some(current), change_percent }
    }

    /// The raw series for a key, oldest first.
    pub fn series(&self, symbol: &Symbol, metric: &MetricKind) -> Option<&[Sample]> {
        self.data
            .get(symbol)
            .and_then(|m| m.get(metric))
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // ── Persistence ──────────────────────────────────────────────────────

    /// Write the store to its backing file, surfacing the error.
    ///
    /// The mutating operations persist on their own and swallow failures;
    /// this is for callers that want to know.
    pub fn flush(&self) -> Result<(), StoreError> {
        match &self.path {
            Some(path) => persist::write(path, &self.data),
            None => Ok(()),
        }
    }

    fn persist_quietly(&self) {
        let Some(path) = &self.path else { return };
        if let Err(err) = persist::write(path, &self.data) {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "failed to persist metric store"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn hours(h: i64) -> Duration {
        Duration::hours(h)
    }

    fn btc() -> Symbol {
        Symbol::from("BTC")
    }

    fn oi() -> MetricKind {
        MetricKind::oi_value()
    }

    #[test]
    fn test_append_keeps_timestamp_order() {
        let mut store = MetricStore::in_memory();
        for h in 0..5 {
            store.record_at(&btc(), &oi(), h as f64, t0() + hours(h));
        }
        let series = store.series(&btc(), &oi()).unwrap();
        assert_eq!(series.len(), 5);
        assert!(series.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn test_record_trims_beyond_48h() {
        let mut store = MetricStore::in_memory();
        store.record_at(&btc(), &oi(), 1.0, t0());
        store.record_at(&btc(), &oi(), 2.0, t0() + hours(10));
        store.record_at(&btc(), &oi(), 3.0, t0() + hours(49));

        let series = store.series(&btc(), &oi()).unwrap();
        assert_eq!(series.len(), 2);
        let newest = series.last().unwrap().timestamp;
        assert!(series.iter().all(|s| newest - s.timestamp <= hours(48)));
    }

    #[test]
    fn test_record_only_trims_the_written_series() {
        let mut store = MetricStore::in_memory();
        store.record_at(&btc(), &MetricKind::perp_volume(), 9.0, t0());
        store.record_at(&btc(), &oi(), 1.0, t0() + hours(72));

        // The volume series was not touched by the oi write.
        assert_eq!(store.series(&btc(), &MetricKind::perp_volume()).unwrap().len(), 1);
        assert_eq!(store.series(&btc(), &oi()).unwrap().len(), 1);
    }

    #[test]
    fn test_prune_bounds_all_series() {
        let mut store = MetricStore::in_memory();
        store.record_at(&btc(), &oi(), 1.0, t0());
        store.record_at(&btc(), &oi(), 2.0, t0() + hours(30));
        store.record_at(&Symbol::from("ETH"), &oi(), 3.0, t0() + hours(2));

        let now = t0() + hours(30);
        store.prune_at(hours(24), now);

        for (symbol, metric) in [(btc(), oi()), (Symbol::from("ETH"), oi())] {
            for s in store.series(&symbol, &metric).unwrap() {
                assert!(now - s.timestamp <= hours(24));
            }
        }
        assert_eq!(store.series(&btc(), &oi()).unwrap().len(), 1);
    }

    #[test]
    fn test_prune_keeps_emptied_keys() {
        let mut store = MetricStore::in_memory();
        store.record_at(&btc(), &oi(), 1.0, t0());
        store.prune_at(hours(1), t0() + hours(48));

        let series = store.series(&btc(), &oi()).unwrap();
        assert!(series.is_empty());
        assert!(!store.is_empty());
    }

    #[test]
    fn test_delta_unknown_key() {
        let store = MetricStore::in_memory();
        let delta = store.delta_24h_at(&btc(), &oi(), t0());
        assert_eq!(delta, Delta::default());
    }

    #[test]
    fn test_delta_insufficient_history() {
        let mut store = MetricStore::in_memory();
        store.record_at(&btc(), &oi(), 1000.0, t0());
        let delta = store.delta_24h_at(&btc(), &oi(), t0());
        assert_eq!(delta.current, None);
        assert_eq!(delta.change_percent, None);
    }

    #[test]
    fn test_delta_no_anchor_yet() {
        // A series whose samples are all younger than 24h reports the
        // current value with no percentage.
        let mut store = MetricStore::in_memory();
        store.record_at(&btc(), &oi(), 1000.0, t0());
        store.record_at(&btc(), &oi(), 1100.0, t0() + hours(1));
        let delta = store.delta_24h_at(&btc(), &oi(), t0() + hours(1));
        assert_eq!(delta.current, Some(1100.0));
        assert_eq!(delta.change_percent, None);
    }

    #[test]
    fn test_delta_nearest_prior_anchor() {
        // Samples at t=0 (100), t=23h (150), t=25h (200); query at t=25h.
        // t=23h is younger than 24h, so the anchor is t=0.
        let mut store = MetricStore::in_memory();
        store.record_at(&btc(), &oi(), 100.0, t0());
        store.record_at(&btc(), &oi(), 150.0, t0() + hours(23));
        store.record_at(&btc(), &oi(), 200.0, t0() + hours(25));

        let delta = store.delta_24h_at(&btc(), &oi(), t0() + hours(25));
        assert_eq!(delta.current, Some(200.0));
        assert_eq!(delta.change_percent, Some(100.0));
    }

    #[test]
    fn test_delta_basic_percentage() {
        let mut store = MetricStore::in_memory();
        store.record_at(&btc(), &oi(), 100.0, t0());
        store.record_at(&btc(), &oi(), 120.0, t0() + hours(25));

        let delta = store.delta_24h_at(&btc(), &oi(), t0() + hours(25));
        assert_eq!(delta.current, Some(120.0));
        assert_eq!(delta.change_percent, Some(20.0));
    }

    #[test]
    fn test_delta_zero_anchor_guard() {
        let mut store = MetricStore::in_memory();
        store.record_at(&btc(), &oi(), 0.0, t0());
        store.record_at(&btc(), &oi(), 50.0, t0() + hours(25));

        let delta = store.delta_24h_at(&btc(), &oi(), t0() + hours(25));
        assert_eq!(delta.current, Some(50.0));
        assert_eq!(delta.change_percent, None);
    }

    #[test]
    fn test_delta_excludes_latest_sample_from_scan() {
        // A single old sample plus the latest: the latest must not anchor
        // itself even though it satisfies no age constraint.
        let mut store = MetricStore::in_memory();
        store.record_at(&btc(), &oi(), 80.0, t0());
        store.record_at(&btc(), &oi(), 100.0, t0() + hours(25));

        let delta = store.delta_24h_at(&btc(), &oi(), t0() + hours(50));
        // Both samples are now older than 24h; the anchor is the first one.
        assert_eq!(delta.current, Some(100.0));
        assert_eq!(delta.change_percent, Some(25.0));
    }

    #[test]
    fn test_delta_is_read_only() {
        let mut store = MetricStore::in_memory();
        store.record_at(&btc(), &oi(), 100.0, t0());
        store.record_at(&btc(), &oi(), 120.0, t0() + hours(25));
        let before = store.series(&btc(), &oi()).unwrap().to_vec();

        store.delta_24h_at(&btc(), &oi(), t0() + hours(25));
        assert_eq!(store.series(&btc(), &oi()).unwrap(), &before[..]);
    }

    #[test]
    fn test_symbol_case_insensitive_series() {
        let mut store = MetricStore::in_memory();
        store.record_at(&Symbol::from("btc"), &oi(), 1.0, t0());
        assert!(store.series(&Symbol::from("BTC"), &oi()).is_some());
    }
}
