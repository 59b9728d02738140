//! Chat-ready text summaries.
//!
//! Plain strings the chat layer can send as-is: lower-case body text,
//! compact numbers, signed percentages, and a tracking placeholder while a
//! series is still too young for a 24h comparison.

mod flair;

use crate::domain::market::{FundingRate, OpenInterest, Ticker};
use crate::domain::metrics::Delta;
use crate::domain::sentiment::FearGreed;
use crate::shared::fmt::{compact, signed_percent};
use crate::shared::Symbol;
use chrono::{DateTime, Utc};

pub use flair::Flair;

/// Open interest block with its locally-tracked 24h change.
pub fn open_interest_summary(symbol: &Symbol, oi: &OpenInterest, delta: &Delta) -> String {
    let mut out = format!("**{} open interest**\n", symbol);
    out += &format!("contracts: {}\n", compact_dec(&oi.contracts));
    out += &format!(
        "value: {} {} (${})\n",
        compact_dec(&oi.contracts),
        symbol,
        compact(oi.base_amount_f64())
    );
    out += &format!("24h change: {}\n", change_or_started(delta));
    out += &format!("instrument: {}", oi.inst_id);
    out
}

/// Funding rate block. No local tracking — the rate is already a delta.
pub fn funding_summary(symbol: &Symbol, funding: &FundingRate) -> String {
    let mut out = format!("**{} funding rate**\n", symbol);
    out += &format!("rate: {:.4}%\n", funding.rate_percent());
    out += &format!(
        "next funding: {}\n",
        funding
            .next_funding_time
            .map(format_utc)
            .unwrap_or_else(|| "unknown".to_string())
    );
    out += &format!("instrument: {}", funding.inst_id);
    out
}

/// Spot + perpetual volume block. Either side may be missing; the 24h change
/// line tracks the perpetual notional only.
pub fn volume_summary(
    symbol: &Symbol,
    spot: Option<&Ticker>,
    perp: Option<&Ticker>,
    delta: &Delta,
) -> String {
    let mut out = format!("**{} volume**\n", symbol);
    if let Some(t) = spot {
        out += &format!(
            "spot (24h): {} {} (${})\n",
            compact_dec(&t.vol_24h),
            symbol,
            compact(t.vol_ccy_24h_f64())
        );
    }
    if let Some(t) = perp {
        out += &format!(
            "perp (24h): {} {} (${})\n",
            compact_dec(&t.vol_24h),
            symbol,
            compact(t.vol_ccy_24h_f64())
        );
        out += &format!("24h change: {}", change_or_started(delta));
    }
    out.trim_end().to_string()
}

/// Fear & Greed index block with its locally-tracked 24h change.
pub fn fear_greed_summary(index: &FearGreed, delta: &Delta) -> String {
    let mut out = "**fear & greed index**\n".to_string();
    out += &format!("value: {}/100 {}\n", index.value, change_in_parens(delta));
    out += &format!("classification: {}\n", index.classification.to_lowercase());
    out += &format!(
        "updated: {}",
        index
            .timestamp
            .map(format_utc)
            .unwrap_or_else(|| "unknown".to_string())
    );
    out
}

/// The `all` command body: one line per metric, each section independently
/// degrading to `n/a` when its fetch failed.
pub fn combined_summary(
    symbol: &Symbol,
    funding: Option<&FundingRate>,
    oi: Option<(&OpenInterest, Delta)>,
    volume: Option<(&Ticker, Delta)>,
) -> String {
    let mut out = format!("**{} metrics**\n", symbol);

    out += &match funding {
        Some(f) => format!("funding: {:.4}%\n", f.rate_percent()),
        None => "funding: n/a\n".to_string(),
    };

    out += &match oi {
        Some((oi, delta)) => format!(
            "oi: {} {}\n",
            compact(oi.base_amount_f64()),
            change_in_parens(&delta)
        ),
        None => "oi: n/a\n".to_string(),
    };

    out += &match volume {
        Some((t, delta)) => format!(
            "volume: {} {}",
            compact(t.vol_ccy_24h_f64()),
            change_in_parens(&delta)
        ),
        None => "volume: n/a".to_string(),
    };

    out
}

/// Command list for the chat help command.
pub fn help_text() -> String {
    let mut out = "**commands**\n".to_string();
    out += "all commands take any symbol (e.g. btc, eth, sol)\n";
    out += "24h changes are tracked locally\n\n";
    out += "**fear** - current fear & greed index\n";
    out += "**fund [symbol]** - current funding rate (default: btc)\n";
    out += "**oi [symbol]** - open interest with 24h change\n";
    out += "**vol [symbol]** - spot and perpetual volume with 24h change\n";
    out += "**all [symbol]** - all metrics with 24h changes\n";
    out += "**add [profile link]** - track a profile under a name\n";
    out += "**list** - list tracked profiles\n";
    out += "**remove [name]** - stop tracking a profile\n";
    out += "**help** - this message";
    out
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn compact_dec(value: &rust_decimal::Decimal) -> String {
    use rust_decimal::prelude::ToPrimitive;
    compact(value.to_f64().unwrap_or_default())
}

fn change_or_started(delta: &Delta) -> String {
    match delta.change_percent {
        Some(c) => signed_percent(c, 2),
        None => "tracking started".to_string(),
    }
}

fn change_in_parens(delta: &Delta) -> String {
    match delta.change_percent {
        Some(c) => format!("({})", signed_percent(c, 1)),
        None => "(tracking)".to_string(),
    }
}

fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M UTC").to_string()
}
