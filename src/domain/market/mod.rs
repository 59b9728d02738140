//! Market data domain — tickers, funding rates, open interest from the
//! exchange's public REST API.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// 24h rolling ticker snapshot for one instrument (spot or swap).
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub inst_id: String,
    pub last: Decimal,
    /// 24h volume in base units (contracts for swaps).
    pub vol_24h: Decimal,
    /// 24h volume in currency units.
    pub vol_ccy_24h: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl Ticker {
    /// Currency-notional volume as the store's sample value.
    pub fn vol_ccy_24h_f64(&self) -> f64 {
        self.vol_ccy_24h.to_f64().unwrap_or_default()
    }
}

/// Current funding rate for a perpetual swap.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingRate {
    pub inst_id: String,
    /// Rate as a fraction, not a percentage.
    pub rate: Decimal,
    pub next_funding_time: Option<DateTime<Utc>>,
}

impl FundingRate {
    /// Rate as a percentage for display.
    pub fn rate_percent(&self) -> f64 {
        self.rate.to_f64().unwrap_or_default() * 100.0
    }
}

/// Open interest for a perpetual swap.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenInterest {
    pub inst_id: String,
    /// Open interest in contracts.
    pub contracts: Decimal,
    /// Open interest in contract-currency units.
    pub base_amount: Decimal,
}

impl OpenInterest {
    /// Contract-currency amount as the store's sample value.
    pub fn base_amount_f64(&self) -> f64 {
        self.base_amount.to_f64().unwrap_or_default()
    }
}

/// Wire-to-domain conversion failures.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("bad decimal in {field}: {raw:?}")]
    BadDecimal { field: &'static str, raw: String },

    #[error("bad timestamp in {field}: {raw:?}")]
    BadTimestamp { field: &'static str, raw: String },
}
