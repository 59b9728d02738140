//! Conversions from wire types to market domain types (`TryFrom` + validation).

use super::wire::{FundingRateRaw, OpenInterestRaw, TickerRaw};
use super::{ConvertError, FundingRate, OpenInterest, Ticker};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(field: &'static str, raw: &str) -> Result<Decimal, ConvertError> {
    Decimal::from_str(raw).map_err(|_| ConvertError::BadDecimal {
        field,
        raw: raw.to_string(),
    })
}

fn ts_millis(field: &'static str, raw: &str) -> Result<DateTime<Utc>, ConvertError> {
    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or_else(|| ConvertError::BadTimestamp {
            field,
            raw: raw.to_string(),
        })
}

impl TryFrom<TickerRaw> for Ticker {
    type Error = ConvertError;

    fn try_from(raw: TickerRaw) -> Result<Self, Self::Error> {
        Ok(Self {
            last: dec("last", &raw.last)?,
            vol_24h: dec("vol24h", &raw.vol_24h)?,
            vol_ccy_24h: dec("volCcy24h", &raw.vol_ccy_24h)?,
            timestamp: ts_millis("ts", &raw.ts)?,
            inst_id: raw.inst_id,
        })
    }
}

impl TryFrom<FundingRateRaw> for FundingRate {
    type Error = ConvertError;

    fn try_from(raw: FundingRateRaw) -> Result<Self, Self::Error> {
        // nextFundingTime comes back empty around settlement.
        let next_funding_time = if raw.next_funding_time.is_empty() {
            None
        } else {
            Some(ts_millis("nextFundingTime", &raw.next_funding_time)?)
        };
        Ok(Self {
            rate: dec("fundingRate", &raw.funding_rate)?,
            next_funding_time,
            inst_id: raw.inst_id,
        })
    }
}

impl TryFrom<OpenInterestRaw> for OpenInterest {
    type Error = ConvertError;

    fn try_from(raw: OpenInterestRaw) -> Result<Self, Self::Error> {
        Ok(Self {
            contracts: dec("oi", &raw.oi)?,
            base_amount: dec("oiCcy", &raw.oi_ccy)?,
            inst_id: raw.inst_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ticker_raw() -> TickerRaw {
        TickerRaw {
            inst_id: "BTC-USDT-SWAP".to_string(),
            last: "64000.5".to_string(),
            vol_24h: "98760.0".to_string(),
            vol_ccy_24h: "11200000000".to_string(),
            ts: "1719000000000".to_string(),
        }
    }

    #[test]
    fn test_ticker_conversion() {
        let ticker: Ticker = sample_ticker_raw().try_into().unwrap();
        assert_eq!(ticker.inst_id, "BTC-USDT-SWAP");
        assert_eq!(ticker.last, Decimal::from_str("64000.5").unwrap());
        assert_eq!(ticker.vol_ccy_24h_f64(), 11_200_000_000.0);
        assert_eq!(ticker.timestamp.timestamp_millis(), 1_719_000_000_000);
    }

    #[test]
    fn test_ticker_bad_decimal() {
        let mut raw = sample_ticker_raw();
        raw.last = "".to_string();
        let err = Ticker::try_from(raw).unwrap_err();
        assert!(matches!(err, ConvertError::BadDecimal { field: "last", .. }));
    }

    #[test]
    fn test_funding_rate_conversion() {
        let raw = FundingRateRaw {
            inst_id: "ETH-USDT-SWAP".to_string(),
            funding_rate: "0.000125".to_string(),
            next_funding_time: "1719014400000".to_string(),
        };
        let fr: FundingRate = raw.try_into().unwrap();
        assert_eq!(fr.rate, Decimal::from_str("0.000125").unwrap());
        assert!((fr.rate_percent() - 0.0125).abs() < 1e-9);
        assert!(fr.next_funding_time.is_some());
    }

    #[test]
    fn test_funding_rate_empty_next_time() {
        let raw = FundingRateRaw {
            inst_id: "ETH-USDT-SWAP".to_string(),
            funding_rate: "-0.0001".to_string(),
            next_funding_time: String::new(),
        };
        let fr: FundingRate = raw.try_into().unwrap();
        assert_eq!(fr.next_funding_time, None);
    }

    #[test]
    fn test_open_interest_conversion() {
        let raw = OpenInterestRaw {
            inst_id: "BTC-USDT-SWAP".to_string(),
            oi: "1230000".to_string(),
            oi_ccy: "45670.5".to_string(),
        };
        let oi: OpenInterest = raw.try_into().unwrap();
        assert_eq!(oi.contracts, Decimal::from_str("1230000").unwrap());
        assert_eq!(oi.base_amount_f64(), 45670.5);
    }
}
