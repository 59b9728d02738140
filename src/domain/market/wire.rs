//! Raw serde structs matching the exchange's REST responses.
//!
//! The exchange sends every numeric field as a decimal string (empty when
//! unavailable), wrapped in a `{ code, msg, data: [...] }` envelope.

use crate::error::PulseError;
use serde::{Deserialize, Serialize};

/// Response envelope shared by all exchange endpoints. `code` is `"0"` on
/// success; anything else is a business error with `msg` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeEnvelope<T> {
    pub code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Vec<T>,
}

impl<T> ExchangeEnvelope<T> {
    /// Unwrap the single expected data row, mapping a non-zero code to
    /// [`PulseError::Exchange`] and an empty `data` to [`PulseError::NoData`].
    pub fn into_first(self, what: &str) -> Result<T, PulseError> {
        if self.code != "0" {
            return Err(PulseError::Exchange { code: self.code, msg: self.msg });
        }
        self.data
            .into_iter()
            .next()
            .ok_or_else(|| PulseError::NoData(what.to_string()))
    }
}

/// `GET /api/v5/market/ticker` data row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerRaw {
    #[serde(rename = "instId")]
    pub inst_id: String,
    pub last: String,
    #[serde(rename = "vol24h")]
    pub vol_24h: String,
    #[serde(rename = "volCcy24h")]
    pub vol_ccy_24h: String,
    pub ts: String,
}

/// `GET /api/v5/public/funding-rate` data row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundingRateRaw {
    #[serde(rename = "instId")]
    pub inst_id: String,
    #[serde(rename = "fundingRate")]
    pub funding_rate: String,
    #[serde(rename = "nextFundingTime", default)]
    pub next_funding_time: String,
}

/// `GET /api/v5/public/open-interest` data row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenInterestRaw {
    #[serde(rename = "instId")]
    pub inst_id: String,
    pub oi: String,
    #[serde(rename = "oiCcy")]
    pub oi_ccy: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_into_first_ok() {
        let env: ExchangeEnvelope<TickerRaw> = serde_json::from_str(
            r#"{
                "code": "0",
                "msg": "",
                "data": [{
                    "instId": "BTC-USDT",
                    "last": "64000.1",
                    "vol24h": "12345.6",
                    "volCcy24h": "790123456.7",
                    "ts": "1719000000000"
                }]
            }"#,
        )
        .unwrap();
        let raw = env.into_first("BTC-USDT").unwrap();
        assert_eq!(raw.inst_id, "BTC-USDT");
        assert_eq!(raw.last, "64000.1");
    }

    #[test]
    fn test_envelope_business_error() {
        let env: ExchangeEnvelope<TickerRaw> = serde_json::from_str(
            r#"{ "code": "51001", "msg": "Instrument ID does not exist", "data": [] }"#,
        )
        .unwrap();
        let err = env.into_first("NOPE-USDT").unwrap_err();
        assert!(matches!(
            err,
            crate::error::PulseError::Exchange { ref code, .. } if code == "51001"
        ));
    }

    #[test]
    fn test_envelope_empty_data() {
        let env: ExchangeEnvelope<TickerRaw> =
            serde_json::from_str(r#"{ "code": "0", "msg": "", "data": [] }"#).unwrap();
        let err = env.into_first("BTC-USDT").unwrap_err();
        assert!(matches!(err, crate::error::PulseError::NoData(_)));
    }
}
