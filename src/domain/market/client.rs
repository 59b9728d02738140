//! Market data sub-client — ticker, funding, open interest queries.

use crate::client::PulseClient;
use crate::domain::market::{ConvertError, FundingRate, OpenInterest, Ticker};
use crate::error::PulseError;
use crate::shared::Symbol;

/// Sub-client for exchange market data.
pub struct MarketData<'a> {
    pub(crate) client: &'a PulseClient,
}

impl MarketData<'_> {
    /// Spot ticker for the USDT pair.
    pub async fn ticker(&self, symbol: &Symbol) -> Result<Ticker, PulseError> {
        self.ticker_for(&symbol.spot_pair()).await
    }

    /// Perpetual swap ticker for the USDT pair.
    pub async fn swap_ticker(&self, symbol: &Symbol) -> Result<Ticker, PulseError> {
        self.ticker_for(&symbol.swap_pair()).await
    }

    async fn ticker_for(&self, inst_id: &str) -> Result<Ticker, PulseError> {
        let raw = self
            .client
            .http
            .get_ticker(inst_id)
            .await?
            .into_first(inst_id)?;
        raw.try_into().map_err(validation)
    }

    /// Current funding rate for the USDT perpetual swap.
    pub async fn funding_rate(&self, symbol: &Symbol) -> Result<FundingRate, PulseError> {
        let inst_id = symbol.swap_pair();
        let raw = self
            .client
            .http
            .get_funding_rate(&inst_id)
            .await?
            .into_first(&inst_id)?;
        raw.try_into().map_err(validation)
    }

    /// Open interest for the USDT perpetual swap.
    pub async fn open_interest(&self, symbol: &Symbol) -> Result<OpenInterest, PulseError> {
        let inst_id = symbol.swap_pair();
        let raw = self
            .client
            .http
            .get_open_interest(&inst_id)
            .await?
            .into_first(&inst_id)?;
        raw.try_into().map_err(validation)
    }
}

fn validation(e: ConvertError) -> PulseError {
    PulseError::Validation(e.to_string())
}
