//! Trades sub-client: market history and the caller's fills.

use crate::client::CryptsyClient;
use crate::domain::trade::convert::{parse_market_trades, parse_my_trades};
use crate::domain::trade::{MarketTrade, MyTrade};
use crate::error::Result;
use crate::http::Method;
use crate::shared::MarketId;

pub struct Trades<'a> {
    pub(crate) client: &'a CryptsyClient,
}

impl<'a> Trades<'a> {
    /// Recent trades in one market.
    pub async fn market(&self, market_id: &MarketId) -> Result<Vec<MarketTrade>> {
        let params = self
            .client
            .params(Method::MarketTrades, Some(market_id), None, None);
        let payload = self.client.call(params).await?;
        Ok(parse_market_trades(
            &payload,
            Some(market_id),
            &self.client.timezone,
        )?)
    }

    /// The caller's trades in one market.
    pub async fn mine(&self, market_id: &MarketId, limit: Option<u32>) -> Result<Vec<MyTrade>> {
        let params = self
            .client
            .params(Method::MyTrades, Some(market_id), None, limit);
        let payload = self.client.call(params).await?;
        Ok(parse_my_trades(
            &payload,
            Method::MyTrades.as_str(),
            Some(market_id),
            &self.client.timezone,
        )?)
    }

    /// The caller's trades across all markets.
    pub async fn all_mine(&self, limit: Option<u32>) -> Result<Vec<MyTrade>> {
        let params = self.client.params(Method::AllMyTrades, None, None, limit);
        let payload = self.client.call(params).await?;
        Ok(parse_my_trades(
            &payload,
            Method::AllMyTrades.as_str(),
            None,
            &self.client.timezone,
        )?)
    }
}
