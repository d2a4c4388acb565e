//! Markets sub-client: market list and order book.

use crate::client::CryptsyClient;
use crate::domain::market::convert::{parse_markets, parse_order_book};
use crate::domain::market::{Market, OrderBook};
use crate::error::Result;
use crate::http::Method;
use crate::shared::MarketId;

pub struct Markets<'a> {
    pub(crate) client: &'a CryptsyClient,
}

impl<'a> Markets<'a> {
    /// All listed markets.
    pub async fn list(&self) -> Result<Vec<Market>> {
        let params = self.client.params(Method::GetMarkets, None, None, None);
        let payload = self.client.call(params).await?;
        Ok(parse_markets(&payload, &self.client.timezone)?)
    }

    /// Order-book snapshot for one market.
    pub async fn order_book(&self, market_id: &MarketId) -> Result<OrderBook> {
        let params = self
            .client
            .params(Method::MarketOrders, Some(market_id), None, None);
        let payload = self.client.call(params).await?;
        Ok(parse_order_book(&payload)?)
    }

    /// Always [`Error::NotSupported`](crate::Error::NotSupported).
    pub async fn depth(&self, _market_id: &MarketId) -> Result<OrderBook> {
        CryptsyClient::not_supported("market_depth")
    }
}
