//! Orders sub-client: placement, cancellation, fee quotes and open orders.

use crate::client::CryptsyClient;
use crate::domain::order::convert::{parse_fees, parse_my_orders, parse_order_id};
use crate::domain::order::{Fees, MyOrder};
use crate::error::Result;
use crate::http::Method;
use crate::shared::{MarketId, OrderId, OrderType, Quantity};

pub struct Orders<'a> {
    pub(crate) client: &'a CryptsyClient,
}

impl<'a> Orders<'a> {
    /// Place a limit order. Returns the new order's id.
    pub async fn create(
        &self,
        market_id: &MarketId,
        order_type: OrderType,
        quantity: Quantity,
        price: Quantity,
    ) -> Result<OrderId> {
        let params = self.client.order_params(
            Method::CreateOrder,
            Some(market_id),
            order_type,
            quantity,
            price,
        );
        let payload = self.client.call(params).await?;
        let order_id = parse_order_id(&payload)?;
        tracing::debug!(%market_id, %order_id, %order_type, "Order created");
        Ok(order_id)
    }

    pub async fn cancel(&self, order_id: &OrderId) -> Result<()> {
        let params = self
            .client
            .params(Method::CancelOrder, None, Some(order_id), None);
        self.client.call(params).await?;
        Ok(())
    }

    pub async fn cancel_all(&self) -> Result<()> {
        let params = self.client.params(Method::CancelAllOrders, None, None, None);
        self.client.call(params).await?;
        Ok(())
    }

    pub async fn cancel_market(&self, market_id: &MarketId) -> Result<()> {
        let params = self
            .client
            .params(Method::CancelMarketOrders, Some(market_id), None, None);
        self.client.call(params).await?;
        Ok(())
    }

    /// Fee quote for an order that has not been placed.
    pub async fn calculate_fees(
        &self,
        order_type: OrderType,
        quantity: Quantity,
        price: Quantity,
    ) -> Result<Fees> {
        let params =
            self.client
                .order_params(Method::CalculateFees, None, order_type, quantity, price);
        let payload = self.client.call(params).await?;
        Ok(parse_fees(&payload)?)
    }

    /// Open orders in one market.
    pub async fn mine(&self, market_id: &MarketId, limit: Option<u32>) -> Result<Vec<MyOrder>> {
        let params = self
            .client
            .params(Method::MyOrders, Some(market_id), None, limit);
        let payload = self.client.call(params).await?;
        Ok(parse_my_orders(
            &payload,
            Method::MyOrders.as_str(),
            Some(market_id),
            &self.client.timezone,
        )?)
    }

    /// Open orders across all markets. Every row must name its market.
    pub async fn all_mine(&self, limit: Option<u32>) -> Result<Vec<MyOrder>> {
        let params = self.client.params(Method::AllMyOrders, None, None, limit);
        let payload = self.client.call(params).await?;
        Ok(parse_my_orders(
            &payload,
            Method::AllMyOrders.as_str(),
            None,
            &self.client.timezone,
        )?)
    }
}
