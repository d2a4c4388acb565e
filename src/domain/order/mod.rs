//! Order domain: the caller's resting orders and fee quotes.

pub mod client;
pub(crate) mod convert;

use crate::shared::{MarketId, OrderId, OrderType, Quantity};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One of the caller's open orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MyOrder {
    pub order_id: OrderId,
    pub order_type: OrderType,
    pub created_at: DateTime<Utc>,
    pub price: Quantity,
    /// Quantity still open.
    pub quantity: Quantity,
    pub original_quantity: Quantity,
    pub market_id: MarketId,
}

impl MyOrder {
    /// Quantity already filled. `None` on overflow.
    pub fn filled_quantity(&self) -> Option<Quantity> {
        self.original_quantity
            .as_decimal()
            .checked_sub(self.quantity.as_decimal())
            .map(Quantity::new)
    }
}

/// Fee quote for a hypothetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fees {
    pub fee: Quantity,
    /// Total after fees.
    pub net: Quantity,
}
