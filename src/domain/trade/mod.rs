//! Trade domain: executed trades, market-wide and the caller's own.

pub mod client;
pub(crate) mod convert;

use crate::shared::{MarketId, OrderId, OrderType, Quantity, TradeId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A trade from a market's public history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketTrade {
    pub trade_id: TradeId,
    /// Side of the initiating order.
    pub trade_type: OrderType,
    pub executed_at: DateTime<Utc>,
    pub price: Quantity,
    pub quantity: Quantity,
    pub fee: Quantity,
    pub market_id: MarketId,
}

/// A trade the caller took part in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MyTrade {
    pub trade_id: TradeId,
    pub trade_type: OrderType,
    pub executed_at: DateTime<Utc>,
    pub price: Quantity,
    pub quantity: Quantity,
    pub fee: Quantity,
    pub market_id: MarketId,
    /// The caller's order that was filled.
    pub order_id: OrderId,
}

impl MyTrade {
    /// `price * quantity`, before fees. `None` on overflow.
    pub fn total(&self) -> Option<Quantity> {
        self.price
            .as_decimal()
            .checked_mul(self.quantity.as_decimal())
            .map(Quantity::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn trade(price: Quantity, quantity: Quantity) -> MyTrade {
        MyTrade {
            trade_id: TradeId::from_json(&json!("1")).unwrap(),
            trade_type: OrderType::Buy,
            executed_at: DateTime::<Utc>::from_timestamp(1_389_810_605, 0).unwrap(),
            price,
            quantity,
            fee: Quantity::ZERO,
            market_id: MarketId::from_json(&json!("3")).unwrap(),
            order_id: OrderId::from_json(&json!("9")).unwrap(),
        }
    }

    #[test]
    fn test_total() {
        let t = trade("0.5".parse().unwrap(), "4".parse().unwrap());
        assert_eq!(t.total(), Some("2".parse().unwrap()));
    }

    #[test]
    fn test_total_overflow_is_none() {
        let t = trade("1e20".parse().unwrap(), "1e20".parse().unwrap());
        assert_eq!(t.total(), None);

        let t = trade(Quantity::new(Decimal::MAX), "2".parse().unwrap());
        assert_eq!(t.total(), None);
    }
}
