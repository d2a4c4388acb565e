//! Market domain: listed markets and order-book snapshots.

pub mod client;
pub(crate) mod convert;

use crate::shared::{MarketId, OrderType, Quantity};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A listed trading pair with its latest statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Market {
    pub market_id: MarketId,
    pub label: String,
    pub primary_currency_code: String,
    pub primary_currency_name: String,
    pub secondary_currency_code: String,
    pub secondary_currency_name: String,
    pub current_volume: Quantity,
    pub last_trade: Quantity,
    pub high_trade: Quantity,
    pub low_trade: Quantity,
    pub created_at: DateTime<Utc>,
}

/// One resting order row of an order-book snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketOrder {
    pub side: OrderType,
    pub price: Quantity,
    pub quantity: Quantity,
}

/// Order-book snapshot for one market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderBook {
    pub buy_orders: Vec<MarketOrder>,
    pub sell_orders: Vec<MarketOrder>,
}

impl OrderBook {
    /// All rows, buys first, each side in exchange order.
    pub fn orders(&self) -> impl Iterator<Item = &MarketOrder> {
        self.buy_orders.iter().chain(self.sell_orders.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.buy_orders.is_empty() && self.sell_orders.is_empty()
    }

    /// Highest bid, if any.
    pub fn best_bid(&self) -> Option<&MarketOrder> {
        self.buy_orders.iter().max_by_key(|o| o.price)
    }

    /// Lowest ask, if any.
    pub fn best_ask(&self) -> Option<&MarketOrder> {
        self.sell_orders.iter().min_by_key(|o| o.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(side: OrderType, price: &str) -> MarketOrder {
        MarketOrder {
            side,
            price: price.parse().unwrap(),
            quantity: "1".parse().unwrap(),
        }
    }

    #[test]
    fn test_orders_lists_buys_then_sells() {
        let book = OrderBook {
            buy_orders: vec![row(OrderType::Buy, "0.2"), row(OrderType::Buy, "0.1")],
            sell_orders: vec![row(OrderType::Sell, "0.3")],
        };
        let sides: Vec<_> = book.orders().map(|o| o.side).collect();
        assert_eq!(sides, [OrderType::Buy, OrderType::Buy, OrderType::Sell]);
    }

    #[test]
    fn test_best_prices() {
        let book = OrderBook {
            buy_orders: vec![row(OrderType::Buy, "0.1"), row(OrderType::Buy, "0.2")],
            sell_orders: vec![row(OrderType::Sell, "0.4"), row(OrderType::Sell, "0.3")],
        };
        assert_eq!(book.best_bid().unwrap().price, "0.2".parse().unwrap());
        assert_eq!(book.best_ask().unwrap().price, "0.3".parse().unwrap());
        assert!(OrderBook::default().is_empty());
    }
}
