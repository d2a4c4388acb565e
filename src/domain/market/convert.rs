//! `getmarkets` and `marketorders` payloads → domain types.

use super::{Market, MarketOrder, OrderBook};
use crate::error::{DomainParseError, DomainParseErrorKind};
use crate::shared::json::{map_array, Record};
use crate::shared::{ExchangeTimezone, MarketId, OrderType};
use serde_json::Value;

pub(crate) fn parse_markets(
    value: &Value,
    timezone: &ExchangeTimezone,
) -> Result<Vec<Market>, DomainParseError> {
    map_array(value, "getmarkets", |r| {
        Ok(Market {
            market_id: r.parse_with("marketid", MarketId::from_json)?,
            label: r.text("label")?,
            primary_currency_code: r.text("primary_currency_code")?,
            primary_currency_name: r.text("primary_currency_name")?,
            secondary_currency_code: r.text("secondary_currency_code")?,
            secondary_currency_name: r.text("secondary_currency_name")?,
            current_volume: r.quantity("current_volume")?,
            last_trade: r.quantity("last_trade")?,
            high_trade: r.quantity("high_trade")?,
            low_trade: r.quantity("low_trade")?,
            created_at: r.timestamp("created", timezone)?,
        })
    })
}

pub(crate) fn parse_order_book(value: &Value) -> Result<OrderBook, DomainParseError> {
    let payload = Record::payload(value, "marketorders")?;
    Ok(OrderBook {
        buy_orders: parse_side(&payload, "buyorders", OrderType::Buy)?,
        sell_orders: parse_side(&payload, "sellorders", OrderType::Sell)?,
    })
}

/// Rows of one side. The price field name depends on the side.
fn parse_side(
    payload: &Record<'_>,
    field: &str,
    side: OrderType,
) -> Result<Vec<MarketOrder>, DomainParseError> {
    let rows = match payload.optional(field) {
        Some(rows) => rows,
        None if payload.has(field) => return Ok(Vec::new()),
        None => return Err(payload.error(field, DomainParseErrorKind::Missing)),
    };

    let price_field = match side {
        OrderType::Buy => "buyprice",
        OrderType::Sell => "sellprice",
    };

    map_array(rows, &format!("marketorders.{field}"), |r| {
        Ok(MarketOrder {
            side,
            price: r.quantity(price_field)?,
            quantity: r.quantity("quantity")?,
        })
    })
}
