//! Trade payloads → domain types.

use super::{MarketTrade, MyTrade};
use crate::error::DomainParseError;
use crate::shared::json::{map_array, Record};
use crate::shared::{ExchangeTimezone, MarketId, OrderId, TradeId};
use serde_json::Value;

/// Fields shared by both trade shapes.
fn market_trade(
    r: &Record<'_>,
    default_market: Option<&MarketId>,
    timezone: &ExchangeTimezone,
) -> Result<MarketTrade, DomainParseError> {
    Ok(MarketTrade {
        trade_id: r.parse_with("tradeid", TradeId::from_json)?,
        trade_type: r.order_type("tradetype")?,
        executed_at: r.timestamp("datetime", timezone)?,
        price: r.quantity("tradeprice")?,
        quantity: r.quantity("quantity")?,
        fee: r.quantity("fee")?,
        market_id: r.market_id_or("marketid", default_market)?,
    })
}

pub(crate) fn parse_market_trades(
    value: &Value,
    default_market: Option<&MarketId>,
    timezone: &ExchangeTimezone,
) -> Result<Vec<MarketTrade>, DomainParseError> {
    map_array(value, "markettrades", |r| {
        market_trade(&r, default_market, timezone)
    })
}

/// Map `mytrades` / `allmytrades` rows. Rows without their own `marketid`
/// take `default_market`.
pub(crate) fn parse_my_trades(
    value: &Value,
    method: &str,
    default_market: Option<&MarketId>,
    timezone: &ExchangeTimezone,
) -> Result<Vec<MyTrade>, DomainParseError> {
    map_array(value, method, |r| {
        let t = market_trade(&r, default_market, timezone)?;
        Ok(MyTrade {
            order_id: r.parse_with("order_id", OrderId::from_json)?,
            trade_id: t.trade_id,
            trade_type: t.trade_type,
            executed_at: t.executed_at,
            price: t.price,
            quantity: t.quantity,
            fee: t.fee,
            market_id: t.market_id,
        })
    })
}
