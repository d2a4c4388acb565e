//! Order payloads → domain types.

use super::{Fees, MyOrder};
use crate::error::DomainParseError;
use crate::shared::json::{map_array, Record};
use crate::shared::{ExchangeTimezone, MarketId, OrderId};
use serde_json::Value;

/// Map `myorders` / `allmyorders` rows. Rows without their own `marketid`
/// take `default_market`.
pub(crate) fn parse_my_orders(
    value: &Value,
    method: &str,
    default_market: Option<&MarketId>,
    timezone: &ExchangeTimezone,
) -> Result<Vec<MyOrder>, DomainParseError> {
    map_array(value, method, |r| {
        Ok(MyOrder {
            order_id: r.parse_with("orderid", OrderId::from_json)?,
            order_type: r.order_type("ordertype")?,
            created_at: r.timestamp("created", timezone)?,
            price: r.quantity("price")?,
            quantity: r.quantity("quantity")?,
            original_quantity: r.quantity("orig_quantity")?,
            market_id: r.market_id_or("marketid", default_market)?,
        })
    })
}

pub(crate) fn parse_fees(value: &Value) -> Result<Fees, DomainParseError> {
    let r = Record::payload(value, "calculatefees")?;
    Ok(Fees {
        fee: r.quantity("fee")?,
        net: r.quantity("net")?,
    })
}

pub(crate) fn parse_order_id(value: &Value) -> Result<OrderId, DomainParseError> {
    Record::payload(value, "createorder")?.parse_with("orderid", OrderId::from_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainParseErrorKind;
    use crate::shared::OrderType;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn market(id: &str) -> MarketId {
        MarketId::from_json(&json!(id)).unwrap()
    }

    fn order_json() -> Value {
        json!({
            "orderid": "1423876",
            "created": "2014-01-15 18:30:05",
            "ordertype": "Sell",
            "price": "0.00000190",
            "quantity": "250.00000000",
            "orig_quantity": "1000.00000000"
        })
    }

    #[test]
    fn test_my_orders_take_default_market() {
        let orders = parse_my_orders(
            &json!([order_json()]),
            "myorders",
            Some(&market("26")),
            &ExchangeTimezone::uncorrected(),
        )
        .unwrap();
        let o = &orders[0];
        assert_eq!(o.order_id.as_str(), "1423876");
        assert_eq!(o.order_type, OrderType::Sell);
        assert_eq!(o.market_id, market("26"));
        assert_eq!(o.filled_quantity(), Some(Decimal::new(750, 0).into()));
    }

    #[test]
    fn test_all_my_orders_require_market_per_row() {
        let err = parse_my_orders(
            &json!([order_json()]),
            "allmyorders",
            None,
            &ExchangeTimezone::uncorrected(),
        )
        .unwrap_err();
        assert_eq!(err.record, "allmyorders[0]");
        assert_eq!(err.field, "marketid");
        assert_eq!(err.kind, DomainParseErrorKind::Missing);
    }

    #[test]
    fn test_unknown_order_type_is_rejected() {
        let mut row = order_json();
        row["ordertype"] = json!("buy");
        let err = parse_my_orders(
            &json!([row]),
            "myorders",
            Some(&market("26")),
            &ExchangeTimezone::uncorrected(),
        )
        .unwrap_err();
        assert_eq!(err.kind, DomainParseErrorKind::UnknownVariant("buy".to_string()));
    }

    #[test]
    fn test_parse_fees_is_exact() {
        let fees = parse_fees(&json!({"fee": "0.0025", "net": "9.9975"})).unwrap();
        assert_eq!(fees.fee.as_decimal(), Decimal::new(25, 4));
        assert_eq!(fees.net.as_decimal(), Decimal::new(99975, 4));
    }

    #[test]
    fn test_parse_fees_rejects_bad_quantity() {
        let err = parse_fees(&json!({"fee": "n/a", "net": "1"})).unwrap_err();
        assert_eq!(err.field, "fee");
        assert_eq!(err.kind, DomainParseErrorKind::InvalidQuantity("n/a".to_string()));
    }

    #[test]
    fn test_parse_order_id() {
        assert_eq!(parse_order_id(&json!({"orderid": 99})).unwrap().as_str(), "99");
        assert_eq!(
            parse_order_id(&json!({})).unwrap_err().kind,
            DomainParseErrorKind::Missing
        );
    }
}
