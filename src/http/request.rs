//! Request parameters for private calls.
//!
//! Parameters are kept in insertion order so the encoded body (and therefore
//! its signature) is reproducible.

use crate::shared::{MarketId, OrderId, OrderType, Quantity};

pub const PARAM_METHOD: &str = "method";
pub const PARAM_NONCE: &str = "nonce";
pub const PARAM_MARKET_ID: &str = "marketid";
pub const PARAM_ORDER_ID: &str = "orderid";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_ORDER_TYPE: &str = "ordertype";
pub const PARAM_QUANTITY: &str = "quantity";
pub const PARAM_PRICE: &str = "price";

/// Wire method names of the private API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    CancelOrder,
    CancelAllOrders,
    CancelMarketOrders,
    CalculateFees,
    CreateOrder,
    GetInfo,
    MarketOrders,
    GetMarkets,
    MyTransactions,
    MarketTrades,
    MyTrades,
    AllMyTrades,
    MyOrders,
    AllMyOrders,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CancelOrder => "cancelorder",
            Self::CancelAllOrders => "cancelallorders",
            Self::CancelMarketOrders => "cancelmarketorders",
            Self::CalculateFees => "calculatefees",
            Self::CreateOrder => "createorder",
            Self::GetInfo => "getinfo",
            Self::MarketOrders => "marketorders",
            Self::GetMarkets => "getmarkets",
            Self::MyTransactions => "mytransactions",
            Self::MarketTrades => "markettrades",
            Self::MyTrades => "mytrades",
            Self::AllMyTrades => "allmytrades",
            Self::MyOrders => "myorders",
            Self::AllMyOrders => "allmyorders",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered `(name, value)` parameter list for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    method: Method,
    pairs: Vec<(&'static str, String)>,
}

impl RequestParams {
    fn start(method: Method, nonce: u64) -> Self {
        Self {
            method,
            pairs: vec![
                (PARAM_METHOD, method.as_str().to_string()),
                (PARAM_NONCE, nonce.to_string()),
            ],
        }
    }

    fn push_opt(&mut self, name: &'static str, value: Option<String>) {
        if let Some(value) = value {
            self.pairs.push((name, value));
        }
    }

    /// Parameters for a plain call. Optional fields are written only when
    /// supplied, in the order `marketid`, `orderid`, `limit`.
    pub fn build(
        method: Method,
        nonce: u64,
        market_id: Option<&MarketId>,
        order_id: Option<&OrderId>,
        limit: Option<u32>,
    ) -> Self {
        let mut params = Self::start(method, nonce);
        params.push_opt(PARAM_MARKET_ID, market_id.map(|m| m.as_str().to_string()));
        params.push_opt(PARAM_ORDER_ID, order_id.map(|o| o.as_str().to_string()));
        params.push_opt(PARAM_LIMIT, limit.map(|l| l.to_string()));
        params
    }

    /// Parameters for order placement and fee calculation: an optional
    /// `marketid`, then always `ordertype`, `quantity`, `price`.
    pub fn build_order(
        method: Method,
        nonce: u64,
        market_id: Option<&MarketId>,
        order_type: OrderType,
        quantity: Quantity,
        price: Quantity,
    ) -> Self {
        let mut params = Self::start(method, nonce);
        params.push_opt(PARAM_MARKET_ID, market_id.map(|m| m.as_str().to_string()));
        params.pairs.push((PARAM_ORDER_TYPE, order_type.as_str().to_string()));
        params.pairs.push((PARAM_QUANTITY, quantity.to_string()));
        params.pairs.push((PARAM_PRICE, price.to_string()));
        params
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// `application/x-www-form-urlencoded` body, in parameter order.
    pub fn encode(&self) -> String {
        serde_urlencoded::to_string(&self.pairs)
            .expect("string pairs always encode as a form body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn market(id: &str) -> MarketId {
        MarketId::from_json(&json!(id)).unwrap()
    }

    fn order(id: &str) -> OrderId {
        OrderId::from_json(&json!(id)).unwrap()
    }

    fn names(params: &RequestParams) -> Vec<&'static str> {
        params.pairs().iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_minimal_params() {
        let params = RequestParams::build(Method::GetInfo, 42, None, None, None);
        assert_eq!(names(&params), ["method", "nonce"]);
        assert_eq!(params.encode(), "method=getinfo&nonce=42");
    }

    #[test]
    fn test_optional_fields_only_when_present() {
        let params = RequestParams::build(Method::MyTrades, 1, Some(&market("3")), None, Some(50));
        assert_eq!(names(&params), ["method", "nonce", "marketid", "limit"]);
        assert_eq!(params.get("limit"), Some("50"));
        assert_eq!(params.get("orderid"), None);
    }

    #[test]
    fn test_order_and_market_ids_use_distinct_names() {
        let params = RequestParams::build(
            Method::CancelOrder,
            7,
            Some(&market("3")),
            Some(&order("9001")),
            None,
        );
        assert_eq!(names(&params), ["method", "nonce", "marketid", "orderid"]);
        assert_eq!(params.get("marketid"), Some("3"));
        assert_eq!(params.get("orderid"), Some("9001"));
        assert_eq!(
            params.encode(),
            "method=cancelorder&nonce=7&marketid=3&orderid=9001"
        );
    }

    #[test]
    fn test_order_params_fixed_order() {
        let params = RequestParams::build_order(
            Method::CalculateFees,
            5,
            None,
            OrderType::Buy,
            "10".parse().unwrap(),
            "0.00025".parse().unwrap(),
        );
        assert_eq!(
            names(&params),
            ["method", "nonce", "ordertype", "quantity", "price"]
        );
        assert_eq!(
            params.encode(),
            "method=calculatefees&nonce=5&ordertype=Buy&quantity=10&price=0.00025"
        );
    }

    #[test]
    fn test_create_order_carries_market() {
        let params = RequestParams::build_order(
            Method::CreateOrder,
            5,
            Some(&market("26")),
            OrderType::Sell,
            "1.5".parse().unwrap(),
            "2".parse().unwrap(),
        );
        assert_eq!(
            names(&params),
            ["method", "nonce", "marketid", "ordertype", "quantity", "price"]
        );
        assert_eq!(params.method(), Method::CreateOrder);
    }

    #[test]
    fn test_values_are_form_escaped() {
        let params =
            RequestParams::build(Method::MarketTrades, 1, Some(&market("a b&c")), None, None);
        assert_eq!(params.encode(), "method=markettrades&nonce=1&marketid=a+b%26c");
    }
}
