//! Account domain: balances and server state from `getinfo`.

pub mod client;
pub(crate) mod convert;

use crate::shared::Quantity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Balance of one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wallet {
    pub currency_code: String,
    pub available: Quantity,
    /// Reserved by open orders or pending withdrawals.
    pub held: Quantity,
}

impl Wallet {
    /// `available + held`. `None` on overflow.
    pub fn total(&self) -> Option<Quantity> {
        self.available
            .as_decimal()
            .checked_add(self.held.as_decimal())
            .map(Quantity::new)
    }
}

/// Account snapshot taken from one `getinfo` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    /// Sorted by currency code.
    pub wallets: Vec<Wallet>,
    pub server_time: DateTime<Utc>,
    pub server_timezone: Option<String>,
    pub open_order_count: u64,
}

impl AccountInfo {
    pub fn wallet(&self, currency_code: &str) -> Option<&Wallet> {
        self.wallets
            .binary_search_by(|w| w.currency_code.as_str().cmp(currency_code))
            .ok()
            .map(|i| &self.wallets[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn wallet(available: Quantity, held: Quantity) -> Wallet {
        Wallet {
            currency_code: "BTC".to_string(),
            available,
            held,
        }
    }

    #[test]
    fn test_total_overflow_is_none() {
        let w = wallet(Quantity::new(Decimal::MAX), Quantity::new(Decimal::MAX));
        assert_eq!(w.total(), None);
        let w = wallet(Quantity::new(Decimal::MAX), Quantity::ZERO);
        assert_eq!(w.total(), Some(Quantity::new(Decimal::MAX)));
    }
}
