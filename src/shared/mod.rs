//! Shared newtypes and utilities used across all domain modules.
//!
//! Identifiers are only ever built from response fields (or handed back from a
//! previous call), never from free-form user input. Quantities are exact
//! decimals. Enumerations parse strictly against the exchange's vocabulary.

pub(crate) mod json;
pub mod quantity;
pub mod timestamp;

pub use quantity::Quantity;
pub use timestamp::ExchangeTimezone;

use crate::error::DomainParseErrorKind;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::str::FromStr;

/// Canonical text of an identifier token: JSON strings as-is, JSON integers
/// in decimal.
fn identifier_text(value: &Value) -> Result<String, DomainParseErrorKind> {
    match value {
        Value::String(s) if s.trim().is_empty() => {
            Err(DomainParseErrorKind::InvalidIdentifier(s.clone()))
        }
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if n.is_u64() || n.is_i64() => Ok(n.to_string()),
        Value::Number(n) => Err(DomainParseErrorKind::InvalidIdentifier(n.to_string())),
        _ => Err(DomainParseErrorKind::UnexpectedType("identifier")),
    }
}

macro_rules! exchange_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Parse from a response field (JSON string or integer).
            pub fn from_json(value: &Value) -> Result<Self, DomainParseErrorKind> {
                identifier_text(value).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }
    };
}

// ─── Identifiers ─────────────────────────────────────────────────────────────

exchange_id!(
    /// Exchange market identifier (e.g. `"3"` for LTC/BTC).
    MarketId
);

exchange_id!(
    /// Identifier of one of the caller's orders.
    OrderId
);

exchange_id!(
    /// Identifier of an executed trade.
    TradeId
);

exchange_id!(
    /// Deposit or withdrawal address as reported on a transaction.
    Address
);

// ─── OrderType ───────────────────────────────────────────────────────────────

/// Order side. Wire values are `"Buy"` and `"Sell"`, case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderType {
    Buy,
    Sell,
}

impl OrderType {
    pub const ALL: [OrderType; 2] = [OrderType::Buy, OrderType::Sell];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

impl FromStr for OrderType {
    type Err = DomainParseErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainParseErrorKind::UnknownVariant(s.to_string()))
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── TransactionType ─────────────────────────────────────────────────────────

/// Kind of funding movement on the account ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Deposit, TransactionType::Withdrawal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        }
    }
}

impl FromStr for TransactionType {
    type Err = DomainParseErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainParseErrorKind::UnknownVariant(s.to_string()))
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
