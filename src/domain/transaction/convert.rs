//! `mytransactions` payload → [`Transaction`] list.

use super::Transaction;
use crate::error::{DomainParseError, DomainParseErrorKind};
use crate::shared::json::map_array;
use crate::shared::{Address, ExchangeTimezone, TransactionType};
use serde_json::Value;

pub(crate) fn parse_transactions(
    value: &Value,
    timezone: &ExchangeTimezone,
) -> Result<Vec<Transaction>, DomainParseError> {
    map_array(value, "mytransactions", |r| {
        Ok(Transaction {
            currency_code: r.text("currency")?,
            posted_at: r.timestamp("datetime", timezone)?,
            transaction_type: r.parse_with("type", |v| match v {
                Value::String(s) => s.parse::<TransactionType>(),
                _ => Err(DomainParseErrorKind::UnexpectedType("string")),
            })?,
            address: r.parse_with("address", Address::from_json)?,
            amount: r.quantity("amount")?,
            fee: r.quantity("fee")?,
        })
    })
}
