//! Transaction domain: deposits and withdrawals on the account ledger.
//!
//! Read through [`Account::transactions`](crate::domain::account::client::Account::transactions).

pub(crate) mod convert;

use crate::shared::{Address, Quantity, TransactionType};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub currency_code: String,
    pub posted_at: DateTime<Utc>,
    pub transaction_type: TransactionType,
    pub address: Address,
    pub amount: Quantity,
    pub fee: Quantity,
}
