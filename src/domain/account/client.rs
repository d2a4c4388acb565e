//! Account sub-client: balances, ledger and deposit addresses.

use crate::client::CryptsyClient;
use crate::domain::account::convert::parse_account_info;
use crate::domain::account::AccountInfo;
use crate::domain::transaction::convert::parse_transactions;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use crate::http::Method;
use crate::shared::Address;

pub struct Account<'a> {
    pub(crate) client: &'a CryptsyClient,
}

impl<'a> Account<'a> {
    pub async fn info(&self) -> Result<AccountInfo> {
        let params = self.client.params(Method::GetInfo, None, None, None);
        let payload = self.client.call(params).await?;
        Ok(parse_account_info(&payload)?)
    }

    /// Deposit and withdrawal history.
    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        let params = self.client.params(Method::MyTransactions, None, None, None);
        let payload = self.client.call(params).await?;
        Ok(parse_transactions(&payload, &self.client.timezone)?)
    }

    /// Always [`Error::NotSupported`](crate::Error::NotSupported).
    pub async fn generate_address(&self, _currency_code: &str) -> Result<Address> {
        CryptsyClient::not_supported("generate_address")
    }
}
