//! `getinfo` payload → [`AccountInfo`].

use super::{AccountInfo, Wallet};
use crate::error::{DomainParseError, DomainParseErrorKind};
use crate::shared::json::Record;
use crate::shared::timestamp::from_unix_seconds;
use crate::shared::Quantity;
use serde_json::Value;
use std::collections::BTreeMap;

pub(crate) fn parse_account_info(value: &Value) -> Result<AccountInfo, DomainParseError> {
    let r = Record::payload(value, "getinfo")?;

    // currency → (available, held)
    let mut balances: BTreeMap<String, (Quantity, Quantity)> = BTreeMap::new();

    let available = r.object_field("balances_available")?;
    for (currency, amount) in available.entries() {
        let amount = Quantity::from_json(amount).map_err(|kind| available.error(currency, kind))?;
        balances.entry(currency.clone()).or_default().0 = amount;
    }

    if r.optional("balances_hold").is_some() {
        let hold = r.object_field("balances_hold")?;
        for (currency, amount) in hold.entries() {
            let amount = Quantity::from_json(amount).map_err(|kind| hold.error(currency, kind))?;
            balances.entry(currency.clone()).or_default().1 = amount;
        }
    }

    let seconds = r.unsigned("servertimestamp")?;
    let server_time = i64::try_from(seconds)
        .map_err(|_| DomainParseErrorKind::InvalidTimestamp(seconds.to_string()))
        .and_then(from_unix_seconds)
        .map_err(|kind| r.error("servertimestamp", kind))?;

    let server_timezone = match r.optional("servertimezone") {
        Some(_) => Some(r.text("servertimezone")?),
        None => None,
    };

    Ok(AccountInfo {
        wallets: balances
            .into_iter()
            .map(|(currency_code, (available, held))| Wallet {
                currency_code,
                available,
                held,
            })
            .collect(),
        server_time,
        server_timezone,
        open_order_count: r.unsigned("openordercount")?,
    })
}
