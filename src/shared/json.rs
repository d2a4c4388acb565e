//! Field-by-field reader over the exchange's loosely typed JSON records.
//!
//! Every accessor checks presence explicitly and reports the record and field
//! it failed on. Nothing here substitutes a default for a missing or bad field.

use super::{ExchangeTimezone, MarketId, OrderType, Quantity};
use crate::error::{DomainParseError, DomainParseErrorKind};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// One JSON object being mapped, tagged with where it came from.
pub(crate) struct Record<'a> {
    context: String,
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    /// Wrap a whole `return` payload that must be an object.
    pub fn payload(value: &'a Value, method: &str) -> Result<Self, DomainParseError> {
        Self::object(value, method.to_string(), "return")
    }

    fn object(value: &'a Value, context: String, label: &str) -> Result<Self, DomainParseError> {
        match value {
            Value::Object(fields) => Ok(Self { context, fields }),
            Value::Null => Err(DomainParseError::new(
                context,
                label,
                DomainParseErrorKind::Missing,
            )),
            _ => Err(DomainParseError::new(
                context,
                label,
                DomainParseErrorKind::UnexpectedType("object"),
            )),
        }
    }

    pub fn error(&self, field: &str, kind: DomainParseErrorKind) -> DomainParseError {
        DomainParseError::new(self.context.clone(), field, kind)
    }

    /// Key present, possibly `null`.
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Present and non-null.
    pub fn optional(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    pub fn required(&self, field: &str) -> Result<&'a Value, DomainParseError> {
        self.optional(field)
            .ok_or_else(|| self.error(field, DomainParseErrorKind::Missing))
    }

    /// Parse a required field with a value-level parser.
    pub fn parse_with<T>(
        &self,
        field: &str,
        parse: impl FnOnce(&Value) -> Result<T, DomainParseErrorKind>,
    ) -> Result<T, DomainParseError> {
        parse(self.required(field)?).map_err(|kind| self.error(field, kind))
    }

    pub fn text(&self, field: &str) -> Result<String, DomainParseError> {
        self.parse_with(field, |value| match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(DomainParseErrorKind::UnexpectedType("string")),
        })
    }

    pub fn quantity(&self, field: &str) -> Result<Quantity, DomainParseError> {
        self.parse_with(field, Quantity::from_json)
    }

    pub fn order_type(&self, field: &str) -> Result<OrderType, DomainParseError> {
        self.parse_with(field, |value| match value {
            Value::String(s) => s.parse(),
            _ => Err(DomainParseErrorKind::UnexpectedType("string")),
        })
    }

    pub fn timestamp(
        &self,
        field: &str,
        timezone: &ExchangeTimezone,
    ) -> Result<DateTime<Utc>, DomainParseError> {
        self.parse_with(field, |value| match value {
            Value::String(s) => timezone.parse(s),
            _ => Err(DomainParseErrorKind::UnexpectedType("timestamp string")),
        })
    }

    pub fn unsigned(&self, field: &str) -> Result<u64, DomainParseError> {
        self.parse_with(field, |value| match value {
            Value::Number(n) => n
                .as_u64()
                .ok_or_else(|| DomainParseErrorKind::UnexpectedType("non-negative integer")),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| DomainParseErrorKind::UnexpectedType("non-negative integer")),
            _ => Err(DomainParseErrorKind::UnexpectedType("non-negative integer")),
        })
    }

    /// The record's own `marketid` when the key is present, else the batch
    /// default.
    ///
    /// An explicit `null` is not a missing key and does not take the default.
    /// A record that carries no market id in a batch without a default is an
    /// error.
    pub fn market_id_or(
        &self,
        field: &str,
        default: Option<&MarketId>,
    ) -> Result<MarketId, DomainParseError> {
        match (self.fields.get(field), default) {
            (Some(Value::Null), _) => Err(self.error(field, DomainParseErrorKind::Missing)),
            (Some(value), _) => MarketId::from_json(value).map_err(|kind| self.error(field, kind)),
            (None, Some(default)) => Ok(default.clone()),
            (None, None) => Err(self.error(field, DomainParseErrorKind::Missing)),
        }
    }

    /// Nested object field, e.g. `balances_available`.
    pub fn object_field(&self, field: &str) -> Result<Record<'a>, DomainParseError> {
        let value = self.required(field)?;
        Self::object(value, format!("{}.{}", self.context, field), "object")
            .map_err(|_| self.error(field, DomainParseErrorKind::UnexpectedType("object")))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.fields.iter()
    }
}

/// Map every element of a JSON array independently; the first failure aborts
/// the whole batch.
pub(crate) fn map_array<'a, T>(
    value: &'a Value,
    context: &str,
    mut map: impl FnMut(Record<'a>) -> Result<T, DomainParseError>,
) -> Result<Vec<T>, DomainParseError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Null => {
            return Err(DomainParseError::new(
                context,
                "return",
                DomainParseErrorKind::Missing,
            ))
        }
        _ => {
            return Err(DomainParseError::new(
                context,
                "return",
                DomainParseErrorKind::UnexpectedType("array"),
            ))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| Record::object(item, format!("{context}[{i}]"), "item").and_then(&mut map))
        .collect()
}
