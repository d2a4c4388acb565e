//! Exact decimal quantity used for every price, amount and fee field.

use crate::error::DomainParseErrorKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// A price, amount or fee. Never passes through binary floating point.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    pub const ZERO: Quantity = Quantity(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parse a JSON string or number token.
    ///
    /// Numbers are re-read from their textual form, so `0.0025` stays exactly
    /// `0.0025`.
    pub fn from_json(value: &Value) -> Result<Self, DomainParseErrorKind> {
        match value {
            Value::String(s) => s.parse(),
            Value::Number(n) => n.to_string().parse(),
            _ => Err(DomainParseErrorKind::UnexpectedType("quantity")),
        }
    }
}

impl FromStr for Quantity {
    type Err = DomainParseErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !is_decimal_token(trimmed) {
            return Err(DomainParseErrorKind::InvalidQuantity(s.to_string()));
        }
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Self)
            .map_err(|_| DomainParseErrorKind::InvalidQuantity(s.to_string()))
    }
}

/// `[+-]digits[.digits][(e|E)[+-]digits]`, with at least one mantissa digit.
///
/// `Decimal::from_str` alone also accepts `_` separators.
fn is_decimal_token(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };

    let mantissa = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Quantity> for Decimal {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_string_token() {
        let q = Quantity::from_json(&json!("0.0025")).unwrap();
        assert_eq!(q.as_decimal(), Decimal::new(25, 4));
        assert_eq!(q.to_string(), "0.0025");
    }

    #[test]
    fn test_parse_number_token_without_float_drift() {
        let q = Quantity::from_json(&json!(9.9975)).unwrap();
        assert_eq!(q.as_decimal(), Decimal::new(99975, 4));
    }

    #[test]
    fn test_parse_scientific_token() {
        let q: Quantity = "1e-8".parse().unwrap();
        assert_eq!(q.as_decimal(), Decimal::new(1, 8));
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        assert_eq!(
            "abc".parse::<Quantity>(),
            Err(DomainParseErrorKind::InvalidQuantity("abc".to_string()))
        );
        assert_eq!(
            "".parse::<Quantity>(),
            Err(DomainParseErrorKind::InvalidQuantity(String::new()))
        );
        assert_eq!(
            "1_000".parse::<Quantity>(),
            Err(DomainParseErrorKind::InvalidQuantity("1_000".to_string()))
        );
        for bad in ["1,000", ".", "-", "1.2.3", "1e", "e5", "0x10", "1e_2", " 1 2 "] {
            assert_eq!(
                bad.parse::<Quantity>(),
                Err(DomainParseErrorKind::InvalidQuantity(bad.to_string())),
                "{bad:?}"
            );
        }
        assert_eq!(
            Quantity::from_json(&json!(true)),
            Err(DomainParseErrorKind::UnexpectedType("quantity"))
        );
        assert_eq!(
            Quantity::from_json(&Value::Null),
            Err(DomainParseErrorKind::UnexpectedType("quantity"))
        );
    }

    #[test]
    fn test_serializes_as_string() {
        let q: Quantity = "12.50".parse().unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "\"12.50\"");
    }
}
