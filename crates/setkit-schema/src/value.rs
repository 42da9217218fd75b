use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use serde_json::{json, Value};

use crate::schemas::BIG_NUMBER_KEY;

/// A value accepted at the validation boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaValue {
    /// Hex strings, addresses, free text.
    Text(String),
    /// Token quantity.
    Decimal(BigDecimal),
    /// Any other structured input.
    Json(Value),
}

impl SchemaValue {
    /// Instance presented to the schema engine.
    ///
    /// Decimals are wrapped as `{"$bigNumber": "<decimal>"}` so that they
    /// satisfy the object-typed numeric schemas and nothing else.
    pub fn to_instance(&self) -> Value {
        match self {
            SchemaValue::Text(text) => Value::String(text.clone()),
            SchemaValue::Decimal(quantity) => json!({ BIG_NUMBER_KEY: quantity.to_string() }),
            SchemaValue::Json(value) => value.clone(),
        }
    }

    /// JSON rendering of the caller's value, used in error messages.
    pub fn to_json_string(&self) -> String {
        let rendered = match self {
            SchemaValue::Text(text) => Value::String(text.clone()),
            SchemaValue::Decimal(quantity) => Value::String(quantity.to_string()),
            SchemaValue::Json(value) => value.clone(),
        };
        serde_json::to_string(&rendered).unwrap_or_else(|_| "null".to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SchemaValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for SchemaValue {
    fn from(value: &str) -> Self {
        SchemaValue::Text(value.to_string())
    }
}

impl From<String> for SchemaValue {
    fn from(value: String) -> Self {
        SchemaValue::Text(value)
    }
}

impl From<&String> for SchemaValue {
    fn from(value: &String) -> Self {
        SchemaValue::Text(value.clone())
    }
}

impl From<BigDecimal> for SchemaValue {
    fn from(value: BigDecimal) -> Self {
        SchemaValue::Decimal(value)
    }
}

impl From<&BigDecimal> for SchemaValue {
    fn from(value: &BigDecimal) -> Self {
        SchemaValue::Decimal(value.clone())
    }
}

impl From<Value> for SchemaValue {
    fn from(value: Value) -> Self {
        SchemaValue::Json(value)
    }
}

/// Parse a decimal quantity in plain (`1.5`) or scientific (`1e18`) notation.
///
/// Precision is unbounded, so any `uint256` fits.
pub fn parse_quantity(input: &str) -> Option<BigDecimal> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    BigDecimal::from_str(input).ok()
}

/// True when the quantity has no fractional part.
pub fn is_whole_quantity(quantity: &BigDecimal) -> bool {
    let scale = quantity.fractional_digit_count();
    if scale <= 0 || quantity.is_zero() {
        return true;
    }
    // A nonzero integer needs more digits than its scale.
    i64::try_from(quantity.digits()).is_ok_and(|digits| digits > scale) && quantity.is_integer()
}

#[cfg(test)]
mod tests {
    use bigdecimal::One;

    use super::*;

    #[test]
    fn decimals_are_wrapped_for_the_engine() {
        let value = SchemaValue::from(BigDecimal::new(15.into(), 1));
        assert_eq!(value.to_instance(), json!({ "$bigNumber": "1.5" }));
        assert_eq!(value.to_json_string(), "\"1.5\"");
    }

    #[test]
    fn text_and_json_pass_through() {
        assert_eq!(SchemaValue::from("0x12").to_instance(), json!("0x12"));
        assert_eq!(
            SchemaValue::from(json!({ "a": 1 })).to_json_string(),
            r#"{"a":1}"#
        );
        assert_eq!(SchemaValue::from("0x12").as_text(), Some("0x12"));
        assert_eq!(SchemaValue::from(BigDecimal::one()).as_text(), None);
    }

    #[test]
    fn parse_quantity_accepts_plain_and_scientific() {
        assert_eq!(parse_quantity("42"), Some(BigDecimal::from(42)));
        assert_eq!(parse_quantity("-0.5"), Some(BigDecimal::new((-5).into(), 1)));
        assert_eq!(
            parse_quantity("1e18"),
            Some(BigDecimal::from(1_000_000_000_000_000_000u64))
        );
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("ten"), None);
        assert_eq!(parse_quantity("0x10"), None);
    }

    #[test]
    fn parse_quantity_is_not_capped_below_uint256() {
        let above_96_bits = parse_quantity("100000000000000000000000000000").unwrap();
        assert_eq!(above_96_bits, parse_quantity("1e29").unwrap());

        let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        assert_eq!(parse_quantity(max).unwrap().to_string(), max);
    }

    #[test]
    fn whole_quantities() {
        assert!(is_whole_quantity(&parse_quantity("1e29").unwrap()));
        assert!(is_whole_quantity(&parse_quantity("1000.000").unwrap()));
        assert!(is_whole_quantity(&parse_quantity("0.0").unwrap()));
        assert!(!is_whole_quantity(&parse_quantity("1.5").unwrap()));
        assert!(!is_whole_quantity(&parse_quantity("1e-9000000000").unwrap()));
    }
}
