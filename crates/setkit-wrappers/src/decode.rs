//! Turn provider JSON outputs into typed values.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, Signed, ToPrimitive};
use serde_json::Value;
use setkit_provider::{ProviderError, Result};
use setkit_schema::{is_whole_quantity, parse_quantity};

fn decode_error(method: &str, reason: impl Into<String>) -> ProviderError {
    ProviderError::Decode {
        method: method.to_string(),
        reason: reason.into(),
    }
}

/// A `uint256` output: decimal string, `0x` hex string or JSON number.
///
/// Negative or fractional values are rejected.
pub fn decode_quantity(method: &str, value: &Value) -> Result<BigDecimal> {
    let quantity = match value {
        Value::String(text) => match text.strip_prefix("0x") {
            Some(hex) => decode_hex(hex)
                .ok_or_else(|| decode_error(method, format!("bad hex quantity {text}")))?,
            None => parse_quantity(text)
                .ok_or_else(|| decode_error(method, format!("not a quantity: {text}")))?,
        },
        Value::Number(number) => parse_quantity(&number.to_string())
            .ok_or_else(|| decode_error(method, format!("not a quantity: {number}")))?,
        other => return Err(decode_error(method, format!("expected quantity, got {other}"))),
    };
    if quantity.is_negative() || !is_whole_quantity(&quantity) {
        return Err(decode_error(method, format!("{quantity} is not a uint256")));
    }
    Ok(quantity)
}

/// Digits only; `BigInt` parsing would also take a sign or `_` separators.
fn decode_hex(hex: &str) -> Option<BigDecimal> {
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    BigInt::parse_bytes(hex.as_bytes(), 16).map(BigDecimal::from)
}

/// An `address` output.
pub fn decode_address(method: &str, value: &Value) -> Result<String> {
    match value.as_str() {
        Some(address) if address.starts_with("0x") => Ok(address.to_string()),
        _ => Err(decode_error(method, format!("expected address, got {value}"))),
    }
}

/// An `address[]` output.
pub fn decode_addresses(method: &str, value: &Value) -> Result<Vec<String>> {
    as_array(method, value)?
        .iter()
        .map(|item| decode_address(method, item))
        .collect()
}

/// A `uint256[]` output.
pub fn decode_quantities(method: &str, value: &Value) -> Result<Vec<BigDecimal>> {
    as_array(method, value)?
        .iter()
        .map(|item| decode_quantity(method, item))
        .collect()
}

pub fn decode_bool(method: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| decode_error(method, format!("expected bool, got {value}")))
}

pub fn decode_string(method: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| decode_error(method, format!("expected string, got {value}")))
}

/// A small unsigned integer output such as `decimals()` or an enum.
pub fn decode_u8(method: &str, value: &Value) -> Result<u8> {
    let quantity = decode_quantity(method, value)?;
    quantity
        .to_u8()
        .ok_or_else(|| decode_error(method, format!("{quantity} does not fit in u8")))
}

fn as_array<'a>(method: &str, value: &'a Value) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| decode_error(method, format!("expected array, got {value}")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn quantities_decode_from_strings_hex_and_numbers() {
        assert_eq!(
            decode_quantity("m", &json!("1000000000000000000")).unwrap(),
            BigDecimal::from(1_000_000_000_000_000_000u64)
        );
        assert_eq!(decode_quantity("m", &json!("0xff")).unwrap(), BigDecimal::from(255));
        assert_eq!(decode_quantity("m", &json!(42)).unwrap(), BigDecimal::from(42));
        assert!(matches!(
            decode_quantity("balanceOf(address)", &json!(true)),
            Err(ProviderError::Decode { method, .. }) if method == "balanceOf(address)"
        ));
        assert!(decode_quantity("m", &json!("0xzz")).is_err());
        assert!(decode_quantity("m", &json!("0x")).is_err());
    }

    #[test]
    fn full_width_uint256_decodes() {
        let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let from_hex = decode_quantity("m", &json!(format!("0x{}", "f".repeat(64)))).unwrap();
        assert_eq!(from_hex.to_string(), max);
        assert_eq!(decode_quantity("m", &json!(max)).unwrap(), from_hex);
        assert_eq!(
            decode_quantity("m", &json!("100000000000000000000000000000")).unwrap(),
            "1e29".parse::<BigDecimal>().unwrap()
        );
    }

    #[test]
    fn signed_or_fractional_outputs_are_decode_errors() {
        for bad in ["0x-1", "0x+1", "0x_f", "-5", "-0.5", "1.5"] {
            assert!(
                matches!(
                    decode_quantity("totalSupply()", &json!(bad)),
                    Err(ProviderError::Decode { ref method, .. }) if method == "totalSupply()"
                ),
                "{bad} should not decode"
            );
        }
        assert!(decode_quantity("m", &json!(-1)).is_err());
        assert!(decode_u8("m", &json!("-1")).is_err());
    }

    #[test]
    fn address_lists_decode() {
        let out = decode_addresses("m", &json!(["0x01", "0x02"])).unwrap();
        assert_eq!(out, vec!["0x01", "0x02"]);
        assert!(decode_addresses("m", &json!("0x01")).is_err());
        assert!(decode_address("m", &json!("01")).is_err());
    }

    #[test]
    fn scalar_decoders() {
        assert!(decode_bool("m", &json!(true)).unwrap());
        assert_eq!(decode_string("m", &json!("SET")).unwrap(), "SET");
        assert_eq!(decode_u8("m", &json!("18")).unwrap(), 18);
        assert!(decode_u8("m", &json!("256")).is_err());
        assert_eq!(
            decode_quantities("m", &json!(["1", 2])).unwrap(),
            vec![BigDecimal::from(1), BigDecimal::from(2)]
        );
    }
}
