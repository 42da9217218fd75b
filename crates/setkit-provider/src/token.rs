use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// One ABI-level call argument.
///
/// Values are carried in their canonical textual form; the provider encodes
/// them against the contract ABI it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Token {
    /// `address`, as a `0x`-prefixed hex string.
    Address(String),
    /// `uint256`. Serialized as a decimal string.
    Uint(BigDecimal),
    Bool(bool),
    /// `bytes32`, as a `0x`-prefixed 64 digit hex string.
    Bytes32(String),
    /// Dynamic `bytes`, as a `0x`-prefixed hex string.
    Bytes(String),
    /// `string`
    String(String),
    /// Dynamic array of one element kind.
    Array(Vec<Token>),
}

impl Token {
    pub fn address(value: impl Into<String>) -> Self {
        Self::Address(value.into())
    }

    pub fn uint(value: BigDecimal) -> Self {
        Self::Uint(value)
    }

    /// Array of addresses.
    pub fn addresses<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Array(values.into_iter().map(|v| Self::Address(v.into())).collect())
    }

    /// Array of `uint256`.
    pub fn uints<I>(values: I) -> Self
    where
        I: IntoIterator<Item = BigDecimal>,
    {
        Self::Array(values.into_iter().map(Self::Uint).collect())
    }
}
