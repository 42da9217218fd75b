use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Transaction hash, `0x`-prefixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(pub String);

impl TxHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A read-only contract call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    /// Contract address.
    pub to: String,
    /// Canonical Solidity signature, e.g. `balanceOf(address)`.
    pub method: String,
    pub args: Vec<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// A state-changing contract call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub to: String,
    pub method: String,
    pub args: Vec<Token>,
    pub from: Option<String>,
    pub gas_limit: Option<u64>,
    pub gas_price: Option<BigDecimal>,
    /// Wei attached to the call.
    pub value: Option<BigDecimal>,
}

/// Per-call overrides for the sender defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TxOverrides {
    pub from: Option<String>,
    pub gas_limit: Option<u64>,
    pub gas_price: Option<BigDecimal>,
    pub value: Option<BigDecimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    pub block_number: u64,
    pub from: String,
    pub to: Option<String>,
    pub gas_used: u64,
    /// `true` when the transaction executed without reverting.
    pub status: bool,
    pub logs: Vec<Log>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
    pub block_number: u64,
    pub transaction_hash: TxHash,
    pub log_index: u64,
}

/// Filter for `eth_getLogs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogFilter {
    pub address: Option<String>,
    /// Positional topic filters; `None` matches any value in that slot.
    pub topics: Vec<Option<String>>,
    pub from_block: Option<u64>,
    pub to_block: Option<u64>,
}

impl LogFilter {
    /// Returns true if `log` satisfies this filter.
    pub fn matches(&self, log: &Log) -> bool {
        if let Some(address) = &self.address {
            if !address.eq_ignore_ascii_case(&log.address) {
                return false;
            }
        }
        if self.from_block.is_some_and(|from| log.block_number < from) {
            return false;
        }
        if self.to_block.is_some_and(|to| log.block_number > to) {
            return false;
        }
        self.topics.iter().enumerate().all(|(i, wanted)| match wanted {
            None => true,
            Some(topic) => log
                .topics
                .get(i)
                .is_some_and(|actual| actual.eq_ignore_ascii_case(topic)),
        })
    }
}
