//! RPC provider contract for setkit.
//!
//! The wrappers never talk to a node directly. They build [`CallRequest`]s
//! and [`TransactionRequest`]s and hand them to an injected [`Provider`],
//! which owns the JSON-RPC transport and the contract ABIs.
//!
//! This is the lowest layer of setkit. Everything else builds on top of
//! the [`Provider`] trait provided here.

pub mod error;
pub mod token;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod mock;

/// Quantity type used for every `uint256` argument and output.
pub use bigdecimal::BigDecimal;
pub use error::{ProviderError, Result};
pub use token::Token;
pub use traits::Provider;
pub use types::{
    CallRequest, Log, LogFilter, TransactionReceipt, TransactionRequest, TxHash, TxOverrides,
};

#[cfg(any(test, feature = "testutils"))]
pub use mock::{MockProvider, RecordedRequest};
