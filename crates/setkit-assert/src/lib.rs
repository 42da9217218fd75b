//! Precondition gates run before setkit issues a contract call.
//!
//! Every gate returns `Result<(), AssertionError>`. The first failing gate
//! aborts the wrapper call; nothing here retries or recovers.
//!
//! - [`Assertions`] checks values against the schema registry
//! - [`common`] holds the semantic checks (null accounts, quantities, lengths)
//! - [`erc20`] reads token state through an [`Erc20Reader`]

pub mod common;
pub mod erc20;
pub mod error;
pub mod messages;
pub mod schema;

pub use erc20::{
    has_sufficient_allowance, has_sufficient_balance, implements_erc20, Erc20Reader,
    ERC20_CHECK_ACCOUNT,
};
pub use error::{AssertionError, Result};
pub use schema::Assertions;
