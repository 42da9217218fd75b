//! Typed wrappers over the Set Protocol contracts.
//!
//! Every public wrapper method runs its input gates through `setkit-assert`
//! (some gates read chain state), then issues one contract call through the
//! [`ContractCaller`] and returns the decoded result unchanged. Provider
//! failures are not caught.

pub mod caller;
pub mod config;
pub mod decode;
pub mod erc20;
pub mod error;
pub mod protocol;
pub mod rebalancing;
pub mod set_core;
pub mod set_token;
pub mod vault;

pub use caller::ContractCaller;
pub use config::{ContractAddresses, TxDefaults};
pub use erc20::{Erc20Handle, Erc20Wrapper};
pub use error::{Result, WrapperError};
pub use protocol::SetProtocol;
pub use rebalancing::{Proposal, RebalanceState, RebalancingSetTokenWrapper};
pub use set_core::CoreWrapper;
pub use set_token::SetTokenWrapper;
pub use vault::VaultWrapper;

#[cfg(test)]
pub(crate) mod testing;
