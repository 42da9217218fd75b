//! Client SDK for the Set Protocol token-basket contracts.
//!
//! Every argument headed for a contract passes through a fixed set of JSON
//! schemas and precondition checks before anything reaches the chain.
//!
//! # Crate Structure
//!
//! - [`provider`]: RPC provider contract, call and transaction types
//! - [`schema`]: built-in schema registry and validator
//! - [`assert`]: schema and precondition assertions
//! - [`wrappers`]: typed contract wrappers (behind `wrappers` feature)

/// Re-export provider types.
pub mod provider {
    pub use setkit_provider::*;
}

/// Re-export schema types.
pub mod schema {
    pub use setkit_schema::*;
}

/// Re-export assertion types.
pub mod assert {
    pub use setkit_assert::*;
}

/// Re-export wrapper types (requires `wrappers` feature).
#[cfg(feature = "wrappers")]
pub mod wrappers {
    pub use setkit_wrappers::*;
}

#[cfg(feature = "wrappers")]
pub use setkit_wrappers::SetProtocol;
