//! Schema registry and validator for setkit contract inputs.
//!
//! A fixed set of format rules (addresses, byte strings, token quantities)
//! compiled once with JSON Schema 2020-12 and shared read-only. Validation
//! never fails: it returns a [`ValidationResult`] listing the violations,
//! and the caller decides what to do with it.

pub mod config;
pub mod error;
pub mod registry;
pub mod schemas;
pub mod validator;
pub mod value;

pub use config::RegistryConfig;
pub use error::{Result, SchemaError};
pub use registry::SchemaRegistry;
pub use schemas::{Schema, SchemaId, SchemaRule, SchemaType, NULL_ADDRESS};
pub use validator::ValidationResult;
pub use value::{is_whole_quantity, parse_quantity, SchemaValue};
