use std::sync::Arc;

use setkit_schema::{SchemaId, SchemaRegistry, SchemaValue};

use crate::error::{AssertionError, Result};

/// Schema gates bound to a shared registry.
#[derive(Debug, Clone)]
pub struct Assertions {
    registry: Arc<SchemaRegistry>,
}

impl Assertions {
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Shared handle to the underlying registry.
    pub fn registry_handle(&self) -> Arc<SchemaRegistry> {
        Arc::clone(&self.registry)
    }

    pub fn is_valid_address(&self, name: &str, value: impl Into<SchemaValue>) -> Result<()> {
        self.conforms(name, value, SchemaId::Address)
    }

    pub fn is_valid_bytes32(&self, name: &str, value: impl Into<SchemaValue>) -> Result<()> {
        self.conforms(name, value, SchemaId::Bytes32)
    }

    pub fn is_valid_bytes(&self, name: &str, value: impl Into<SchemaValue>) -> Result<()> {
        self.conforms(name, value, SchemaId::Bytes)
    }

    pub fn is_valid_number(&self, name: &str, value: impl Into<SchemaValue>) -> Result<()> {
        self.conforms(name, value, SchemaId::Number)
    }

    pub fn is_valid_whole_number(&self, name: &str, value: impl Into<SchemaValue>) -> Result<()> {
        self.conforms(name, value, SchemaId::WholeNumber)
    }

    /// Check every element of `values` against the address schema.
    ///
    /// Elements are named `name[i]` in the error.
    pub fn are_valid_addresses<S: AsRef<str>>(&self, name: &str, values: &[S]) -> Result<()> {
        values
            .iter()
            .enumerate()
            .try_for_each(|(i, value)| {
                self.is_valid_address(&format!("{name}[{i}]"), value.as_ref())
            })
    }

    /// Check `value` against schema `id`, naming it `name` on failure.
    pub fn conforms(&self, name: &str, value: impl Into<SchemaValue>, id: SchemaId) -> Result<()> {
        let value = value.into();
        let result = self.registry.validate(&value, id);
        if result.is_valid() {
            return Ok(());
        }

        tracing::warn!(gate = "schema", schema = %id, name, "assertion failed");
        Err(AssertionError::SchemaViolation {
            name: name.to_string(),
            schema_id: id,
            value: value.to_json_string(),
            errors: result.errors,
        })
    }
}
