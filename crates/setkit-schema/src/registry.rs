use std::fmt;

use jsonschema::Validator;

use crate::config::RegistryConfig;
use crate::error::{Result, SchemaError};
use crate::schemas::{Schema, SchemaId, BIG_NUMBER_FORMAT, WHOLE_BIG_NUMBER_FORMAT};
use crate::validator::{is_big_number, is_whole_big_number, validate_value, ValidationResult};
use crate::value::SchemaValue;

struct Entry {
    schema: Schema,
    validator: Validator,
}

/// Read-only registry of the built-in schemas, compiled once.
///
/// Build it at startup and share it by reference or `Arc`; there is no way
/// to add or replace a schema after construction.
pub struct SchemaRegistry {
    // Indexed by position in `SchemaId::ALL`.
    entries: Vec<Entry>,
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Compile the built-in schemas with default config.
    pub fn new() -> Result<Self> {
        Self::with_config(RegistryConfig::default())
    }

    /// Compile the built-in schemas with explicit config.
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        let entries = SchemaId::ALL
            .iter()
            .map(|id| {
                let schema = Schema::builtin(*id);
                let validator = compile(&schema, &config)?;
                Ok(Entry { schema, validator })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            schemas = entries.len(),
            validate_formats = config.validate_formats,
            "compiled schema registry"
        );

        Ok(Self { entries, config })
    }

    /// Look up a schema record.
    pub fn get(&self, id: SchemaId) -> &Schema {
        &self.entry(id).schema
    }

    /// Look up a schema record by its id string (`/Address`) or bare name.
    pub fn get_by_id(&self, id: &str) -> Result<&Schema> {
        let id: SchemaId = id.parse()?;
        Ok(self.get(id))
    }

    /// All schema records, in registry order.
    pub fn schemas(&self) -> impl Iterator<Item = &Schema> {
        self.entries.iter().map(|entry| &entry.schema)
    }

    /// Registered ids, in registry order.
    pub fn ids(&self) -> Vec<SchemaId> {
        self.schemas().map(|schema| schema.id).collect()
    }

    /// Run `value` against the schema `id`.
    pub fn validate(&self, value: &SchemaValue, id: SchemaId) -> ValidationResult {
        let entry = self.entry(id);
        let result = validate_value(
            id,
            value,
            &entry.validator,
            self.config.max_reported_errors,
        );
        tracing::trace!(schema = %id, valid = result.is_valid(), "validated value");
        result
    }

    /// Run `value` against the schema named by `id`.
    pub fn validate_id(&self, value: &SchemaValue, id: &str) -> Result<ValidationResult> {
        let id: SchemaId = id
            .parse()
            .map_err(|_| SchemaError::UnknownSchema(id.to_string()))?;
        Ok(self.validate(value, id))
    }

    /// Shorthand for `validate(..).is_valid()`.
    pub fn is_valid(&self, value: &SchemaValue, id: SchemaId) -> bool {
        self.validate(value, id).is_valid()
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn entry(&self, id: SchemaId) -> &Entry {
        &self.entries[id.index()]
    }
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("ids", &self.ids())
            .field("config", &self.config)
            .finish()
    }
}

fn compile(schema: &Schema, config: &RegistryConfig) -> Result<Validator> {
    let document = schema.to_json_schema();
    jsonschema::options()
        .should_validate_formats(config.validate_formats)
        .with_format(BIG_NUMBER_FORMAT, is_big_number)
        .with_format(WHOLE_BIG_NUMBER_FORMAT, is_whole_big_number)
        .build(&document)
        .map_err(|err| SchemaError::CompileFailed {
            id: schema.id.as_str(),
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use bigdecimal::{BigDecimal, One, Zero};
    use serde_json::json;

    use super::*;

    const ADDRESS: &str = "0x1234567890123456789012345678901234567890";

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new().unwrap()
    }

    #[test]
    fn registry_exposes_every_builtin_schema() {
        let registry = registry();
        assert_eq!(registry.ids(), SchemaId::ALL.to_vec());
        for id in SchemaId::ALL {
            assert_eq!(registry.get(id).id, id);
        }
        assert_eq!(registry.get_by_id("/Bytes32").unwrap().id, SchemaId::Bytes32);
        assert!(matches!(
            registry.get_by_id("/Missing"),
            Err(SchemaError::UnknownSchema(_))
        ));
    }

    #[test]
    fn valid_address_has_no_errors() {
        let result = registry().validate(&ADDRESS.into(), SchemaId::Address);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn short_address_reports_one_error_naming_the_schema() {
        let result = registry().validate(&"0x123".into(), SchemaId::Address);
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("/Address"));
    }

    #[test]
    fn non_string_value_fails_string_schema_once() {
        let registry = registry();
        let result = registry.validate(&json!(42).into(), SchemaId::Address);
        assert_eq!(result.errors().len(), 1);

        let result = registry.validate(&BigDecimal::one().into(), SchemaId::Bytes32);
        assert_eq!(result.errors().len(), 1);
    }

    #[test]
    fn bytes_requires_even_hex() {
        let registry = registry();
        assert!(registry.is_valid(&"0x".into(), SchemaId::Bytes));
        assert!(registry.is_valid(&"0xdeadBEEF".into(), SchemaId::Bytes));
        assert!(!registry.is_valid(&"0xabc".into(), SchemaId::Bytes));
        assert!(!registry.is_valid(&"deadbeef".into(), SchemaId::Bytes));
    }

    #[test]
    fn number_accepts_decimals_only() {
        let registry = registry();
        assert!(registry.is_valid(&BigDecimal::new((-25).into(), 1).into(), SchemaId::Number));
        assert!(registry.is_valid(&BigDecimal::zero().into(), SchemaId::Number));
        assert!(!registry.is_valid(&"5".into(), SchemaId::Number));
        assert!(!registry.is_valid(&json!({ "value": "5" }).into(), SchemaId::Number));
        assert!(!registry.is_valid(
            &json!({ "$bigNumber": "five" }).into(),
            SchemaId::Number
        ));
    }

    #[test]
    fn whole_number_rejects_fractional_part() {
        let registry = registry();
        assert!(registry.is_valid(&BigDecimal::from(1000).into(), SchemaId::WholeNumber));
        let result = registry.validate(&BigDecimal::new(15.into(), 1).into(), SchemaId::WholeNumber);
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].starts_with("/WholeNumber: "));

        let max_uint = crate::parse_quantity(
            "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        )
        .unwrap();
        assert!(registry.is_valid(&max_uint.into(), SchemaId::WholeNumber));
    }

    #[test]
    fn formats_can_be_disabled() {
        let registry = SchemaRegistry::with_config(RegistryConfig {
            validate_formats: false,
            ..RegistryConfig::default()
        })
        .unwrap();
        assert!(registry.is_valid(&BigDecimal::new(15.into(), 1).into(), SchemaId::WholeNumber));
        assert!(!registry.is_valid(&"15".into(), SchemaId::WholeNumber));
    }

    #[test]
    fn reported_errors_are_capped() {
        let registry = SchemaRegistry::with_config(RegistryConfig {
            max_reported_errors: 1,
            ..RegistryConfig::default()
        })
        .unwrap();
        let result = registry.validate(&json!({ "a": 1, "b": 2 }).into(), SchemaId::Number);
        assert_eq!(result.errors().len(), 1);
    }

    #[test]
    fn validate_id_resolves_names() {
        let registry = registry();
        assert!(registry
            .validate_id(&ADDRESS.into(), "address")
            .unwrap()
            .is_valid());
        assert!(matches!(
            registry.validate_id(&ADDRESS.into(), "/Nope"),
            Err(SchemaError::UnknownSchema(id)) if id == "/Nope"
        ));
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SchemaRegistry>();
    }
}
