use std::fmt;

use jsonschema::Validator;
use serde::Serialize;

use crate::schemas::SchemaId;
use crate::value::{is_whole_quantity, parse_quantity, SchemaValue};

/// Outcome of running one value against one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// One message per violation, in the order the engine reported them.
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors.join(", "))
    }
}

pub(crate) fn validate_value(
    id: SchemaId,
    value: &SchemaValue,
    validator: &Validator,
    max_errors: usize,
) -> ValidationResult {
    let instance = value.to_instance();
    let errors = validator
        .iter_errors(&instance)
        .take(max_errors.max(1))
        .map(|err| format!("{id}: {err}"))
        .collect();

    ValidationResult { errors }
}

/// Predicate behind the `BigNumber` format.
pub(crate) fn is_big_number(input: &str) -> bool {
    parse_quantity(input).is_some()
}

/// Predicate behind the `wholeBigNumber` format.
pub(crate) fn is_whole_big_number(input: &str) -> bool {
    parse_quantity(input).is_some_and(|quantity| is_whole_quantity(&quantity))
}
