//! Built-in schema definitions.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::SchemaError;

/// The zero address, used as a "not set" sentinel by the contracts.
pub const NULL_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Key under which a decimal quantity is presented to the schema engine.
pub(crate) const BIG_NUMBER_KEY: &str = "$bigNumber";

/// Custom format accepting any decimal quantity.
pub const BIG_NUMBER_FORMAT: &str = "BigNumber";

/// Custom format accepting decimal quantities without a fractional part.
pub const WHOLE_BIG_NUMBER_FORMAT: &str = "wholeBigNumber";

/// Identifier of a built-in schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaId {
    Address,
    Bytes,
    Bytes32,
    Number,
    WholeNumber,
}

impl SchemaId {
    /// Every built-in id, in registry order.
    pub const ALL: [SchemaId; 5] = [
        SchemaId::Address,
        SchemaId::Bytes,
        SchemaId::Bytes32,
        SchemaId::Number,
        SchemaId::WholeNumber,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            SchemaId::Address => 0,
            SchemaId::Bytes => 1,
            SchemaId::Bytes32 => 2,
            SchemaId::Number => 3,
            SchemaId::WholeNumber => 4,
        }
    }

    /// Canonical id string, e.g. `/Address`.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaId::Address => "/Address",
            SchemaId::Bytes => "/Bytes",
            SchemaId::Bytes32 => "/Bytes32",
            SchemaId::Number => "/Number",
            SchemaId::WholeNumber => "/WholeNumber",
        }
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchemaId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for SchemaId {
    type Err = SchemaError;

    /// Accepts the canonical id (`/Address`) or the bare registry name
    /// (`address`, `wholeNumber`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('/').to_ascii_lowercase();
        match name.as_str() {
            "address" => Ok(SchemaId::Address),
            "bytes" => Ok(SchemaId::Bytes),
            "bytes32" => Ok(SchemaId::Bytes32),
            "number" => Ok(SchemaId::Number),
            "wholenumber" | "whole-number" | "whole_number" => Ok(SchemaId::WholeNumber),
            _ => Err(SchemaError::UnknownSchema(s.to_string())),
        }
    }
}

/// JSON type a schema expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Object,
}

impl SchemaType {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Object => "object",
        }
    }
}

/// The rule a schema applies on top of its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SchemaRule {
    /// Regular expression the whole string must match.
    Pattern(&'static str),
    /// Name of a registered custom format predicate.
    Format(&'static str),
}

/// An immutable schema record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub id: SchemaId,
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    pub rule: SchemaRule,
}

impl Schema {
    /// Built-in definition for `id`.
    pub const fn builtin(id: SchemaId) -> Self {
        match id {
            SchemaId::Address => Self {
                id,
                schema_type: SchemaType::String,
                rule: SchemaRule::Pattern("^0x[0-9a-fA-F]{40}$"),
            },
            SchemaId::Bytes => Self {
                id,
                schema_type: SchemaType::String,
                rule: SchemaRule::Pattern("^0x([0-9a-fA-F]{2})*$"),
            },
            SchemaId::Bytes32 => Self {
                id,
                schema_type: SchemaType::String,
                rule: SchemaRule::Pattern("^0x[0-9a-fA-F]{64}$"),
            },
            SchemaId::Number => Self {
                id,
                schema_type: SchemaType::Object,
                rule: SchemaRule::Format(BIG_NUMBER_FORMAT),
            },
            SchemaId::WholeNumber => Self {
                id,
                schema_type: SchemaType::Object,
                rule: SchemaRule::Format(WHOLE_BIG_NUMBER_FORMAT),
            },
        }
    }

    /// Pattern or format name, whichever this schema carries.
    pub fn pattern_or_format(&self) -> &'static str {
        match self.rule {
            SchemaRule::Pattern(p) | SchemaRule::Format(p) => p,
        }
    }

    /// JSON Schema document handed to the schema engine.
    ///
    /// Object schemas describe the decimal envelope produced by
    /// [`SchemaValue::to_instance`](crate::SchemaValue::to_instance).
    pub fn to_json_schema(&self) -> Value {
        match (self.schema_type, self.rule) {
            (SchemaType::String, SchemaRule::Pattern(pattern)) => json!({
                "type": "string",
                "pattern": pattern,
            }),
            (SchemaType::String, SchemaRule::Format(format)) => json!({
                "type": "string",
                "format": format,
            }),
            (SchemaType::Object, SchemaRule::Format(format)) => json!({
                "type": "object",
                "properties": {
                    BIG_NUMBER_KEY: { "type": "string", "format": format }
                },
                "required": [BIG_NUMBER_KEY],
                "additionalProperties": false,
            }),
            (SchemaType::Object, SchemaRule::Pattern(pattern)) => json!({
                "type": "object",
                "properties": {
                    BIG_NUMBER_KEY: { "type": "string", "pattern": pattern }
                },
                "required": [BIG_NUMBER_KEY],
                "additionalProperties": false,
            }),
        }
    }
}
