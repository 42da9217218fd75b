use setkit_provider::ProviderError;
use setkit_schema::SchemaId;

/// A failed precondition.
#[derive(Debug, thiserror::Error)]
pub enum AssertionError {
    /// The value does not conform to a registry schema.
    #[error(
        "Expected {name} to conform to schema {schema_id}.\nEncountered: {value}\nValidation errors: {}",
        .errors.join(", ")
    )]
    SchemaViolation {
        name: String,
        schema_id: SchemaId,
        /// JSON rendering of the offending value.
        value: String,
        errors: Vec<String>,
    },

    /// A semantic check failed; carries the caller's message.
    #[error("{0}")]
    Precondition(String),

    /// The target did not answer the ERC20 read surface.
    #[error("Contract at {address} does not implement ERC20 interface.")]
    NotErc20 { address: String },

    /// Reading chain state for a check failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AssertionError {
    /// Build a [`AssertionError::Precondition`], logging the failed gate.
    pub fn precondition(gate: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!(gate, %message, "assertion failed");
        Self::Precondition(message)
    }
}

pub type Result<T> = std::result::Result<T, AssertionError>;
