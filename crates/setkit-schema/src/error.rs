/// Errors that can occur while building or querying the schema registry.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A built-in schema could not be compiled.
    #[error("failed to compile schema {id}: {message}")]
    CompileFailed { id: &'static str, message: String },

    /// No schema is registered under the given id.
    #[error("no schema registered with id {0}")]
    UnknownSchema(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
