use setkit_assert::AssertionError;
use setkit_provider::ProviderError;
use setkit_schema::SchemaError;

/// Errors returned by wrapper methods.
#[derive(Debug, thiserror::Error)]
pub enum WrapperError {
    /// An input gate rejected the call before anything was sent.
    #[error(transparent)]
    Assertion(#[from] AssertionError),

    /// The provider failed; passed through untouched.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The schema registry could not be built.
    #[error("schema registry error: {0}")]
    Schema(#[from] SchemaError),
}

pub type Result<T> = std::result::Result<T, WrapperError>;
