/// Errors surfaced by a [`Provider`](crate::Provider).
///
/// setkit never retries or rewrites these; they travel to the caller as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// The node answered with a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The call or transaction reverted on chain.
    #[error("execution reverted: {0}")]
    Reverted(String),

    /// The transport could not reach the node.
    #[error("transport error: {0}")]
    Transport(String),

    /// A call returned outputs that could not be decoded into the expected type.
    #[error("failed to decode output of {method}: {reason}")]
    Decode { method: String, reason: String },

    /// The target has no ABI entry for the requested method.
    #[error("contract {to} has no method {method}")]
    UnknownMethod { to: String, method: String },
}

pub type Result<T> = std::result::Result<T, ProviderError>;
