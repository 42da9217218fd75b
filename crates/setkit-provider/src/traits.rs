use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CallRequest, Log, LogFilter, TransactionReceipt, TransactionRequest, TxHash};

/// A connected chain endpoint.
///
/// Implementations own the JSON-RPC transport and the contract ABIs: they
/// encode [`CallRequest::args`] against the ABI entry named by
/// [`CallRequest::method`] and return decoded outputs as JSON. A single
/// output is returned bare; several outputs come back as a JSON array.
///
/// Timeouts and cancellation belong to the implementation.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Execute a read-only call (`eth_call`).
    async fn call(&self, request: &CallRequest) -> Result<serde_json::Value>;

    /// Sign and broadcast a state-changing call.
    async fn send_transaction(&self, request: &TransactionRequest) -> Result<TxHash>;

    /// Fetch the receipt of a mined transaction, `None` while pending.
    async fn get_transaction_receipt(&self, hash: &TxHash) -> Result<Option<TransactionReceipt>>;

    /// Query event logs.
    async fn get_logs(&self, filter: &LogFilter) -> Result<Vec<Log>>;
}
