//! Scripted in-memory [`Provider`] for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::Provider;
use crate::types::{CallRequest, Log, LogFilter, TransactionReceipt, TransactionRequest, TxHash};

/// A request observed by [`MockProvider`], in dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    Call(CallRequest),
    Transaction(TransactionRequest),
}

impl RecordedRequest {
    pub fn method(&self) -> &str {
        match self {
            Self::Call(call) => &call.method,
            Self::Transaction(tx) => &tx.method,
        }
    }

    pub fn to(&self) -> &str {
        match self {
            Self::Call(call) => &call.to,
            Self::Transaction(tx) => &tx.to,
        }
    }
}

#[derive(Default)]
struct MockState {
    calls: HashMap<(String, String), Result<serde_json::Value>>,
    transactions: HashMap<(String, String), Result<TxHash>>,
    receipts: HashMap<TxHash, TransactionReceipt>,
    logs: Vec<Log>,
    recorded: Vec<RecordedRequest>,
    next_hash: u64,
}

/// Provider answering from responses scripted per `(address, method)`.
///
/// Addresses are matched case-insensitively. Unscripted calls fail with
/// [`ProviderError::UnknownMethod`]; unscripted transactions succeed with a
/// sequential hash.
#[derive(Default)]
pub struct MockProvider {
    state: Mutex<MockState>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the result of a read-only call.
    pub fn on_call(&self, to: &str, method: &str, response: serde_json::Value) -> &Self {
        self.with_state(|state| {
            state.calls.insert(key(to, method), Ok(response));
        });
        self
    }

    /// Script a failing read-only call.
    pub fn on_call_error(&self, to: &str, method: &str, error: ProviderError) -> &Self {
        self.with_state(|state| {
            state.calls.insert(key(to, method), Err(error));
        });
        self
    }

    /// Script a failing transaction.
    pub fn on_transaction_error(&self, to: &str, method: &str, error: ProviderError) -> &Self {
        self.with_state(|state| {
            state.transactions.insert(key(to, method), Err(error));
        });
        self
    }

    pub fn add_receipt(&self, receipt: TransactionReceipt) -> &Self {
        self.with_state(|state| {
            state
                .receipts
                .insert(receipt.transaction_hash.clone(), receipt);
        });
        self
    }

    pub fn add_log(&self, log: Log) -> &Self {
        self.with_state(|state| state.logs.push(log));
        self
    }

    /// Every request dispatched so far.
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.with_state(|state| state.recorded.clone())
    }

    /// Methods of every request dispatched so far.
    pub fn recorded_methods(&self) -> Vec<String> {
        self.with_state(|state| {
            state
                .recorded
                .iter()
                .map(|r| r.method().to_string())
                .collect()
        })
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MockState) -> T) -> T {
        let mut guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

fn key(to: &str, method: &str) -> (String, String) {
    (to.to_ascii_lowercase(), method.to_string())
}

#[async_trait]
impl Provider for MockProvider {
    async fn call(&self, request: &CallRequest) -> Result<serde_json::Value> {
        self.with_state(|state| {
            state.recorded.push(RecordedRequest::Call(request.clone()));
            match state.calls.get(&key(&request.to, &request.method)) {
                Some(response) => response.clone(),
                None => Err(ProviderError::UnknownMethod {
                    to: request.to.clone(),
                    method: request.method.clone(),
                }),
            }
        })
    }

    async fn send_transaction(&self, request: &TransactionRequest) -> Result<TxHash> {
        self.with_state(|state| {
            state
                .recorded
                .push(RecordedRequest::Transaction(request.clone()));
            if let Some(scripted) = state.transactions.get(&key(&request.to, &request.method)) {
                return scripted.clone();
            }
            state.next_hash += 1;
            Ok(TxHash(format!("0x{:064x}", state.next_hash)))
        })
    }

    async fn get_transaction_receipt(&self, hash: &TxHash) -> Result<Option<TransactionReceipt>> {
        Ok(self.with_state(|state| state.receipts.get(hash).cloned()))
    }

    async fn get_logs(&self, filter: &LogFilter) -> Result<Vec<Log>> {
        Ok(self.with_state(|state| {
            state
                .logs
                .iter()
                .filter(|log| filter.matches(log))
                .cloned()
                .collect()
        }))
    }
}
