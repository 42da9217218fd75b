use std::sync::Arc;

use bigdecimal::BigDecimal;
use serde_json::Value;
use setkit_provider::{
    CallRequest, Log, LogFilter, Provider, Result, Token, TransactionReceipt, TransactionRequest,
    TxHash, TxOverrides,
};

use crate::config::TxDefaults;
use crate::decode;

/// Dispatches contract calls to the injected provider.
#[derive(Clone)]
pub struct ContractCaller {
    provider: Arc<dyn Provider>,
    defaults: TxDefaults,
}

impl ContractCaller {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self::with_defaults(provider, TxDefaults::default())
    }

    pub fn with_defaults(provider: Arc<dyn Provider>, defaults: TxDefaults) -> Self {
        Self { provider, defaults }
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    pub fn defaults(&self) -> &TxDefaults {
        &self.defaults
    }

    /// Sender for a transaction with `overrides` applied, if any is configured.
    pub fn sender(&self, overrides: &TxOverrides) -> Option<String> {
        self.defaults.merge(overrides).from
    }

    /// Read-only call returning the raw decoded outputs.
    pub async fn call(&self, to: &str, method: &str, args: Vec<Token>) -> Result<Value> {
        tracing::debug!(to, method, "dispatching call");
        let request = CallRequest {
            to: to.to_string(),
            method: method.to_string(),
            args,
            from: self.defaults.from.clone(),
        };
        self.provider.call(&request).await
    }

    /// State-changing call; returns the transaction hash without waiting for it to mine.
    pub async fn send(
        &self,
        to: &str,
        method: &str,
        args: Vec<Token>,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        let merged = self.defaults.merge(overrides);
        tracing::debug!(to, method, from = merged.from.as_deref(), "sending transaction");
        let request = TransactionRequest {
            to: to.to_string(),
            method: method.to_string(),
            args,
            from: merged.from,
            gas_limit: merged.gas_limit,
            gas_price: merged.gas_price,
            value: merged.value,
        };
        self.provider.send_transaction(&request).await
    }

    pub async fn call_quantity(&self, to: &str, method: &str, args: Vec<Token>) -> Result<BigDecimal> {
        let out = self.call(to, method, args).await?;
        decode::decode_quantity(method, &out)
    }

    pub async fn call_quantities(
        &self,
        to: &str,
        method: &str,
        args: Vec<Token>,
    ) -> Result<Vec<BigDecimal>> {
        let out = self.call(to, method, args).await?;
        decode::decode_quantities(method, &out)
    }

    pub async fn call_address(&self, to: &str, method: &str, args: Vec<Token>) -> Result<String> {
        let out = self.call(to, method, args).await?;
        decode::decode_address(method, &out)
    }

    pub async fn call_addresses(
        &self,
        to: &str,
        method: &str,
        args: Vec<Token>,
    ) -> Result<Vec<String>> {
        let out = self.call(to, method, args).await?;
        decode::decode_addresses(method, &out)
    }

    pub async fn call_bool(&self, to: &str, method: &str, args: Vec<Token>) -> Result<bool> {
        let out = self.call(to, method, args).await?;
        decode::decode_bool(method, &out)
    }

    pub async fn call_string(&self, to: &str, method: &str, args: Vec<Token>) -> Result<String> {
        let out = self.call(to, method, args).await?;
        decode::decode_string(method, &out)
    }

    pub async fn call_u8(&self, to: &str, method: &str, args: Vec<Token>) -> Result<u8> {
        let out = self.call(to, method, args).await?;
        decode::decode_u8(method, &out)
    }

    pub async fn get_transaction_receipt(
        &self,
        hash: &TxHash,
    ) -> Result<Option<TransactionReceipt>> {
        self.provider.get_transaction_receipt(hash).await
    }

    pub async fn get_logs(&self, filter: &LogFilter) -> Result<Vec<Log>> {
        self.provider.get_logs(filter).await
    }
}

impl std::fmt::Debug for ContractCaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractCaller")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}
