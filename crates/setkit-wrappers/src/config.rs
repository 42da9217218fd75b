use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use setkit_provider::TxOverrides;

/// Sender defaults applied to every state-changing call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxDefaults {
    pub from: Option<String>,
    pub gas_limit: Option<u64>,
    pub gas_price: Option<BigDecimal>,
}

impl TxDefaults {
    /// Merge per-call overrides over these defaults.
    pub fn merge(&self, overrides: &TxOverrides) -> TxOverrides {
        TxOverrides {
            from: overrides.from.clone().or_else(|| self.from.clone()),
            gas_limit: overrides.gas_limit.or(self.gas_limit),
            gas_price: overrides
                .gas_price
                .clone()
                .or_else(|| self.gas_price.clone()),
            value: overrides.value.clone(),
        }
    }
}

/// Deployed protocol contract addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
    pub core: String,
    pub vault: String,
    pub transfer_proxy: String,
}
