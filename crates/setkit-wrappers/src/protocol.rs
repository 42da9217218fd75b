use std::sync::Arc;

use setkit_assert::{common, messages, Assertions};
use setkit_provider::{Provider, TransactionReceipt, TxHash};
use setkit_schema::SchemaRegistry;

use crate::caller::ContractCaller;
use crate::config::{ContractAddresses, TxDefaults};
use crate::erc20::Erc20Wrapper;
use crate::error::Result;
use crate::rebalancing::RebalancingSetTokenWrapper;
use crate::set_core::CoreWrapper;
use crate::set_token::SetTokenWrapper;
use crate::vault::VaultWrapper;

/// Entry point bundling every wrapper over one provider and one schema registry.
///
/// All wrappers share the same [`ContractCaller`], so sender defaults apply
/// uniformly.
#[derive(Debug, Clone)]
pub struct SetProtocol {
    pub erc20: Erc20Wrapper,
    pub vault: VaultWrapper,
    pub core: CoreWrapper,
    pub set_token: SetTokenWrapper,
    pub rebalancing: RebalancingSetTokenWrapper,
    caller: ContractCaller,
    addresses: ContractAddresses,
}

impl SetProtocol {
    /// Build with the built-in schemas and default registry settings.
    pub fn new(
        provider: Arc<dyn Provider>,
        addresses: ContractAddresses,
        defaults: TxDefaults,
    ) -> Result<Self> {
        let registry = SchemaRegistry::new()?;
        Self::with_registry(provider, addresses, defaults, Arc::new(registry))
    }

    pub fn with_registry(
        provider: Arc<dyn Provider>,
        addresses: ContractAddresses,
        defaults: TxDefaults,
        registry: Arc<SchemaRegistry>,
    ) -> Result<Self> {
        let assert = Assertions::new(registry);
        for (name, address) in [
            ("core", &addresses.core),
            ("vault", &addresses.vault),
            ("transferProxy", &addresses.transfer_proxy),
        ] {
            assert.is_valid_address(name, address.as_str())?;
            common::not_null(address, messages::null_address(name))?;
        }
        if let Some(from) = &defaults.from {
            assert.is_valid_address("from", from.as_str())?;
        }

        tracing::debug!(
            core = %addresses.core,
            vault = %addresses.vault,
            "set protocol client ready"
        );

        let caller = ContractCaller::with_defaults(provider, defaults);
        Ok(Self {
            erc20: Erc20Wrapper::new(caller.clone(), assert.clone()),
            vault: VaultWrapper::new(caller.clone(), assert.clone(), addresses.vault.clone()),
            core: CoreWrapper::new(caller.clone(), assert.clone(), &addresses),
            set_token: SetTokenWrapper::new(caller.clone(), assert.clone()),
            rebalancing: RebalancingSetTokenWrapper::new(caller.clone(), assert),
            caller,
            addresses,
        })
    }

    pub fn addresses(&self) -> &ContractAddresses {
        &self.addresses
    }

    pub fn defaults(&self) -> &TxDefaults {
        self.caller.defaults()
    }

    /// Receipt for a mined transaction, `None` while pending.
    pub async fn get_transaction_receipt(
        &self,
        hash: &TxHash,
    ) -> Result<Option<TransactionReceipt>> {
        Ok(self.caller.get_transaction_receipt(hash).await?)
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use serde_json::json;
    use setkit_assert::AssertionError;
    use setkit_provider::{MockProvider, TxOverrides};
    use setkit_schema::NULL_ADDRESS;

    use super::*;
    use crate::error::WrapperError;
    use crate::testing::{CORE, OWNER, SET, TRANSFER_PROXY, VAULT};

    fn addresses() -> ContractAddresses {
        ContractAddresses {
            core: CORE.to_string(),
            vault: VAULT.to_string(),
            transfer_proxy: TRANSFER_PROXY.to_string(),
        }
    }

    fn defaults() -> TxDefaults {
        TxDefaults {
            from: Some(OWNER.to_string()),
            ..TxDefaults::default()
        }
    }

    #[tokio::test]
    async fn wrappers_share_provider_and_defaults() {
        let mock = Arc::new(MockProvider::new());
        mock.on_call(SET, "naturalUnit()", json!("10"));
        let protocol = SetProtocol::new(mock.clone(), addresses(), defaults()).unwrap();

        assert_eq!(protocol.core.address(), CORE);
        assert_eq!(protocol.vault.address(), VAULT);
        assert_eq!(protocol.defaults().from.as_deref(), Some(OWNER));
        assert_eq!(
            protocol.set_token.natural_unit(SET).await.unwrap(),
            BigDecimal::from(10)
        );

        let hash = protocol
            .erc20
            .approve(SET, TRANSFER_PROXY, BigDecimal::from(0), &TxOverrides::default())
            .await
            .unwrap();
        assert!(protocol
            .get_transaction_receipt(&hash)
            .await
            .unwrap()
            .is_none());
    }

    #[test]
    fn rejects_null_and_malformed_addresses() {
        let mock: Arc<dyn Provider> = Arc::new(MockProvider::new());

        let mut null_vault = addresses();
        null_vault.vault = NULL_ADDRESS.to_string();
        let err = SetProtocol::new(mock.clone(), null_vault, defaults()).unwrap_err();
        assert_eq!(err.to_string(), "vault cannot be the null address.");

        let mut bad_core = addresses();
        bad_core.core = "0x123".to_string();
        let err = SetProtocol::new(mock.clone(), bad_core, defaults()).unwrap_err();
        assert!(matches!(
            err,
            WrapperError::Assertion(AssertionError::SchemaViolation { .. })
        ));

        let bad_sender = TxDefaults {
            from: Some("owner".to_string()),
            ..TxDefaults::default()
        };
        assert!(SetProtocol::new(mock, addresses(), bad_sender).is_err());
    }
}
