use bigdecimal::BigDecimal;
use setkit_assert::Assertions;
use setkit_provider::Token;

use crate::caller::ContractCaller;
use crate::error::Result;

/// Read access to the Vault's per-owner token ledger.
#[derive(Debug, Clone)]
pub struct VaultWrapper {
    caller: ContractCaller,
    assert: Assertions,
    vault: String,
}

impl VaultWrapper {
    pub fn new(caller: ContractCaller, assert: Assertions, vault: impl Into<String>) -> Self {
        Self {
            caller,
            assert,
            vault: vault.into(),
        }
    }

    pub fn address(&self) -> &str {
        &self.vault
    }

    /// Balance of `token` the Vault holds on behalf of `owner`.
    pub async fn get_balance_in_vault(&self, token: &str, owner: &str) -> Result<BigDecimal> {
        self.assert.is_valid_address("tokenAddress", token)?;
        self.assert.is_valid_address("ownerAddress", owner)?;

        Ok(self
            .caller
            .call_quantity(
                &self.vault,
                "getOwnerBalance(address,address)",
                vec![Token::address(token), Token::address(owner)],
            )
            .await?)
    }
}
