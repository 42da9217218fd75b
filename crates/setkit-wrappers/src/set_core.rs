use bigdecimal::BigDecimal;
use setkit_assert::{
    common, has_sufficient_allowance, has_sufficient_balance, implements_erc20, messages,
    AssertionError, Assertions,
};
use setkit_provider::{Token, TxHash, TxOverrides};

use crate::caller::ContractCaller;
use crate::config::ContractAddresses;
use crate::erc20::Erc20Wrapper;
use crate::error::Result;
use crate::set_token::SetTokenWrapper;
use crate::vault::VaultWrapper;

/// Issuance, redemption and vault movements through Core.
#[derive(Debug, Clone)]
pub struct CoreWrapper {
    caller: ContractCaller,
    assert: Assertions,
    core: String,
    transfer_proxy: String,
    erc20: Erc20Wrapper,
    vault: VaultWrapper,
    set_token: SetTokenWrapper,
}

impl CoreWrapper {
    pub fn new(caller: ContractCaller, assert: Assertions, addresses: &ContractAddresses) -> Self {
        Self {
            erc20: Erc20Wrapper::new(caller.clone(), assert.clone()),
            vault: VaultWrapper::new(caller.clone(), assert.clone(), addresses.vault.clone()),
            set_token: SetTokenWrapper::new(caller.clone(), assert.clone()),
            core: addresses.core.clone(),
            transfer_proxy: addresses.transfer_proxy.clone(),
            caller,
            assert,
        }
    }

    pub fn address(&self) -> &str {
        &self.core
    }

    /// Issue `quantity` of `set`, pulling components from the sender's vault balance.
    pub async fn issue(
        &self,
        set: &str,
        quantity: BigDecimal,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        self.check_set_quantity(set, &quantity).await?;

        Ok(self
            .caller
            .send(
                &self.core,
                "issue(address,uint256)",
                vec![Token::address(set), Token::uint(quantity)],
                overrides,
            )
            .await?)
    }

    /// Redeem `quantity` of `set` back into its components.
    pub async fn redeem(
        &self,
        set: &str,
        quantity: BigDecimal,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        self.check_set_quantity(set, &quantity).await?;
        let sender = self.require_sender(overrides)?;
        let handle = self.erc20.handle(set)?;
        has_sufficient_balance(
            &handle,
            &sender,
            &quantity,
            messages::insufficient_balance(set, &sender, &quantity),
        )
        .await?;

        Ok(self
            .caller
            .send(
                &self.core,
                "redeem(address,uint256)",
                vec![Token::address(set), Token::uint(quantity)],
                overrides,
            )
            .await?)
    }

    /// Move `quantity` of `token` from the sender's wallet into the Vault.
    pub async fn deposit(
        &self,
        token: &str,
        quantity: BigDecimal,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        let sender = self.require_sender(overrides)?;
        self.check_deposit(token, &quantity, &sender).await?;

        Ok(self
            .caller
            .send(
                &self.core,
                "deposit(address,uint256)",
                vec![Token::address(token), Token::uint(quantity)],
                overrides,
            )
            .await?)
    }

    /// Move `quantity` of `token` from the Vault back to the sender's wallet.
    pub async fn withdraw(
        &self,
        token: &str,
        quantity: BigDecimal,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        let sender = self.require_sender(overrides)?;
        self.check_withdraw(token, &quantity, &sender).await?;

        Ok(self
            .caller
            .send(
                &self.core,
                "withdraw(address,uint256)",
                vec![Token::address(token), Token::uint(quantity)],
                overrides,
            )
            .await?)
    }

    pub async fn batch_deposit<S: AsRef<str>>(
        &self,
        tokens: &[S],
        quantities: &[BigDecimal],
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        self.check_batch_shape(tokens, quantities)?;
        let sender = self.require_sender(overrides)?;
        for (token, quantity) in tokens.iter().zip(quantities) {
            self.check_deposit(token.as_ref(), quantity, &sender).await?;
        }

        Ok(self
            .caller
            .send(
                &self.core,
                "batchDeposit(address[],uint256[])",
                batch_args(tokens, quantities),
                overrides,
            )
            .await?)
    }

    pub async fn batch_withdraw<S: AsRef<str>>(
        &self,
        tokens: &[S],
        quantities: &[BigDecimal],
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        self.check_batch_shape(tokens, quantities)?;
        let sender = self.require_sender(overrides)?;
        for (token, quantity) in tokens.iter().zip(quantities) {
            self.check_withdraw(token.as_ref(), quantity, &sender).await?;
        }

        Ok(self
            .caller
            .send(
                &self.core,
                "batchWithdraw(address[],uint256[])",
                batch_args(tokens, quantities),
                overrides,
            )
            .await?)
    }

    /// Deploy a new set through a registered factory.
    ///
    /// `name` and `symbol` are packed into `bytes32`, so each must fit in 32 bytes.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_set<S: AsRef<str>>(
        &self,
        factory: &str,
        components: &[S],
        units: &[BigDecimal],
        natural_unit: BigDecimal,
        name: &str,
        symbol: &str,
        call_data: &str,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        self.assert.is_valid_address("factoryAddress", factory)?;
        common::is_not_empty(components, messages::empty_list("components"))?;
        common::is_equal_length(
            components,
            units,
            messages::length_mismatch("components", "units"),
        )?;
        self.assert.are_valid_addresses("components", components)?;
        for unit in units {
            common::greater_than_zero(unit, messages::quantity_must_be_positive("units", unit))?;
            self.assert.is_valid_whole_number("units", unit)?;
        }
        common::greater_than_zero(
            &natural_unit,
            messages::quantity_must_be_positive("naturalUnit", &natural_unit),
        )?;
        self.assert.is_valid_whole_number("naturalUnit", &natural_unit)?;

        let name = string_to_bytes32("name", name)?;
        let symbol = string_to_bytes32("symbol", symbol)?;
        self.assert.is_valid_bytes32("name", name.as_str())?;
        self.assert.is_valid_bytes32("symbol", symbol.as_str())?;
        self.assert.is_valid_bytes("callData", call_data)?;

        for component in components {
            implements_erc20(&self.erc20.handle(component.as_ref())?).await?;
        }
        let registered = self.valid_factories(factory).await?;
        common::is_equal(
            &registered,
            &true,
            format!("Factory {factory} is not registered with Core."),
        )?;

        Ok(self
            .caller
            .send(
                &self.core,
                "create(address,address[],uint256[],uint256,bytes32,bytes32,bytes)",
                vec![
                    Token::address(factory),
                    Token::addresses(components.iter().map(|c| c.as_ref().to_string())),
                    Token::uints(units.iter().cloned()),
                    Token::uint(natural_unit),
                    Token::Bytes32(name),
                    Token::Bytes32(symbol),
                    Token::Bytes(call_data.to_string()),
                ],
                overrides,
            )
            .await?)
    }

    pub async fn valid_factories(&self, factory: &str) -> Result<bool> {
        self.assert.is_valid_address("factoryAddress", factory)?;
        Ok(self
            .caller
            .call_bool(&self.core, "validFactories(address)", vec![Token::address(factory)])
            .await?)
    }

    pub async fn valid_sets(&self, set: &str) -> Result<bool> {
        self.assert.is_valid_address("setAddress", set)?;
        Ok(self
            .caller
            .call_bool(&self.core, "validSets(address)", vec![Token::address(set)])
            .await?)
    }

    fn require_sender(&self, overrides: &TxOverrides) -> Result<String> {
        let sender = self.caller.sender(overrides).unwrap_or_default();
        common::not_null(&sender, messages::null_address("from"))?;
        self.assert.is_valid_address("from", sender.as_str())?;
        Ok(sender)
    }

    async fn check_set_quantity(&self, set: &str, quantity: &BigDecimal) -> Result<()> {
        self.assert.is_valid_address("setAddress", set)?;
        common::greater_than_zero(
            quantity,
            messages::quantity_must_be_positive("quantity", quantity),
        )?;
        self.assert.is_valid_whole_number("quantity", quantity)?;

        let natural_unit = self.set_token.natural_unit(set).await?;
        common::is_multiple_of(
            quantity,
            &natural_unit,
            messages::not_multiple_of_natural_unit(set, quantity, &natural_unit),
        )?;
        Ok(())
    }

    async fn check_deposit(&self, token: &str, quantity: &BigDecimal, sender: &str) -> Result<()> {
        self.assert.is_valid_address("tokenAddress", token)?;
        common::greater_than_zero(
            quantity,
            messages::quantity_must_be_positive("quantity", quantity),
        )?;
        self.assert.is_valid_whole_number("quantity", quantity)?;

        let handle = self.erc20.handle(token)?;
        implements_erc20(&handle).await?;
        has_sufficient_balance(
            &handle,
            sender,
            quantity,
            messages::insufficient_balance(token, sender, quantity),
        )
        .await?;
        has_sufficient_allowance(
            &handle,
            sender,
            &self.transfer_proxy,
            quantity,
            messages::insufficient_allowance(token, sender, &self.transfer_proxy, quantity),
        )
        .await?;
        Ok(())
    }

    async fn check_withdraw(&self, token: &str, quantity: &BigDecimal, sender: &str) -> Result<()> {
        self.assert.is_valid_address("tokenAddress", token)?;
        common::greater_than_zero(
            quantity,
            messages::quantity_must_be_positive("quantity", quantity),
        )?;
        self.assert.is_valid_whole_number("quantity", quantity)?;

        let in_vault = self.vault.get_balance_in_vault(token, sender).await?;
        common::is_at_least(
            &in_vault,
            quantity,
            messages::insufficient_balance(token, sender, quantity),
        )?;
        Ok(())
    }

    fn check_batch_shape<S: AsRef<str>>(&self, tokens: &[S], quantities: &[BigDecimal]) -> Result<()> {
        common::is_not_empty(tokens, messages::empty_list("tokenAddresses"))?;
        common::is_equal_length(
            tokens,
            quantities,
            messages::length_mismatch("tokenAddresses", "quantities"),
        )?;
        Ok(())
    }
}

fn batch_args<S: AsRef<str>>(tokens: &[S], quantities: &[BigDecimal]) -> Vec<Token> {
    vec![
        Token::addresses(tokens.iter().map(|t| t.as_ref().to_string())),
        Token::uints(quantities.iter().cloned()),
    ]
}

/// Right-pad the UTF-8 bytes of `text` into a `bytes32` hex string.
pub fn string_to_bytes32(name: &str, text: &str) -> std::result::Result<String, AssertionError> {
    let bytes = text.as_bytes();
    if bytes.len() > 32 {
        return Err(AssertionError::precondition(
            "string_to_bytes32",
            format!("{name} must be at most 32 bytes, got {}.", bytes.len()),
        ));
    }

    let mut out = String::with_capacity(66);
    out.push_str("0x");
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out.push_str(&"0".repeat(64 - bytes.len() * 2));
    Ok(out)
}
