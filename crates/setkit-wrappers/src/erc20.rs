use async_trait::async_trait;
use bigdecimal::BigDecimal;
use setkit_assert::{common, messages, Assertions, Erc20Reader};
use setkit_provider::{Token, TxHash, TxOverrides};

use crate::caller::ContractCaller;
use crate::error::Result;

/// Wrapper over any ERC20 token.
#[derive(Debug, Clone)]
pub struct Erc20Wrapper {
    caller: ContractCaller,
    assert: Assertions,
}

impl Erc20Wrapper {
    pub fn new(caller: ContractCaller, assert: Assertions) -> Self {
        Self { caller, assert }
    }

    /// Bind to one token, for use with the ERC20 gates.
    pub fn handle(&self, token: &str) -> Result<Erc20Handle> {
        self.assert.is_valid_address("tokenAddress", token)?;
        Ok(Erc20Handle {
            address: token.to_string(),
            caller: self.caller.clone(),
        })
    }

    pub async fn balance_of(&self, token: &str, owner: &str) -> Result<BigDecimal> {
        self.assert.is_valid_address("tokenAddress", token)?;
        self.assert.is_valid_address("ownerAddress", owner)?;

        Ok(self
            .caller
            .call_quantity(token, "balanceOf(address)", vec![Token::address(owner)])
            .await?)
    }

    pub async fn allowance(&self, token: &str, owner: &str, spender: &str) -> Result<BigDecimal> {
        self.assert.is_valid_address("tokenAddress", token)?;
        self.assert.is_valid_address("ownerAddress", owner)?;
        self.assert.is_valid_address("spenderAddress", spender)?;

        Ok(self
            .caller
            .call_quantity(
                token,
                "allowance(address,address)",
                vec![Token::address(owner), Token::address(spender)],
            )
            .await?)
    }

    pub async fn total_supply(&self, token: &str) -> Result<BigDecimal> {
        self.assert.is_valid_address("tokenAddress", token)?;
        Ok(self
            .caller
            .call_quantity(token, "totalSupply()", vec![])
            .await?)
    }

    pub async fn name(&self, token: &str) -> Result<String> {
        self.assert.is_valid_address("tokenAddress", token)?;
        Ok(self.caller.call_string(token, "name()", vec![]).await?)
    }

    pub async fn symbol(&self, token: &str) -> Result<String> {
        self.assert.is_valid_address("tokenAddress", token)?;
        Ok(self.caller.call_string(token, "symbol()", vec![]).await?)
    }

    pub async fn decimals(&self, token: &str) -> Result<u8> {
        self.assert.is_valid_address("tokenAddress", token)?;
        Ok(self.caller.call_u8(token, "decimals()", vec![]).await?)
    }

    /// Transfer `quantity` base units of `token` to `to`.
    pub async fn transfer(
        &self,
        token: &str,
        to: &str,
        quantity: BigDecimal,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        self.assert.is_valid_address("tokenAddress", token)?;
        self.assert.is_valid_address("to", to)?;
        common::not_null(to, messages::null_address("to"))?;
        self.assert.is_valid_whole_number("quantity", &quantity)?;

        Ok(self
            .caller
            .send(
                token,
                "transfer(address,uint256)",
                vec![Token::address(to), Token::uint(quantity)],
                overrides,
            )
            .await?)
    }

    /// Allow `spender` to move up to `quantity` base units. Zero revokes.
    pub async fn approve(
        &self,
        token: &str,
        spender: &str,
        quantity: BigDecimal,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        self.assert.is_valid_address("tokenAddress", token)?;
        self.assert.is_valid_address("spenderAddress", spender)?;
        common::not_null(spender, messages::null_address("spenderAddress"))?;
        self.assert.is_valid_whole_number("quantity", &quantity)?;

        Ok(self
            .caller
            .send(
                token,
                "approve(address,uint256)",
                vec![Token::address(spender), Token::uint(quantity)],
                overrides,
            )
            .await?)
    }
}

/// An ERC20 token bound to its address.
#[derive(Debug, Clone)]
pub struct Erc20Handle {
    address: String,
    caller: ContractCaller,
}

#[async_trait]
impl Erc20Reader for Erc20Handle {
    fn address(&self) -> &str {
        &self.address
    }

    async fn balance_of(&self, owner: &str) -> setkit_provider::Result<BigDecimal> {
        self.caller
            .call_quantity(&self.address, "balanceOf(address)", vec![Token::address(owner)])
            .await
    }

    async fn allowance(&self, owner: &str, spender: &str) -> setkit_provider::Result<BigDecimal> {
        self.caller
            .call_quantity(
                &self.address,
                "allowance(address,address)",
                vec![Token::address(owner), Token::address(spender)],
            )
            .await
    }

    async fn total_supply(&self) -> setkit_provider::Result<BigDecimal> {
        self.caller
            .call_quantity(&self.address, "totalSupply()", vec![])
            .await
    }
}
