use async_trait::async_trait;
use bigdecimal::BigDecimal;
use setkit_schema::NULL_ADDRESS;

use crate::error::{AssertionError, Result};

/// Account used when checking a token's read surface.
pub const ERC20_CHECK_ACCOUNT: &str = NULL_ADDRESS;

/// Read side of an ERC20 token.
#[async_trait]
pub trait Erc20Reader: Send + Sync {
    /// Token contract address.
    fn address(&self) -> &str;

    async fn balance_of(&self, owner: &str) -> setkit_provider::Result<BigDecimal>;

    async fn allowance(&self, owner: &str, spender: &str) -> setkit_provider::Result<BigDecimal>;

    async fn total_supply(&self) -> setkit_provider::Result<BigDecimal>;
}

/// Fails when any of `balanceOf`, `allowance` or `totalSupply` cannot be
/// read from `token`.
pub async fn implements_erc20<R>(token: &R) -> Result<()>
where
    R: Erc20Reader + ?Sized,
{
    let reads = async {
        token.balance_of(ERC20_CHECK_ACCOUNT).await?;
        token
            .allowance(ERC20_CHECK_ACCOUNT, ERC20_CHECK_ACCOUNT)
            .await?;
        token.total_supply().await
    };

    match reads.await {
        Ok(_) => Ok(()),
        Err(err) => {
            tracing::warn!(
                gate = "implements_erc20",
                token = token.address(),
                error = %err,
                "assertion failed"
            );
            Err(AssertionError::NotErc20 {
                address: token.address().to_string(),
            })
        }
    }
}

/// Fails when `payer` holds strictly less than `required` of `token`.
pub async fn has_sufficient_balance<R>(
    token: &R,
    payer: &str,
    required: &BigDecimal,
    message: impl Into<String>,
) -> Result<()>
where
    R: Erc20Reader + ?Sized,
{
    let balance = token.balance_of(payer).await?;
    if balance < *required {
        return Err(AssertionError::precondition(
            "has_sufficient_balance",
            message,
        ));
    }
    Ok(())
}

/// Fails when `spender` may move strictly less than `required` of `owner`'s tokens.
pub async fn has_sufficient_allowance<R>(
    token: &R,
    owner: &str,
    spender: &str,
    required: &BigDecimal,
    message: impl Into<String>,
) -> Result<()>
where
    R: Erc20Reader + ?Sized,
{
    let allowance = token.allowance(owner, spender).await?;
    if allowance < *required {
        return Err(AssertionError::precondition(
            "has_sufficient_allowance",
            message,
        ));
    }
    Ok(())
}
