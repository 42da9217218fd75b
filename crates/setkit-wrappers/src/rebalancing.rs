use std::fmt;

use bigdecimal::BigDecimal;
use serde::Serialize;
use setkit_assert::{common, messages, Assertions};
use setkit_provider::{Log, LogFilter, ProviderError, Token, TxHash, TxOverrides};

use crate::caller::ContractCaller;
use crate::error::Result;

/// Lifecycle stage of a rebalancing set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RebalanceState {
    Default,
    Proposal,
    Rebalance,
}

impl RebalanceState {
    fn from_u8(method: &str, raw: u8) -> setkit_provider::Result<Self> {
        match raw {
            0 => Ok(Self::Default),
            1 => Ok(Self::Proposal),
            2 => Ok(Self::Rebalance),
            other => Err(ProviderError::Decode {
                method: method.to_string(),
                reason: format!("unknown rebalance state {other}"),
            }),
        }
    }
}

impl fmt::Display for RebalanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "Default",
            Self::Proposal => "Proposal",
            Self::Rebalance => "Rebalance",
        };
        f.write_str(name)
    }
}

/// Parameters of a rebalance proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    pub next_set: String,
    pub auction_library: String,
    pub curve_coefficient: BigDecimal,
    pub auction_start_price: BigDecimal,
    pub auction_price_divisor: BigDecimal,
}

/// Manager and bidder operations on a RebalancingSetToken.
#[derive(Debug, Clone)]
pub struct RebalancingSetTokenWrapper {
    caller: ContractCaller,
    assert: Assertions,
}

impl RebalancingSetTokenWrapper {
    pub fn new(caller: ContractCaller, assert: Assertions) -> Self {
        Self { caller, assert }
    }

    /// Set currently backing the rebalancing set.
    pub async fn current_set(&self, rebalancing_set: &str) -> Result<String> {
        self.assert.is_valid_address("rebalancingSetAddress", rebalancing_set)?;
        Ok(self
            .caller
            .call_address(rebalancing_set, "currentSet()", vec![])
            .await?)
    }

    pub async fn manager(&self, rebalancing_set: &str) -> Result<String> {
        self.assert.is_valid_address("rebalancingSetAddress", rebalancing_set)?;
        Ok(self
            .caller
            .call_address(rebalancing_set, "manager()", vec![])
            .await?)
    }

    pub async fn rebalance_state(&self, rebalancing_set: &str) -> Result<RebalanceState> {
        self.assert.is_valid_address("rebalancingSetAddress", rebalancing_set)?;
        let method = "rebalanceState()";
        let raw = self.caller.call_u8(rebalancing_set, method, vec![]).await?;
        Ok(RebalanceState::from_u8(method, raw)?)
    }

    /// Propose the next set. Only the manager may propose, and only from `Default`.
    pub async fn propose(
        &self,
        rebalancing_set: &str,
        proposal: &Proposal,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        self.assert.is_valid_address("rebalancingSetAddress", rebalancing_set)?;
        self.assert.is_valid_address("nextSetAddress", proposal.next_set.as_str())?;
        self.assert
            .is_valid_address("auctionLibrary", proposal.auction_library.as_str())?;
        common::not_null(&proposal.next_set, messages::null_address("nextSetAddress"))?;
        common::not_null(
            &proposal.auction_library,
            messages::null_address("auctionLibrary"),
        )?;
        for (name, value) in [
            ("curveCoefficient", &proposal.curve_coefficient),
            ("auctionStartPrice", &proposal.auction_start_price),
            ("auctionPriceDivisor", &proposal.auction_price_divisor),
        ] {
            common::greater_than_zero(value, messages::quantity_must_be_positive(name, value))?;
            self.assert.is_valid_whole_number(name, value)?;
        }

        let sender = self.caller.sender(overrides).unwrap_or_default();
        common::not_null(&sender, messages::null_address("from"))?;
        let manager = self.manager(rebalancing_set).await?;
        common::is_equal_address(
            &sender,
            &manager,
            format!("Caller {sender} is not the manager of this rebalancing set ({manager})."),
        )?;
        self.require_state(rebalancing_set, RebalanceState::Default)
            .await?;

        Ok(self
            .caller
            .send(
                rebalancing_set,
                "propose(address,address,uint256,uint256,uint256)",
                vec![
                    Token::address(proposal.next_set.as_str()),
                    Token::address(proposal.auction_library.as_str()),
                    Token::uint(proposal.curve_coefficient.clone()),
                    Token::uint(proposal.auction_start_price.clone()),
                    Token::uint(proposal.auction_price_divisor.clone()),
                ],
                overrides,
            )
            .await?)
    }

    pub async fn start_rebalance(
        &self,
        rebalancing_set: &str,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        self.assert.is_valid_address("rebalancingSetAddress", rebalancing_set)?;
        self.require_state(rebalancing_set, RebalanceState::Proposal)
            .await?;

        Ok(self
            .caller
            .send(rebalancing_set, "startRebalance()", vec![], overrides)
            .await?)
    }

    pub async fn settle_rebalance(
        &self,
        rebalancing_set: &str,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        self.assert.is_valid_address("rebalancingSetAddress", rebalancing_set)?;
        self.require_state(rebalancing_set, RebalanceState::Rebalance)
            .await?;

        Ok(self
            .caller
            .send(rebalancing_set, "settleRebalance()", vec![], overrides)
            .await?)
    }

    /// Bid on the running auction for `quantity` of the current set.
    pub async fn bid(
        &self,
        rebalancing_set: &str,
        quantity: BigDecimal,
        overrides: &TxOverrides,
    ) -> Result<TxHash> {
        self.assert.is_valid_address("rebalancingSetAddress", rebalancing_set)?;
        common::greater_than_zero(
            &quantity,
            messages::quantity_must_be_positive("quantity", &quantity),
        )?;
        self.assert.is_valid_whole_number("quantity", &quantity)?;
        self.require_state(rebalancing_set, RebalanceState::Rebalance)
            .await?;

        Ok(self
            .caller
            .send(
                rebalancing_set,
                "bid(uint256)",
                vec![Token::uint(quantity)],
                overrides,
            )
            .await?)
    }

    /// Event logs emitted by the rebalancing set within the block range.
    pub async fn get_logs(
        &self,
        rebalancing_set: &str,
        from_block: Option<u64>,
        to_block: Option<u64>,
    ) -> Result<Vec<Log>> {
        self.assert.is_valid_address("rebalancingSetAddress", rebalancing_set)?;
        let filter = LogFilter {
            address: Some(rebalancing_set.to_string()),
            topics: Vec::new(),
            from_block,
            to_block,
        };
        Ok(self.caller.get_logs(&filter).await?)
    }

    async fn require_state(&self, rebalancing_set: &str, expected: RebalanceState) -> Result<()> {
        let state = self.rebalance_state(rebalancing_set).await?;
        common::is_equal(
            &state,
            &expected,
            format!(
                "Rebalancing set {rebalancing_set} must be in {expected} state, currently {state}."
            ),
        )?;
        Ok(())
    }
}
