use bigdecimal::BigDecimal;
use setkit_assert::Assertions;

use crate::caller::ContractCaller;
use crate::error::Result;

/// Reads on a SetToken.
#[derive(Debug, Clone)]
pub struct SetTokenWrapper {
    caller: ContractCaller,
    assert: Assertions,
}

impl SetTokenWrapper {
    pub fn new(caller: ContractCaller, assert: Assertions) -> Self {
        Self { caller, assert }
    }

    /// Smallest issuable quantity; issue and redeem amounts are multiples of it.
    pub async fn natural_unit(&self, set: &str) -> Result<BigDecimal> {
        self.assert.is_valid_address("setAddress", set)?;
        Ok(self.caller.call_quantity(set, "naturalUnit()", vec![]).await?)
    }

    pub async fn get_components(&self, set: &str) -> Result<Vec<String>> {
        self.assert.is_valid_address("setAddress", set)?;
        Ok(self
            .caller
            .call_addresses(set, "getComponents()", vec![])
            .await?)
    }

    /// Component units, aligned with [`get_components`](Self::get_components).
    pub async fn get_units(&self, set: &str) -> Result<Vec<BigDecimal>> {
        self.assert.is_valid_address("setAddress", set)?;
        Ok(self.caller.call_quantities(set, "getUnits()", vec![]).await?)
    }

    pub async fn total_supply(&self, set: &str) -> Result<BigDecimal> {
        self.assert.is_valid_address("setAddress", set)?;
        Ok(self.caller.call_quantity(set, "totalSupply()", vec![]).await?)
    }
}
