// src/supply.rs - Hard supply cap

use alloy_primitives::U256;

use crate::errors::{MaxSupplyExceeded, Result, TokenError};

/// Immutable ceiling on total supply, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyCap {
    max: U256,
}

impl SupplyCap {
    pub fn new(max: U256) -> Self {
        Self { max }
    }

    pub fn max_supply(&self) -> U256 {
        self.max
    }

    /// Units that can still be minted given the current total supply.
    pub fn remaining(&self, total_supply: U256) -> U256 {
        self.max.saturating_sub(total_supply)
    }

    pub fn check_mint(&self, total_supply: U256, amount: U256) -> Result<()> {
        let remaining = self.remaining(total_supply);
        if amount > remaining {
            return Err(TokenError::MaxSupplyExceeded(MaxSupplyExceeded {
                requested: amount,
                remaining,
            }));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining() {
        let cap = SupplyCap::new(U256::from(1_000));
        assert_eq!(cap.remaining(U256::from(400)), U256::from(600));
        assert_eq!(cap.remaining(U256::from(1_000)), U256::ZERO);
    }

    #[test]
    fn test_exact_remaining_is_allowed() {
        let cap = SupplyCap::new(U256::from(1_000));
        assert!(cap.check_mint(U256::from(400), U256::from(600)).is_ok());

        let err = cap
            .check_mint(U256::from(400), U256::from(601))
            .unwrap_err();
        assert_eq!(
            err,
            TokenError::MaxSupplyExceeded(MaxSupplyExceeded {
                requested: U256::from(601),
                remaining: U256::from(600),
            })
        );
    }

    #[test]
    fn test_full_cap_rejects_any_mint() {
        let cap = SupplyCap::new(U256::from(10));
        assert!(cap.check_mint(U256::from(10), U256::from(1)).is_err());
        assert!(cap.check_mint(U256::from(10), U256::ZERO).is_ok());
    }
}
