// src/fees.rs - Minting fee validation and the fee treasury

use alloy_primitives::U256;

use crate::errors::{InsufficientFee, Result, TokenError};

/// Holds the current public-mint fee and the native currency collected so far.
///
/// The whole attached payment is retained, including any excess over the fee.
#[derive(Debug, Clone)]
pub struct FeeCollector {
    current_fee: U256,
    treasury: U256,
}

impl FeeCollector {
    pub fn new(current_fee: U256) -> Self {
        Self {
            current_fee,
            treasury: U256::ZERO,
        }
    }

    pub fn current_fee(&self) -> U256 {
        self.current_fee
    }

    pub fn treasury(&self) -> U256 {
        self.treasury
    }

    pub fn check_fee(&self, paid: U256) -> Result<()> {
        if paid < self.current_fee {
            return Err(TokenError::InsufficientFee(InsufficientFee {
                required: self.current_fee,
                provided: paid,
            }));
        }
        Ok(())
    }

    /// Treasury balance after accepting `paid`, without committing it.
    pub fn treasury_after(&self, paid: U256) -> Result<U256> {
        self.treasury
            .checked_add(paid)
            .ok_or_else(TokenError::overflow)
    }

    /// Commits a balance previously computed by [`treasury_after`](Self::treasury_after).
    pub(crate) fn store_treasury(&mut self, treasury: U256) {
        self.treasury = treasury;
    }

    /// Replaces the fee and returns the previous one.
    pub fn set_fee(&mut self, new_fee: U256) -> U256 {
        std::mem::replace(&mut self.current_fee, new_fee)
    }

    /// Empties the treasury and returns what it held.
    pub fn drain(&mut self) -> U256 {
        std::mem::take(&mut self.treasury)
    }
}
