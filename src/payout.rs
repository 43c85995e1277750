// src/payout.rs - Native-currency transfers out of the token

use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::errors::TokenError;
use crate::token::FeeToken;

/// Moves native currency from the token to an outside account.
///
/// The receiving side gets a mutable handle to the token for the duration of
/// the transfer, the same way recipient code runs before the sending call
/// returns. Anything it tries on a guarded entry point fails with
/// `ReentrantCall`. An `Err` carries the recipient's revert data.
pub trait NativeTransfer {
    fn send_value(
        &mut self,
        token: &mut FeeToken,
        to: Address,
        amount: U256,
    ) -> Result<(), Vec<u8>>;
}

impl<F> NativeTransfer for F
where
    F: FnMut(&mut FeeToken, Address, U256) -> Result<(), Vec<u8>>,
{
    fn send_value(
        &mut self,
        token: &mut FeeToken,
        to: Address,
        amount: U256,
    ) -> Result<(), Vec<u8>> {
        self(token, to, amount)
    }
}

/// In-memory native balances of outside accounts.
#[derive(Debug, Clone, Default)]
pub struct NativeBalances {
    balances: HashMap<Address, U256>,
}

impl NativeBalances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }
}

impl NativeTransfer for NativeBalances {
    fn send_value(
        &mut self,
        _token: &mut FeeToken,
        to: Address,
        amount: U256,
    ) -> Result<(), Vec<u8>> {
        let balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or_else(|| TokenError::overflow().revert_data())?;
        self.balances.insert(to, balance);
        Ok(())
    }
}
