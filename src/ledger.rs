// src/ledger.rs - Balance, allowance and total-supply bookkeeping
//
// Every mutation computes all of its new values with checked arithmetic
// before writing any of them, so a failed operation leaves the ledger as it
// was.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::errors::{Result, TokenError};

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    total_supply: U256,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// Sum of every stored balance. Linear in the number of accounts.
    pub fn sum_of_balances(&self) -> Option<U256> {
        self.balances
            .values()
            .try_fold(U256::ZERO, |acc, balance| acc.checked_add(*balance))
    }

    // ========================================================================
    // SUPPLY-CHANGING OPERATIONS
    // ========================================================================

    /// Creates `amount` new units in `account`.
    pub fn credit(&mut self, account: Address, amount: U256) -> Result<()> {
        let new_balance = self
            .balance_of(account)
            .checked_add(amount)
            .ok_or_else(TokenError::overflow)?;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or_else(TokenError::overflow)?;

        self.set_balance(account, new_balance);
        self.total_supply = new_supply;
        Ok(())
    }

    /// Destroys `amount` units held by `account`.
    pub fn debit(&mut self, account: Address, amount: U256) -> Result<()> {
        let available = self.balance_of(account);
        let new_balance = available
            .checked_sub(amount)
            .ok_or_else(|| TokenError::insufficient_balance(amount, available))?;
        // Cannot fail while the sum invariant holds, but never wrap.
        let new_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or_else(TokenError::overflow)?;

        self.set_balance(account, new_balance);
        self.total_supply = new_supply;
        Ok(())
    }

    // ========================================================================
    // TRANSFERS
    // ========================================================================

    /// Moves `amount` from `from` to `to`. Total supply is unchanged.
    pub fn transfer(&mut self, from: Address, to: Address, amount: U256) -> Result<()> {
        let from_balance = self.balance_of(from);
        let new_from_balance = from_balance
            .checked_sub(amount)
            .ok_or_else(|| TokenError::insufficient_balance(amount, from_balance))?;

        if from == to {
            return Ok(());
        }

        let new_to_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or_else(TokenError::overflow)?;

        self.set_balance(from, new_from_balance);
        self.set_balance(to, new_to_balance);
        Ok(())
    }

    /// Spends `spender`'s allowance on `from` and moves the funds.
    /// Either both the allowance and the balances change, or neither does.
    pub fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<()> {
        // allowance is checked before any balance moves
        self.allowance_after_spend(from, spender, amount)?;
        self.transfer(from, to, amount)?;
        self.spend_allowance(from, spender, amount)
    }

    /// Spends allowance and destroys the funds on behalf of `from`.
    pub fn debit_from(&mut self, spender: Address, from: Address, amount: U256) -> Result<()> {
        self.allowance_after_spend(from, spender, amount)?;
        self.debit(from, amount)?;
        self.spend_allowance(from, spender, amount)
    }

    // ========================================================================
    // ALLOWANCES
    // ========================================================================

    pub fn approve(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.insert((owner, spender), amount);
    }

    /// Decrements the allowance `owner` granted `spender`. An allowance of
    /// `U256::MAX` is unlimited and is never decremented.
    pub fn spend_allowance(&mut self, owner: Address, spender: Address, amount: U256) -> Result<()> {
        let new_allowance = self.allowance_after_spend(owner, spender, amount)?;
        self.allowances.insert((owner, spender), new_allowance);
        Ok(())
    }

    pub fn increase_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        delta: U256,
    ) -> Result<U256> {
        let new_allowance = self
            .allowance(owner, spender)
            .checked_add(delta)
            .ok_or_else(TokenError::overflow)?;
        self.allowances.insert((owner, spender), new_allowance);
        Ok(new_allowance)
    }

    pub fn decrease_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        delta: U256,
    ) -> Result<U256> {
        let current = self.allowance(owner, spender);
        let new_allowance = current
            .checked_sub(delta)
            .ok_or_else(|| TokenError::insufficient_allowance(delta, current))?;
        self.allowances.insert((owner, spender), new_allowance);
        Ok(new_allowance)
    }

    fn allowance_after_spend(&self, owner: Address, spender: Address, amount: U256) -> Result<U256> {
        let current = self.allowance(owner, spender);
        if current == U256::MAX {
            return Ok(current);
        }
        current
            .checked_sub(amount)
            .ok_or_else(|| TokenError::insufficient_allowance(amount, current))
    }

    fn set_balance(&mut self, account: Address, balance: U256) {
        if balance.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, balance);
        }
    }
}
