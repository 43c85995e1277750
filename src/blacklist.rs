// src/blacklist.rs - Administrator-maintained denylist

use std::collections::HashSet;

use alloy_primitives::Address;

use crate::errors::{AccountBlacklisted, Result, TokenError};

#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    accounts: HashSet<Address>,
}

impl Blacklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blacklisted(&self, account: Address) -> bool {
        self.accounts.contains(&account)
    }

    /// Fails if `account` is flagged. The zero address stands for the mint
    /// and burn endpoints and always passes.
    pub fn check(&self, account: Address) -> Result<()> {
        if account != Address::ZERO && self.is_blacklisted(account) {
            return Err(TokenError::AccountBlacklisted(AccountBlacklisted { account }));
        }
        Ok(())
    }

    /// Sets or clears the flag. Idempotent.
    pub fn set(&mut self, account: Address, flag: bool) -> Result<()> {
        if account == Address::ZERO {
            return Err(TokenError::invalid_address());
        }
        if flag {
            self.accounts.insert(account);
        } else {
            self.accounts.remove(&account);
        }
        Ok(())
    }
}
