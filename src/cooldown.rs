// src/cooldown.rs - Per-account wait between fee-paid mints

use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::errors::{MintCooldownActive, Result, TokenError};

/// Tracks when each account last minted through the public fee path.
///
/// An account that has never minted has no entry, so a mint recorded at
/// timestamp 0 still starts a full window.
#[derive(Debug, Clone)]
pub struct CooldownTracker {
    window: u64,
    last_mint: HashMap<Address, u64>,
}

impl CooldownTracker {
    pub fn new(window: u64) -> Self {
        Self {
            window,
            last_mint: HashMap::new(),
        }
    }

    pub fn window(&self) -> u64 {
        self.window
    }

    pub fn last_mint_time(&self, account: Address) -> Option<u64> {
        self.last_mint.get(&account).copied()
    }

    /// Seconds `account` must still wait at time `now`; zero when it may mint.
    pub fn remaining(&self, account: Address, now: u64) -> u64 {
        match self.last_mint_time(account) {
            // last + window may not fit in u64; measure from `now` instead
            Some(last) if now >= last => self.window.saturating_sub(now - last),
            Some(last) => (last - now).saturating_add(self.window),
            None => 0,
        }
    }

    pub fn can_mint(&self, account: Address, now: u64) -> bool {
        self.remaining(account, now) == 0
    }

    pub fn check(&self, account: Address, now: u64) -> Result<()> {
        let remaining = self.remaining(account, now);
        if remaining > 0 {
            return Err(TokenError::MintCooldownActive(MintCooldownActive {
                time_remaining: U256::from(remaining),
            }));
        }
        Ok(())
    }

    pub fn record(&mut self, account: Address, now: u64) {
        self.last_mint.insert(account, now);
    }
}
