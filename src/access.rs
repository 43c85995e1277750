// src/access.rs - Single-owner access control

use alloy_primitives::Address;

use crate::errors::{Result, TokenError, Unauthorized};

#[derive(Debug, Clone, Copy)]
pub struct Ownable {
    owner: Address,
}

impl Ownable {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn only_owner(&self, caller: Address) -> Result<()> {
        // a renounced owner (zero) matches nobody, not even the zero caller
        if self.owner == Address::ZERO || caller != self.owner {
            return Err(TokenError::Unauthorized(Unauthorized {
                caller,
                owner: self.owner,
            }));
        }
        Ok(())
    }

    /// Replaces the owner and returns the previous one.
    pub(crate) fn set_owner(&mut self, new_owner: Address) -> Address {
        std::mem::replace(&mut self.owner, new_owner)
    }
}
