// src/reentrancy.rs - Mutual exclusion for calls that move native value out

use crate::errors::{ReentrantCall, Result, TokenError};

/// Lock held for the dynamic extent of a guarded call. A nested attempt to
/// enter is an error, never a wait.
#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    entered: bool,
}

impl ReentrancyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) -> Result<()> {
        if self.entered {
            return Err(TokenError::ReentrantCall(ReentrantCall {}));
        }
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) {
        self.entered = false;
    }
}
