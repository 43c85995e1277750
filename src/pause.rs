// src/pause.rs - Global halt switch

use crate::errors::{EnforcedPause, Result, TokenError};

#[derive(Debug, Clone, Copy, Default)]
pub struct PauseGate {
    paused: bool,
}

impl PauseGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn require_not_paused(&self) -> Result<()> {
        if self.paused {
            return Err(TokenError::EnforcedPause(EnforcedPause {}));
        }
        Ok(())
    }

    /// Returns true when the flag actually changed.
    pub fn pause(&mut self) -> bool {
        !std::mem::replace(&mut self.paused, true)
    }

    /// Returns true when the flag actually changed.
    pub fn unpause(&mut self) -> bool {
        std::mem::replace(&mut self.paused, false)
    }
}
