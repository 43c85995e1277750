// src/errors.rs - Error definitions for the capped fee token
// Every error is a Solidity custom error so callers get selector-tagged revert data

use alloy_primitives::U256;
use alloy_sol_types::{sol, SolError};
use thiserror::Error;

// ============================================================================
// ERROR DEFINITIONS
// ============================================================================

sol! {
    #![sol(all_derives)]

    // Validation errors
    error InvalidAddress();
    error InvalidAmount();

    // State-guard errors
    error AccountBlacklisted(address account);
    error EnforcedPause();
    error Unauthorized(address caller, address owner);
    error ReentrantCall();

    // Capacity errors
    error InsufficientBalance(uint256 requested, uint256 available);
    error InsufficientAllowance(uint256 requested, uint256 available);
    error MaxSupplyExceeded(uint256 requested, uint256 remaining);
    error InsufficientFee(uint256 required, uint256 provided);

    // Timing errors
    error MintCooldownActive(uint256 time_remaining);

    // External errors
    error TransferFailed(address to, uint256 amount);
    error ArithmeticOverflow();
}

/// Broad class of a [`TokenError`], used by callers to decide whether a
/// retry with different input can succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-input fault (zero address, zero amount).
    Validation,
    /// Policy rejection (paused, blacklisted, reentrant, unauthorized).
    StateGuard,
    /// Requested quantity exceeds what is available.
    Capacity,
    /// Cooldown still running.
    Timing,
    /// Value transfer to an outside account failed, or accounting overflowed.
    External,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid address")]
    InvalidAddress(InvalidAddress),

    #[error("invalid amount")]
    InvalidAmount(InvalidAmount),

    #[error("account {} is blacklisted", .0.account)]
    AccountBlacklisted(AccountBlacklisted),

    #[error("token is paused")]
    EnforcedPause(EnforcedPause),

    #[error("caller {} is not the owner {}", .0.caller, .0.owner)]
    Unauthorized(Unauthorized),

    #[error("reentrant call")]
    ReentrantCall(ReentrantCall),

    #[error("insufficient balance: requested {}, available {}", .0.requested, .0.available)]
    InsufficientBalance(InsufficientBalance),

    #[error("insufficient allowance: requested {}, available {}", .0.requested, .0.available)]
    InsufficientAllowance(InsufficientAllowance),

    #[error("max supply exceeded: requested {}, remaining {}", .0.requested, .0.remaining)]
    MaxSupplyExceeded(MaxSupplyExceeded),

    #[error("insufficient fee: required {}, provided {}", .0.required, .0.provided)]
    InsufficientFee(InsufficientFee),

    #[error("mint cooldown active: {}s remaining", .0.time_remaining)]
    MintCooldownActive(MintCooldownActive),

    #[error("native transfer of {} to {} failed", .0.amount, .0.to)]
    TransferFailed(TransferFailed),

    #[error("arithmetic overflow")]
    ArithmeticOverflow(ArithmeticOverflow),
}

pub type Result<T> = core::result::Result<T, TokenError>;

impl TokenError {
    pub fn invalid_address() -> Self {
        Self::InvalidAddress(InvalidAddress {})
    }

    pub fn invalid_amount() -> Self {
        Self::InvalidAmount(InvalidAmount {})
    }

    pub fn overflow() -> Self {
        Self::ArithmeticOverflow(ArithmeticOverflow {})
    }

    pub fn insufficient_balance(requested: U256, available: U256) -> Self {
        Self::InsufficientBalance(InsufficientBalance {
            requested,
            available,
        })
    }

    pub fn insufficient_allowance(requested: U256, available: U256) -> Self {
        Self::InsufficientAllowance(InsufficientAllowance {
            requested,
            available,
        })
    }

    /// Taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAddress(_) | Self::InvalidAmount(_) => ErrorKind::Validation,
            Self::AccountBlacklisted(_)
            | Self::EnforcedPause(_)
            | Self::Unauthorized(_)
            | Self::ReentrantCall(_) => ErrorKind::StateGuard,
            Self::InsufficientBalance(_)
            | Self::InsufficientAllowance(_)
            | Self::MaxSupplyExceeded(_)
            | Self::InsufficientFee(_) => ErrorKind::Capacity,
            Self::MintCooldownActive(_) => ErrorKind::Timing,
            Self::TransferFailed(_) | Self::ArithmeticOverflow(_) => ErrorKind::External,
        }
    }

    /// Capacity and timing errors carry the quantities needed to retry with
    /// a valid request; nothing else can succeed without an outside change.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Capacity | ErrorKind::Timing)
    }

    /// ABI-encoded revert payload: 4-byte selector followed by the arguments.
    pub fn revert_data(&self) -> Vec<u8> {
        match self {
            Self::InvalidAddress(e) => e.abi_encode(),
            Self::InvalidAmount(e) => e.abi_encode(),
            Self::AccountBlacklisted(e) => e.abi_encode(),
            Self::EnforcedPause(e) => e.abi_encode(),
            Self::Unauthorized(e) => e.abi_encode(),
            Self::ReentrantCall(e) => e.abi_encode(),
            Self::InsufficientBalance(e) => e.abi_encode(),
            Self::InsufficientAllowance(e) => e.abi_encode(),
            Self::MaxSupplyExceeded(e) => e.abi_encode(),
            Self::InsufficientFee(e) => e.abi_encode(),
            Self::MintCooldownActive(e) => e.abi_encode(),
            Self::TransferFailed(e) => e.abi_encode(),
            Self::ArithmeticOverflow(e) => e.abi_encode(),
        }
    }
}

impl From<TokenError> for Vec<u8> {
    fn from(err: TokenError) -> Vec<u8> {
        err.revert_data()
    }
}
