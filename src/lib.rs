// src/lib.rs - Capped fee token
// Fungible token with a hard supply cap, fee-paid public minting behind a
// per-account cooldown, a pause switch, a blacklist and a guarded treasury
// withdrawal. Each call is explicit about its caller, attached payment and
// block time.

pub mod access;
pub mod blacklist;
pub mod config;
pub mod cooldown;
pub mod errors;
pub mod events;
pub mod fees;
pub mod ledger;
pub mod pause;
pub mod payout;
pub mod reentrancy;
pub mod supply;
pub mod token;

pub use config::{ConfigError, TokenConfig};
pub use errors::{ErrorKind, Result, TokenError};
pub use events::{EventLog, TokenEvent};
pub use payout::{NativeBalances, NativeTransfer};
pub use token::FeeToken;

pub use alloy_primitives::{Address, U256};
