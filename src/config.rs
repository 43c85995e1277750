// src/config.rs - Deployment configuration
//
// Values come from code (builder methods) or from the environment, with a
// `.env` file loaded first when present.

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use thiserror::Error;

use crate::errors::{MaxSupplyExceeded, Result, TokenError};

pub const DEFAULT_NAME: &str = "Capped Fee Token";
pub const DEFAULT_SYMBOL: &str = "CFT";
pub const DEFAULT_DECIMALS: u8 = 18;
/// One hour between fee-paid mints by the same account.
pub const DEFAULT_MINT_COOLDOWN: u64 = 3_600;

const WHOLE_TOKENS_CAP: u64 = 1_000_000_000;
const WHOLE_TOKENS_INITIAL: u64 = 100_000_000;

/// 10^`decimals`, the number of base units in one whole token.
pub fn unit(decimals: u8) -> U256 {
    U256::from(10u64).pow(U256::from(decimals))
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Minted to the owner at construction.
    pub initial_supply: U256,
    pub max_supply: U256,
    /// Native-currency units required per public mint.
    pub mint_fee: U256,
    /// Seconds between public mints by the same account.
    pub mint_cooldown: u64,
    pub owner: Address,
}

impl Default for TokenConfig {
    fn default() -> Self {
        let one = unit(DEFAULT_DECIMALS);
        Self {
            name: DEFAULT_NAME.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            decimals: DEFAULT_DECIMALS,
            initial_supply: U256::from(WHOLE_TOKENS_INITIAL) * one,
            max_supply: U256::from(WHOLE_TOKENS_CAP) * one,
            // 0.001 of the native currency
            mint_fee: U256::from(10u64).pow(U256::from(15)),
            mint_cooldown: DEFAULT_MINT_COOLDOWN,
            owner: Address::ZERO,
        }
    }
}

impl TokenConfig {
    pub fn with_owner(mut self, owner: Address) -> Self {
        self.owner = owner;
        self
    }

    pub fn with_mint_fee(mut self, mint_fee: U256) -> Self {
        self.mint_fee = mint_fee;
        self
    }

    pub fn with_cooldown(mut self, seconds: u64) -> Self {
        self.mint_cooldown = seconds;
        self
    }

    pub fn with_supply(mut self, initial_supply: U256, max_supply: U256) -> Self {
        self.initial_supply = initial_supply;
        self.max_supply = max_supply;
        self
    }

    /// Loads `.env` if present, then reads the `TOKEN_*` variables.
    pub fn from_env() -> core::result::Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from a key lookup. Every key except `TOKEN_OWNER`
    /// falls back to the default.
    pub fn from_lookup<F>(lookup: F) -> core::result::Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let owner = lookup("TOKEN_OWNER").ok_or(ConfigError::Missing("TOKEN_OWNER"))?;

        Ok(Self {
            name: lookup("TOKEN_NAME").unwrap_or(defaults.name),
            symbol: lookup("TOKEN_SYMBOL").unwrap_or(defaults.symbol),
            decimals: parse_or(&lookup, "TOKEN_DECIMALS", defaults.decimals)?,
            initial_supply: parse_or(&lookup, "TOKEN_INITIAL_SUPPLY", defaults.initial_supply)?,
            max_supply: parse_or(&lookup, "TOKEN_MAX_SUPPLY", defaults.max_supply)?,
            mint_fee: parse_or(&lookup, "TOKEN_MINT_FEE", defaults.mint_fee)?,
            mint_cooldown: parse_or(&lookup, "TOKEN_MINT_COOLDOWN", defaults.mint_cooldown)?,
            owner: parse("TOKEN_OWNER", owner)?,
        })
    }

    /// Rejects configurations no token could be built from.
    pub fn validate(&self) -> Result<()> {
        if self.owner == Address::ZERO {
            return Err(TokenError::invalid_address());
        }
        if self.max_supply.is_zero() {
            return Err(TokenError::invalid_amount());
        }
        if self.initial_supply > self.max_supply {
            return Err(TokenError::MaxSupplyExceeded(MaxSupplyExceeded {
                requested: self.initial_supply,
                remaining: self.max_supply,
            }));
        }
        Ok(())
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> core::result::Result<T, ConfigError> {
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|_| ConfigError::Invalid { key, value })
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> core::result::Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => parse(key, value),
        None => Ok(default),
    }
}
