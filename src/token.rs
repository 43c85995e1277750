// src/token.rs - Public entry points of the capped fee token
//
// Every entry point runs its guards first (pause, then blacklist, then
// per-field and capacity checks) and mutates state only once all of them
// have passed. The only call that runs outside code mid-flight is the
// emergency withdrawal, which checkpoints state and restores it if the
// payout fails.

use alloy_primitives::{Address, U256};
use tracing::{debug, info, warn};

use crate::{
    access::Ownable,
    blacklist::Blacklist,
    config::TokenConfig,
    cooldown::CooldownTracker,
    errors::{Result, TokenError, TransferFailed},
    events::{
        Approval, BlacklistUpdated, Burned, EmergencyWithdraw, EventLog, FeeUpdated, Minted,
        OwnershipTransferred, Paused, Transfer, Unpaused,
    },
    fees::FeeCollector,
    ledger::Ledger,
    pause::PauseGate,
    payout::NativeTransfer,
    reentrancy::ReentrancyGuard,
    supply::SupplyCap,
};

// ============================================================================
// STATE
// ============================================================================

/// Everything a failed call must leave untouched.
#[derive(Debug, Clone)]
struct TokenState {
    ledger: Ledger,
    cap: SupplyCap,
    blacklist: Blacklist,
    pause: PauseGate,
    cooldowns: CooldownTracker,
    fees: FeeCollector,
    access: Ownable,
}

#[derive(Debug)]
pub struct FeeToken {
    name: String,
    symbol: String,
    decimals: u8,
    state: TokenState,
    events: EventLog,
    reentrancy: ReentrancyGuard,
}

impl FeeToken {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Builds the token, minting the initial supply to the owner.
    pub fn new(config: TokenConfig) -> Result<Self> {
        config.validate()?;

        let owner = config.owner;
        let mut state = TokenState {
            ledger: Ledger::new(),
            cap: SupplyCap::new(config.max_supply),
            blacklist: Blacklist::new(),
            pause: PauseGate::new(),
            cooldowns: CooldownTracker::new(config.mint_cooldown),
            fees: FeeCollector::new(config.mint_fee),
            access: Ownable::new(owner),
        };
        let mut events = EventLog::new();

        if !config.initial_supply.is_zero() {
            state.ledger.credit(owner, config.initial_supply)?;
            events.emit(Transfer {
                from: Address::ZERO,
                to: owner,
                amount: config.initial_supply,
            });
        }
        events.emit(OwnershipTransferred {
            previous_owner: Address::ZERO,
            new_owner: owner,
        });

        info!(
            token_name = %config.name,
            symbol = %config.symbol,
            %owner,
            max_supply = %config.max_supply,
            initial_supply = %config.initial_supply,
            "token created"
        );

        Ok(Self {
            name: config.name,
            symbol: config.symbol,
            decimals: config.decimals,
            state,
            events,
            reentrancy: ReentrancyGuard::new(),
        })
    }

    // ========================================================================
    // METADATA & QUERIES
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn owner(&self) -> Address {
        self.state.access.owner()
    }

    pub fn total_supply(&self) -> U256 {
        self.state.ledger.total_supply()
    }

    pub fn max_supply(&self) -> U256 {
        self.state.cap.max_supply()
    }

    pub fn remaining_supply(&self) -> U256 {
        self.state.cap.remaining(self.total_supply())
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.state.ledger.balance_of(account)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.state.ledger.allowance(owner, spender)
    }

    pub fn can_mint(&self, account: Address, now: u64) -> bool {
        self.state.cooldowns.can_mint(account, now)
    }

    pub fn cooldown_remaining(&self, account: Address, now: u64) -> u64 {
        self.state.cooldowns.remaining(account, now)
    }

    pub fn last_mint_time(&self, account: Address) -> Option<u64> {
        self.state.cooldowns.last_mint_time(account)
    }

    pub fn mint_cooldown(&self) -> u64 {
        self.state.cooldowns.window()
    }

    pub fn is_blacklisted(&self, account: Address) -> bool {
        self.state.blacklist.is_blacklisted(account)
    }

    pub fn is_paused(&self) -> bool {
        self.state.pause.is_paused()
    }

    pub fn current_fee(&self) -> U256 {
        self.state.fees.current_fee()
    }

    /// Native currency collected from mint fees and not yet withdrawn.
    pub fn treasury_balance(&self) -> U256 {
        self.state.fees.treasury()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.state.ledger
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    // ========================================================================
    // MINTING
    // ========================================================================

    /// Public mint paid in native currency. The whole of `paid` goes to the
    /// treasury, including any excess over the current fee.
    pub fn mint_with_fee(
        &mut self,
        caller: Address,
        to: Address,
        amount: U256,
        paid: U256,
        now: u64,
    ) -> Result<()> {
        self.non_reentrant(|token| {
            let state = &mut token.state;
            state.pause.require_not_paused()?;
            require_address(to)?;
            require_amount(amount)?;
            state.blacklist.check(to)?;
            state.fees.check_fee(paid)?;
            state.cap.check_mint(state.ledger.total_supply(), amount)?;
            state.cooldowns.check(caller, now)?;
            let treasury = state.fees.treasury_after(paid)?;

            state.ledger.credit(to, amount)?;
            state.cooldowns.record(caller, now);
            state.fees.store_treasury(treasury);

            token.events.emit(Transfer {
                from: Address::ZERO,
                to,
                amount,
            });
            token.events.emit(Minted {
                to,
                amount,
                fee: paid,
            });
            debug!(%caller, %to, %amount, %paid, now, "fee mint");
            Ok(())
        })
    }

    /// Owner mint. No fee and no cooldown, but the cap, pause and blacklist
    /// still apply.
    pub fn owner_mint(&mut self, caller: Address, to: Address, amount: U256) -> Result<()> {
        let state = &mut self.state;
        state.access.only_owner(caller)?;
        state.pause.require_not_paused()?;
        require_address(to)?;
        require_amount(amount)?;
        state.blacklist.check(to)?;
        state.cap.check_mint(state.ledger.total_supply(), amount)?;

        state.ledger.credit(to, amount)?;

        self.events.emit(Transfer {
            from: Address::ZERO,
            to,
            amount,
        });
        self.events.emit(Minted {
            to,
            amount,
            fee: U256::ZERO,
        });
        debug!(%to, %amount, "owner mint");
        Ok(())
    }

    // ========================================================================
    // BURNING
    // ========================================================================

    pub fn burn(&mut self, caller: Address, amount: U256) -> Result<()> {
        let state = &mut self.state;
        state.pause.require_not_paused()?;
        state.blacklist.check(caller)?;
        require_amount(amount)?;

        state.ledger.debit(caller, amount)?;

        self.emit_burn(caller, amount);
        Ok(())
    }

    /// Burns from `from` using the allowance it granted `caller`.
    pub fn burn_from(&mut self, caller: Address, from: Address, amount: U256) -> Result<()> {
        let state = &mut self.state;
        state.pause.require_not_paused()?;
        state.blacklist.check(from)?;
        require_address(from)?;
        require_amount(amount)?;

        state.ledger.debit_from(caller, from, amount)?;

        self.emit_burn(from, amount);
        Ok(())
    }

    fn emit_burn(&mut self, from: Address, amount: U256) {
        self.events.emit(Transfer {
            from,
            to: Address::ZERO,
            amount,
        });
        self.events.emit(Burned { from, amount });
        debug!(%from, %amount, "burn");
    }

    // ========================================================================
    // ERC-20 TRANSFERS & ALLOWANCES
    // ========================================================================

    /// Zero-amount transfers succeed and are still logged.
    pub fn transfer(&mut self, caller: Address, to: Address, amount: U256) -> Result<bool> {
        self.check_transfer(caller, to)?;
        self.state.ledger.transfer(caller, to, amount)?;

        self.events.emit(Transfer {
            from: caller,
            to,
            amount,
        });
        debug!(from = %caller, %to, %amount, "transfer");
        Ok(true)
    }

    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<bool> {
        self.check_transfer(from, to)?;
        require_address(from)?;
        self.state.ledger.transfer_from(caller, from, to, amount)?;

        self.events.emit(Transfer { from, to, amount });
        debug!(spender = %caller, %from, %to, %amount, "transfer from");
        Ok(true)
    }

    fn check_transfer(&self, from: Address, to: Address) -> Result<()> {
        self.state.pause.require_not_paused()?;
        self.state.blacklist.check(from)?;
        self.state.blacklist.check(to)?;
        require_address(to)
    }

    pub fn approve(&mut self, caller: Address, spender: Address, amount: U256) -> Result<bool> {
        require_address(spender)?;
        self.state.ledger.approve(caller, spender, amount);

        self.events.emit(Approval {
            owner: caller,
            spender,
            amount,
        });
        Ok(true)
    }

    pub fn increase_allowance(
        &mut self,
        caller: Address,
        spender: Address,
        delta: U256,
    ) -> Result<bool> {
        require_address(spender)?;
        let amount = self.state.ledger.increase_allowance(caller, spender, delta)?;

        self.events.emit(Approval {
            owner: caller,
            spender,
            amount,
        });
        Ok(true)
    }

    pub fn decrease_allowance(
        &mut self,
        caller: Address,
        spender: Address,
        delta: U256,
    ) -> Result<bool> {
        require_address(spender)?;
        let amount = self.state.ledger.decrease_allowance(caller, spender, delta)?;

        self.events.emit(Approval {
            owner: caller,
            spender,
            amount,
        });
        Ok(true)
    }

    // ========================================================================
    // ADMINISTRATION
    // ========================================================================

    /// Halts value movement. Pausing a paused token changes nothing and logs
    /// nothing.
    pub fn pause(&mut self, caller: Address) -> Result<()> {
        self.state.access.only_owner(caller)?;
        if self.state.pause.pause() {
            self.events.emit(Paused { account: caller });
            info!(%caller, "token paused");
        }
        Ok(())
    }

    pub fn unpause(&mut self, caller: Address) -> Result<()> {
        self.state.access.only_owner(caller)?;
        if self.state.pause.unpause() {
            self.events.emit(Unpaused { account: caller });
            info!(%caller, "token unpaused");
        }
        Ok(())
    }

    pub fn set_blacklist(&mut self, caller: Address, account: Address, flag: bool) -> Result<()> {
        self.state.access.only_owner(caller)?;
        self.state.blacklist.set(account, flag)?;

        self.events.emit(BlacklistUpdated { account, flag });
        info!(%account, flag, "blacklist updated");
        Ok(())
    }

    /// Applies to every fee mint from the next call on.
    pub fn set_fee(&mut self, caller: Address, new_fee: U256) -> Result<()> {
        self.state.access.only_owner(caller)?;
        let old_fee = self.state.fees.set_fee(new_fee);

        self.events.emit(FeeUpdated { old_fee, new_fee });
        info!(%old_fee, %new_fee, "mint fee updated");
        Ok(())
    }

    pub fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<()> {
        self.state.access.only_owner(caller)?;
        require_address(new_owner)?;
        let previous_owner = self.state.access.set_owner(new_owner);

        self.events.emit(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
        info!(%previous_owner, %new_owner, "ownership transferred");
        Ok(())
    }

    /// Leaves the token without an owner; every admin call fails afterwards.
    pub fn renounce_ownership(&mut self, caller: Address) -> Result<()> {
        self.state.access.only_owner(caller)?;
        let previous_owner = self.state.access.set_owner(Address::ZERO);

        self.events.emit(OwnershipTransferred {
            previous_owner,
            new_owner: Address::ZERO,
        });
        info!(%previous_owner, "ownership renounced");
        Ok(())
    }

    /// Sends the whole treasury to the owner and returns the amount sent.
    ///
    /// If the payout fails, everything done since the call began is undone,
    /// including whatever the recipient did to the token during the transfer.
    pub fn emergency_withdraw<P>(&mut self, caller: Address, payout: &mut P) -> Result<U256>
    where
        P: NativeTransfer + ?Sized,
    {
        self.state.access.only_owner(caller)?;
        self.non_reentrant(|token| {
            let amount = token.state.fees.treasury();
            if amount.is_zero() {
                return Err(TokenError::invalid_amount());
            }
            let to = token.state.access.owner();

            let checkpoint = token.state.clone();
            let mark = token.events.len();
            token.state.fees.drain();

            if let Err(revert) = payout.send_value(token, to, amount) {
                warn!(%to, %amount, revert = %hex::encode(&revert), "treasury payout failed");
                token.state = checkpoint;
                token.events.truncate(mark);
                return Err(TokenError::TransferFailed(TransferFailed { to, amount }));
            }

            token.events.emit(EmergencyWithdraw { to, amount });
            info!(%to, %amount, "treasury withdrawn");
            Ok(amount)
        })
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    /// Runs `op` holding the reentrancy lock. The lock is released when `op`
    /// returns or unwinds.
    fn non_reentrant<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if let Err(err) = self.reentrancy.enter() {
            warn!("reentrant call rejected");
            return Err(err);
        }
        let entered = Entered { token: self };
        op(&mut *entered.token)
    }
}

/// Holds the reentrancy lock of `token` until dropped.
struct Entered<'a> {
    token: &'a mut FeeToken,
}

impl Drop for Entered<'_> {
    fn drop(&mut self) {
        self.token.reentrancy.exit();
    }
}

fn require_address(account: Address) -> Result<()> {
    if account == Address::ZERO {
        return Err(TokenError::invalid_address());
    }
    Ok(())
}

fn require_amount(amount: U256) -> Result<()> {
    if amount.is_zero() {
        return Err(TokenError::invalid_amount());
    }
    Ok(())
}
