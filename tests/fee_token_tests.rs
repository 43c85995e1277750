// tests/fee_token_tests.rs - End-to-end behaviour of the capped fee token
// through its public entry points

use capped_fee_token::{
    config::unit,
    errors::{AccountBlacklisted, EnforcedPause, MaxSupplyExceeded, MintCooldownActive},
    events::{EmergencyWithdraw, TokenEvent},
    Address, FeeToken, NativeBalances, TokenConfig, TokenError, U256,
};

const T0: u64 = 1_700_000_000;

fn addr(n: u8) -> Address {
    Address::from([n; 20])
}

fn owner() -> Address {
    addr(1)
}

fn deploy() -> FeeToken {
    FeeToken::new(TokenConfig::default().with_owner(owner())).unwrap()
}

fn tokens(whole: u64) -> U256 {
    U256::from(whole) * unit(18)
}

fn assert_supply_invariants(token: &FeeToken) {
    assert_eq!(token.ledger().sum_of_balances(), Some(token.total_supply()));
    assert!(token.total_supply() <= token.max_supply());
    assert_eq!(
        token.remaining_supply(),
        token.max_supply() - token.total_supply()
    );
}

#[test]
fn test_reference_deployment() {
    let token = deploy();
    assert_eq!(token.name(), "Capped Fee Token");
    assert_eq!(token.symbol(), "CFT");
    assert_eq!(token.decimals(), 18);
    assert_eq!(token.max_supply(), tokens(1_000_000_000));
    assert_eq!(token.balance_of(owner()), tokens(100_000_000));
    assert_eq!(token.mint_cooldown(), 3_600);
    assert_supply_invariants(&token);
}

#[test]
fn test_scenario_a_owner_mints_up_to_cap() {
    let mut token = deploy();
    let headroom = token.max_supply() - token.total_supply();

    token.owner_mint(owner(), addr(7), headroom).unwrap();
    assert_eq!(token.remaining_supply(), U256::ZERO);
    assert_supply_invariants(&token);

    let err = token.owner_mint(owner(), addr(7), U256::from(1)).unwrap_err();
    assert_eq!(
        err,
        TokenError::MaxSupplyExceeded(MaxSupplyExceeded {
            requested: U256::from(1),
            remaining: U256::ZERO,
        })
    );
}

#[test]
fn test_minting_exactly_the_remainder() {
    let mut token = deploy();
    let remaining = token.remaining_supply();

    let err = token
        .owner_mint(owner(), addr(7), remaining + U256::from(1))
        .unwrap_err();
    assert!(err.is_retryable());
    assert!(matches!(err, TokenError::MaxSupplyExceeded(_)));

    token.owner_mint(owner(), addr(7), remaining).unwrap();
    assert_eq!(token.remaining_supply(), U256::ZERO);
}

#[test]
fn test_scenario_b_cooldown_between_fee_mints() {
    let mut token = deploy();
    let fee = token.current_fee();
    let a = addr(2);
    let window = token.mint_cooldown();

    token
        .mint_with_fee(a, a, U256::from(1_000), fee, T0)
        .unwrap();
    assert_eq!(token.balance_of(a), U256::from(1_000));
    assert_eq!(token.cooldown_remaining(a, T0), window);
    assert!(!token.can_mint(a, T0));

    let err = token
        .mint_with_fee(a, a, U256::from(1_000), fee, T0)
        .unwrap_err();
    assert_eq!(
        err,
        TokenError::MintCooldownActive(MintCooldownActive {
            time_remaining: U256::from(window),
        })
    );

    let later = T0 + window;
    assert_eq!(token.cooldown_remaining(a, later), 0);
    assert!(token.can_mint(a, later));
    token
        .mint_with_fee(a, a, U256::from(1_000), fee, later)
        .unwrap();
    assert_eq!(token.balance_of(a), U256::from(2_000));
    assert_supply_invariants(&token);
}

#[test]
fn test_cooldowns_are_independent() {
    let mut token = deploy();
    let fee = token.current_fee();

    token
        .mint_with_fee(addr(2), addr(2), U256::from(1), fee, T0)
        .unwrap();
    assert!(!token.can_mint(addr(2), T0 + 1));
    assert!(token.can_mint(addr(3), T0 + 1));
    token
        .mint_with_fee(addr(3), addr(3), U256::from(1), fee, T0 + 1)
        .unwrap();
}

#[test]
fn test_scenario_c_blacklist_blocks_both_directions() {
    let mut token = deploy();
    let b = addr(3);
    token.transfer(owner(), b, tokens(10)).unwrap();
    token.approve(b, addr(4), tokens(10)).unwrap();
    token.approve(owner(), addr(4), tokens(10)).unwrap();

    token.set_blacklist(owner(), b, true).unwrap();
    token.set_blacklist(owner(), b, true).unwrap();
    assert!(token.is_blacklisted(b));

    let blocked = TokenError::AccountBlacklisted(AccountBlacklisted { account: b });
    assert_eq!(token.transfer(owner(), b, tokens(1)).unwrap_err(), blocked);
    assert_eq!(token.transfer(b, owner(), tokens(1)).unwrap_err(), blocked);
    assert_eq!(
        token
            .transfer_from(addr(4), b, addr(5), tokens(1))
            .unwrap_err(),
        blocked
    );
    assert_eq!(
        token
            .transfer_from(addr(4), owner(), b, tokens(1))
            .unwrap_err(),
        blocked
    );
    assert_eq!(
        token
            .mint_with_fee(addr(6), b, U256::from(1), token.current_fee(), T0)
            .unwrap_err(),
        blocked
    );

    token.set_blacklist(owner(), b, false).unwrap();
    assert!(!token.is_blacklisted(b));
    token.transfer(owner(), b, tokens(1)).unwrap();
    token.transfer(b, owner(), tokens(1)).unwrap();
    token
        .transfer_from(addr(4), b, addr(5), tokens(1))
        .unwrap();
    assert_eq!(token.balance_of(addr(5)), tokens(1));
    assert_supply_invariants(&token);
}

#[test]
fn test_scenario_d_pause_halts_value_movement() {
    let mut token = deploy();
    let fee = token.current_fee();
    token.approve(owner(), addr(4), tokens(5)).unwrap();

    token.pause(owner()).unwrap();
    assert!(token.is_paused());

    let paused = TokenError::EnforcedPause(EnforcedPause {});
    assert_eq!(token.transfer(owner(), addr(2), tokens(1)).unwrap_err(), paused);
    assert_eq!(
        token
            .transfer_from(addr(4), owner(), addr(2), tokens(1))
            .unwrap_err(),
        paused
    );
    assert_eq!(
        token
            .mint_with_fee(addr(2), addr(2), U256::from(1), fee, T0)
            .unwrap_err(),
        paused
    );

    // administration keeps working while paused
    token.set_fee(owner(), fee * U256::from(2)).unwrap();
    token.set_blacklist(owner(), addr(9), true).unwrap();

    token.unpause(owner()).unwrap();
    token.unpause(owner()).unwrap();
    assert!(!token.is_paused());

    token.transfer(owner(), addr(2), tokens(1)).unwrap();
    token
        .transfer_from(addr(4), owner(), addr(2), tokens(1))
        .unwrap();
    token
        .mint_with_fee(addr(2), addr(2), U256::from(1), fee * U256::from(2), T0)
        .unwrap();
    assert_eq!(token.allowance(owner(), addr(4)), tokens(4));
}

#[test]
fn test_scenario_e_withdraw_collected_fees() {
    let mut token = deploy();
    let fee = token.current_fee();
    let paid = [fee, fee + U256::from(1), fee * U256::from(3)];
    let expected = paid[0] + paid[1] + paid[2];

    for (i, payment) in paid.iter().enumerate() {
        let account = addr(10 + i as u8);
        token
            .mint_with_fee(account, account, U256::from(1_000), *payment, T0)
            .unwrap();
    }
    assert_eq!(token.treasury_balance(), expected);

    let mut bank = NativeBalances::new();
    let sent = token.emergency_withdraw(owner(), &mut bank).unwrap();
    assert_eq!(sent, expected);
    assert_eq!(bank.balance_of(owner()), expected);
    assert_eq!(token.treasury_balance(), U256::ZERO);
    assert_eq!(
        token.events().last(),
        Some(&TokenEvent::EmergencyWithdraw(EmergencyWithdraw {
            to: owner(),
            amount: expected,
        }))
    );

    let err = token.emergency_withdraw(owner(), &mut bank).unwrap_err();
    assert_eq!(err, TokenError::invalid_amount());
    assert_eq!(bank.balance_of(owner()), expected);
}

#[test]
fn test_event_log_order_for_fee_mint() {
    let mut token = deploy();
    let fee = token.current_fee();
    let mark = token.events().len();

    token
        .mint_with_fee(addr(2), addr(3), U256::from(42), fee, T0)
        .unwrap();

    let emitted = token.events().since(mark);
    assert_eq!(emitted.len(), 2);
    assert!(matches!(emitted[0], TokenEvent::Transfer(ref t) if t.from == Address::ZERO));
    assert!(matches!(emitted[1], TokenEvent::Minted(ref m) if m.fee == fee));
}

#[test]
fn test_revert_data_for_cooldown() {
    use alloy_sol_types::SolError;

    let mut token = deploy();
    let fee = token.current_fee();
    token
        .mint_with_fee(addr(2), addr(2), U256::from(1), fee, T0)
        .unwrap();
    let err = token
        .mint_with_fee(addr(2), addr(2), U256::from(1), fee, T0 + 600)
        .unwrap_err();

    let data: Vec<u8> = err.into();
    let decoded = MintCooldownActive::abi_decode(&data, true).unwrap();
    assert_eq!(decoded.time_remaining, U256::from(3_000));
}
