//! Capability traits for the black-box collaborators
//!
//! The escrow, the asset ledgers, the gauges, and the reward minter are
//! external state machines this system does not control: their responses
//! are untrusted but treated as authoritative. Each is modeled as a
//! narrow trait so a harness can substitute a fake controlling exact
//! response values and failure injection.
//!
//! Mutating calls report rejection with a `false` return — the in-process
//! binding of a reject-or-abort collaborator. Callers map `false` to
//! `TransferFailed` or `EscrowCallFailed` and abort the whole operation.

use types::ids::{AccountId, GaugeId};
use types::lock::LockInfo;

/// An external fungible asset ledger (underlying, lp, or reward token).
pub trait Token {
    /// Transfer out of the wrapper's own custody.
    fn transfer(&mut self, to: AccountId, value: u128) -> bool;
    fn transfer_from(&mut self, from: AccountId, to: AccountId, value: u128) -> bool;
    fn approve(&mut self, spender: AccountId, value: u128) -> bool;
    fn balance_of(&self, account: AccountId) -> u128;
}

/// Resolves a token symbol to its external ledger.
///
/// Gauges name their accepted position token by symbol; the directory is
/// how the wrapper reaches the right collaborator for the pull.
pub trait TokenDirectory {
    fn token_mut(&mut self, symbol: &str) -> Option<&mut dyn Token>;
}

/// The external escrow holding the aggregate time-locked position.
pub trait VotingEscrow {
    /// Current lock position for `account` (view).
    fn locked(&self, account: AccountId) -> LockInfo;
    fn create_lock(&mut self, value: u128, unlock_time: i64) -> bool;
    fn increase_amount(&mut self, value: u128) -> bool;
    fn increase_unlock_time(&mut self, unlock_time: i64) -> bool;
    /// Release the entire matured position back to the caller's custody.
    fn withdraw(&mut self) -> bool;
}

/// An external yield gauge accepting a specific position token.
pub trait LiquidityGauge {
    /// Symbol of the position token this gauge accepts (view).
    fn lp_token(&self) -> String;
    fn deposit(&mut self, value: u128) -> bool;
    fn withdraw(&mut self, value: u128) -> bool;
}

/// The external reward-minting authority.
pub trait RewardMinter {
    fn mint(&mut self, gauge: GaugeId) -> bool;
}

/// In-memory fakes for test harnesses.
///
/// Each fake keeps plain state and a rejection switch so tests can drive
/// exact response values and inject failures at any call site.
pub mod fakes {
    use super::*;
    use std::collections::HashMap;

    /// Fake asset ledger backed by a balance map.
    ///
    /// `caller` is the account debited by `transfer` — set it to the
    /// wrapper's custody address, the only caller of these interfaces.
    /// Transfers fail on insufficient balance or when `reject` is set.
    /// Allowance bookkeeping is the collaborator's own concern and is not
    /// modeled: `transfer_from` checks balances only.
    #[derive(Debug)]
    pub struct FakeToken {
        pub balances: HashMap<AccountId, u128>,
        pub caller: AccountId,
        pub reject: bool,
    }

    impl FakeToken {
        pub fn new(caller: AccountId) -> Self {
            Self {
                balances: HashMap::new(),
                caller,
                reject: false,
            }
        }

        /// Seed an account balance directly.
        pub fn credit(&mut self, account: AccountId, value: u128) {
            *self.balances.entry(account).or_insert(0) += value;
        }

        /// Move tokens without failure semantics, saturating at zero.
        /// Used by harnesses to emulate external custody (e.g. the escrow
        /// taking possession of locked funds).
        pub fn force_move(&mut self, from: AccountId, to: AccountId, value: u128) {
            let held = self.balances.entry(from).or_insert(0);
            *held = held.saturating_sub(value);
            *self.balances.entry(to).or_insert(0) += value;
        }

        fn move_checked(&mut self, from: AccountId, to: AccountId, value: u128) -> bool {
            if self.reject {
                return false;
            }
            let held = self.balances.get(&from).copied().unwrap_or(0);
            if held < value {
                return false;
            }
            self.balances.insert(from, held - value);
            *self.balances.entry(to).or_insert(0) += value;
            true
        }
    }

    impl Token for FakeToken {
        fn transfer(&mut self, to: AccountId, value: u128) -> bool {
            let caller = self.caller;
            self.move_checked(caller, to, value)
        }

        fn transfer_from(&mut self, from: AccountId, to: AccountId, value: u128) -> bool {
            self.move_checked(from, to, value)
        }

        fn approve(&mut self, _spender: AccountId, _value: u128) -> bool {
            !self.reject
        }

        fn balance_of(&self, account: AccountId) -> u128 {
            self.balances.get(&account).copied().unwrap_or(0)
        }
    }

    /// Fake directory over a symbol-keyed token map.
    #[derive(Debug, Default)]
    pub struct FakeAssets {
        pub tokens: HashMap<String, FakeToken>,
    }

    impl FakeAssets {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, symbol: impl Into<String>, token: FakeToken) {
            self.tokens.insert(symbol.into(), token);
        }

        pub fn token(&mut self, symbol: &str) -> &mut FakeToken {
            self.tokens.get_mut(symbol).expect("token not registered")
        }
    }

    impl TokenDirectory for FakeAssets {
        fn token_mut(&mut self, symbol: &str) -> Option<&mut dyn Token> {
            self.tokens.get_mut(symbol).map(|t| t as &mut dyn Token)
        }
    }

    /// Fake escrow with one aggregate lock and per-call rejection switches.
    #[derive(Debug, Default)]
    pub struct FakeEscrow {
        pub lock: LockInfo,
        pub reject_create: bool,
        pub reject_increase: bool,
        pub reject_extend: bool,
        pub reject_withdraw: bool,
    }

    impl FakeEscrow {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl VotingEscrow for FakeEscrow {
        fn locked(&self, _account: AccountId) -> LockInfo {
            self.lock
        }

        fn create_lock(&mut self, value: u128, unlock_time: i64) -> bool {
            if self.reject_create {
                return false;
            }
            self.lock = LockInfo::new(value, unlock_time);
            true
        }

        fn increase_amount(&mut self, value: u128) -> bool {
            if self.reject_increase || self.lock.is_empty() {
                return false;
            }
            self.lock.amount += value;
            true
        }

        fn increase_unlock_time(&mut self, unlock_time: i64) -> bool {
            if self.reject_extend || self.lock.is_empty() {
                return false;
            }
            self.lock.end = unlock_time;
            true
        }

        fn withdraw(&mut self) -> bool {
            if self.reject_withdraw {
                return false;
            }
            self.lock = LockInfo::default();
            true
        }
    }

    /// Fake gauge tracking only the aggregate amount staked by the wrapper.
    #[derive(Debug)]
    pub struct FakeGauge {
        pub lp: String,
        pub staked: u128,
        pub reject_deposit: bool,
        pub reject_withdraw: bool,
    }

    impl FakeGauge {
        pub fn new(lp: impl Into<String>) -> Self {
            Self {
                lp: lp.into(),
                staked: 0,
                reject_deposit: false,
                reject_withdraw: false,
            }
        }
    }

    impl LiquidityGauge for FakeGauge {
        fn lp_token(&self) -> String {
            self.lp.clone()
        }

        fn deposit(&mut self, value: u128) -> bool {
            if self.reject_deposit {
                return false;
            }
            self.staked += value;
            true
        }

        fn withdraw(&mut self, value: u128) -> bool {
            if self.reject_withdraw || self.staked < value {
                return false;
            }
            self.staked -= value;
            true
        }
    }

    /// Fake reward minter recording which gauges were triggered.
    ///
    /// Reward tokens themselves are credited by the harness on the reward
    /// `FakeToken`; the minter only reports acceptance.
    #[derive(Debug, Default)]
    pub struct FakeMinter {
        pub minted: Vec<GaugeId>,
        pub reject: bool,
    }

    impl FakeMinter {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl RewardMinter for FakeMinter {
        fn mint(&mut self, gauge: GaugeId) -> bool {
            if self.reject {
                return false;
            }
            self.minted.push(gauge);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::*;

    #[test]
    fn test_fake_token_transfer_debits_caller() {
        let wrapper = AccountId::new();
        let user = AccountId::new();
        let mut token = FakeToken::new(wrapper);
        token.credit(wrapper, 10);

        assert!(token.transfer(user, 4));
        assert_eq!(token.balance_of(wrapper), 6);
        assert_eq!(token.balance_of(user), 4);
    }

    #[test]
    fn test_fake_token_rejects_overdraw() {
        let wrapper = AccountId::new();
        let user = AccountId::new();
        let mut token = FakeToken::new(wrapper);
        token.credit(wrapper, 3);

        assert!(!token.transfer(user, 4));
        assert_eq!(token.balance_of(wrapper), 3);
    }

    #[test]
    fn test_fake_escrow_increase_requires_lock() {
        let mut escrow = FakeEscrow::new();
        assert!(!escrow.increase_amount(10));
        assert!(escrow.create_lock(10, 1_000));
        assert!(escrow.increase_amount(5));
        assert_eq!(escrow.lock.amount, 15);
    }

    #[test]
    fn test_fake_gauge_withdraw_bounded_by_stake() {
        let mut gauge = FakeGauge::new("LP");
        assert!(gauge.deposit(10));
        assert!(!gauge.withdraw(11));
        assert!(gauge.withdraw(10));
        assert_eq!(gauge.staked, 0);
    }
}
