//! Wrapper Ledger facade
//!
//! Single entry point tying the three sub-ledgers together: the token
//! ledger, the escrow coordinator, and the gauge sub-ledger share one
//! failure unit — a user-facing operation either fully applies its local
//! effects or fully aborts with no state change in any sub-ledger.

use types::ids::{AccountId, GaugeId};

use crate::errors::LedgerError;
use crate::escrow::EscrowCoordinator;
use crate::events::LedgerEvent;
use crate::external::{LiquidityGauge, RewardMinter, TokenDirectory, VotingEscrow};
use crate::gauge::GaugeLedger;
use crate::token::TokenLedger;

/// The complete wrapper ledger.
#[derive(Debug)]
pub struct WrapperLedger {
    token: TokenLedger,
    escrow: EscrowCoordinator,
    gauges: GaugeLedger,
}

impl WrapperLedger {
    /// Create a ledger with the system's custody address and the symbols
    /// of the escrowed underlying asset and the gauge reward asset.
    pub fn new(
        address: AccountId,
        underlying: impl Into<String>,
        reward: impl Into<String>,
    ) -> Self {
        Self {
            token: TokenLedger::new(),
            escrow: EscrowCoordinator::new(address, underlying),
            gauges: GaugeLedger::new(address, reward),
        }
    }

    // ───────────────────────── Views ─────────────────────────

    pub fn address(&self) -> AccountId {
        self.escrow.address()
    }

    pub fn total_supply(&self) -> u128 {
        self.token.total_supply()
    }

    pub fn balance_of(&self, account: AccountId) -> u128 {
        self.token.balance_of(account)
    }

    pub fn allowance(&self, owner: AccountId, spender: AccountId) -> u128 {
        self.token.allowance(owner, spender)
    }

    pub fn gauge_balance(&self, gauge: GaugeId, user: AccountId) -> u128 {
        self.gauges.balance(gauge, user)
    }

    /// Verify the conservation invariant over the token ledger.
    pub fn check_conservation(&self) -> bool {
        self.token.check_conservation()
    }

    // ───────────────────────── Token operations ─────────────────────────

    pub fn transfer(
        &mut self,
        sender: AccountId,
        to: AccountId,
        value: u128,
    ) -> Result<(), LedgerError> {
        self.token.transfer(sender, to, value)
    }

    pub fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        value: u128,
    ) -> Result<(), LedgerError> {
        self.token.transfer_from(spender, from, to, value)
    }

    pub fn approve(&mut self, owner: AccountId, spender: AccountId, value: u128) {
        self.token.approve(owner, spender, value)
    }

    // ───────────────────────── Escrow operations ─────────────────────────

    pub fn deposit(
        &mut self,
        assets: &mut dyn TokenDirectory,
        escrow: &mut dyn VotingEscrow,
        user: AccountId,
        value: u128,
        now: i64,
    ) -> Result<(), LedgerError> {
        self.escrow
            .deposit(&mut self.token, assets, escrow, user, value, now)
    }

    pub fn withdraw(
        &mut self,
        assets: &mut dyn TokenDirectory,
        escrow: &mut dyn VotingEscrow,
        user: AccountId,
        now: i64,
    ) -> Result<u128, LedgerError> {
        self.escrow
            .withdraw(&mut self.token, assets, escrow, user, now)
    }

    pub fn extend_lock(
        &mut self,
        escrow: &mut dyn VotingEscrow,
        now: i64,
    ) -> Result<(), LedgerError> {
        self.escrow.extend_lock(escrow, now)
    }

    // ───────────────────────── Gauge operations ─────────────────────────

    pub fn gauge_deposit(
        &mut self,
        assets: &mut dyn TokenDirectory,
        gauge: &mut dyn LiquidityGauge,
        gauge_id: GaugeId,
        user: AccountId,
        value: u128,
    ) -> Result<(), LedgerError> {
        self.gauges.deposit(assets, gauge, gauge_id, user, value)
    }

    pub fn gauge_withdraw(
        &mut self,
        assets: &mut dyn TokenDirectory,
        gauge: &mut dyn LiquidityGauge,
        gauge_id: GaugeId,
        user: AccountId,
        value: u128,
    ) -> Result<(), LedgerError> {
        self.gauges.withdraw(assets, gauge, gauge_id, user, value)
    }

    pub fn gauge_mint(
        &mut self,
        assets: &mut dyn TokenDirectory,
        minter: &mut dyn RewardMinter,
        escrow: &mut dyn VotingEscrow,
        gauge_id: GaugeId,
    ) -> Result<u128, LedgerError> {
        self.gauges.mint(assets, minter, escrow, gauge_id)
    }

    // ───────────────────────── Events ─────────────────────────

    /// Drain every sub-ledger's event log, token events first.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        let mut events = self.token.drain_events();
        events.extend(self.escrow.drain_events());
        events.extend(self.gauges.drain_events());
        events
    }

    /// Read access to the token sub-ledger.
    pub fn token(&self) -> &TokenLedger {
        &self.token
    }

    /// Read access to the escrow coordinator.
    pub fn escrow(&self) -> &EscrowCoordinator {
        &self.escrow
    }

    /// Read access to the gauge sub-ledger.
    pub fn gauges(&self) -> &GaugeLedger {
        &self.gauges
    }
}
