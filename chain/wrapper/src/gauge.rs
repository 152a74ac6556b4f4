//! Gauge Sub-Ledger — per-(gauge, user) balance tracking
//!
//! Tracks funds users route through external yield gauges via this
//! wrapper, independent of the wrapper token's own supply. For any gauge
//! the sum of user sub-balances never exceeds the aggregate this system
//! has deposited into it: deposits and withdrawals move the position
//! token 1:1 with the sub-ledger entries recorded here.

use std::collections::HashMap;
use types::ids::{AccountId, GaugeId};

use crate::errors::LedgerError;
use crate::events::{GaugeDeposited, GaugeWithdrawn, LedgerEvent, RewardsLocked};
use crate::external::{LiquidityGauge, RewardMinter, TokenDirectory, VotingEscrow};

/// Per-gauge, per-user sub-balances and the reward-forwarding path.
#[derive(Debug)]
pub struct GaugeLedger {
    /// This system's custody identity in the external asset ledgers.
    address: AccountId,
    /// Symbol of the reward asset produced by the minter.
    reward: String,
    /// Sub-balances: gauge -> (user -> amount)
    balances: HashMap<GaugeId, HashMap<AccountId, u128>>,
    /// Emitted events log (append-only)
    events: Vec<LedgerEvent>,
}

impl GaugeLedger {
    pub fn new(address: AccountId, reward: impl Into<String>) -> Self {
        Self {
            address,
            reward: reward.into(),
            balances: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Sub-balance recorded for `user` under `gauge`.
    pub fn balance(&self, gauge: GaugeId, user: AccountId) -> u128 {
        self.balances
            .get(&gauge)
            .and_then(|users| users.get(&user))
            .copied()
            .unwrap_or(0)
    }

    // ───────────────────────── Deposit ─────────────────────────

    /// Pull `value` of the gauge's position token from `user`, forward it
    /// into the gauge, and credit the user's sub-balance.
    pub fn deposit(
        &mut self,
        assets: &mut dyn TokenDirectory,
        gauge: &mut dyn LiquidityGauge,
        gauge_id: GaugeId,
        user: AccountId,
        value: u128,
    ) -> Result<(), LedgerError> {
        let symbol = gauge.lp_token();
        let lp = assets
            .token_mut(&symbol)
            .ok_or_else(|| LedgerError::TransferFailed {
                token: symbol.clone(),
            })?;
        if !lp.transfer_from(user, self.address, value) {
            return Err(LedgerError::TransferFailed { token: symbol });
        }
        if !gauge.deposit(value) {
            return Err(LedgerError::TransferFailed { token: symbol });
        }

        let credited = self
            .balance(gauge_id, user)
            .checked_add(value)
            .ok_or(LedgerError::Overflow)?;
        self.balances
            .entry(gauge_id)
            .or_default()
            .insert(user, credited);
        self.events.push(LedgerEvent::GaugeDeposited(GaugeDeposited {
            gauge: gauge_id,
            user,
            value,
        }));
        Ok(())
    }

    // ───────────────────────── Withdraw ─────────────────────────

    /// Pull `value` back out of the gauge, debit the user's sub-balance,
    /// and forward the position token to `user`.
    ///
    /// The sub-balance is checked before any external call so an
    /// overdraw aborts with nothing moved.
    pub fn withdraw(
        &mut self,
        assets: &mut dyn TokenDirectory,
        gauge: &mut dyn LiquidityGauge,
        gauge_id: GaugeId,
        user: AccountId,
        value: u128,
    ) -> Result<(), LedgerError> {
        let recorded = self.balance(gauge_id, user);
        if recorded < value {
            return Err(LedgerError::InsufficientBalance {
                required: value,
                available: recorded,
            });
        }

        let symbol = gauge.lp_token();
        if !gauge.withdraw(value) {
            return Err(LedgerError::TransferFailed {
                token: symbol,
            });
        }
        let lp = assets
            .token_mut(&symbol)
            .ok_or_else(|| LedgerError::TransferFailed {
                token: symbol.clone(),
            })?;
        if !lp.transfer(user, value) {
            return Err(LedgerError::TransferFailed { token: symbol });
        }

        self.balances
            .entry(gauge_id)
            .or_default()
            .insert(user, recorded - value);
        self.events.push(LedgerEvent::GaugeWithdrawn(GaugeWithdrawn {
            gauge: gauge_id,
            user,
            value,
        }));
        Ok(())
    }

    // ───────────────────────── Reward Minting ─────────────────────────

    /// Trigger the reward minter for `gauge_id` and lock the entire
    /// resulting reward balance into the escrow.
    ///
    /// No per-user distribution is computed: the reward accrues to the
    /// aggregate lock, unattributed. Returns the amount locked.
    pub fn mint(
        &mut self,
        assets: &mut dyn TokenDirectory,
        minter: &mut dyn RewardMinter,
        escrow: &mut dyn VotingEscrow,
        gauge_id: GaugeId,
    ) -> Result<u128, LedgerError> {
        if !minter.mint(gauge_id) {
            return Err(LedgerError::TransferFailed {
                token: self.reward.clone(),
            });
        }

        let reward = assets
            .token_mut(&self.reward)
            .ok_or_else(|| LedgerError::TransferFailed {
                token: self.reward.clone(),
            })?;
        let value = reward.balance_of(self.address);
        if value > 0 && !escrow.increase_amount(value) {
            return Err(LedgerError::EscrowCallFailed {
                call: "increase_amount",
            });
        }

        self.events.push(LedgerEvent::RewardsLocked(RewardsLocked {
            gauge: gauge_id,
            value,
        }));
        Ok(value)
    }

    // ───────────────────────── Events ─────────────────────────

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}
