//! Escrow Coordinator — aggregate lock management
//!
//! One external lock position represents the aggregate of all holders;
//! there is no per-user decomposition. The coordinator decides on each
//! deposit whether to open a fresh lock or increase the existing one, and
//! on withdrawal whether the position has matured enough to reclaim.
//!
//! Every external call precedes every local mutation, so a rejected call
//! aborts the operation with the local ledger untouched.

use types::ids::AccountId;
use types::lock::MAX_LOCK_DURATION;

use crate::errors::LedgerError;
use crate::events::{Deposited, LedgerEvent, LockExtended, Withdrawn};
use crate::external::{TokenDirectory, VotingEscrow};
use crate::token::TokenLedger;

/// Coordinates the aggregate escrow lock and the 1:1 mint/burn of the
/// wrapper token against it.
#[derive(Debug)]
pub struct EscrowCoordinator {
    /// This system's custody identity in the external asset ledgers.
    address: AccountId,
    /// Symbol of the escrowed underlying asset.
    underlying: String,
    /// Emitted events log (append-only)
    events: Vec<LedgerEvent>,
}

impl EscrowCoordinator {
    pub fn new(address: AccountId, underlying: impl Into<String>) -> Self {
        Self {
            address,
            underlying: underlying.into(),
            events: Vec::new(),
        }
    }

    /// Custody address of the wrapper system.
    pub fn address(&self) -> AccountId {
        self.address
    }

    // ───────────────────────── Deposit ─────────────────────────

    /// Pull `value` underlying from `user`, lock it, and mint wrapper
    /// tokens 1:1.
    ///
    /// A fresh lock is opened for the maximum duration when none exists;
    /// an existing lock has its amount increased without extending its
    /// maturity. Any external rejection aborts with no mint.
    pub fn deposit(
        &mut self,
        token: &mut TokenLedger,
        assets: &mut dyn TokenDirectory,
        escrow: &mut dyn VotingEscrow,
        user: AccountId,
        value: u128,
        now: i64,
    ) -> Result<(), LedgerError> {
        let asset = assets
            .token_mut(&self.underlying)
            .ok_or_else(|| LedgerError::TransferFailed {
                token: self.underlying.clone(),
            })?;
        if !asset.transfer_from(user, self.address, value) {
            return Err(LedgerError::TransferFailed {
                token: self.underlying.clone(),
            });
        }

        let lock = escrow.locked(self.address);
        let (lock_created, unlock_time) = if lock.is_empty() {
            let end = now + MAX_LOCK_DURATION;
            if !escrow.create_lock(value, end) {
                return Err(LedgerError::EscrowCallFailed { call: "create_lock" });
            }
            (true, end)
        } else {
            if !escrow.increase_amount(value) {
                return Err(LedgerError::EscrowCallFailed {
                    call: "increase_amount",
                });
            }
            (false, lock.end)
        };

        token.mint(user, value)?;
        self.events.push(LedgerEvent::Deposited(Deposited {
            user,
            value,
            lock_created,
            unlock_time,
        }));
        Ok(())
    }

    // ───────────────────────── Withdraw ─────────────────────────

    /// Burn `user`'s entire wrapper balance and return that exact amount
    /// of underlying asset.
    ///
    /// If the aggregate lock has matured, the whole position is reclaimed
    /// from the escrow first (all holders at once). The burn-and-transfer
    /// proceeds regardless of maturity: with insufficient free underlying
    /// the external transfer is rejected and the operation aborts with
    /// ledger state unchanged.
    ///
    /// Returns the amount of underlying returned to `user`.
    pub fn withdraw(
        &mut self,
        token: &mut TokenLedger,
        assets: &mut dyn TokenDirectory,
        escrow: &mut dyn VotingEscrow,
        user: AccountId,
        now: i64,
    ) -> Result<u128, LedgerError> {
        let lock = escrow.locked(self.address);
        let mut unlocked = 0u128;
        if lock.amount > 0 && lock.matured(now) {
            if !escrow.withdraw() {
                return Err(LedgerError::EscrowCallFailed { call: "withdraw" });
            }
            unlocked = lock.amount;
        }

        let value = token.balance_of(user);
        let asset = assets
            .token_mut(&self.underlying)
            .ok_or_else(|| LedgerError::TransferFailed {
                token: self.underlying.clone(),
            })?;
        if !asset.transfer(user, value) {
            return Err(LedgerError::TransferFailed {
                token: self.underlying.clone(),
            });
        }

        token.burn(user, value)?;
        self.events.push(LedgerEvent::Withdrawn(Withdrawn {
            user,
            value,
            unlocked,
        }));
        Ok(value)
    }

    // ───────────────────────── Extend ─────────────────────────

    /// Re-extend the aggregate lock to the maximum duration.
    ///
    /// Keeper operation: callable by anyone, affects all holders. The
    /// escrow rejects the call when no lock exists.
    pub fn extend_lock(
        &mut self,
        escrow: &mut dyn VotingEscrow,
        now: i64,
    ) -> Result<(), LedgerError> {
        let unlock_time = now + MAX_LOCK_DURATION;
        if !escrow.increase_unlock_time(unlock_time) {
            return Err(LedgerError::EscrowCallFailed {
                call: "increase_unlock_time",
            });
        }
        self.events
            .push(LedgerEvent::LockExtended(LockExtended { unlock_time }));
        Ok(())
    }

    // ───────────────────────── Events ─────────────────────────

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}
