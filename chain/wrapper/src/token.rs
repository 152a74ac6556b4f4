//! Token Ledger — wrapper token balances, allowances, and total supply
//!
//! Standard fungible-token bookkeeping for the wrapper claim:
//! - Balances by account, created implicitly on first credit
//! - Per-spender allowances with overwrite-only approval
//! - Total supply mutated exclusively by mint (deposit path) and
//!   burn (withdraw path)
//!
//! All arithmetic is strict unsigned: underflow surfaces as
//! `InsufficientBalance`/`InsufficientAllowance`, overflow as `Overflow`.
//! Nothing wraps, clamps, or saturates. An allowance of `u128::MAX` is
//! decremented like any other value.

use std::collections::HashMap;
use types::ids::AccountId;

use crate::errors::LedgerError;
use crate::events::{Approval, LedgerEvent, Transfer};

/// Balance/allowance ledger for the wrapper token.
///
/// Invariant: the sum of all balances equals `total_supply` in every
/// reachable state. `check_conservation` verifies it directly.
#[derive(Debug, Default)]
pub struct TokenLedger {
    /// Balances: account -> amount
    balances: HashMap<AccountId, u128>,
    /// Allowances: owner -> (spender -> amount)
    allowances: HashMap<AccountId, HashMap<AccountId, u128>>,
    /// Total wrapper tokens in circulation
    total_supply: u128,
    /// Emitted events log (append-only)
    events: Vec<LedgerEvent>,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ───────────────────────── Views ─────────────────────────

    pub fn balance_of(&self, account: AccountId) -> u128 {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    pub fn allowance(&self, owner: AccountId, spender: AccountId) -> u128 {
        self.allowances
            .get(&owner)
            .and_then(|spenders| spenders.get(&spender))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Verify the conservation invariant: sum of balances == total supply.
    pub fn check_conservation(&self) -> bool {
        self.balances
            .values()
            .try_fold(0u128, |acc, b| acc.checked_add(*b))
            .map_or(false, |sum| sum == self.total_supply)
    }

    // ───────────────────────── Transfers ─────────────────────────

    /// Move `value` from `sender` to `to`. No allowance involved.
    pub fn transfer(
        &mut self,
        sender: AccountId,
        to: AccountId,
        value: u128,
    ) -> Result<(), LedgerError> {
        self.move_balance(sender, to, value)?;
        self.events.push(LedgerEvent::Transfer(Transfer {
            from: sender,
            to,
            value,
        }));
        Ok(())
    }

    /// Move `value` from `from` to `to` on behalf of `spender`,
    /// decrementing the spender's allowance by exactly `value`.
    pub fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        value: u128,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(from);
        if available < value {
            return Err(LedgerError::InsufficientBalance {
                required: value,
                available,
            });
        }
        let allowed = self.allowance(from, spender);
        if allowed < value {
            return Err(LedgerError::InsufficientAllowance {
                required: value,
                available: allowed,
            });
        }

        self.move_balance(from, to, value)?;
        self.allowances
            .entry(from)
            .or_default()
            .insert(spender, allowed - value);
        self.events.push(LedgerEvent::Transfer(Transfer {
            from,
            to,
            value,
        }));
        Ok(())
    }

    /// Overwrite `allowance[owner][spender]` with `value`.
    ///
    /// Last-write-wins; the known approve race is accepted rather than
    /// reconciled with increments.
    pub fn approve(&mut self, owner: AccountId, spender: AccountId, value: u128) {
        self.allowances
            .entry(owner)
            .or_default()
            .insert(spender, value);
        self.events.push(LedgerEvent::Approval(Approval {
            owner,
            spender,
            value,
        }));
    }

    // ───────────────────────── Mint / Burn ─────────────────────────

    /// Credit freshly minted wrapper tokens to `to`.
    ///
    /// Invoked solely by the escrow coordinator's deposit path. Recorded
    /// as a transfer from the null account.
    pub(crate) fn mint(&mut self, to: AccountId, value: u128) -> Result<(), LedgerError> {
        if to.is_null() {
            return Err(LedgerError::InvalidRecipient);
        }
        let supply = self
            .total_supply
            .checked_add(value)
            .ok_or(LedgerError::Overflow)?;
        let credited = self
            .balance_of(to)
            .checked_add(value)
            .ok_or(LedgerError::Overflow)?;

        self.total_supply = supply;
        self.balances.insert(to, credited);
        self.events.push(LedgerEvent::Transfer(Transfer {
            from: AccountId::null(),
            to,
            value,
        }));
        Ok(())
    }

    /// Destroy `value` wrapper tokens held by `from`.
    ///
    /// Invoked solely by the escrow coordinator's withdraw path. Recorded
    /// as a transfer to the null account.
    pub(crate) fn burn(&mut self, from: AccountId, value: u128) -> Result<(), LedgerError> {
        if from.is_null() {
            return Err(LedgerError::InvalidRecipient);
        }
        let available = self.balance_of(from);
        if available < value {
            return Err(LedgerError::InsufficientBalance {
                required: value,
                available,
            });
        }

        self.total_supply = self
            .total_supply
            .checked_sub(value)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(from, available - value);
        self.events.push(LedgerEvent::Transfer(Transfer {
            from,
            to: AccountId::null(),
            value,
        }));
        Ok(())
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    // ───────────────────────── Internal ─────────────────────────

    /// Debit `from`, credit `to`, validating first so a failure leaves
    /// the ledger untouched.
    fn move_balance(
        &mut self,
        from: AccountId,
        to: AccountId,
        value: u128,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(from);
        if available < value {
            return Err(LedgerError::InsufficientBalance {
                required: value,
                available,
            });
        }
        self.balances.insert(from, available - value);
        // Conservation bounds every balance by total_supply, so the
        // credit cannot wrap. Re-read after the debit to keep
        // self-transfers exact.
        let credited = self
            .balance_of(to)
            .checked_add(value)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(to, credited);
        Ok(())
    }
}
