//! Ledger events
//!
//! Events are immutable records appended by successful operations; a
//! failed operation appends nothing. Each sub-ledger keeps its own
//! append-only log, drained for audit export.

use serde::{Deserialize, Serialize};
use types::ids::{AccountId, GaugeId};

/// Wrapper token moved between accounts.
///
/// Mint is recorded as a transfer from the null account, burn as a
/// transfer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: AccountId,
    pub to: AccountId,
    pub value: u128,
}

/// Spending allowance overwritten (last-write-wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub owner: AccountId,
    pub spender: AccountId,
    pub value: u128,
}

/// Underlying asset deposited and locked; wrapper tokens minted 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposited {
    pub user: AccountId,
    pub value: u128,
    /// True when this deposit opened a fresh lock rather than increasing
    /// an existing one.
    pub lock_created: bool,
    /// Maturity of the aggregate lock after this deposit.
    pub unlock_time: i64,
}

/// Full wrapper balance burned and underlying returned to the holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawn {
    pub user: AccountId,
    pub value: u128,
    /// Amount reclaimed from the escrow in the same operation
    /// (zero when the lock had not matured).
    pub unlocked: u128,
}

/// Aggregate lock re-extended to the maximum duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockExtended {
    pub unlock_time: i64,
}

/// Position tokens routed into a gauge on behalf of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeDeposited {
    pub gauge: GaugeId,
    pub user: AccountId,
    pub value: u128,
}

/// Position tokens pulled back out of a gauge for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeWithdrawn {
    pub gauge: GaugeId,
    pub user: AccountId,
    pub value: u128,
}

/// Gauge rewards minted and locked into the escrow, unattributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsLocked {
    pub gauge: GaugeId,
    pub value: u128,
}

/// Enum wrapper for all ledger events, enabling uniform handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    Transfer(Transfer),
    Approval(Approval),
    Deposited(Deposited),
    Withdrawn(Withdrawn),
    LockExtended(LockExtended),
    GaugeDeposited(GaugeDeposited),
    GaugeWithdrawn(GaugeWithdrawn),
    RewardsLocked(RewardsLocked),
}
