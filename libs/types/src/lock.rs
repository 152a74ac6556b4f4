//! Lock position view types
//!
//! The escrow's lock state is external and referenced, never owned: the
//! ledger queries it before deciding whether to create or extend a lock,
//! and whether a withdrawal may reclaim funds.

use serde::{Deserialize, Serialize};

/// Maximum lock duration in seconds (4 years).
///
/// Fresh locks are always opened for the full duration; subsequent
/// deposits only increase the locked amount.
pub const MAX_LOCK_DURATION: i64 = 4 * 365 * 86_400;

/// Snapshot of the aggregate lock position as reported by the escrow.
///
/// `amount == 0` or `end == 0` both mean no live lock exists. The values
/// are untrusted external state treated as authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockInfo {
    /// Amount of underlying asset currently locked.
    pub amount: u128,
    /// Unix timestamp (seconds) at which the lock matures.
    pub end: i64,
}

impl LockInfo {
    pub fn new(amount: u128, end: i64) -> Self {
        Self { amount, end }
    }

    /// True if no live lock exists.
    pub fn is_empty(&self) -> bool {
        self.amount == 0 || self.end == 0
    }

    /// True if the lock has matured by `now`.
    pub fn matured(&self, now: i64) -> bool {
        now >= self.end
    }
}
