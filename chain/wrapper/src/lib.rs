//! Wrapper Ledger — liquid claims against a time-locked escrow position
//!
//! This crate implements the accounting layer of the liquid wrapper: a
//! fungible claim token issued 1:1 against an aggregate time-locked deposit
//! held by an external escrow, plus a per-(gauge, user) sub-ledger for
//! assets routed through external yield gauges.
//!
//! # Modules
//! - `errors`: Ledger error taxonomy
//! - `events`: Ledger events (append-only audit log)
//! - `external`: Capability traits for the black-box collaborators
//! - `token`: Wrapper token balances, allowances, and supply
//! - `escrow`: Aggregate lock coordination (deposit/withdraw/extend)
//! - `gauge`: Per-(gauge, user) sub-balance tracking
//! - `ledger`: Facade exposing the full caller surface
//!
//! Every top-level operation either fully applies its local effects or
//! fully aborts with no local state change.

pub mod errors;
pub mod events;
pub mod external;
pub mod token;
pub mod escrow;
pub mod gauge;
pub mod ledger;

/// Ledger ABI version — frozen after release
pub const LEDGER_ABI_VERSION: &str = "1.0.0";
