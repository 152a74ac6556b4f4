//! Types library for the liquid wrapper ledger
//!
//! This library provides the core type definitions shared across the
//! wrapper system, ensuring type safety and deterministic behavior.
//!
//! # Version
//! v1.0.0 - Frozen interface
//!
//! # Modules
//! - `ids`: Unique identifiers (AccountId, GaugeId)
//! - `lock`: External lock position views (LockInfo)

// Public modules
pub mod ids;
pub mod lock;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::lock::*;
}
