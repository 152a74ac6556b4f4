//! Ledger error taxonomy
//!
//! Every error is fatal to the triggering operation: the operation aborts
//! atomically and the caller observes the failure directly. There is no
//! local recovery or retry path.

use thiserror::Error;

/// Errors raised by wrapper ledger operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: u128, available: u128 },

    #[error("Insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance { required: u128, available: u128 },

    #[error("Invalid recipient: null address")]
    InvalidRecipient,

    #[error("External transfer rejected for token {token}")]
    TransferFailed { token: String },

    #[error("Escrow call rejected: {call}")]
    EscrowCallFailed { call: &'static str },

    #[error("Arithmetic overflow in ledger calculation")]
    Overflow,
}
