//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use rust_decimal::Decimal;
use thiserror::Error;

use super::AmountError;

/// Business rule violations and domain invariant failures.
///
/// These are independent of any storage layer. The `AccountNotFound` display
/// format embeds the literal id and is relied upon by callers; it is the same
/// for every operation that looks an account up.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// No account stored under the requested id
    #[error("Invalid account - [id: {0}]")]
    AccountNotFound(String),

    /// Create was called with an id that is already taken
    #[error("Account already exists - [id: {0}]")]
    AccountAlreadyExists(String),

    /// Debit amount exceeds the current balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Requested draw exceeds the remaining loan allowance
    #[error("Loan allowance exceeded: requested {requested}, available {available}")]
    LoanAllowanceExceeded {
        requested: Decimal,
        available: Decimal,
    },

    /// Transfer source and destination are the same account
    #[error("Cannot transfer to the same account")]
    SameAccountTransfer,

    /// Invalid operation amount (zero, negative, or out of range)
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
}

impl DomainError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Create a loan allowance exceeded error
    pub fn loan_allowance_exceeded(requested: Decimal, available: Decimal) -> Self {
        Self::LoanAllowanceExceeded {
            requested,
            available,
        }
    }
}
