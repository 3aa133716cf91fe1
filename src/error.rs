//! Error handling module
//!
//! The service-level error type: every use-case operation returns
//! `LedgerResult`, wrapping either a business-rule failure or a
//! persistence failure.

use crate::domain::DomainError;
use crate::store::StoreError;

/// Crate-wide Result type
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Everything an `AccountService` call can fail with.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    // Business-rule violations
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Persistence failures, propagated opaquely
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// True when this failure is a missing-account lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::Domain(DomainError::AccountNotFound(_)))
    }
}
