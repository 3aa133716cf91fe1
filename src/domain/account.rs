//! Account
//!
//! The core ledgered entity. Holds one owner's spendable balance and the
//! separately tracked loan allowance, and enforces the arithmetic invariants
//! on both. Persistence is the caller's responsibility.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Amount, Balance, Client, DomainError};

/// A ledger account.
///
/// The id is assigned externally and immutable. `balance` and
/// `loan_allowance` never go negative: operations that would drive either
/// below zero (or past the balance cap) fail and leave the account untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account id, assigned by the caller
    id: String,

    /// Owning client
    owner: Client,

    /// Spendable balance
    balance: Balance,

    /// Pre-approved credit still available to draw
    loan_allowance: Balance,

    /// When the account was created
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with zero balance and zero loan allowance.
    pub fn new(id: impl Into<String>, owner: Client) -> Self {
        Self {
            id: id.into(),
            owner,
            balance: Balance::zero(),
            loan_allowance: Balance::zero(),
            created_at: Utc::now(),
        }
    }

    /// Increase the balance by `amount`.
    ///
    /// The only failure is the balance cap; there is no underflow condition.
    pub fn credit(&mut self, amount: &Amount) -> Result<(), DomainError> {
        self.balance = self.balance.credit(amount)?;
        Ok(())
    }

    /// Decrease the balance by `amount`.
    ///
    /// Fails with `InsufficientFunds` when `amount` exceeds the current
    /// balance, leaving the account unchanged.
    pub fn debit(&mut self, amount: &Amount) -> Result<(), DomainError> {
        if !self.balance.is_sufficient_for(amount) {
            return Err(DomainError::insufficient_funds(
                amount.value(),
                self.balance.value(),
            ));
        }

        self.balance = self.balance.debit(amount)?;
        Ok(())
    }

    /// Increase the loan allowance by `amount`.
    ///
    /// Zero is accepted (a no-op grant); negative amounts fail with
    /// `InvalidAmount`. Setup/admin surface — borrowing consumes this pool.
    pub fn grant_loan_allowance(&mut self, amount: Decimal) -> Result<(), DomainError> {
        // Validates the grant itself is a non-negative quantity.
        let grant = Balance::new(amount)?;

        self.loan_allowance = Balance::new(self.loan_allowance.value() + grant.value())?;
        Ok(())
    }

    /// Convert `amount` of loan allowance into spendable balance.
    ///
    /// Fails with `LoanAllowanceExceeded` when `amount` exceeds the remaining
    /// allowance. Allowance and balance move together or not at all.
    pub fn draw_loan(&mut self, amount: &Amount) -> Result<(), DomainError> {
        if !self.loan_allowance.is_sufficient_for(amount) {
            return Err(DomainError::loan_allowance_exceeded(
                amount.value(),
                self.loan_allowance.value(),
            ));
        }

        // Validate both successor values before committing either field, so
        // a cap failure on the balance side leaves the allowance untouched.
        let new_allowance = self.loan_allowance.debit(amount)?;
        let new_balance = self.balance.credit(amount)?;

        self.loan_allowance = new_allowance;
        self.balance = new_balance;
        Ok(())
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &Client {
        &self.owner
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    pub fn loan_allowance(&self) -> &Balance {
        &self.loan_allowance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
