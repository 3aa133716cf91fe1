//! Account Service
//!
//! The use-case layer: each operation loads current state from the store,
//! mutates the account(s) in memory through the entity's invariant-checked
//! methods, and persists the result. The service holds no state of its own;
//! the store is the single source of truth between calls.

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::{Account, Amount, DomainError};
use crate::error::LedgerResult;
use crate::store::AccountStore;

/// Orchestrates account use cases over a pluggable [`AccountStore`].
///
/// Every failure is returned synchronously as a typed error; nothing is
/// retried and no partial state is persisted when an operation fails
/// partway. A transfer whose debit fails writes nothing.
pub struct AccountService<S: AccountStore> {
    store: S,
}

impl<S: AccountStore> AccountService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a brand-new account.
    ///
    /// Fails with `AccountAlreadyExists` when the id is already taken.
    /// Overwriting would silently wipe a live balance.
    pub fn create_account(&self, account: &Account) -> LedgerResult<()> {
        if self.store.find_by_id(account.id())?.is_some() {
            return Err(DomainError::AccountAlreadyExists(account.id().to_string()).into());
        }

        self.store.save(account)?;
        info!(account_id = %account.id(), owner = %account.owner().name(), "account created");
        Ok(())
    }

    /// Fetch the current persisted state of an account.
    ///
    /// The returned value is a detached copy: mutations are not durable
    /// until saved back through an operation on this service.
    pub fn find_account(&self, id: &str) -> LedgerResult<Account> {
        self.load(id)
    }

    /// Credit `amount` to the account's balance and persist it.
    pub fn deposit(&self, id: &str, amount: Decimal) -> LedgerResult<()> {
        let amount = Amount::new(amount).map_err(DomainError::from)?;

        let mut account = self.load(id)?;
        account.credit(&amount)?;
        self.store.save(&account)?;

        info!(account_id = %id, %amount, balance = %account.balance(), "deposit applied");
        Ok(())
    }

    /// Debit `amount` from the account's balance and persist it.
    pub fn withdraw(&self, id: &str, amount: Decimal) -> LedgerResult<()> {
        let amount = Amount::new(amount).map_err(DomainError::from)?;

        let mut account = self.load(id)?;
        account.debit(&amount)?;
        self.store.save(&account)?;

        info!(account_id = %id, %amount, balance = %account.balance(), "withdrawal applied");
        Ok(())
    }

    /// Move `amount` from one account to another.
    ///
    /// Both accounts are loaded up front; a missing id fails naming that id
    /// before anything else happens. The source is debited first, so an
    /// insufficient balance aborts the operation before any store write.
    /// On success both accounts are persisted, source first.
    pub fn transfer(&self, from_id: &str, to_id: &str, amount: Decimal) -> LedgerResult<()> {
        if from_id == to_id {
            return Err(DomainError::SameAccountTransfer.into());
        }

        let amount = Amount::new(amount).map_err(DomainError::from)?;

        let mut from = self.load(from_id)?;
        let mut to = self.load(to_id)?;

        from.debit(&amount)?;
        to.credit(&amount)?;

        self.store.save(&from)?;
        self.store.save(&to)?;

        let transfer_id = Uuid::new_v4();
        info!(
            %transfer_id,
            from_id = %from_id,
            to_id = %to_id,
            %amount,
            "transfer completed"
        );
        Ok(())
    }

    /// Convert `amount` of the account's loan allowance into balance.
    pub fn borrow(&self, id: &str, amount: Decimal) -> LedgerResult<()> {
        let amount = Amount::new(amount).map_err(DomainError::from)?;

        let mut account = self.load(id)?;
        account.draw_loan(&amount)?;
        self.store.save(&account)?;

        let loan_id = Uuid::new_v4();
        info!(
            %loan_id,
            account_id = %id,
            %amount,
            remaining_allowance = %account.loan_allowance(),
            "loan drawn"
        );
        Ok(())
    }

    /// Increase the account's loan allowance and persist it.
    ///
    /// Setup/admin surface: not part of the primary use-case set, but
    /// borrowing consumes the pool this grants.
    pub fn grant_loan_allowance(&self, id: &str, amount: Decimal) -> LedgerResult<()> {
        let mut account = self.load(id)?;
        account.grant_loan_allowance(amount)?;
        self.store.save(&account)?;

        info!(account_id = %id, allowance = %account.loan_allowance(), "loan allowance granted");
        Ok(())
    }

    fn load(&self, id: &str) -> LedgerResult<Account> {
        self.store
            .find_by_id(id)?
            .ok_or_else(|| DomainError::AccountNotFound(id.to_string()).into())
    }
}
