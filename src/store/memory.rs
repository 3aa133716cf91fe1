//! In-memory account store
//!
//! The default adapter for tests and embedders that need no durability.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::Account;

use super::{AccountStore, StoreError};

/// A map from account id to account behind an `RwLock`.
///
/// Both `save` and `find_by_id` clone, so callers always hold detached
/// copies and the read-mutate-write contract stays explicit. The lock
/// serializes individual calls but not whole read-modify-write sequences;
/// embedders exposing this to concurrent callers must coordinate per id
/// themselves.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AccountStore for InMemoryAccountStore {
    fn save(&self, account: &Account) -> Result<(), StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| StoreError::Write(format!("lock poisoned: {}", e)))?;

        accounts.insert(account.id().to_string(), account.clone());
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| StoreError::Read(format!("lock poisoned: {}", e)))?;

        Ok(accounts.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Client};
    use rust_decimal::Decimal;

    #[test]
    fn test_save_and_find() {
        let store = InMemoryAccountStore::new();
        let account = Account::new("1", Client::new("Ana", "111.111.111-11"));

        store.save(&account).unwrap();

        let found = store.find_by_id("1").unwrap().unwrap();
        assert_eq!(found, account);
    }

    #[test]
    fn test_find_missing_is_none() {
        let store = InMemoryAccountStore::new();

        assert!(store.find_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_save_upserts() {
        let store = InMemoryAccountStore::new();
        let mut account = Account::new("1", Client::new("Ana", "111.111.111-11"));
        store.save(&account).unwrap();

        account
            .credit(&Amount::new(Decimal::new(100, 0)).unwrap())
            .unwrap();
        store.save(&account).unwrap();

        let found = store.find_by_id("1").unwrap().unwrap();
        assert_eq!(found.balance().value(), Decimal::new(100, 0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_returned_copy_is_detached() {
        let store = InMemoryAccountStore::new();
        let account = Account::new("1", Client::new("Ana", "111.111.111-11"));
        store.save(&account).unwrap();

        // Mutate the fetched copy without saving it back.
        let mut fetched = store.find_by_id("1").unwrap().unwrap();
        fetched
            .credit(&Amount::new(Decimal::new(500, 0)).unwrap())
            .unwrap();

        let stored = store.find_by_id("1").unwrap().unwrap();
        assert_eq!(stored.balance().value(), Decimal::ZERO);
    }
}
