//! Account persistence port
//!
//! The service layer depends on this trait, never on a concrete backend.
//! Two adapters ship with the crate: an in-memory map for tests and
//! embedders, and a JSON-file store for simple durable setups.

pub mod error;
pub mod json;
pub mod memory;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::InMemoryAccountStore;

use std::sync::Arc;

use crate::domain::Account;

/// Persistence contract for accounts.
///
/// `save` upserts by id; `find_by_id` returns `None` for unknown ids (the
/// service translates that into `AccountNotFound`). Implementations must
/// return detached copies: mutating a returned `Account` has no effect on
/// stored state until it is saved back. Serializing concurrent
/// read-modify-write sequences per id is also the adapter's job; the
/// service performs no locking of its own.
pub trait AccountStore: Send + Sync {
    /// Insert or replace the account stored under `account.id()`.
    fn save(&self, account: &Account) -> Result<(), StoreError>;

    /// Fetch a copy of the account stored under `id`, if any.
    fn find_by_id(&self, id: &str) -> Result<Option<Account>, StoreError>;
}

// Lets callers share one store between the service and their own handle.
impl<S: AccountStore + ?Sized> AccountStore for Arc<S> {
    fn save(&self, account: &Account) -> Result<(), StoreError> {
        (**self).save(account)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Account>, StoreError> {
        (**self).find_by_id(id)
    }
}
