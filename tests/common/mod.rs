//! Common test utilities

use ledger_core::domain::{Account, Client};
use ledger_core::store::InMemoryAccountStore;
use ledger_core::AccountService;
use std::sync::Arc;

/// Set up a service over a fresh in-memory store, seeded with the two
/// fixture accounts: "1" (Ana) and "2" (Carla), both at balance zero.
pub fn setup_service() -> (
    AccountService<Arc<InMemoryAccountStore>>,
    Arc<InMemoryAccountStore>,
) {
    dotenvy::dotenv().ok();
    ledger_core::init_tracing();

    let store = Arc::new(InMemoryAccountStore::new());
    let service = AccountService::new(store.clone());

    service
        .create_account(&Account::new("1", Client::new("Ana", "111.111.111-11")))
        .expect("Failed to seed account 1");
    service
        .create_account(&Account::new("2", Client::new("Carla", "222.222.222-22")))
        .expect("Failed to seed account 2");

    (service, store)
}
