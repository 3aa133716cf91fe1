//! Store-contract tests for both adapters
//!
//! Both stores must honor the same contract: upsert by id, `None` for
//! unknown ids, and detached copies on every read.

use ledger_core::domain::{Account, Amount, Client};
use ledger_core::store::{AccountStore, InMemoryAccountStore, JsonFileStore};
use ledger_core::{AccountService, Config};
use rust_decimal_macros::dec;

fn sample_account(id: &str) -> Account {
    Account::new(id, Client::new("Ana", "111.111.111-11"))
}

fn check_contract<S: AccountStore>(store: &S) {
    // Unknown id reads as absent
    assert!(store.find_by_id("missing").unwrap().is_none());

    // Save then find returns an equal account
    let mut account = sample_account("1");
    store.save(&account).unwrap();
    assert_eq!(store.find_by_id("1").unwrap().unwrap(), account);

    // Save upserts
    account.credit(&Amount::new(dec!(100)).unwrap()).unwrap();
    store.save(&account).unwrap();
    let stored = store.find_by_id("1").unwrap().unwrap();
    assert_eq!(stored.balance().value(), dec!(100));

    // Reads are detached copies
    let mut fetched = store.find_by_id("1").unwrap().unwrap();
    fetched.credit(&Amount::new(dec!(500)).unwrap()).unwrap();
    assert_eq!(store.find_by_id("1").unwrap().unwrap().balance().value(), dec!(100));
}

#[test]
fn test_memory_store_contract() {
    check_contract(&InMemoryAccountStore::new());
}

#[test]
fn test_json_store_contract() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();

    check_contract(&store);
}

#[test]
fn test_json_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = JsonFileStore::new(dir.path()).unwrap();
        let mut account = sample_account("1");
        account.credit(&Amount::new(dec!(42.50)).unwrap()).unwrap();
        account.grant_loan_allowance(dec!(1000)).unwrap();
        store.save(&account).unwrap();
    }

    let store = JsonFileStore::new(dir.path()).unwrap();
    let account = store.find_by_id("1").unwrap().unwrap();
    assert_eq!(account.balance().value(), dec!(42.50));
    assert_eq!(account.loan_allowance().value(), dec!(1000));
    assert_eq!(account.owner().name(), "Ana");
}

#[test]
fn test_json_store_sanitizes_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();

    let account = sample_account("Acct/01 B");
    store.save(&account).unwrap();

    // Round-trips under the original id
    let found = store.find_by_id("Acct/01 B").unwrap().unwrap();
    assert_eq!(found.id(), "Acct/01 B");
}

#[test]
fn test_service_over_json_store_from_config() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("LEDGER_DATA_DIR", dir.path());

    let config = Config::from_env().unwrap();
    let store = JsonFileStore::new(config.data_dir).unwrap();
    let service = AccountService::new(store);

    service.create_account(&sample_account("1")).unwrap();
    service.deposit("1", dec!(100)).unwrap();

    assert_eq!(service.find_account("1").unwrap().balance().value(), dec!(100));
}
