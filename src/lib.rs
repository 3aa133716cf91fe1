//! ledger_core
//!
//! A minimal account ledger: accounts with balances and loan allowances,
//! a use-case service, and a pluggable persistence port with in-memory
//! and JSON-file adapters.

pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod store;

pub use config::{Config, ConfigError};
pub use domain::{Account, Amount, AmountError, Balance, Client, DomainError};
pub use error::{LedgerError, LedgerResult};
pub use service::AccountService;
pub use store::{AccountStore, InMemoryAccountStore, JsonFileStore, StoreError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Safe to call from multiple tests; only the first call installs the
/// subscriber. Honors `RUST_LOG`, defaulting to `ledger_core=info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("ledger_core=info"));

        fmt().with_env_filter(filter).init();
    });
}
