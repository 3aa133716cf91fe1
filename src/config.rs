//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the ledger.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the JSON-file store keeps account files in
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `LEDGER_DATA_DIR` is required; entry points are expected to have
    /// loaded `.env` (via `dotenvy`) before calling this.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env::var("LEDGER_DATA_DIR")
            .map_err(|_| ConfigError::MissingEnv("LEDGER_DATA_DIR"))?;

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),
}
