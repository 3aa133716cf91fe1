//! Domain module
//!
//! Core domain types and business logic.

pub mod account;
pub mod amount;
pub mod client;
pub mod error;

pub use account::Account;
pub use amount::{Amount, AmountError, Balance};
pub use client::Client;
pub use error::DomainError;
