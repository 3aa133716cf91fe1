//! Client
//!
//! Owner identity carried on an account. Plain profile data, no behavior.

use serde::{Deserialize, Serialize};

/// The holder of an account: a display name and an identifying document
/// (e.g. a tax id). The document is free-form; format validation is the
/// caller's concern. Immutable after construction, owned by exactly one
/// account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Display name
    name: String,

    /// Identifying document (opaque to the ledger)
    document: String,
}

impl Client {
    /// Create a new client. Callers supply non-empty fields; the core does
    /// not re-validate them.
    pub fn new(name: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> &str {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_fields() {
        let client = Client::new("Ana", "111.111.111-11");

        assert_eq!(client.name(), "Ana");
        assert_eq!(client.document(), "111.111.111-11");
    }

    #[test]
    fn test_client_equality() {
        let a = Client::new("Ana", "111.111.111-11");
        let b = Client::new("Ana", "111.111.111-11");
        let c = Client::new("Carla", "222.222.222-22");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
