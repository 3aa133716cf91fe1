//! JSON-file account store
//!
//! One pretty-printed JSON file per account under a data directory.
//! Writes stage to a temporary file and rename into place, so a crash
//! mid-write never leaves a truncated account file behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Account;

use super::{AccountStore, StoreError};

/// File-backed adapter. Each account lives at `<dir>/<sanitized-id>.json`.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", canonical_name(id)))
    }
}

/// Reduce an account id to a safe file name: lowercase alphanumerics,
/// `-` and `_` pass through, everything else becomes `_`.
fn canonical_name(id: &str) -> String {
    id.chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' | '_' => c,
            'A'..='Z' => c.to_ascii_lowercase(),
            _ => '_',
        })
        .collect()
}

impl AccountStore for JsonFileStore {
    fn save(&self, account: &Account) -> Result<(), StoreError> {
        let path = self.path_for(account.id());
        let tmp = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(account)?;
        fs::write(&tmp, json)?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Account>, StoreError> {
        let path = self.path_for(id);

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&data)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name("1"), "1");
        assert_eq!(canonical_name("Acct-01"), "acct-01");
        assert_eq!(canonical_name("a/b c"), "a_b_c");
    }
}
