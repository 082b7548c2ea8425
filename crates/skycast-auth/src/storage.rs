use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Stored credential record.
///
/// Values are kept verbatim; there is no hashing or encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// File-backed credential store scoped to a dedicated namespace.
///
/// Every read, write, and clear stays inside `<config_dir>/credentials/`;
/// clearing the store never touches state outside that directory.
pub struct CredentialStore {
    scope_dir: PathBuf,
}

impl CredentialStore {
    const SCOPE: &'static str = "credentials";
    const RECORD_FILE: &'static str = "session.json";

    /// Bind a store to its scope under the given config directory.
    pub fn new(config_dir: &Path) -> Self {
        Self {
            scope_dir: config_dir.join(Self::SCOPE),
        }
    }

    fn record_path(&self) -> PathBuf {
        self.scope_dir.join(Self::RECORD_FILE)
    }

    /// Store a credential record, creating the scope directory if needed.
    pub fn store(&self, credentials: &Credentials) -> Result<()> {
        fs::create_dir_all(&self.scope_dir)
            .context("Failed to create credential scope directory")?;

        let json = serde_json::to_string_pretty(credentials)
            .context("Failed to serialize credential record")?;

        fs::write(self.record_path(), json)
            .context("Failed to write credential record")?;

        tracing::info!("Stored credential record at {:?}", self.record_path());
        Ok(())
    }

    /// Retrieve the credential record from the scope.
    pub fn load(&self) -> Result<Credentials> {
        let json = fs::read_to_string(self.record_path())
            .context("Failed to read credential record")?;

        let credentials: Credentials = serde_json::from_str(&json)
            .context("Failed to deserialize credential record")?;

        Ok(credentials)
    }

    /// Check whether a credential record exists.
    pub fn has_credentials(&self) -> bool {
        self.load().is_ok()
    }

    /// Remove everything inside the credential scope.
    ///
    /// This is the only destructive operation; it is limited to the scope
    /// directory by construction.
    pub fn clear_scope(&self) -> Result<()> {
        if self.scope_dir.exists() {
            fs::remove_dir_all(&self.scope_dir)
                .context("Failed to clear credential scope")?;
            tracing::info!("Cleared credential scope {:?}", self.scope_dir);
        }

        Ok(())
    }
}
