//! Login/logout gate over the credential store.

use anyhow::Result;

use crate::storage::{CredentialStore, Credentials};

/// Presence-only authentication gate.
///
/// Authenticated means "a record with a non-empty email and password is in
/// the store" and nothing more.
pub struct AuthGate {
    store: CredentialStore,
}

impl AuthGate {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    /// True iff a credential record loads and both fields are non-empty.
    /// Read failures report false and have no side effects.
    pub fn is_authenticated(&self) -> bool {
        match self.store.load() {
            Ok(credentials) => {
                !credentials.email.is_empty() && !credentials.password.is_empty()
            }
            Err(_) => false,
        }
    }

    /// Attempt a login.
    ///
    /// Returns `Ok(false)` without touching storage when the email is not
    /// well-formed. The password is accepted unconditionally and stored
    /// verbatim.
    pub fn login(&self, email: &str, password: &str) -> Result<bool> {
        if !validate_email(email) {
            tracing::debug!("Rejected login for malformed email");
            return Ok(false);
        }

        self.store.store(&Credentials {
            email: email.to_string(),
            password: password.to_string(),
        })?;

        tracing::info!("Signed in");
        Ok(true)
    }

    /// Clear the credential scope.
    pub fn logout(&self) -> Result<()> {
        self.store.clear_scope()?;
        tracing::info!("Signed out");
        Ok(())
    }
}

/// Email format check: no whitespace, a single `@` with a non-empty local
/// part, and a dot inside the domain with characters on both sides.
pub fn validate_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = input.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs a dot that is neither its first nor its last character
    let bytes = domain.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && i + 1 < bytes.len())
}
