//! Login view model.

use anyhow::Result;
use skycast_auth::AuthGate;

/// View state for the login screen.
#[derive(Debug, Default)]
pub struct LoginModel {
    error_message: Option<String>,
}

impl LoginModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Drive a login attempt through the gate.
    ///
    /// Returns true when the gate accepted the credentials; a rejected email
    /// becomes view state instead of a bare boolean.
    pub fn submit(&mut self, gate: &AuthGate, email: &str, password: &str) -> Result<bool> {
        if gate.login(email, password)? {
            self.error_message = None;
            Ok(true)
        } else {
            self.error_message = Some("Invalid email address".to_string());
            Ok(false)
        }
    }
}
