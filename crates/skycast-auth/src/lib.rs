//! Credential gate for Skycast
//!
//! Presence-only authentication backed by a scoped on-disk credential store.
//! Nothing is hashed or verified; the gate only checks that a record with
//! both fields exists.

pub mod gate;
pub mod storage;

pub use gate::{validate_email, AuthGate};
pub use storage::{CredentialStore, Credentials};
