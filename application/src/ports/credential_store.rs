//! Credential store port
//!
//! Persistent, per-user storage for the two API keys.

use crate::config::Credentials;
use thiserror::Error;

/// Errors from reading or writing the credential store
#[derive(Error, Debug)]
pub enum CredentialStoreError {
    #[error("Credential store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Credential store is malformed: {0}")]
    Format(String),

    #[error("No location available for the credential store")]
    NoLocation,
}

/// Storage for API keys
///
/// Keys are kept in plaintext with no expiry. `load` on a store that has
/// never been written returns empty credentials rather than an error.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Result<Credentials, CredentialStoreError>;

    fn save(&self, credentials: &Credentials) -> Result<(), CredentialStoreError>;
}
