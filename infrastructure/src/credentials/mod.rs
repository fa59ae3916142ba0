//! Credential storage adapters.
//!
//! - [`FileCredentialStore`]: plaintext TOML file in the user's config dir
//! - [`EnvKeyNames`]: environment variables that override stored keys

mod env;
mod file_store;

pub use env::EnvKeyNames;
pub use file_store::FileCredentialStore;
