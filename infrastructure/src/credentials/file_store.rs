//! File-backed [`CredentialStore`]

use battle_application::{CredentialStore, CredentialStoreError, Credentials};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_DIR: &str = "search-battle";
const FILE_NAME: &str = "credentials.toml";

/// On-disk layout: two fixed keys, plaintext, no expiry
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredKeys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    openai_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    perplexity_api_key: Option<String>,
}

/// Stores both API keys in `<config_dir>/search-battle/credentials.toml`
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config directory
    pub fn default_location() -> Result<Self, CredentialStoreError> {
        Self::in_config_dir(dirs::config_dir())
    }

    /// Store under `config_dir`; `None` means the platform has no config directory
    pub fn in_config_dir(config_dir: Option<PathBuf>) -> Result<Self, CredentialStoreError> {
        config_dir
            .map(|d| Self::new(d.join(APP_DIR).join(FILE_NAME)))
            .ok_or(CredentialStoreError::NoLocation)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(FILE_NAME))
    }

    /// Write `text` so the file is never readable by other users, even briefly
    #[cfg(unix)]
    fn write_private(&self, text: &str) -> std::io::Result<()> {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&self.path)?;
        // `mode` only applies on create; tighten a file left over from before
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        file.write_all(text.as_bytes())?;
        file.flush()
    }

    #[cfg(not(unix))]
    fn write_private(&self, text: &str) -> std::io::Result<()> {
        let mut file = std::fs::File::create(&self.path)?;
        file.write_all(text.as_bytes())?;
        file.flush()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Credentials, CredentialStoreError> {
        if !self.path.exists() {
            debug!("No credential file at {}", self.path.display());
            return Ok(Credentials::default());
        }

        let text = std::fs::read_to_string(&self.path)?;
        let stored: StoredKeys =
            toml::from_str(&text).map_err(|e| CredentialStoreError::Format(e.to_string()))?;

        Ok(Credentials {
            openai_api_key: stored.openai_api_key,
            perplexity_api_key: stored.perplexity_api_key,
        })
    }

    fn save(&self, credentials: &Credentials) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let stored = StoredKeys {
            openai_api_key: credentials.openai_api_key.clone(),
            perplexity_api_key: credentials.perplexity_api_key.clone(),
        };
        let text =
            toml::to_string(&stored).map_err(|e| CredentialStoreError::Format(e.to_string()))?;
        self.write_private(&text)?;

        info!("Saved API keys to {}", self.path.display());
        Ok(())
    }
}
