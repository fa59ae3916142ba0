//! Infrastructure layer for search-battle
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileHttpConfig, FileLoggingConfig, FileOpenAiConfig,
    FileOutputConfig, FilePerplexityConfig, FileProvidersConfig, FileReplConfig,
};
pub use credentials::{EnvKeyNames, FileCredentialStore};
pub use logging::JsonlConversationLogger;
pub use providers::{OpenAiProvider, PerplexityProvider, SearchRecency, build_http_client};
