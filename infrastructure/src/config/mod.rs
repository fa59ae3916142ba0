//! Configuration file loading for search-battle
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SEARCH_BATTLE_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./search-battle.toml` or `./.search-battle.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/search-battle/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileHttpConfig, FileLoggingConfig, FileOpenAiConfig, FileOutputConfig,
    FilePerplexityConfig, FileProvidersConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
