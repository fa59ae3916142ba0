//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use crate::credentials::FileCredentialStore;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["search-battle.toml", ".search-battle.toml"];
const ENV_PREFIX: &str = "SEARCH_BATTLE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SEARCH_BATTLE_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./search-battle.toml` or `./.search-battle.toml`
    /// 4. Global: `<config_dir>/search-battle/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// `<config_dir>/search-battle/config.toml`, whether or not it exists
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("search-battle").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] Variables: {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project:  {}", path.display()),
            None => println!("  [     ] Project:  ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:   {}", mark, path.display());
        }

        println!("  [     ] Default:  built-in defaults");

        if let Some(path) = FileCredentialStore::default_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!();
            println!("API keys:");
            println!("  [{}] Stored:   {}", mark, path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_domain::OutputFormat;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.providers.openai.model, "gpt-4o-mini");
        assert!(config.output.format.is_none());
        assert!(config.http.request_timeout_seconds.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("search-battle"));
    }

    #[test]
    fn test_project_file_is_picked_up() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "search-battle.toml",
                r#"
                [providers.openai]
                model = "gpt-4o"

                [output]
                format = "json"
                "#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.providers.openai.model, "gpt-4o");
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            // Untouched sections keep their defaults
            assert_eq!(config.providers.perplexity.max_tokens, 800);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                ".search-battle.toml",
                "[providers.perplexity]\nmodel = \"sonar\"\ntemperature = 0.1\n",
            )?;
            jail.create_file(
                "custom.toml",
                "[providers.perplexity]\nmodel = \"sonar-pro\"\n",
            )?;

            let explicit = jail.directory().join("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.providers.perplexity.model, "sonar-pro");
            assert_eq!(config.providers.perplexity.temperature, 0.1);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("search-battle.toml", "[http]\nrequest_timeout_seconds = 10\n")?;
            jail.set_env("SEARCH_BATTLE_HTTP__REQUEST_TIMEOUT_SECONDS", "45");
            jail.set_env("SEARCH_BATTLE_OUTPUT__COLOR", "false");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.http.request_timeout_seconds, Some(45));
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("search-battle.toml", "[providers.openai]\ntemperature = \"hot\"\n")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
