//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod http;
mod logging;
mod output;
mod providers;
mod repl;

pub use http::FileHttpConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use providers::{FileOpenAiConfig, FilePerplexityConfig, FileProvidersConfig};
pub use repl::FileReplConfig;

use battle_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Per-provider endpoint, model and sampling settings
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log file and conversation transcript locations
    pub logging: FileLoggingConfig,
    /// HTTP transport settings
    pub http: FileHttpConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.providers.openai.validate());
        issues.extend(self.providers.perplexity.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_domain::{ConfigIssueCode, OutputFormat, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[providers.openai]
model = "gpt-4o"
temperature = 0.5

[providers.perplexity]
model = "sonar"
search_recency_filter = "week"
api_key_env = "PPLX_KEY"

[output]
format = "stacked"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/search-battle/history.txt"

[logging]
conversation_log = "battle.jsonl"

[http]
request_timeout_seconds = 30
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.providers.openai.model, "gpt-4o");
        assert_eq!(config.providers.openai.temperature, 0.5);
        assert_eq!(config.providers.openai.max_tokens, 800);
        assert_eq!(config.providers.perplexity.model, "sonar");
        assert_eq!(config.providers.perplexity.search_recency_filter, "week");
        assert_eq!(config.providers.perplexity.api_key_env, "PPLX_KEY");
        assert_eq!(config.output.format, Some(OutputFormat::Stacked));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.logging.conversation_log,
            Some("battle.jsonl".to_string())
        );
        assert_eq!(config.http.request_timeout_seconds, Some(30));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[providers.perplexity]
max_tokens = 400
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.providers.perplexity.max_tokens, 400);
        // Defaults should apply
        assert_eq!(
            config.providers.perplexity.model,
            "llama-3.1-sonar-small-128k-online"
        );
        assert_eq!(config.providers.openai.base_url, "https://api.openai.com");
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.providers.openai.model = "  ".to_string();
        config.providers.openai.temperature = 3.5;
        config.providers.perplexity.max_tokens = 0;
        config.providers.perplexity.search_recency_filter = "year".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(
            issues.iter().filter(|i| i.severity == Severity::Error).count(),
            3
        );
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::InvalidEnumValue { field, .. }
                if field == "providers.perplexity.search_recency_filter"
        )));
    }
}
