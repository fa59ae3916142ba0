//! Provider configuration from TOML (`[providers]` section)

use crate::providers::openai::OPENAI_BASE_URL;
use crate::providers::perplexity::{PERPLEXITY_BASE_URL, SearchRecency};
use battle_domain::{ConfigIssue, ConfigIssueCode, Provider, ProviderProfile};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// OpenAI API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable that overrides the stored key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Base URL for the OpenAI API.
    pub base_url: String,
    pub model: String,
    pub system_prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        let profile = ProviderProfile::default_for(Provider::OpenAi);
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: OPENAI_BASE_URL.to_string(),
            model: profile.model,
            system_prompt: profile.system_prompt,
            temperature: profile.temperature,
            max_tokens: profile.max_tokens,
        }
    }
}

impl FileOpenAiConfig {
    pub fn to_profile(&self) -> ProviderProfile {
        ProviderProfile::default_for(Provider::OpenAi)
            .with_model(self.model.trim())
            .with_system_prompt(&self.system_prompt)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        validate_sampling("providers.openai", &self.model, self.temperature, self.max_tokens)
    }
}

/// Perplexity API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePerplexityConfig {
    /// Environment variable that overrides the stored key (default: "PERPLEXITY_API_KEY").
    pub api_key_env: String,
    /// Base URL for the Perplexity API.
    pub base_url: String,
    pub model: String,
    pub system_prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// "hour", "day", "week" or "month"
    pub search_recency_filter: String,
}

impl Default for FilePerplexityConfig {
    fn default() -> Self {
        let profile = ProviderProfile::default_for(Provider::Perplexity);
        Self {
            api_key_env: "PERPLEXITY_API_KEY".to_string(),
            base_url: PERPLEXITY_BASE_URL.to_string(),
            model: profile.model,
            system_prompt: profile.system_prompt,
            temperature: profile.temperature,
            max_tokens: profile.max_tokens,
            search_recency_filter: SearchRecency::default().as_str().to_string(),
        }
    }
}

impl FilePerplexityConfig {
    pub fn to_profile(&self) -> ProviderProfile {
        ProviderProfile::default_for(Provider::Perplexity)
            .with_model(self.model.trim())
            .with_system_prompt(&self.system_prompt)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }

    /// Parsed recency filter; unknown values fall back to the default
    pub fn recency(&self) -> SearchRecency {
        self.search_recency_filter.parse().unwrap_or_else(|e| {
            warn!("{}, using '{}'", e, SearchRecency::default().as_str());
            SearchRecency::default()
        })
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = validate_sampling(
            "providers.perplexity",
            &self.model,
            self.temperature,
            self.max_tokens,
        );
        if self.search_recency_filter.parse::<SearchRecency>().is_err() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidEnumValue {
                    field: "providers.perplexity.search_recency_filter".to_string(),
                    value: self.search_recency_filter.clone(),
                    valid_values: SearchRecency::VALUES.iter().map(|v| v.to_string()).collect(),
                },
                format!(
                    "providers.perplexity.search_recency_filter: unknown value '{}', falling back to '{}'",
                    self.search_recency_filter,
                    SearchRecency::default().as_str()
                ),
            ));
        }
        issues
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Left column
    pub openai: FileOpenAiConfig,
    /// Right column
    pub perplexity: FilePerplexityConfig,
}

fn validate_sampling(section: &str, model: &str, temperature: f64, max_tokens: u32) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    if model.trim().is_empty() {
        let field = format!("{}.model", section);
        issues.push(ConfigIssue::error(
            ConfigIssueCode::EmptyModelName {
                field: field.clone(),
            },
            format!("{}: model name must not be empty", field),
        ));
    }

    if !(0.0..=2.0).contains(&temperature) {
        let field = format!("{}.temperature", section);
        issues.push(ConfigIssue::error(
            ConfigIssueCode::TemperatureOutOfRange {
                field: field.clone(),
            },
            format!("{}: {} is outside 0.0..=2.0", field, temperature),
        ));
    }

    if max_tokens == 0 {
        let field = format!("{}.max_tokens", section);
        issues.push(ConfigIssue::error(
            ConfigIssueCode::ZeroMaxTokens {
                field: field.clone(),
            },
            format!("{}: must be at least 1", field),
        ));
    }

    issues
}
