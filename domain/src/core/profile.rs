//! Provider profile value object
//!
//! The fixed request parameters that accompany every dispatch to a provider:
//! model name, system instruction and sampling settings.

use super::provider::Provider;
use serde::{Deserialize, Serialize};

const OPENAI_SYSTEM_PROMPT: &str = "You are a helpful assistant with internet search capabilities. Provide accurate and up-to-date information.";

const PERPLEXITY_SYSTEM_PROMPT: &str =
    "Be precise and concise. Provide up-to-date information based on search results.";

/// Fixed per-provider request settings (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub provider: Provider,
    pub model: String,
    pub system_prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ProviderProfile {
    /// Built-in profile for a provider
    pub fn default_for(provider: Provider) -> Self {
        match provider {
            Provider::OpenAi => Self {
                provider,
                model: "gpt-4o-mini".to_string(),
                system_prompt: OPENAI_SYSTEM_PROMPT.to_string(),
                temperature: 0.7,
                max_tokens: 800,
            },
            Provider::Perplexity => Self {
                provider,
                model: "llama-3.1-sonar-small-128k-online".to_string(),
                system_prompt: PERPLEXITY_SYSTEM_PROMPT.to_string(),
                temperature: 0.2,
                max_tokens: 800,
            },
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
