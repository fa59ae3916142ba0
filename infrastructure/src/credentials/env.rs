//! Environment-variable key overrides

use battle_application::Credentials;

/// Names of the environment variables holding the API keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvKeyNames {
    pub openai: String,
    pub perplexity: String,
}

impl Default for EnvKeyNames {
    fn default() -> Self {
        Self {
            openai: "OPENAI_API_KEY".to_string(),
            perplexity: "PERPLEXITY_API_KEY".to_string(),
        }
    }
}

impl EnvKeyNames {
    /// Keys currently set in the process environment
    pub fn read(&self) -> Credentials {
        self.read_with(|name| std::env::var(name).ok())
    }

    /// Same as [`read`](Self::read) with an injectable lookup
    pub fn read_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Credentials {
        Credentials {
            openai_api_key: lookup(&self.openai),
            perplexity_api_key: lookup(&self.perplexity),
        }
    }
}
