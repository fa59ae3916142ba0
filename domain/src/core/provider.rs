//! Provider value object representing a remote chat API

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The AI providers that take part in a battle (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// OpenAI chat completions (left column)
    OpenAi,
    /// Perplexity chat completions (right column)
    Perplexity,
}

impl Provider {
    /// Both providers in column order
    pub const ALL: [Provider; 2] = [Provider::OpenAi, Provider::Perplexity];

    /// Stable identifier used in config files and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Perplexity => "perplexity",
        }
    }

    /// Human-facing name used in headers and notifications
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Perplexity => "Perplexity",
        }
    }

    /// Fallback error text when the provider gives no message of its own
    pub fn fallback_error(&self) -> String {
        format!("Failed to get response from {}", self.display_name())
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Provider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" | "open-ai" | "a" => Ok(Provider::OpenAi),
            "perplexity" | "pplx" | "b" => Ok(Provider::Perplexity),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}

impl Serialize for Provider {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
