//! Chat provider port
//!
//! Defines the interface for sending one conversation to one remote AI API.

use async_trait::async_trait;
use battle_domain::{Message, Provider, ProviderProfile};
use thiserror::Error;

/// Errors that can occur during a single dispatch
///
/// The `Display` text is what ends up on the session and in the
/// notification, so `Api` shows the provider's own message verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Non-success HTTP status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not the expected JSON shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// HTTP status, when the provider answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A remote chat completion API
///
/// Implementations (adapters) live in the infrastructure layer. Each call is
/// one full request/response: no streaming and no retries.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// The fixed model, system instruction and sampling settings sent with every request
    fn profile(&self) -> &ProviderProfile;

    /// Which provider this adapter talks to
    fn provider(&self) -> Provider {
        self.profile().provider
    }

    /// Send the full running history and return the assistant's reply text
    async fn complete(&self, api_key: &str, history: &[Message]) -> Result<String, ProviderError>;
}
