//! OpenAI chat completions adapter

use super::wire::{ChatCompletionRequest, post_chat_completion};
use async_trait::async_trait;
use battle_application::{ChatProvider, ProviderError};
use battle_domain::{Message, Provider, ProviderProfile};

/// Default API origin
pub const OPENAI_BASE_URL: &str = "https://api.openai.com";

/// [`ChatProvider`] for `POST {base_url}/v1/chat/completions`
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    profile: ProviderProfile,
}

impl OpenAiProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: OPENAI_BASE_URL.to_string(),
            profile: ProviderProfile::default_for(Provider::OpenAi),
        }
    }

    /// Point at another origin (Azure-style proxies, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_profile(mut self, profile: ProviderProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    fn profile(&self) -> &ProviderProfile {
        &self.profile
    }

    async fn complete(&self, api_key: &str, history: &[Message]) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest::new(&self.profile, history);
        post_chat_completion(
            &self.client,
            Provider::OpenAi,
            &self.endpoint(),
            api_key,
            &request,
        )
        .await
    }
}
