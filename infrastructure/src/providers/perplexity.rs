//! Perplexity chat completions adapter

use super::wire::{ChatCompletionRequest, post_chat_completion};
use async_trait::async_trait;
use battle_application::{ChatProvider, ProviderError};
use battle_domain::{Message, Provider, ProviderProfile};
use serde::{Deserialize, Serialize};

/// Default API origin
pub const PERPLEXITY_BASE_URL: &str = "https://api.perplexity.ai";

/// How recent the search results behind an answer must be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchRecency {
    Hour,
    Day,
    Week,
    #[default]
    Month,
}

impl SearchRecency {
    pub const VALUES: [&'static str; 4] = ["hour", "day", "week", "month"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchRecency::Hour => "hour",
            SearchRecency::Day => "day",
            SearchRecency::Week => "week",
            SearchRecency::Month => "month",
        }
    }
}

impl std::str::FromStr for SearchRecency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" => Ok(SearchRecency::Hour),
            "day" => Ok(SearchRecency::Day),
            "week" => Ok(SearchRecency::Week),
            "month" => Ok(SearchRecency::Month),
            other => Err(format!("unknown search recency '{}'", other)),
        }
    }
}

#[derive(Serialize)]
struct PerplexityRequest<'a> {
    #[serde(flatten)]
    base: ChatCompletionRequest<'a>,
    return_images: bool,
    return_related_questions: bool,
    search_recency_filter: SearchRecency,
}

/// [`ChatProvider`] for `POST {base_url}/chat/completions`
///
/// Adds the fixed Perplexity-only fields: no images, no related questions,
/// and a search recency filter.
pub struct PerplexityProvider {
    client: reqwest::Client,
    base_url: String,
    profile: ProviderProfile,
    recency: SearchRecency,
}

impl PerplexityProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: PERPLEXITY_BASE_URL.to_string(),
            profile: ProviderProfile::default_for(Provider::Perplexity),
            recency: SearchRecency::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_profile(mut self, profile: ProviderProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_recency(mut self, recency: SearchRecency) -> Self {
        self.recency = recency;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatProvider for PerplexityProvider {
    fn profile(&self) -> &ProviderProfile {
        &self.profile
    }

    async fn complete(&self, api_key: &str, history: &[Message]) -> Result<String, ProviderError> {
        let request = PerplexityRequest {
            base: ChatCompletionRequest::new(&self.profile, history),
            return_images: false,
            return_related_questions: false,
            search_recency_filter: self.recency,
        };
        post_chat_completion(
            &self.client,
            Provider::Perplexity,
            &self.endpoint(),
            api_key,
            &request,
        )
        .await
    }
}
