//! Shared `chat/completions` wire format

use battle_application::ProviderError;
use battle_domain::{Message, Provider, ProviderProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One entry of the request's `messages` array
#[derive(Debug, Serialize, PartialEq)]
pub struct WireMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Body fields common to both providers
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl<'a> ChatCompletionRequest<'a> {
    /// System instruction first, then the whole history in order
    pub fn new(profile: &'a ProviderProfile, history: &'a [Message]) -> Self {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(WireMessage {
            role: "system",
            content: &profile.system_prompt,
        });
        messages.extend(history.iter().map(|m| WireMessage {
            role: m.role().as_str(),
            content: m.content(),
        }));
        Self {
            model: &profile.model,
            messages,
            temperature: profile.temperature,
            max_tokens: profile.max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// `error.message` from a provider body, if there is a non-blank one
fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()?
        .error?
        .message
        .filter(|m| !m.trim().is_empty())
}

/// Pull `choices[0].message.content` out of a success body
pub fn parse_reply(provider: Provider, body: &str) -> Result<String, ProviderError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        ProviderError::InvalidResponse(
            api_error_message(body).unwrap_or_else(|| format!("{}: {}", provider.fallback_error(), e)),
        )
    })?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            ProviderError::InvalidResponse(
                api_error_message(body).unwrap_or_else(|| provider.fallback_error()),
            )
        })
}

/// POST a chat completion request and return the reply text
///
/// A full JSON body is read before anything is parsed; nothing is retried.
pub async fn post_chat_completion<B: Serialize + ?Sized>(
    client: &reqwest::Client,
    provider: Provider,
    url: &str,
    api_key: &str,
    body: &B,
) -> Result<String, ProviderError> {
    debug!("POST {} for {}", url, provider);

    let response = client
        .post(url)
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    if !status.is_success() {
        debug!("{} answered HTTP {}", provider, status.as_u16());
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message: api_error_message(&text).unwrap_or_else(|| provider.fallback_error()),
        });
    }

    parse_reply(provider, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_puts_system_prompt_first() {
        let profile = ProviderProfile::default_for(Provider::OpenAi);
        let history = vec![Message::user("hi"), Message::assistant("hello"), Message::user("again")];
        let request = ChatCompletionRequest::new(&profile, &history);

        let value = serde_json::to_value(&request).unwrap();
        let messages = value["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[2]["role"], "assistant");
        assert_eq!(messages[3]["content"], "again");
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["max_tokens"], 800);
    }

    #[test]
    fn test_parse_reply_reads_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"4"}},{"message":{"content":"5"}}]}"#;
        assert_eq!(parse_reply(Provider::OpenAi, body).unwrap(), "4");
    }

    #[test]
    fn test_parse_reply_missing_content() {
        let body = r#"{"choices":[]}"#;
        let err = parse_reply(Provider::Perplexity, body).unwrap_err();
        assert_eq!(
            err,
            ProviderError::InvalidResponse("Failed to get response from Perplexity".to_string())
        );
    }

    #[test]
    fn test_parse_reply_not_json() {
        let err = parse_reply(Provider::OpenAi, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
        assert!(err.to_string().contains("Failed to get response from OpenAI"));
    }

    #[test]
    fn test_api_error_message_extraction() {
        let body = r#"{"error":{"message":"Rate limit reached","type":"requests"}}"#;
        assert_eq!(api_error_message(body), Some("Rate limit reached".to_string()));
        assert_eq!(api_error_message(r#"{"error":{"message":"  "}}"#), None);
        assert_eq!(api_error_message("not json"), None);
    }
}
