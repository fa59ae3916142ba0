//! Port for structured conversation logging.
//!
//! Records what was asked and what each provider answered (or why it failed)
//! as machine-readable events. This is separate from `tracing`-based
//! operation logs, which stay human-readable diagnostics.
//!
//! API keys never appear in these events.

use battle_domain::{Message, ProviderProfile};
use serde_json::{Value, json};

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (`user_message`, `assistant_reply`, `provider_error`).
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// The question as it was appended to both sessions
    pub fn user_message(message: &Message) -> Self {
        Self::new(
            "user_message",
            json!({
                "content": message.content(),
                "sent_at": message.timestamp().to_rfc3339(),
            }),
        )
    }

    /// A reply appended to one provider's session
    pub fn assistant_reply(profile: &ProviderProfile, reply: &Message) -> Self {
        Self::new(
            "assistant_reply",
            json!({
                "provider": profile.provider.as_str(),
                "model": profile.model,
                "content": reply.content(),
                "chars": reply.content().chars().count(),
            }),
        )
    }

    /// A failed dispatch
    pub fn provider_error(profile: &ProviderProfile, error: &str) -> Self {
        Self::new(
            "provider_error",
            json!({
                "provider": profile.provider.as_str(),
                "model": profile.model,
                "error": error,
            }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and non-fallible so that a broken log file never
/// affects a dispatch; implementations swallow their own write errors.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_domain::Provider;

    #[test]
    fn test_assistant_reply_payload() {
        let profile = ProviderProfile::default_for(Provider::Perplexity);
        let event = ConversationEvent::assistant_reply(&profile, &Message::assistant("4"));
        assert_eq!(event.event_type, "assistant_reply");
        assert_eq!(event.payload["provider"], "perplexity");
        assert_eq!(event.payload["model"], "llama-3.1-sonar-small-128k-online");
        assert_eq!(event.payload["chars"], 1);
    }

    #[test]
    fn test_provider_error_payload() {
        let profile = ProviderProfile::default_for(Provider::OpenAi);
        let event = ConversationEvent::provider_error(&profile, "Invalid key");
        assert_eq!(event.event_type, "provider_error");
        assert_eq!(event.payload["error"], "Invalid key");
    }
}
