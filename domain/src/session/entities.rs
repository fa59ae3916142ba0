//! Session domain entities

use crate::core::provider::Provider;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A message in a conversation (Entity)
///
/// Immutable once created: fields are only readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message with an explicit timestamp
    pub fn new(role: Role, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content, Utc::now())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content, Utc::now())
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// One provider's side of the battle (Entity)
///
/// Holds an append-only chronological history together with the state of the
/// most recent dispatch. `is_loading` is true strictly between
/// [`begin_dispatch`](Self::begin_dispatch) and [`complete`](Self::complete) /
/// [`fail`](Self::fail); `error` only ever describes the most recent dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSession {
    provider: Provider,
    messages: Vec<Message>,
    is_loading: bool,
    error: Option<String>,
}

impl ConversationSession {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            messages: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Append the user's message to this session's own storage
    pub fn push_user(&mut self, message: &Message) {
        debug_assert!(message.is_user());
        self.messages.push(message.clone());
    }

    /// Mark the start of a dispatch: loading on, previous error cleared
    pub fn begin_dispatch(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Record a successful reply and return the appended message
    pub fn complete(&mut self, reply: impl Into<String>) -> &Message {
        self.is_loading = false;
        self.messages.push(Message::assistant(reply));
        &self.messages[self.messages.len() - 1]
    }

    /// Record a failed dispatch; the history is left untouched
    pub fn fail(&mut self, error: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(error.into());
    }

    /// Most recent assistant reply, if any
    pub fn last_reply(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role == Role::Assistant)
    }

    /// Forget the whole conversation
    pub fn reset(&mut self) {
        self.messages.clear();
        self.is_loading = false;
        self.error = None;
    }
}
