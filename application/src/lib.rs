//! Application layer for search-battle
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::Credentials;
pub use ports::{
    chat_provider::{ChatProvider, ProviderError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    credential_store::{CredentialStore, CredentialStoreError},
    notifier::{Notification, NotificationLevel, Notifier, NoNotifier},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::dual_chat::{DispatchOutcome, DualChatController, RoundReport, SubmitOutcome};
