//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters must implement.

pub mod chat_provider;
pub mod conversation_logger;
pub mod credential_store;
pub mod notifier;
pub mod progress;
