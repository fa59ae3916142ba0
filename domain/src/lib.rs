//! Domain layer for search-battle
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Battle
//!
//! A battle puts one question to two providers at once and keeps their
//! answers apart:
//!
//! - **Provider**: a remote conversational AI HTTP API (OpenAI, Perplexity)
//! - **Session**: the per-provider conversation state (history + loading + error)
//! - **Dispatch**: sending one outbound request for one provider

pub mod config;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    profile::ProviderProfile,
    provider::Provider,
    question::Question,
};
pub use session::{
    entities::{ConversationSession, Message, Role},
    snapshot::ComparisonSnapshot,
};
