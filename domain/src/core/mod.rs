//! Core domain concepts shared across all subdomains.
//!
//! - [`provider::Provider`]: the two competing AI providers
//! - [`profile::ProviderProfile`]: fixed model, system instruction and sampling for a provider
//! - [`question::Question`]: a validated question to pose to both providers
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod profile;
pub mod provider;
pub mod question;
pub mod string;
