//! HTTP adapters for the chat completion APIs.
//!
//! Both providers speak the same OpenAI-style `chat/completions` JSON
//! contract; [`wire`] holds the shared request/response shapes and the
//! single POST helper, the per-provider modules add their endpoint and
//! fixed extra fields.

pub mod openai;
pub mod perplexity;
pub mod wire;

pub use openai::OpenAiProvider;
pub use perplexity::{PerplexityProvider, SearchRecency};

use std::time::Duration;

/// Build the shared HTTP client
///
/// With `timeout = None` the transport default applies (no overall deadline).
pub fn build_http_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder().user_agent(concat!(
        "search-battle/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default HTTP client: {}", e);
        reqwest::Client::new()
    })
}
