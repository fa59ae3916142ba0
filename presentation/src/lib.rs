//! Presentation layer for search-battle
//!
//! This crate contains CLI definitions, the side-by-side formatter,
//! progress reporters, the credential form and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod notify;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use credentials::form::{CredentialForm, FormOutcome};
pub use notify::console::ConsoleNotifier;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress, for_stderr as progress_for_stderr};
