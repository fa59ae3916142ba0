//! Credential entry form
//!
//! Gates the chat until both API keys are known. Keys are validated and
//! saved through the [`CredentialStore`] port; the user is told about the
//! result through the [`Notifier`] port.

use battle_application::{Credentials, CredentialStore, Notification, Notifier};
use battle_domain::Provider;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::warn;

/// Result of one pass through the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Both keys were non-blank and have been persisted
    Saved(Credentials),
    /// At least one key was blank; nothing was saved
    Rejected,
    /// The store refused the write
    Failed,
}

pub struct CredentialForm {
    store: Arc<dyn CredentialStore>,
    notifier: Arc<dyn Notifier>,
}

impl CredentialForm {
    pub fn new(store: Arc<dyn CredentialStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Keys currently in the store; unreadable stores count as empty
    pub fn stored(&self) -> Credentials {
        self.store.load().unwrap_or_else(|e| {
            warn!("Could not read stored API keys: {}", e);
            Credentials::default()
        })
    }

    /// Validate and persist the two keys
    pub fn submit(&self, openai_api_key: &str, perplexity_api_key: &str) -> FormOutcome {
        let openai = openai_api_key.trim();
        let perplexity = perplexity_api_key.trim();

        if openai.is_empty() || perplexity.is_empty() {
            self.notifier.notify(Notification::error(
                "Missing API Keys",
                "Please enter both API keys",
            ));
            return FormOutcome::Rejected;
        }

        let credentials = Credentials::new(openai, perplexity);
        match self.store.save(&credentials) {
            Ok(()) => {
                self.notifier.notify(Notification::info(
                    "API Keys Saved",
                    "Your API keys have been saved",
                ));
                FormOutcome::Saved(credentials)
            }
            Err(e) => {
                warn!("Failed to save API keys: {}", e);
                self.notifier
                    .notify(Notification::error("Error", "Failed to save API keys"));
                FormOutcome::Failed
            }
        }
    }

    /// Run the form on the terminal
    pub fn prompt(&self) -> io::Result<FormOutcome> {
        let stdin = io::stdin();
        self.prompt_with(&mut stdin.lock(), &mut io::stdout())
    }

    /// Run the form against arbitrary input and output
    ///
    /// Pressing Enter on a field keeps the stored key.
    pub fn prompt_with<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<FormOutcome> {
        let current = self.stored();

        writeln!(output)?;
        writeln!(output, "{}", "Enter your API keys".cyan().bold())?;
        writeln!(
            output,
            "{}",
            "Keys are stored in plaintext on this machine only.".dimmed()
        )?;

        let openai = Self::read_field(input, output, Provider::OpenAi, "sk-...", &current)?;
        let perplexity =
            Self::read_field(input, output, Provider::Perplexity, "pplx-...", &current)?;

        Ok(self.submit(&openai, &perplexity))
    }

    fn read_field<R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
        provider: Provider,
        hint: &str,
        current: &Credentials,
    ) -> io::Result<String> {
        let existing = current.key_for(provider);
        let shown = existing.map(mask).unwrap_or_else(|| hint.to_string());
        write!(
            output,
            "  {} API key [{}]: ",
            provider.display_name(),
            shown.dimmed()
        )?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let typed = line.trim();

        Ok(match (typed.is_empty(), existing) {
            (true, Some(key)) => key.to_string(),
            _ => typed.to_string(),
        })
    }
}

/// Show only enough of a key to recognise it
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
