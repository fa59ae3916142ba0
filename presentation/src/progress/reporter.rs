//! Progress reporting while both providers are answering

use battle_application::ProgressNotifier;
use battle_domain::{Message, Provider};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

/// One spinner per provider, finished independently as each one answers
pub struct ProgressReporter {
    multi: MultiProgress,
    spinners: Mutex<HashMap<Provider, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            spinners: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap()
    }

    fn finish(&self, provider: Provider, message: String) {
        let Ok(mut spinners) = self.spinners.lock() else {
            return;
        };
        if let Some(pb) = spinners.remove(&provider) {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_dispatch_start(&self, provider: Provider) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("{:<10}", provider.display_name()));
        pb.set_message("thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinners) = self.spinners.lock() {
            spinners.insert(provider, pb);
        }
    }

    fn on_reply(&self, provider: Provider, reply: &Message) {
        let chars = reply.content().chars().count();
        self.finish(provider, format!("{} {} chars", "v".green(), chars));
    }

    fn on_failure(&self, provider: Provider, error: &str) {
        self.finish(provider, format!("{} {}", "x".red(), error));
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Used when stderr is not a terminal, where spinners would only leave
/// escape codes in a log.
pub struct SimpleProgress;

impl SimpleProgress {
    fn start_line(provider: Provider) -> String {
        format!("{} asking {}", "->".cyan(), provider.display_name().bold())
    }

    fn reply_line(provider: Provider, reply: &Message) -> String {
        format!(
            "  {} {} ({} chars)",
            "v".green(),
            provider.display_name(),
            reply.content().chars().count()
        )
    }

    fn failure_line(provider: Provider, error: &str) -> String {
        format!("  {} {} failed: {}", "x".red(), provider.display_name(), error)
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_dispatch_start(&self, provider: Provider) {
        eprintln!("{}", Self::start_line(provider));
    }

    fn on_reply(&self, provider: Provider, reply: &Message) {
        eprintln!("{}", Self::reply_line(provider, reply));
    }

    fn on_failure(&self, provider: Provider, error: &str) {
        eprintln!("{}", Self::failure_line(provider, error));
    }
}

/// Spinners on a terminal, plain lines otherwise
pub fn for_stderr() -> Box<dyn ProgressNotifier> {
    select(std::io::stderr().is_terminal())
}

fn select(interactive: bool) -> Box<dyn ProgressNotifier> {
    if interactive {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.multi.set_draw_target(indicatif::ProgressDrawTarget::hidden());

        reporter.on_dispatch_start(Provider::OpenAi);
        reporter.on_dispatch_start(Provider::Perplexity);
        assert_eq!(reporter.spinners.lock().unwrap().len(), 2);

        reporter.on_reply(Provider::Perplexity, &Message::assistant("fast"));
        reporter.on_failure(Provider::OpenAi, "Invalid API key");
        assert!(reporter.spinners.lock().unwrap().is_empty());
    }

    #[test]
    fn test_finish_unknown_provider_is_noop() {
        let reporter = ProgressReporter::new();
        reporter.multi.set_draw_target(indicatif::ProgressDrawTarget::hidden());
        reporter.on_reply(Provider::OpenAi, &Message::assistant("late"));
        assert!(reporter.spinners.lock().unwrap().is_empty());
    }

    #[test]
    fn test_simple_progress_lines() {
        colored::control::set_override(false);
        assert_eq!(SimpleProgress::start_line(Provider::OpenAi), "-> asking OpenAI");
        assert_eq!(
            SimpleProgress::reply_line(Provider::Perplexity, &Message::assistant("four")),
            "  v Perplexity (4 chars)"
        );
        assert_eq!(
            SimpleProgress::failure_line(Provider::OpenAi, "Invalid API key"),
            "  x OpenAI failed: Invalid API key"
        );
    }

    #[test]
    fn test_simple_progress_callbacks_run() {
        let progress = select(false);
        progress.on_dispatch_start(Provider::OpenAi);
        progress.on_reply(Provider::OpenAi, &Message::assistant("4"));
        progress.on_failure(Provider::Perplexity, "timeout");
    }
}
