//! Progress notification port
//!
//! Lets the presentation layer re-render each column as soon as its own
//! provider settles, instead of waiting for the slower one.

use crate::use_cases::dual_chat::RoundReport;
use battle_domain::{Message, Provider};

/// Callback for progress updates during a comparison round
///
/// The per-provider callbacks fire from inside each dispatch, in whatever
/// order the providers happen to answer.
pub trait ProgressNotifier: Send + Sync {
    /// Called once the user's message is in both histories
    fn on_round_start(&self, _question: &Message) {}

    /// Called right before a provider's request is sent
    fn on_dispatch_start(&self, provider: Provider);

    /// Called when a provider's reply has been appended to its session
    fn on_reply(&self, provider: Provider, reply: &Message);

    /// Called when a provider's dispatch failed
    fn on_failure(&self, provider: Provider, error: &str);

    /// Called after both dispatches have settled
    fn on_round_complete(&self, _report: &RoundReport) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_dispatch_start(&self, _provider: Provider) {}
    fn on_reply(&self, _provider: Provider, _reply: &Message) {}
    fn on_failure(&self, _provider: Provider, _error: &str) {}
}
