//! Dual chat use case
//!
//! Puts one question to two providers at once and keeps each provider's
//! conversation in its own session.

use crate::config::Credentials;
use crate::ports::chat_provider::ChatProvider;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::notifier::{NoNotifier, Notification, Notifier};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use battle_domain::core::string::preview;
use battle_domain::{ComparisonSnapshot, ConversationSession, Message, Provider, Question};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How one provider's dispatch settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub provider: Provider,
    /// Human-readable failure, `None` when the reply was appended
    pub error: Option<String>,
}

impl DispatchOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Both outcomes of one submitted question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub left: DispatchOutcome,
    pub right: DispatchOutcome,
}

impl RoundReport {
    pub fn all_succeeded(&self) -> bool {
        self.left.succeeded() && self.right.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DispatchOutcome> {
        [&self.left, &self.right]
            .into_iter()
            .filter(|o| !o.succeeded())
    }
}

/// Result of [`DualChatController::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing happened
    Ignored,
    /// At least one API key is missing; nothing was dispatched
    CredentialsRequired,
    /// Both dispatches settled
    Completed(RoundReport),
}

struct Column {
    client: Arc<dyn ChatProvider>,
    session: ConversationSession,
}

impl Column {
    fn new(client: Arc<dyn ChatProvider>) -> Self {
        let session = ConversationSession::new(client.provider());
        Self { client, session }
    }
}

/// Controller owning the two independent conversation sessions
///
/// The left and right columns never share mutable state: a submission
/// appends the same user message to both, then drives the two dispatches
/// concurrently, each writing only to its own session.
pub struct DualChatController {
    left: Column,
    right: Column,
    credentials: Credentials,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn ConversationLogger>,
}

impl DualChatController {
    pub fn new(
        left: Arc<dyn ChatProvider>,
        right: Arc<dyn ChatProvider>,
        credentials: Credentials,
    ) -> Self {
        if left.provider() == right.provider() {
            warn!(
                "Both columns use {}; replies will not be comparable",
                left.provider()
            );
        }
        Self {
            left: Column::new(left),
            right: Column::new(right),
            credentials,
            notifier: Arc::new(NoNotifier),
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Set the notifier used for transient user-facing messages
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Set the structured conversation logger
    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Replace the credentials, e.g. after the key form was filled in
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    /// Whether both columns have a usable key
    pub fn has_credentials(&self) -> bool {
        self.credentials.key_for(self.left.session.provider()).is_some()
            && self.credentials.key_for(self.right.session.provider()).is_some()
    }

    /// Providers in column order
    pub fn providers(&self) -> [Provider; 2] {
        [self.left.session.provider(), self.right.session.provider()]
    }

    /// Both sessions, left column first
    pub fn sessions(&self) -> (&ConversationSession, &ConversationSession) {
        (&self.left.session, &self.right.session)
    }

    pub fn session(&self, provider: Provider) -> Option<&ConversationSession> {
        [&self.left.session, &self.right.session]
            .into_iter()
            .find(|s| s.provider() == provider)
    }

    /// True while either session is waiting for its provider
    pub fn is_busy(&self) -> bool {
        self.left.session.is_loading() || self.right.session.is_loading()
    }

    pub fn snapshot(&self) -> ComparisonSnapshot {
        ComparisonSnapshot::new(self.left.session.clone(), self.right.session.clone())
    }

    /// Start both conversations over
    pub fn reset(&mut self) {
        self.left.session.reset();
        self.right.session.reset();
        info!("Both sessions cleared");
    }

    /// Submit a question with default (no-op) progress
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        self.submit_with_progress(text, &NoProgress).await
    }

    /// Submit a question to both providers with progress callbacks
    ///
    /// Blank input is ignored silently. Missing credentials raise a
    /// notification and dispatch nothing. Otherwise the user message goes
    /// into both histories and both requests run concurrently; this returns
    /// once both have settled, whatever order they settle in.
    pub async fn submit_with_progress(
        &mut self,
        text: &str,
        progress: &dyn ProgressNotifier,
    ) -> SubmitOutcome {
        let Some(question) = Question::try_new(text) else {
            debug!("Ignoring blank input");
            return SubmitOutcome::Ignored;
        };

        let left_provider = self.left.session.provider();
        let right_provider = self.right.session.provider();
        let (Some(left_key), Some(right_key)) = (
            self.credentials.key_for(left_provider),
            self.credentials.key_for(right_provider),
        ) else {
            warn!(
                "Submission blocked, missing keys for: {:?}",
                self.credentials.missing()
            );
            self.notifier.notify(Notification::error(
                "API Keys Required",
                format!(
                    "Please set your {} and {} API keys first",
                    left_provider.display_name(),
                    right_provider.display_name()
                ),
            ));
            return SubmitOutcome::CredentialsRequired;
        };

        info!("Submitting question: {}", preview(question.content(), 60));

        let message = Message::user(question.into_content());
        self.left.session.push_user(&message);
        self.right.session.push_user(&message);
        self.logger.log(ConversationEvent::user_message(&message));
        progress.on_round_start(&message);

        let notifier = self.notifier.as_ref();
        let logger = self.logger.as_ref();

        let (left, right) = tokio::join!(
            Self::dispatch(
                self.left.client.as_ref(),
                &mut self.left.session,
                left_key,
                notifier,
                logger,
                progress,
            ),
            Self::dispatch(
                self.right.client.as_ref(),
                &mut self.right.session,
                right_key,
                notifier,
                logger,
                progress,
            ),
        );

        let report = RoundReport { left, right };
        progress.on_round_complete(&report);
        SubmitOutcome::Completed(report)
    }

    /// Run one provider's request against its own session
    async fn dispatch(
        client: &dyn ChatProvider,
        session: &mut ConversationSession,
        api_key: &str,
        notifier: &dyn Notifier,
        logger: &dyn ConversationLogger,
        progress: &dyn ProgressNotifier,
    ) -> DispatchOutcome {
        let provider = session.provider();
        session.begin_dispatch();
        progress.on_dispatch_start(provider);
        debug!(
            "Dispatching to {} ({} messages of context)",
            provider,
            session.len()
        );

        match client.complete(api_key, session.messages()).await {
            Ok(reply) => {
                let reply = session.complete(reply);
                info!("{} replied ({} chars)", provider, reply.content().len());
                logger.log(ConversationEvent::assistant_reply(client.profile(), reply));
                progress.on_reply(provider, reply);
                DispatchOutcome {
                    provider,
                    error: None,
                }
            }
            Err(e) => {
                let error = e.to_string();
                warn!("{} failed: {}", provider, error);
                session.fail(error.clone());
                logger.log(ConversationEvent::provider_error(client.profile(), &error));
                progress.on_failure(provider, &error);
                notifier.notify(Notification::error(
                    format!("{} Error", provider.display_name()),
                    error.clone(),
                ));
                DispatchOutcome {
                    provider,
                    error: Some(error),
                }
            }
        }
    }
}
