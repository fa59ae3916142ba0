//! Side-by-side snapshot of both sessions

use super::entities::ConversationSession;
use serde::{Deserialize, Serialize};

/// Both sessions at one point in time, left column first (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSnapshot {
    pub left: ConversationSession,
    pub right: ConversationSession,
}

impl ComparisonSnapshot {
    pub fn new(left: ConversationSession, right: ConversationSession) -> Self {
        Self { left, right }
    }

    /// Number of completed rounds where both sides have replied
    pub fn answered_rounds(&self) -> usize {
        let replies = |s: &ConversationSession| s.messages().iter().filter(|m| !m.is_user()).count();
        replies(&self.left).min(replies(&self.right))
    }
}
