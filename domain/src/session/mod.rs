//! Conversation session domain.
//!
//! - [`entities::ConversationSession`]: one provider's history plus loading/error flags
//! - [`entities::Message`]: a single immutable message within a session
//! - [`snapshot::ComparisonSnapshot`]: both sessions side by side, for export

pub mod entities;
pub mod snapshot;
