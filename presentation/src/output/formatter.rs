//! Output formatter trait

use battle_domain::ComparisonSnapshot;

/// Trait for rendering both conversations
pub trait OutputFormatter {
    /// Render every message of both sessions
    fn format(&self, snapshot: &ComparisonSnapshot) -> String;

    /// Render only the most recent round (last question onwards)
    fn format_latest(&self, snapshot: &ComparisonSnapshot) -> String;

    /// Format as JSON
    fn format_json(&self, snapshot: &ComparisonSnapshot) -> String;
}
