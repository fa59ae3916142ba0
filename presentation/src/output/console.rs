//! Console output formatter for comparison rounds
//!
//! Lays the two sessions out as side-by-side columns (or one after the
//! other) with display-width aware wrapping, so CJK text and emoji stay
//! aligned.

use crate::config::OutputConfig;
use crate::output::formatter::OutputFormatter;
use battle_domain::{ComparisonSnapshot, ConversationSession, Message, OutputFormat};
use chrono::{DateTime, Local, TimeZone, Utc};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const GUTTER: &str = " │ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Dim,
    Heading,
    You,
    Bot,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    tone: Tone,
}

impl Line {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    fn blank() -> Self {
        Self::new("", Tone::Plain)
    }
}

/// Formats both conversations for console display
pub struct ConsoleFormatter {
    config: OutputConfig,
}

impl ConsoleFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    fn render(&self, snapshot: &ComparisonSnapshot, latest_only: bool) -> String {
        match self.config.format {
            OutputFormat::Columns => self.columns(snapshot, latest_only),
            OutputFormat::Stacked => self.stacked(snapshot, latest_only),
            OutputFormat::Json => Self::json(snapshot),
        }
    }

    fn json(snapshot: &ComparisonSnapshot) -> String {
        serde_json::to_string_pretty(snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    fn columns(&self, snapshot: &ComparisonSnapshot, latest_only: bool) -> String {
        let width = self.config.width.max(OutputConfig::MIN_WIDTH);
        let column = (width - GUTTER.width()) / 2;

        let left = Self::column_lines(&snapshot.left, column, latest_only);
        let right = Self::column_lines(&snapshot.right, column, latest_only);

        let mut output = String::new();
        for i in 0..left.len().max(right.len()) {
            let l = left.get(i).cloned().unwrap_or_else(Line::blank);
            let r = right.get(i).cloned().unwrap_or_else(Line::blank);
            let row = format!(
                "{}{}{}",
                paint(&pad(&l.text, column), l.tone),
                GUTTER.dimmed(),
                paint(&r.text, r.tone)
            );
            output.push_str(row.trim_end());
            output.push('\n');
        }
        output
    }

    fn stacked(&self, snapshot: &ComparisonSnapshot, latest_only: bool) -> String {
        let width = self.config.width.max(OutputConfig::MIN_WIDTH);
        let mut output = String::new();
        for session in [&snapshot.left, &snapshot.right] {
            for line in Self::column_lines(session, width, latest_only) {
                output.push_str(&paint(&line.text, line.tone));
                output.push('\n');
            }
        }
        output
    }

    /// Heading, messages and status of one session, wrapped to `width`
    fn column_lines(session: &ConversationSession, width: usize, latest_only: bool) -> Vec<Line> {
        let name = session.provider().display_name();
        let mut lines = vec![
            Line::new(name, Tone::Heading),
            Line::new("─".repeat(width), Tone::Dim),
        ];

        if session.is_empty() {
            let hint = format!("Ask a question to start chatting with {}", name);
            lines.extend(wrap(&hint, width).into_iter().map(|t| Line::new(t, Tone::Dim)));
        }

        let messages = session.messages();
        let start = if latest_only {
            messages.iter().rposition(Message::is_user).unwrap_or(0)
        } else {
            0
        };

        for message in &messages[start..] {
            let (marker, tone) = if message.is_user() {
                ("you", Tone::You)
            } else {
                ("bot", Tone::Bot)
            };
            lines.push(Line::new(
                format!("{} · {}", marker, Self::clock(message.timestamp())),
                tone,
            ));
            lines.extend(
                wrap(message.content(), width)
                    .into_iter()
                    .map(|t| Line::new(t, Tone::Plain)),
            );
            lines.push(Line::blank());
        }

        if session.is_loading() {
            lines.push(Line::new("... waiting for reply", Tone::Dim));
        }

        if let Some(error) = session.error() {
            let text = format!("Error: {}", error);
            lines.extend(wrap(&text, width).into_iter().map(|t| Line::new(t, Tone::Error)));
        }

        lines
    }

    /// `h:mm AM/PM` in the local timezone
    pub fn clock(timestamp: DateTime<Utc>) -> String {
        Self::clock_in(&timestamp.with_timezone(&Local))
    }

    fn clock_in<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        timestamp.format("%-I:%M %p").to_string()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, snapshot: &ComparisonSnapshot) -> String {
        self.render(snapshot, false)
    }

    fn format_latest(&self, snapshot: &ComparisonSnapshot) -> String {
        self.render(snapshot, true)
    }

    fn format_json(&self, snapshot: &ComparisonSnapshot) -> String {
        Self::json(snapshot)
    }
}

fn paint(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Dim => text.dimmed().to_string(),
        Tone::Heading => text.cyan().bold().to_string(),
        Tone::You => text.yellow().bold().to_string(),
        Tone::Bot => text.green().bold().to_string(),
        Tone::Error => text.red().to_string(),
    }
}

/// Right-pad `text` with spaces to `width` display columns
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Greedy word wrap by display width; explicit line breaks are kept
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let raw = raw.trim_end_matches('\r');
        let mut current = String::new();
        let mut current_width = 0;

        for word in raw.split(' ') {
            let word_width = word.width();
            let needed = if current.is_empty() {
                word_width
            } else {
                word_width + 1
            };

            if current_width + needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += needed;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            // Words wider than a whole line are split by character
            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += w;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_domain::Provider;

    fn formatter(format: OutputFormat, width: usize) -> ConsoleFormatter {
        colored::control::set_override(false);
        ConsoleFormatter::new(OutputConfig {
            format,
            color: false,
            width,
        })
    }

    fn answered_snapshot() -> ComparisonSnapshot {
        let mut left = ConversationSession::new(Provider::OpenAi);
        let mut right = ConversationSession::new(Provider::Perplexity);
        let question = Message::user("What is 2+2?");
        left.push_user(&question);
        right.push_user(&question);
        left.complete("4");
        right.begin_dispatch();
        right.fail("Invalid API key");
        ComparisonSnapshot::new(left, right)
    }

    #[test]
    fn test_wrap_respects_width() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_keeps_line_breaks() {
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_counts_display_width() {
        // Each CJK character is two columns wide
        assert_eq!(wrap("日本語です", 4), vec!["日本", "語で", "す"]);
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("日本", 6).width(), 6);
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_clock_format() {
        let afternoon = Utc.with_ymd_and_hms(2024, 3, 9, 15, 4, 0).unwrap();
        assert_eq!(ConsoleFormatter::clock_in(&afternoon), "3:04 PM");
        let morning = Utc.with_ymd_and_hms(2024, 3, 9, 0, 30, 0).unwrap();
        assert_eq!(ConsoleFormatter::clock_in(&morning), "12:30 AM");
    }

    #[test]
    fn test_empty_sessions_show_hint() {
        let snapshot = ComparisonSnapshot::new(
            ConversationSession::new(Provider::OpenAi),
            ConversationSession::new(Provider::Perplexity),
        );
        let output = formatter(OutputFormat::Stacked, 80).format(&snapshot);
        assert!(output.contains("Ask a question to start chatting with OpenAI"));
        assert!(output.contains("Ask a question to start chatting with Perplexity"));
    }

    #[test]
    fn test_columns_put_providers_side_by_side() {
        let output = formatter(OutputFormat::Columns, 80).format(&answered_snapshot());
        let first = output.lines().next().unwrap();
        assert!(first.starts_with("OpenAI"));
        assert!(first.contains("│ Perplexity"));
        assert!(output.contains("Error: Invalid API key"));
        assert!(output.lines().all(|l| l.width() <= 80));
    }

    #[test]
    fn test_markers_and_content() {
        let output = formatter(OutputFormat::Stacked, 80).format(&answered_snapshot());
        assert_eq!(output.matches("you · ").count(), 2);
        assert_eq!(output.matches("bot · ").count(), 1);
        assert!(output.contains("What is 2+2?"));
    }

    #[test]
    fn test_loading_session_shows_waiting_line() {
        let mut left = ConversationSession::new(Provider::OpenAi);
        left.push_user(&Message::user("hi"));
        left.begin_dispatch();
        let snapshot = ComparisonSnapshot::new(left, ConversationSession::new(Provider::Perplexity));
        let output = formatter(OutputFormat::Stacked, 80).format(&snapshot);
        assert!(output.contains("waiting for reply"));
    }

    #[test]
    fn test_format_latest_skips_earlier_rounds() {
        let mut snapshot = answered_snapshot();
        let follow_up = Message::user("And 3+3?");
        snapshot.left.push_user(&follow_up);
        snapshot.left.complete("6");
        snapshot.right.push_user(&follow_up);

        let fmt = formatter(OutputFormat::Stacked, 80);
        let latest = fmt.format_latest(&snapshot);
        assert!(latest.contains("And 3+3?"));
        assert!(!latest.contains("What is 2+2?"));
        assert!(fmt.format(&snapshot).contains("What is 2+2?"));
    }

    #[test]
    fn test_json_format() {
        let output = formatter(OutputFormat::Json, 80).format(&answered_snapshot());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["left"]["messages"].as_array().unwrap().len(), 2);
        assert_eq!(value["right"]["error"], "Invalid API key");
    }
}
