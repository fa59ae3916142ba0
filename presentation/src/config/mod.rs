//! Presentation-level configuration
//!
//! Resolved settings for output formatting and REPL behavior, built by the
//! binary from the file config and command-line flags.

use battle_domain::OutputFormat;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Total width available for the column layout
    pub width: usize,
}

impl OutputConfig {
    pub const MIN_WIDTH: usize = 40;
    const FALLBACK_WIDTH: usize = 100;

    /// Width of the attached terminal
    ///
    /// `$COLUMNS` overrides the detected size; piped output gets a fixed width.
    pub fn terminal_width() -> usize {
        let detected = if std::io::stdout().is_terminal() {
            crossterm::terminal::size().ok().map(|(cols, _rows)| cols)
        } else {
            None
        };
        Self::resolve_width(std::env::var("COLUMNS").ok().as_deref(), detected)
    }

    fn resolve_width(columns_override: Option<&str>, detected: Option<u16>) -> usize {
        columns_override
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|w| *w > 0)
            .or(detected.filter(|c| *c > 0).map(usize::from))
            .unwrap_or(Self::FALLBACK_WIDTH)
            .max(Self::MIN_WIDTH)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            width: Self::FALLBACK_WIDTH,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show per-provider spinners while waiting
    pub show_progress: bool,
    /// Path to history file; `None` uses the platform data directory
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    /// Build from the raw `history_file` setting, expanding a leading `~/`
    pub fn new(show_progress: bool, history_file: Option<&str>) -> Self {
        Self {
            show_progress,
            history_file: history_file.map(expand_home),
        }
    }

    /// The history file to use, if any location is available
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("search-battle").join("history.txt")))
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}
