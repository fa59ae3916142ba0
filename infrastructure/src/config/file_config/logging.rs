//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Operational log file (tracing output, no ANSI colors)
    pub file: Option<String>,
    /// JSONL transcript of questions, replies and provider errors
    pub conversation_log: Option<String>,
}
