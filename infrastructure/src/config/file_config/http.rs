//! HTTP transport configuration from TOML (`[http]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Overall request deadline; unset keeps the transport default
    pub request_timeout_seconds: Option<u64>,
}

impl FileHttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}
