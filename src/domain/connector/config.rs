//! Connector configuration

use serde::{Deserialize, Serialize};

/// Settings shared by every data source connector
///
/// `retry_attempts` and `retry_delay_ms` are carried for callers that want to
/// drive their own retries; connectors issue each remote call exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Page size for list operations
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Run shallow configuration checks before create/update calls
    #[serde(default = "default_true")]
    pub enable_validation: bool,
}

fn default_max_results() -> u32 {
    50
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            enable_validation: default_true(),
        }
    }
}

impl ConnectorConfig {
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_retry_attempts(mut self, retry_attempts: u32) -> Self {
        self.retry_attempts = retry_attempts;
        self
    }

    pub fn with_retry_delay_ms(mut self, retry_delay_ms: u64) -> Self {
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    pub fn with_validation(mut self, enable_validation: bool) -> Self {
        self.enable_validation = enable_validation;
        self
    }
}
