//! Ingestion options

use serde::{Deserialize, Serialize};

/// Options for starting an ingestion run
///
/// Only `client_token` reaches the service. Monitoring and parallelism flags
/// shape the log output; the remaining fields are carried for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionOptions {
    pub client_token: Option<String>,
    pub monitoring_enabled: bool,
    pub batch_size: u32,
    pub enable_parallel_processing: bool,
    pub notification_topic_arn: Option<String>,
    pub extract_metadata: bool,
    pub retry_attempts: u32,
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            client_token: None,
            monitoring_enabled: true,
            batch_size: 100,
            enable_parallel_processing: true,
            notification_topic_arn: None,
            extract_metadata: true,
            retry_attempts: 3,
        }
    }
}

impl IngestionOptions {
    pub fn with_client_token(mut self, client_token: impl Into<String>) -> Self {
        self.client_token = Some(client_token.into());
        self
    }

    pub fn with_monitoring(mut self, enabled: bool) -> Self {
        self.monitoring_enabled = enabled;
        self
    }

    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_parallel_processing(mut self, enabled: bool) -> Self {
        self.enable_parallel_processing = enabled;
        self
    }

    pub fn with_notification_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.notification_topic_arn = Some(topic_arn.into());
        self
    }

    pub fn with_metadata_extraction(mut self, enabled: bool) -> Self {
        self.extract_metadata = enabled;
        self
    }

    pub fn with_retry_attempts(mut self, retry_attempts: u32) -> Self {
        self.retry_attempts = retry_attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = IngestionOptions::default();

        assert!(options.client_token.is_none());
        assert!(options.monitoring_enabled);
        assert_eq!(options.batch_size, 100);
        assert!(options.enable_parallel_processing);
        assert!(options.extract_metadata);
        assert_eq!(options.retry_attempts, 3);
    }

    #[test]
    fn test_setters() {
        let options = IngestionOptions::default()
            .with_client_token("secure-ingestion-1")
            .with_batch_size(10)
            .with_parallel_processing(false)
            .with_notification_topic_arn("arn:aws:sns:us-east-1:123456789012:ingest");

        assert_eq!(options.client_token.as_deref(), Some("secure-ingestion-1"));
        assert_eq!(options.batch_size, 10);
        assert!(!options.enable_parallel_processing);
        assert!(options.notification_topic_arn.is_some());
    }
}
