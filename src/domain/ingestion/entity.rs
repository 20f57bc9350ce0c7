//! Ingestion job entities

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an ingestion job
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum IngestionJobStatus {
    Starting,
    InProgress,
    Complete,
    Failed,
    Stopping,
    Stopped,
    /// Status value this crate does not know yet
    Unknown(String),
}

impl IngestionJobStatus {
    /// Parse a service status value; matching is case-insensitive
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "STARTING" => Self::Starting,
            "IN_PROGRESS" => Self::InProgress,
            "COMPLETE" => Self::Complete,
            "FAILED" => Self::Failed,
            "STOPPING" => Self::Stopping,
            "STOPPED" => Self::Stopped,
            _ => Self::Unknown(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Starting => "STARTING",
            Self::InProgress => "IN_PROGRESS",
            Self::Complete => "COMPLETE",
            Self::Failed => "FAILED",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
            Self::Unknown(value) => value,
        }
    }

    /// The job will not change any more
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Failed | Self::Stopped)
    }
}

impl fmt::Display for IngestionJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for IngestionJobStatus {
    fn from(value: String) -> Self {
        Self::from_wire(&value)
    }
}

impl From<IngestionJobStatus> for String {
    fn from(status: IngestionJobStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Document counters reported for an ingestion job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IngestionJobStatistics {
    pub documents_scanned: u64,
    pub metadata_documents_scanned: u64,
    pub new_documents_indexed: u64,
    pub modified_documents_indexed: u64,
    pub metadata_documents_modified: u64,
    pub documents_deleted: u64,
    pub documents_failed: u64,
}

impl IngestionJobStatistics {
    /// New plus modified documents that made it into the index
    pub fn documents_indexed(&self) -> u64 {
        self.new_documents_indexed + self.modified_documents_indexed
    }
}

/// Ingestion job snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionJob {
    pub knowledge_base_id: String,
    pub data_source_id: String,
    pub ingestion_job_id: String,
    pub status: IngestionJobStatus,
    pub description: Option<String>,
    pub statistics: Option<IngestionJobStatistics>,
    #[serde(default)]
    pub failure_reasons: Vec<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Entry of an ingestion job listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionJobSummary {
    pub knowledge_base_id: String,
    pub data_source_id: String,
    pub ingestion_job_id: String,
    pub status: IngestionJobStatus,
    pub description: Option<String>,
    pub statistics: Option<IngestionJobStatistics>,
    pub started_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartIngestionJobRequest {
    pub knowledge_base_id: String,
    pub data_source_id: String,
    /// Idempotency key
    pub client_token: Option<String>,
    pub description: Option<String>,
}

impl StartIngestionJobRequest {
    pub fn new(knowledge_base_id: impl Into<String>, data_source_id: impl Into<String>) -> Self {
        Self {
            knowledge_base_id: knowledge_base_id.into(),
            data_source_id: data_source_id.into(),
            client_token: None,
            description: None,
        }
    }

    pub fn with_client_token(mut self, client_token: impl Into<String>) -> Self {
        self.client_token = Some(client_token.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            IngestionJobStatus::from_wire("IN_PROGRESS"),
            IngestionJobStatus::InProgress
        );
        assert_eq!(
            IngestionJobStatus::from_wire("complete"),
            IngestionJobStatus::Complete
        );
        assert_eq!(
            IngestionJobStatus::from_wire("PAUSED"),
            IngestionJobStatus::Unknown("PAUSED".to_string())
        );
        assert_eq!(IngestionJobStatus::Unknown("PAUSED".to_string()).as_str(), "PAUSED");
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(IngestionJobStatus::Complete.is_terminal());
        assert!(IngestionJobStatus::Failed.is_terminal());
        assert!(IngestionJobStatus::Stopped.is_terminal());
        assert!(!IngestionJobStatus::Stopping.is_terminal());
        assert!(!IngestionJobStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_status_serializes_as_wire_name() {
        let json = serde_json::to_value(IngestionJobStatus::InProgress).unwrap();
        assert_eq!(json, "IN_PROGRESS");

        let parsed: IngestionJobStatus = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, IngestionJobStatus::InProgress);
    }

    #[test]
    fn test_documents_indexed() {
        let statistics = IngestionJobStatistics {
            new_documents_indexed: 7,
            modified_documents_indexed: 3,
            ..Default::default()
        };
        assert_eq!(statistics.documents_indexed(), 10);
    }
}
