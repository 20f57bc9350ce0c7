//! Derived ingestion statistics

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{IngestionJob, IngestionJobStatistics, IngestionJobStatus};

/// Summary figures computed from an ingestion job snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionStats {
    pub job_id: String,
    pub status: IngestionJobStatus,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub statistics: Option<IngestionJobStatistics>,
    pub documents_processed: u64,
    pub documents_successful: u64,
    pub documents_failed: u64,
    /// Documents per second over the job's wall time
    pub processing_rate: f64,
}

impl IngestionStats {
    pub fn from_job(job: &IngestionJob) -> Self {
        let statistics = job.statistics.unwrap_or_default();

        let mut stats = Self {
            job_id: job.ingestion_job_id.clone(),
            status: job.status.clone(),
            start_time: job.started_at,
            end_time: job.updated_at,
            statistics: job.statistics,
            documents_processed: statistics.documents_scanned,
            documents_successful: statistics.documents_indexed(),
            documents_failed: statistics.documents_failed,
            processing_rate: 0.0,
        };

        let duration = stats.processing_duration_seconds();
        if duration > 0 {
            stats.processing_rate = stats.documents_processed as f64 / duration as f64;
        }

        stats
    }

    /// Whole seconds between start and end, 0 when either is missing
    pub fn processing_duration_seconds(&self) -> i64 {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.timestamp() - start.timestamp(),
            _ => 0,
        }
    }

    /// Percentage of processed documents that were indexed
    pub fn success_rate(&self) -> f64 {
        if self.documents_processed == 0 {
            return 0.0;
        }
        self.documents_successful as f64 / self.documents_processed as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_successful(&self) -> bool {
        self.status == IngestionJobStatus::Complete
    }
}

impl fmt::Display for IngestionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IngestionStats{{jobId={}, status={}, processed={}, successful={}, failed={}, successRate={:.2}%}}",
            self.job_id,
            self.status,
            self.documents_processed,
            self.documents_successful,
            self.documents_failed,
            self.success_rate()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn job(status: IngestionJobStatus, statistics: Option<IngestionJobStatistics>) -> IngestionJob {
        IngestionJob {
            knowledge_base_id: "KB123".to_string(),
            data_source_id: "DS456".to_string(),
            ingestion_job_id: "JOB789".to_string(),
            status,
            description: None,
            statistics,
            failure_reasons: Vec::new(),
            started_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 50).unwrap()),
        }
    }

    #[test]
    fn test_from_job() {
        let statistics = IngestionJobStatistics {
            documents_scanned: 100,
            new_documents_indexed: 80,
            modified_documents_indexed: 10,
            documents_failed: 10,
            ..Default::default()
        };

        let stats = IngestionStats::from_job(&job(IngestionJobStatus::Complete, Some(statistics)));

        assert_eq!(stats.job_id, "JOB789");
        assert_eq!(stats.documents_processed, 100);
        assert_eq!(stats.documents_successful, 90);
        assert_eq!(stats.documents_failed, 10);
        assert_eq!(stats.processing_duration_seconds(), 50);
        assert!((stats.processing_rate - 2.0).abs() < f64::EPSILON);
        assert!((stats.success_rate() - 90.0).abs() < f64::EPSILON);
        assert!(stats.is_complete());
        assert!(stats.is_successful());
    }

    #[test]
    fn test_no_statistics_yet() {
        let stats = IngestionStats::from_job(&job(IngestionJobStatus::InProgress, None));

        assert_eq!(stats.documents_processed, 0);
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(stats.processing_rate, 0.0);
        assert!(!stats.is_complete());
        assert!(!stats.is_successful());
    }

    #[test]
    fn test_failed_job_is_complete_but_not_successful() {
        let stats = IngestionStats::from_job(&job(IngestionJobStatus::Failed, None));
        assert!(stats.is_complete());
        assert!(!stats.is_successful());
    }

    #[test]
    fn test_missing_timestamps() {
        let mut snapshot = job(IngestionJobStatus::Starting, None);
        snapshot.updated_at = None;

        let stats = IngestionStats::from_job(&snapshot);
        assert_eq!(stats.processing_duration_seconds(), 0);
    }

    #[test]
    fn test_display() {
        let statistics = IngestionJobStatistics {
            documents_scanned: 4,
            new_documents_indexed: 3,
            documents_failed: 1,
            ..Default::default()
        };
        let stats = IngestionStats::from_job(&job(IngestionJobStatus::Complete, Some(statistics)));

        assert_eq!(
            stats.to_string(),
            "IngestionStats{jobId=JOB789, status=COMPLETE, processed=4, successful=3, failed=1, successRate=75.00%}"
        );
    }
}
