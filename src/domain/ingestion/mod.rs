//! Ingestion jobs, options and derived statistics

mod entity;
mod options;
mod stats;

pub use entity::{
    IngestionJob, IngestionJobStatistics, IngestionJobStatus, IngestionJobSummary,
    StartIngestionJobRequest,
};
pub use options::IngestionOptions;
pub use stats::IngestionStats;
