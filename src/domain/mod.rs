//! Domain layer - connector settings, service entities and errors

pub mod connector;
pub mod data_source;
pub mod error;
pub mod ingestion;
pub mod knowledge_base;
pub mod lighthouse;

pub use connector::{ConnectorConfig, ConnectorType};
pub use data_source::{
    CreateDataSourceRequest, DataSource, DataSourceConfiguration, DataSourceSummary,
    DataSourceType, DeletedDataSource, S3SourceConfig, UpdateDataSourceRequest,
};
pub use error::{ConnectorError, ConnectorResult};
pub use ingestion::{
    IngestionJob, IngestionJobStatistics, IngestionJobStatus, IngestionJobSummary,
    IngestionOptions, IngestionStats, StartIngestionJobRequest,
};
pub use knowledge_base::{
    CreateKnowledgeBaseRequest, DeletedKnowledgeBase, KnowledgeBase, KnowledgeBaseConfiguration,
    KnowledgeBaseSummary, StorageConfiguration,
};
pub use lighthouse::{KmsAuthentication, KmsAuthenticationConfig, KmsLighthouseConfig};
