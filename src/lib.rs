//! Knowledge base data source connectors
//!
//! Manages Amazon Bedrock knowledge bases and their data sources:
//! - S3, web crawler, SharePoint and Confluence connectors
//! - KMS Lighthouse repositories crawled as web data sources
//! - Ingestion jobs and derived ingestion statistics
//! - Knowledge base creation with OpenSearch Serverless storage

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{ConnectorConfig, ConnectorError, ConnectorResult, ConnectorType};
pub use infrastructure::{
    BedrockAgentApi, BedrockAgentClient, Connector, ConnectorFactory, DataSourceConnector,
    KnowledgeBaseManager,
};
