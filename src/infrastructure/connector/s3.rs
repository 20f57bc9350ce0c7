//! S3 data source connector

use std::sync::Arc;

use super::base::{ensure_type, ConnectorBase};
use super::traits::DataSourceConnector;
use crate::domain::connector::{ConnectorConfig, ConnectorType};
use crate::domain::data_source::{DataSourceConfiguration, DataSourceType, S3SourceConfig};
use crate::domain::error::{ConnectorError, ConnectorResult};
use crate::infrastructure::bedrock_agent::BedrockAgentApi;

/// Connector for data sources backed by an S3 bucket
#[derive(Debug, Clone)]
pub struct S3DataSourceConnector {
    base: ConnectorBase,
}

impl S3DataSourceConnector {
    pub fn new(
        client: Arc<dyn BedrockAgentApi>,
        knowledge_base_id: impl Into<String>,
        config: ConnectorConfig,
    ) -> Self {
        Self {
            base: ConnectorBase::new(client, knowledge_base_id, config),
        }
    }

    pub fn create_s3_configuration(&self, source: &S3SourceConfig) -> DataSourceConfiguration {
        DataSourceConfiguration::s3(source.to_configuration())
    }

    /// Whole bucket, or only `prefix` when it is non-empty
    pub fn create_s3_configuration_with_prefix(
        &self,
        bucket_name: &str,
        prefix: &str,
    ) -> DataSourceConfiguration {
        self.create_s3_configuration(&S3SourceConfig::new(bucket_name).with_inclusion_prefix(prefix))
    }

    pub fn create_s3_configuration_with_prefixes(
        &self,
        bucket_name: &str,
        inclusion_prefixes: &[String],
        exclusion_prefixes: &[String],
    ) -> DataSourceConfiguration {
        self.create_s3_configuration(
            &S3SourceConfig::new(bucket_name)
                .with_inclusion_prefixes(inclusion_prefixes.iter().cloned())
                .with_exclusion_prefixes(exclusion_prefixes.iter().cloned()),
        )
    }
}

impl DataSourceConnector for S3DataSourceConnector {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::S3
    }

    fn base(&self) -> &ConnectorBase {
        &self.base
    }

    fn validate_configuration(&self, configuration: &DataSourceConfiguration) -> ConnectorResult<()> {
        ensure_type(configuration, DataSourceType::S3)?;

        match &configuration.s3_configuration {
            Some(s3) if s3.bucket_arn.is_empty() => {
                Err(ConnectorError::validation("bucket ARN is required"))
            }
            _ => Ok(()),
        }
    }
}
