//! Confluence Cloud data source connector

use std::sync::Arc;

use super::base::{ensure_type, ConnectorBase};
use super::traits::DataSourceConnector;
use crate::domain::connector::{ConnectorConfig, ConnectorType};
use crate::domain::data_source::{
    ConfluenceAuthType, ConfluenceCrawlerConfiguration, ConfluenceDataSourceConfiguration,
    ConfluenceHostType, ConfluenceSourceConfiguration, CrawlFilterConfiguration,
    DataSourceConfiguration, DataSourceType,
};
use crate::domain::error::{ConnectorError, ConnectorResult};
use crate::infrastructure::bedrock_agent::BedrockAgentApi;

#[derive(Debug, Clone)]
pub struct ConfluenceDataSourceConnector {
    base: ConnectorBase,
}

impl ConfluenceDataSourceConnector {
    pub fn new(
        client: Arc<dyn BedrockAgentApi>,
        knowledge_base_id: impl Into<String>,
        config: ConnectorConfig,
    ) -> Self {
        Self {
            base: ConnectorBase::new(client, knowledge_base_id, config),
        }
    }

    /// Confluence Cloud instance with basic auth credentials stored in Secrets Manager
    pub fn create_confluence_configuration(
        &self,
        server_url: &str,
        secret_arn: &str,
    ) -> DataSourceConfiguration {
        DataSourceConfiguration::confluence(ConfluenceDataSourceConfiguration {
            source_configuration: Some(ConfluenceSourceConfiguration {
                host_url: server_url.to_string(),
                host_type: ConfluenceHostType::Saas,
                auth_type: ConfluenceAuthType::Basic,
                credentials_secret_arn: secret_arn.to_string(),
            }),
            crawler_configuration: Some(ConfluenceCrawlerConfiguration {
                filter_configuration: Some(CrawlFilterConfiguration::pattern()),
            }),
        })
    }
}

impl DataSourceConnector for ConfluenceDataSourceConnector {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::Confluence
    }

    fn base(&self) -> &ConnectorBase {
        &self.base
    }

    fn validate_configuration(&self, configuration: &DataSourceConfiguration) -> ConnectorResult<()> {
        ensure_type(configuration, DataSourceType::Confluence)?;

        if configuration
            .confluence_configuration
            .as_ref()
            .and_then(|c| c.source_configuration.as_ref())
            .is_none()
        {
            return Err(ConnectorError::validation("source configuration is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::bedrock_agent::mock::{Failure, InMemoryBedrockAgent};

    #[test]
    fn test_configuration() {
        let connector = ConfluenceDataSourceConnector::new(
            Arc::new(InMemoryBedrockAgent::new()),
            "KB123",
            ConnectorConfig::default(),
        );

        let configuration = connector.create_confluence_configuration(
            "https://example.atlassian.net",
            "arn:aws:secretsmanager:us-east-1:123456789012:secret:confluence",
        );
        let source = configuration
            .confluence_configuration
            .as_ref()
            .and_then(|c| c.source_configuration.as_ref())
            .unwrap();

        assert_eq!(configuration.data_source_type, DataSourceType::Confluence);
        assert_eq!(source.host_url, "https://example.atlassian.net");
        assert_eq!(source.host_type, ConfluenceHostType::Saas);
        assert_eq!(source.auth_type, ConfluenceAuthType::Basic);
        assert!(connector.validate_configuration(&configuration).is_ok());
    }

    #[test]
    fn test_validation_rejects_mismatched_types() {
        let connector = ConfluenceDataSourceConnector::new(
            Arc::new(InMemoryBedrockAgent::new()),
            "KB123",
            ConnectorConfig::default(),
        );

        for data_source_type in [
            DataSourceType::S3,
            DataSourceType::Web,
            DataSourceType::SharePoint,
            DataSourceType::Salesforce,
            DataSourceType::Custom,
        ] {
            assert!(connector
                .validate_configuration(&DataSourceConfiguration::empty(data_source_type))
                .is_err());
        }
        assert!(connector
            .validate_configuration(&DataSourceConfiguration::empty(DataSourceType::Confluence))
            .is_err());
    }

    #[tokio::test]
    async fn test_delete_not_found_keeps_kind() {
        let client =
            Arc::new(InMemoryBedrockAgent::new().with_failure("DeleteDataSource", Failure::NotFound));
        let connector = ConfluenceDataSourceConnector::new(client, "KB123", ConnectorConfig::default());

        let err = connector.delete_data_source("DS9").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(err
            .message()
            .starts_with("Failed to delete Confluence data source: DS9"));
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let client = Arc::new(InMemoryBedrockAgent::new().with_data_source("KB123", "DS1", "wiki"));
        let connector =
            ConfluenceDataSourceConnector::new(client.clone(), "KB123", ConnectorConfig::default());

        let deleted = connector.delete_data_source("DS1").await.unwrap();

        assert_eq!(deleted.data_source_id, "DS1");
        assert_eq!(deleted.status, "DELETING");
        assert!(!connector.data_source_exists("DS1").await.unwrap());
    }
}
