//! Connector factory

use std::sync::Arc;

use super::confluence::ConfluenceDataSourceConnector;
use super::kms_lighthouse::KmsLighthouseConnector;
use super::s3::S3DataSourceConnector;
use super::share_point::SharePointDataSourceConnector;
use super::traits::DataSourceConnector;
use super::web_crawler::WebCrawlerDataSourceConnector;
use crate::domain::connector::{ConnectorConfig, ConnectorType};
use crate::infrastructure::bedrock_agent::BedrockAgentApi;

/// Any connector the factory can build
#[derive(Debug, Clone)]
pub enum Connector {
    S3(S3DataSourceConnector),
    WebCrawler(WebCrawlerDataSourceConnector),
    SharePoint(SharePointDataSourceConnector),
    Confluence(ConfluenceDataSourceConnector),
    KmsLighthouse(KmsLighthouseConnector),
}

impl Connector {
    pub fn connector_type(&self) -> ConnectorType {
        self.as_data_source_connector().connector_type()
    }

    /// Shared data source operations, whatever the kind
    pub fn as_data_source_connector(&self) -> &dyn DataSourceConnector {
        match self {
            Self::S3(c) => c,
            Self::WebCrawler(c) => c,
            Self::SharePoint(c) => c,
            Self::Confluence(c) => c,
            Self::KmsLighthouse(c) => c,
        }
    }

    pub fn as_s3(&self) -> Option<&S3DataSourceConnector> {
        match self {
            Self::S3(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_web_crawler(&self) -> Option<&WebCrawlerDataSourceConnector> {
        match self {
            Self::WebCrawler(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_share_point(&self) -> Option<&SharePointDataSourceConnector> {
        match self {
            Self::SharePoint(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_confluence(&self) -> Option<&ConfluenceDataSourceConnector> {
        match self {
            Self::Confluence(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_kms_lighthouse(&self) -> Option<&KmsLighthouseConnector> {
        match self {
            Self::KmsLighthouse(c) => Some(c),
            _ => None,
        }
    }
}

/// Factory for creating data source connectors
#[derive(Debug)]
pub struct ConnectorFactory;

impl ConnectorFactory {
    /// Connector with the default [`ConnectorConfig`]
    ///
    /// # Panics
    ///
    /// Panics when `connector_type` has no connector implementation.
    pub fn create_connector(
        connector_type: ConnectorType,
        client: Arc<dyn BedrockAgentApi>,
        knowledge_base_id: &str,
    ) -> Connector {
        Self::create_connector_with_config(
            connector_type,
            client,
            knowledge_base_id,
            ConnectorConfig::default(),
        )
    }

    /// # Panics
    ///
    /// Panics when `connector_type` has no connector implementation.
    pub fn create_connector_with_config(
        connector_type: ConnectorType,
        client: Arc<dyn BedrockAgentApi>,
        knowledge_base_id: &str,
        config: ConnectorConfig,
    ) -> Connector {
        tracing::debug!(
            connector = %connector_type,
            knowledge_base_id = %knowledge_base_id,
            "Creating connector"
        );

        match connector_type {
            ConnectorType::S3 => {
                Connector::S3(S3DataSourceConnector::new(client, knowledge_base_id, config))
            }
            ConnectorType::WebCrawler => Connector::WebCrawler(WebCrawlerDataSourceConnector::new(
                client,
                knowledge_base_id,
                config,
            )),
            ConnectorType::SharePoint => Connector::SharePoint(SharePointDataSourceConnector::new(
                client,
                knowledge_base_id,
                config,
            )),
            ConnectorType::Confluence => Connector::Confluence(ConfluenceDataSourceConnector::new(
                client,
                knowledge_base_id,
                config,
            )),
            ConnectorType::KmsLighthouse => Connector::KmsLighthouse(KmsLighthouseConnector::new(
                client,
                knowledge_base_id,
                config,
            )),
            ConnectorType::Salesforce => {
                panic!("Unsupported connector type: {}", connector_type)
            }
        }
    }

    pub fn available_types() -> &'static [ConnectorType] {
        ConnectorType::supported()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::bedrock_agent::mock::InMemoryBedrockAgent;

    fn client() -> Arc<dyn BedrockAgentApi> {
        Arc::new(InMemoryBedrockAgent::new())
    }

    #[test]
    fn test_creates_every_supported_type() {
        for connector_type in ConnectorFactory::available_types() {
            let connector = ConnectorFactory::create_connector(*connector_type, client(), "KB123");

            assert_eq!(connector.connector_type(), *connector_type);
            assert_eq!(
                connector.as_data_source_connector().knowledge_base_id(),
                "KB123"
            );
        }
    }

    #[test]
    fn test_typed_accessors() {
        let connector = ConnectorFactory::create_connector(ConnectorType::S3, client(), "KB123");
        assert!(connector.as_s3().is_some());
        assert!(connector.as_web_crawler().is_none());
        assert!(connector.as_kms_lighthouse().is_none());

        let connector =
            ConnectorFactory::create_connector(ConnectorType::KmsLighthouse, client(), "KB123");
        assert!(connector.as_kms_lighthouse().is_some());
        assert!(connector.as_share_point().is_none());
        assert!(connector.as_confluence().is_none());
    }

    #[test]
    fn test_custom_config_is_kept() {
        let connector = ConnectorFactory::create_connector_with_config(
            ConnectorType::Confluence,
            client(),
            "KB123",
            ConnectorConfig::default().with_max_results(100).with_validation(false),
        );

        let config = connector.as_data_source_connector().config();
        assert_eq!(config.max_results, 100);
        assert!(!config.enable_validation);
    }

    #[test]
    fn test_default_config() {
        let connector = ConnectorFactory::create_connector(ConnectorType::WebCrawler, client(), "KB");
        assert_eq!(
            connector.as_data_source_connector().config(),
            &ConnectorConfig::default()
        );
    }

    #[test]
    #[should_panic(expected = "Unsupported connector type")]
    fn test_unsupported_type_panics() {
        ConnectorFactory::create_connector(ConnectorType::Salesforce, client(), "KB123");
    }
}
