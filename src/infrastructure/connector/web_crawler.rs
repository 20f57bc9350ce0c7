//! Web crawler data source connector

use std::sync::Arc;

use super::base::{ensure_type, ConnectorBase};
use super::traits::DataSourceConnector;
use crate::domain::connector::{ConnectorConfig, ConnectorType};
use crate::domain::data_source::{
    DataSourceConfiguration, DataSourceType, UrlConfiguration, WebCrawlerConfiguration,
    WebCrawlerLimits, WebDataSourceConfiguration, WebScopeType, WebSourceConfiguration,
};
use crate::domain::error::{ConnectorError, ConnectorResult};
use crate::infrastructure::bedrock_agent::BedrockAgentApi;

/// Pages fetched per minute when no limit is given
pub const DEFAULT_CRAWL_RATE_LIMIT: u32 = 100;

#[derive(Debug, Clone)]
pub struct WebCrawlerDataSourceConnector {
    base: ConnectorBase,
}

impl WebCrawlerDataSourceConnector {
    pub fn new(
        client: Arc<dyn BedrockAgentApi>,
        knowledge_base_id: impl Into<String>,
        config: ConnectorConfig,
    ) -> Self {
        Self {
            base: ConnectorBase::new(client, knowledge_base_id, config),
        }
    }

    /// Crawl from a single seed URL at the default rate
    pub fn create_web_crawler_configuration(&self, start_url: &str) -> DataSourceConfiguration {
        self.create_web_crawler_configuration_with(
            vec![start_url.to_string()],
            Vec::new(),
            Vec::new(),
            DEFAULT_CRAWL_RATE_LIMIT,
            None,
        )
    }

    pub fn create_web_crawler_configuration_with(
        &self,
        seed_urls: Vec<String>,
        inclusion_filters: Vec<String>,
        exclusion_filters: Vec<String>,
        rate_limit: u32,
        scope: Option<WebScopeType>,
    ) -> DataSourceConfiguration {
        web_configuration(seed_urls, inclusion_filters, exclusion_filters, rate_limit, scope)
    }
}

/// Web payload shared with the KMS Lighthouse connector
pub(crate) fn web_configuration(
    seed_urls: Vec<String>,
    inclusion_filters: Vec<String>,
    exclusion_filters: Vec<String>,
    rate_limit: u32,
    scope: Option<WebScopeType>,
) -> DataSourceConfiguration {
    DataSourceConfiguration::web(WebDataSourceConfiguration {
        source_configuration: Some(WebSourceConfiguration {
            url_configuration: Some(UrlConfiguration { seed_urls }),
        }),
        crawler_configuration: Some(WebCrawlerConfiguration {
            crawler_limits: Some(WebCrawlerLimits {
                rate_limit: Some(rate_limit),
            }),
            inclusion_filters,
            exclusion_filters,
            scope,
        }),
    })
}

/// Web payload must carry a URL configuration
pub(crate) fn validate_web_configuration(
    configuration: &DataSourceConfiguration,
) -> ConnectorResult<()> {
    ensure_type(configuration, DataSourceType::Web)?;

    let has_urls = configuration
        .web_configuration
        .as_ref()
        .and_then(|web| web.source_configuration.as_ref())
        .and_then(|source| source.url_configuration.as_ref())
        .is_some();

    if has_urls {
        Ok(())
    } else {
        Err(ConnectorError::validation("URL configuration is required"))
    }
}

impl DataSourceConnector for WebCrawlerDataSourceConnector {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::WebCrawler
    }

    fn base(&self) -> &ConnectorBase {
        &self.base
    }

    fn validate_configuration(&self, configuration: &DataSourceConfiguration) -> ConnectorResult<()> {
        validate_web_configuration(configuration)
    }
}
