//! SharePoint Online data source connector

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use super::base::{ensure_type, ConnectorBase};
use super::traits::DataSourceConnector;
use crate::domain::connector::{ConnectorConfig, ConnectorType};
use crate::domain::data_source::{
    CrawlFilterConfiguration, DataSourceConfiguration, DataSourceType, SharePointAuthType,
    SharePointCrawlerConfiguration, SharePointDataSourceConfiguration, SharePointHostType,
    SharePointSourceConfiguration,
};
use crate::domain::error::{ConnectorError, ConnectorResult};
use crate::infrastructure::bedrock_agent::BedrockAgentApi;

/// Host part of a site URL; the first label of a `*.sharepoint.com` host is the tenant domain
static SITE_HOST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(?:https?://)?(?P<host>[^/:?#]+)").unwrap()
});

static SHAREPOINT_HOST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)(?P<tenant>[^.]+)\.sharepoint\.com$").unwrap());

/// Tenant domain for a SharePoint site URL
///
/// `https://contoso.sharepoint.com/sites/docs` yields `contoso`; hosts outside
/// `sharepoint.com` are returned whole.
pub fn share_point_domain(site_url: &str) -> Option<String> {
    let host = SITE_HOST_PATTERN
        .captures(site_url.trim())
        .and_then(|caps| caps.name("host"))?
        .as_str();

    match SHAREPOINT_HOST_PATTERN.captures(host) {
        Some(caps) => caps.name("tenant").map(|m| m.as_str().to_string()),
        None => Some(host.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct SharePointDataSourceConnector {
    base: ConnectorBase,
}

impl SharePointDataSourceConnector {
    pub fn new(
        client: Arc<dyn BedrockAgentApi>,
        knowledge_base_id: impl Into<String>,
        config: ConnectorConfig,
    ) -> Self {
        Self {
            base: ConnectorBase::new(client, knowledge_base_id, config),
        }
    }

    /// SharePoint Online site crawled with OAuth2 client credentials
    ///
    /// The credentials secret must hold the client id and secret of an app
    /// registered in `tenant_id`.
    pub fn create_share_point_configuration(
        &self,
        site_url: &str,
        tenant_id: &str,
        secret_arn: &str,
    ) -> DataSourceConfiguration {
        let domain = share_point_domain(site_url).unwrap_or_default();

        DataSourceConfiguration::share_point(SharePointDataSourceConfiguration {
            source_configuration: Some(SharePointSourceConfiguration {
                domain,
                site_urls: vec![site_url.to_string()],
                tenant_id: Some(tenant_id.to_string()).filter(|t| !t.is_empty()),
                host_type: SharePointHostType::Online,
                auth_type: SharePointAuthType::OAuth2ClientCredentials,
                credentials_secret_arn: secret_arn.to_string(),
            }),
            crawler_configuration: Some(SharePointCrawlerConfiguration {
                filter_configuration: Some(CrawlFilterConfiguration::pattern()),
            }),
        })
    }
}

impl DataSourceConnector for SharePointDataSourceConnector {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::SharePoint
    }

    fn base(&self) -> &ConnectorBase {
        &self.base
    }

    fn validate_configuration(&self, configuration: &DataSourceConfiguration) -> ConnectorResult<()> {
        ensure_type(configuration, DataSourceType::SharePoint)?;

        configuration
            .share_point_configuration
            .as_ref()
            .and_then(|sp| sp.source_configuration.as_ref())
            .map(|_| ())
            .ok_or_else(|| ConnectorError::validation("source configuration is required"))
    }
}
