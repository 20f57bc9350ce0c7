//! Data source configuration tree
//!
//! Mirrors the shape the Bedrock Agent service expects: a type tag plus one
//! optional payload per data source kind. The constructors on
//! [`DataSourceConfiguration`] always keep tag and payload consistent; values
//! assembled by hand are checked by the connectors before they are sent.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Data source type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSourceType {
    S3,
    Web,
    Confluence,
    #[serde(rename = "SHAREPOINT")]
    SharePoint,
    Salesforce,
    Custom,
}

impl DataSourceType {
    /// Service wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S3 => "S3",
            Self::Web => "WEB",
            Self::Confluence => "CONFLUENCE",
            Self::SharePoint => "SHAREPOINT",
            Self::Salesforce => "SALESFORCE",
            Self::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for DataSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level data source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceConfiguration {
    pub data_source_type: DataSourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_configuration: Option<S3DataSourceConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_configuration: Option<WebDataSourceConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_point_configuration: Option<SharePointDataSourceConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confluence_configuration: Option<ConfluenceDataSourceConfiguration>,
}

impl DataSourceConfiguration {
    /// Tag without any payload
    pub fn empty(data_source_type: DataSourceType) -> Self {
        Self {
            data_source_type,
            s3_configuration: None,
            web_configuration: None,
            share_point_configuration: None,
            confluence_configuration: None,
        }
    }

    pub fn s3(configuration: S3DataSourceConfiguration) -> Self {
        Self {
            s3_configuration: Some(configuration),
            ..Self::empty(DataSourceType::S3)
        }
    }

    pub fn web(configuration: WebDataSourceConfiguration) -> Self {
        Self {
            web_configuration: Some(configuration),
            ..Self::empty(DataSourceType::Web)
        }
    }

    pub fn share_point(configuration: SharePointDataSourceConfiguration) -> Self {
        Self {
            share_point_configuration: Some(configuration),
            ..Self::empty(DataSourceType::SharePoint)
        }
    }

    pub fn confluence(configuration: ConfluenceDataSourceConfiguration) -> Self {
        Self {
            confluence_configuration: Some(configuration),
            ..Self::empty(DataSourceType::Confluence)
        }
    }

    /// Whether the payload for the declared type tag is the only one populated
    pub fn payload_matches_type(&self) -> bool {
        let populated = [
            (DataSourceType::S3, self.s3_configuration.is_some()),
            (DataSourceType::Web, self.web_configuration.is_some()),
            (DataSourceType::SharePoint, self.share_point_configuration.is_some()),
            (DataSourceType::Confluence, self.confluence_configuration.is_some()),
        ];

        populated.iter().any(|(kind, set)| *set && *kind == self.data_source_type)
            && populated.iter().filter(|(_, set)| *set).count() == 1
    }
}

/// S3 bucket data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3DataSourceConfiguration {
    pub bucket_arn: String,
    #[serde(default)]
    pub inclusion_prefixes: Vec<String>,
    /// Not part of the service's S3 configuration; dropped when sent
    #[serde(default)]
    pub exclusion_prefixes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_owner_account_id: Option<String>,
}

/// Web crawler data source
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WebDataSourceConfiguration {
    pub source_configuration: Option<WebSourceConfiguration>,
    pub crawler_configuration: Option<WebCrawlerConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebSourceConfiguration {
    pub url_configuration: Option<UrlConfiguration>,
}

/// Seed URLs the crawler starts from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UrlConfiguration {
    pub seed_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebCrawlerConfiguration {
    pub crawler_limits: Option<WebCrawlerLimits>,
    /// Regex patterns a URL must match to be crawled
    #[serde(default)]
    pub inclusion_filters: Vec<String>,
    /// Regex patterns that exclude a URL from crawling
    #[serde(default)]
    pub exclusion_filters: Vec<String>,
    pub scope: Option<WebScopeType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebCrawlerLimits {
    /// Maximum pages crawled per minute per host
    pub rate_limit: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebScopeType {
    HostOnly,
    Subdomains,
}

impl WebScopeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HostOnly => "HOST_ONLY",
            Self::Subdomains => "SUBDOMAINS",
        }
    }
}

/// SharePoint data source
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SharePointDataSourceConfiguration {
    pub source_configuration: Option<SharePointSourceConfiguration>,
    pub crawler_configuration: Option<SharePointCrawlerConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePointSourceConfiguration {
    /// Tenant domain, e.g. `contoso` for `contoso.sharepoint.com`
    pub domain: String,
    pub site_urls: Vec<String>,
    pub tenant_id: Option<String>,
    pub host_type: SharePointHostType,
    pub auth_type: SharePointAuthType,
    /// Secrets Manager ARN holding the SharePoint credentials
    pub credentials_secret_arn: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SharePointHostType {
    Online,
}

impl SharePointHostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharePointAuthType {
    #[serde(rename = "OAUTH2_CLIENT_CREDENTIALS")]
    OAuth2ClientCredentials,
    #[serde(rename = "OAUTH2_SHAREPOINT_APP_ONLY_CLIENT_CREDENTIALS")]
    OAuth2AppOnlyClientCredentials,
}

impl SharePointAuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OAuth2ClientCredentials => "OAUTH2_CLIENT_CREDENTIALS",
            Self::OAuth2AppOnlyClientCredentials => "OAUTH2_SHAREPOINT_APP_ONLY_CLIENT_CREDENTIALS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SharePointCrawlerConfiguration {
    pub filter_configuration: Option<CrawlFilterConfiguration>,
}

/// Confluence data source
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfluenceDataSourceConfiguration {
    pub source_configuration: Option<ConfluenceSourceConfiguration>,
    pub crawler_configuration: Option<ConfluenceCrawlerConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfluenceSourceConfiguration {
    pub host_url: String,
    pub host_type: ConfluenceHostType,
    pub auth_type: ConfluenceAuthType,
    pub credentials_secret_arn: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfluenceHostType {
    Saas,
}

impl ConfluenceHostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Saas => "SAAS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfluenceAuthType {
    #[serde(rename = "BASIC")]
    Basic,
    #[serde(rename = "OAUTH2_CLIENT_CREDENTIALS")]
    OAuth2ClientCredentials,
}

impl ConfluenceAuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::OAuth2ClientCredentials => "OAUTH2_CLIENT_CREDENTIALS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfluenceCrawlerConfiguration {
    pub filter_configuration: Option<CrawlFilterConfiguration>,
}

/// Object filters applied by the SharePoint and Confluence crawlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlFilterConfiguration {
    pub filter_type: CrawlFilterType,
    #[serde(default)]
    pub pattern_object_filters: Vec<PatternObjectFilter>,
}

impl CrawlFilterConfiguration {
    /// Pattern filter with no object rules yet
    pub fn pattern() -> Self {
        Self {
            filter_type: CrawlFilterType::Pattern,
            pattern_object_filters: Vec::new(),
        }
    }

    pub fn with_object_filter(mut self, filter: PatternObjectFilter) -> Self {
        self.pattern_object_filters.push(filter);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrawlFilterType {
    Pattern,
}

impl CrawlFilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pattern => "PATTERN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternObjectFilter {
    /// Object kind the patterns apply to, e.g. `Page` or `Attachment`
    pub object_type: String,
    #[serde(default)]
    pub inclusion_filters: Vec<String>,
    #[serde(default)]
    pub exclusion_filters: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s3_payload() -> S3DataSourceConfiguration {
        S3DataSourceConfiguration {
            bucket_arn: "arn:aws:s3:::docs".to_string(),
            inclusion_prefixes: vec!["manuals/".to_string()],
            exclusion_prefixes: Vec::new(),
            bucket_owner_account_id: None,
        }
    }

    #[test]
    fn test_constructors_keep_tag_and_payload_consistent() {
        assert!(DataSourceConfiguration::s3(s3_payload()).payload_matches_type());
        assert!(DataSourceConfiguration::web(WebDataSourceConfiguration::default())
            .payload_matches_type());
        assert!(
            DataSourceConfiguration::share_point(SharePointDataSourceConfiguration::default())
                .payload_matches_type()
        );
        assert!(
            DataSourceConfiguration::confluence(ConfluenceDataSourceConfiguration::default())
                .payload_matches_type()
        );
    }

    #[test]
    fn test_mismatched_payload_is_detected() {
        let mut configuration = DataSourceConfiguration::s3(s3_payload());
        configuration.data_source_type = DataSourceType::Web;

        assert!(!configuration.payload_matches_type());
        assert!(!DataSourceConfiguration::empty(DataSourceType::S3).payload_matches_type());
    }

    #[test]
    fn test_stray_payload_is_detected() {
        let mut configuration = DataSourceConfiguration::s3(s3_payload());
        configuration.web_configuration = Some(WebDataSourceConfiguration::default());

        assert!(!configuration.payload_matches_type());
        assert!(!DataSourceConfiguration::empty(DataSourceType::Custom).payload_matches_type());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(DataSourceType::SharePoint.as_str(), "SHAREPOINT");
        assert_eq!(WebScopeType::HostOnly.as_str(), "HOST_ONLY");
        assert_eq!(
            SharePointAuthType::OAuth2ClientCredentials.as_str(),
            "OAUTH2_CLIENT_CREDENTIALS"
        );
        assert_eq!(ConfluenceHostType::Saas.as_str(), "SAAS");
    }

    #[test]
    fn test_serialized_tag_uses_wire_name() {
        let json = serde_json::to_value(DataSourceConfiguration::s3(s3_payload())).unwrap();

        assert_eq!(json["data_source_type"], "S3");
        assert!(json.get("web_configuration").is_none());
        assert_eq!(
            serde_json::to_value(DataSourceType::SharePoint).unwrap(),
            "SHAREPOINT"
        );
    }
}
