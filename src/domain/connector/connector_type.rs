//! Connector kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::data_source::DataSourceType;
use crate::domain::error::ConnectorError;

/// Kind of data source connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorType {
    S3,
    WebCrawler,
    SharePoint,
    Confluence,
    /// KMS Lighthouse repository, crawled as a web data source
    KmsLighthouse,
    /// Known to the service, no connector in this crate
    Salesforce,
}

impl ConnectorType {
    const SUPPORTED: [ConnectorType; 5] = [
        ConnectorType::S3,
        ConnectorType::WebCrawler,
        ConnectorType::SharePoint,
        ConnectorType::Confluence,
        ConnectorType::KmsLighthouse,
    ];

    /// Connector types the factory can build
    pub fn supported() -> &'static [ConnectorType] {
        &Self::SUPPORTED
    }

    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }

    /// Data source type tag the connector's configurations carry
    pub fn data_source_type(&self) -> DataSourceType {
        match self {
            Self::S3 => DataSourceType::S3,
            Self::WebCrawler | Self::KmsLighthouse => DataSourceType::Web,
            Self::SharePoint => DataSourceType::SharePoint,
            Self::Confluence => DataSourceType::Confluence,
            Self::Salesforce => DataSourceType::Salesforce,
        }
    }

    /// Human readable label used in log lines and error messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::S3 => "S3",
            Self::WebCrawler => "Web Crawler",
            Self::SharePoint => "SharePoint",
            Self::Confluence => "Confluence",
            Self::KmsLighthouse => "KMS Lighthouse",
            Self::Salesforce => "Salesforce",
        }
    }
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::S3 => write!(f, "s3"),
            Self::WebCrawler => write!(f, "web_crawler"),
            Self::SharePoint => write!(f, "share_point"),
            Self::Confluence => write!(f, "confluence"),
            Self::KmsLighthouse => write!(f, "kms_lighthouse"),
            Self::Salesforce => write!(f, "salesforce"),
        }
    }
}

impl FromStr for ConnectorType {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");

        match normalized.as_str() {
            "s3" => Ok(Self::S3),
            "web_crawler" | "web" => Ok(Self::WebCrawler),
            "share_point" | "sharepoint" => Ok(Self::SharePoint),
            "confluence" => Ok(Self::Confluence),
            "kms_lighthouse" | "lighthouse" => Ok(Self::KmsLighthouse),
            "salesforce" => Ok(Self::Salesforce),
            _ => Err(ConnectorError::validation(format!(
                "Unknown connector type '{}'",
                s
            ))),
        }
    }
}
