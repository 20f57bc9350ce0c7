//! Data source connectors

mod base;
mod confluence;
mod factory;
mod kms_lighthouse;
mod s3;
mod share_point;
mod traits;
mod web_crawler;

pub use base::ConnectorBase;
pub use confluence::ConfluenceDataSourceConnector;
pub use factory::{Connector, ConnectorFactory};
pub use kms_lighthouse::KmsLighthouseConnector;
pub use s3::S3DataSourceConnector;
pub use share_point::{share_point_domain, SharePointDataSourceConnector};
pub use traits::DataSourceConnector;
pub use web_crawler::{WebCrawlerDataSourceConnector, DEFAULT_CRAWL_RATE_LIMIT};
