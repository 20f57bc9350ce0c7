//! Data source domain - configuration tree, S3 settings and service entities

mod configuration;
mod entity;
mod s3;

pub use configuration::{
    ConfluenceAuthType, ConfluenceCrawlerConfiguration, ConfluenceDataSourceConfiguration,
    ConfluenceHostType, ConfluenceSourceConfiguration, CrawlFilterConfiguration,
    CrawlFilterType, DataSourceConfiguration, DataSourceType, PatternObjectFilter,
    S3DataSourceConfiguration, SharePointAuthType, SharePointCrawlerConfiguration,
    SharePointDataSourceConfiguration, SharePointHostType, SharePointSourceConfiguration,
    UrlConfiguration, WebCrawlerConfiguration, WebCrawlerLimits, WebDataSourceConfiguration,
    WebScopeType, WebSourceConfiguration,
};
pub use entity::{
    CreateDataSourceRequest, DataSource, DataSourceSummary, DeletedDataSource,
    UpdateDataSourceRequest,
};
pub use s3::S3SourceConfig;
