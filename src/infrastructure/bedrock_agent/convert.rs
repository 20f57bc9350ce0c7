//! Conversion between domain values and Bedrock Agent SDK shapes

use aws_sdk_bedrockagent::types as sdk;
use chrono::{DateTime, Utc};

use super::error::build_error;
use crate::domain::data_source::{
    ConfluenceCrawlerConfiguration, ConfluenceDataSourceConfiguration,
    ConfluenceSourceConfiguration, CrawlFilterConfiguration, DataSource, DataSourceConfiguration,
    DataSourceSummary, PatternObjectFilter, S3DataSourceConfiguration,
    SharePointCrawlerConfiguration, SharePointDataSourceConfiguration,
    SharePointSourceConfiguration, WebCrawlerConfiguration, WebDataSourceConfiguration,
    WebSourceConfiguration,
};
use crate::domain::error::ConnectorResult;
use crate::domain::ingestion::{
    IngestionJob, IngestionJobStatistics, IngestionJobStatus, IngestionJobSummary,
};
use crate::domain::knowledge_base::{
    KnowledgeBase, KnowledgeBaseConfiguration, KnowledgeBaseSummary,
    OpenSearchServerlessConfiguration, StorageConfiguration,
};

pub(crate) fn data_source_configuration(
    config: &DataSourceConfiguration,
) -> ConnectorResult<sdk::DataSourceConfiguration> {
    let s3 = config
        .s3_configuration
        .as_ref()
        .map(s3_configuration)
        .transpose()?;
    let web = config.web_configuration.as_ref().map(web_configuration);
    let share_point = config
        .share_point_configuration
        .as_ref()
        .map(share_point_configuration)
        .transpose()?;
    let confluence = config
        .confluence_configuration
        .as_ref()
        .map(confluence_configuration)
        .transpose()?;

    sdk::DataSourceConfiguration::builder()
        .r#type(sdk::DataSourceType::from(config.data_source_type.as_str()))
        .set_s3_configuration(s3)
        .set_web_configuration(web)
        .set_share_point_configuration(share_point)
        .set_confluence_configuration(confluence)
        .build()
        .map_err(|e| build_error("DataSourceConfiguration", e))
}

fn s3_configuration(
    config: &S3DataSourceConfiguration,
) -> ConnectorResult<sdk::S3DataSourceConfiguration> {
    if !config.exclusion_prefixes.is_empty() {
        tracing::warn!(
            bucket_arn = %config.bucket_arn,
            prefixes = ?config.exclusion_prefixes,
            "S3 exclusion prefixes are not supported by Bedrock and will be ignored"
        );
    }

    sdk::S3DataSourceConfiguration::builder()
        .bucket_arn(&config.bucket_arn)
        .set_inclusion_prefixes(non_empty(&config.inclusion_prefixes))
        .set_bucket_owner_account_id(config.bucket_owner_account_id.clone())
        .build()
        .map_err(|e| build_error("S3DataSourceConfiguration", e))
}

fn web_configuration(config: &WebDataSourceConfiguration) -> sdk::WebDataSourceConfiguration {
    let source = config
        .source_configuration
        .as_ref()
        .map(web_source_configuration);
    let crawler = config
        .crawler_configuration
        .as_ref()
        .map(web_crawler_configuration);

    sdk::WebDataSourceConfiguration::builder()
        .set_source_configuration(source)
        .set_crawler_configuration(crawler)
        .build()
}

fn web_source_configuration(config: &WebSourceConfiguration) -> sdk::WebSourceConfiguration {
    let urls = config.url_configuration.as_ref().map(|urls| {
        let seeds = urls
            .seed_urls
            .iter()
            .map(|url| sdk::SeedUrl::builder().url(url).build())
            .collect();
        sdk::UrlConfiguration::builder()
            .set_seed_urls(Some(seeds))
            .build()
    });

    sdk::WebSourceConfiguration::builder()
        .set_url_configuration(urls)
        .build()
}

fn web_crawler_configuration(config: &WebCrawlerConfiguration) -> sdk::WebCrawlerConfiguration {
    let limits = config.crawler_limits.as_ref().map(|limits| {
        sdk::WebCrawlerLimits::builder()
            .set_rate_limit(
                limits
                    .rate_limit
                    .map(|rate| i32::try_from(rate).unwrap_or(i32::MAX)),
            )
            .build()
    });

    sdk::WebCrawlerConfiguration::builder()
        .set_crawler_limits(limits)
        .set_inclusion_filters(non_empty(&config.inclusion_filters))
        .set_exclusion_filters(non_empty(&config.exclusion_filters))
        .set_scope(config.scope.map(|scope| sdk::WebScopeType::from(scope.as_str())))
        .build()
}

fn share_point_configuration(
    config: &SharePointDataSourceConfiguration,
) -> ConnectorResult<sdk::SharePointDataSourceConfiguration> {
    let source = config
        .source_configuration
        .as_ref()
        .map(share_point_source_configuration)
        .transpose()?;
    let crawler = config
        .crawler_configuration
        .as_ref()
        .map(share_point_crawler_configuration)
        .transpose()?;

    Ok(sdk::SharePointDataSourceConfiguration::builder()
        .set_source_configuration(source)
        .set_crawler_configuration(crawler)
        .build())
}

fn share_point_source_configuration(
    config: &SharePointSourceConfiguration,
) -> ConnectorResult<sdk::SharePointSourceConfiguration> {
    sdk::SharePointSourceConfiguration::builder()
        .domain(&config.domain)
        .set_site_urls(Some(config.site_urls.clone()))
        .set_tenant_id(config.tenant_id.clone())
        .host_type(sdk::SharePointHostType::from(config.host_type.as_str()))
        .auth_type(sdk::SharePointAuthType::from(config.auth_type.as_str()))
        .credentials_secret_arn(&config.credentials_secret_arn)
        .build()
        .map_err(|e| build_error("SharePointSourceConfiguration", e))
}

fn share_point_crawler_configuration(
    config: &SharePointCrawlerConfiguration,
) -> ConnectorResult<sdk::SharePointCrawlerConfiguration> {
    let filter = config
        .filter_configuration
        .as_ref()
        .map(crawl_filter_configuration)
        .transpose()?;

    Ok(sdk::SharePointCrawlerConfiguration::builder()
        .set_filter_configuration(filter)
        .build())
}

fn confluence_configuration(
    config: &ConfluenceDataSourceConfiguration,
) -> ConnectorResult<sdk::ConfluenceDataSourceConfiguration> {
    let source = config
        .source_configuration
        .as_ref()
        .map(confluence_source_configuration)
        .transpose()?;
    let crawler = config
        .crawler_configuration
        .as_ref()
        .map(confluence_crawler_configuration)
        .transpose()?;

    Ok(sdk::ConfluenceDataSourceConfiguration::builder()
        .set_source_configuration(source)
        .set_crawler_configuration(crawler)
        .build())
}

fn confluence_source_configuration(
    config: &ConfluenceSourceConfiguration,
) -> ConnectorResult<sdk::ConfluenceSourceConfiguration> {
    sdk::ConfluenceSourceConfiguration::builder()
        .host_url(&config.host_url)
        .host_type(sdk::ConfluenceHostType::from(config.host_type.as_str()))
        .auth_type(sdk::ConfluenceAuthType::from(config.auth_type.as_str()))
        .credentials_secret_arn(&config.credentials_secret_arn)
        .build()
        .map_err(|e| build_error("ConfluenceSourceConfiguration", e))
}

fn confluence_crawler_configuration(
    config: &ConfluenceCrawlerConfiguration,
) -> ConnectorResult<sdk::ConfluenceCrawlerConfiguration> {
    let filter = config
        .filter_configuration
        .as_ref()
        .map(crawl_filter_configuration)
        .transpose()?;

    Ok(sdk::ConfluenceCrawlerConfiguration::builder()
        .set_filter_configuration(filter)
        .build())
}

fn crawl_filter_configuration(
    config: &CrawlFilterConfiguration,
) -> ConnectorResult<sdk::CrawlFilterConfiguration> {
    let pattern = if config.pattern_object_filters.is_empty() {
        None
    } else {
        let filters = config
            .pattern_object_filters
            .iter()
            .map(pattern_object_filter)
            .collect::<ConnectorResult<Vec<_>>>()?;

        Some(
            sdk::PatternObjectFilterConfiguration::builder()
                .set_filters(Some(filters))
                .build()
                .map_err(|e| build_error("PatternObjectFilterConfiguration", e))?,
        )
    };

    sdk::CrawlFilterConfiguration::builder()
        .r#type(sdk::CrawlFilterConfigurationType::from(
            config.filter_type.as_str(),
        ))
        .set_pattern_object_filter(pattern)
        .build()
        .map_err(|e| build_error("CrawlFilterConfiguration", e))
}

fn pattern_object_filter(filter: &PatternObjectFilter) -> ConnectorResult<sdk::PatternObjectFilter> {
    sdk::PatternObjectFilter::builder()
        .object_type(&filter.object_type)
        .set_inclusion_filters(non_empty(&filter.inclusion_filters))
        .set_exclusion_filters(non_empty(&filter.exclusion_filters))
        .build()
        .map_err(|e| build_error("PatternObjectFilter", e))
}

pub(crate) fn knowledge_base_configuration(
    config: &KnowledgeBaseConfiguration,
) -> ConnectorResult<sdk::KnowledgeBaseConfiguration> {
    match config {
        KnowledgeBaseConfiguration::Vector {
            embedding_model_arn,
        } => {
            let vector = sdk::VectorKnowledgeBaseConfiguration::builder()
                .embedding_model_arn(embedding_model_arn)
                .build()
                .map_err(|e| build_error("VectorKnowledgeBaseConfiguration", e))?;

            sdk::KnowledgeBaseConfiguration::builder()
                .r#type(sdk::KnowledgeBaseType::from(config.type_name()))
                .vector_knowledge_base_configuration(vector)
                .build()
                .map_err(|e| build_error("KnowledgeBaseConfiguration", e))
        }
    }
}

pub(crate) fn storage_configuration(
    config: &StorageConfiguration,
) -> ConnectorResult<sdk::StorageConfiguration> {
    match config {
        StorageConfiguration::OpenSearchServerless(open_search) => {
            sdk::StorageConfiguration::builder()
                .r#type(sdk::KnowledgeBaseStorageType::from(config.type_name()))
                .opensearch_serverless_configuration(open_search_serverless(open_search)?)
                .build()
                .map_err(|e| build_error("StorageConfiguration", e))
        }
    }
}

fn open_search_serverless(
    config: &OpenSearchServerlessConfiguration,
) -> ConnectorResult<sdk::OpenSearchServerlessConfiguration> {
    let mapping = sdk::OpenSearchServerlessFieldMapping::builder()
        .vector_field(&config.field_mapping.vector_field)
        .text_field(&config.field_mapping.text_field)
        .metadata_field(&config.field_mapping.metadata_field)
        .build()
        .map_err(|e| build_error("OpenSearchServerlessFieldMapping", e))?;

    sdk::OpenSearchServerlessConfiguration::builder()
        .collection_arn(&config.collection_arn)
        .vector_index_name(&config.vector_index_name)
        .field_mapping(mapping)
        .build()
        .map_err(|e| build_error("OpenSearchServerlessConfiguration", e))
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

// Service responses

pub(crate) fn timestamp(value: &aws_smithy_types::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(value.secs(), value.subsec_nanos())
}

pub(crate) fn data_source(ds: &sdk::DataSource) -> DataSource {
    DataSource {
        knowledge_base_id: ds.knowledge_base_id().to_string(),
        data_source_id: ds.data_source_id().to_string(),
        name: ds.name().to_string(),
        status: ds.status().as_str().to_string(),
        description: ds.description().map(str::to_string),
        created_at: timestamp(ds.created_at()),
        updated_at: timestamp(ds.updated_at()),
        failure_reasons: ds.failure_reasons().to_vec(),
    }
}

pub(crate) fn data_source_summary(summary: &sdk::DataSourceSummary) -> DataSourceSummary {
    DataSourceSummary {
        knowledge_base_id: summary.knowledge_base_id().to_string(),
        data_source_id: summary.data_source_id().to_string(),
        name: summary.name().to_string(),
        status: summary.status().as_str().to_string(),
        description: summary.description().map(str::to_string),
        updated_at: timestamp(summary.updated_at()),
    }
}

fn count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

pub(crate) fn ingestion_statistics(stats: &sdk::IngestionJobStatistics) -> IngestionJobStatistics {
    IngestionJobStatistics {
        documents_scanned: count(stats.number_of_documents_scanned()),
        metadata_documents_scanned: count(stats.number_of_metadata_documents_scanned()),
        new_documents_indexed: count(stats.number_of_new_documents_indexed()),
        modified_documents_indexed: count(stats.number_of_modified_documents_indexed()),
        metadata_documents_modified: count(stats.number_of_metadata_documents_modified()),
        documents_deleted: count(stats.number_of_documents_deleted()),
        documents_failed: count(stats.number_of_documents_failed()),
    }
}

pub(crate) fn ingestion_job(job: &sdk::IngestionJob) -> IngestionJob {
    IngestionJob {
        knowledge_base_id: job.knowledge_base_id().to_string(),
        data_source_id: job.data_source_id().to_string(),
        ingestion_job_id: job.ingestion_job_id().to_string(),
        status: IngestionJobStatus::from_wire(job.status().as_str()),
        description: job.description().map(str::to_string),
        statistics: job.statistics().map(ingestion_statistics),
        failure_reasons: job.failure_reasons().to_vec(),
        started_at: timestamp(job.started_at()),
        updated_at: timestamp(job.updated_at()),
    }
}

pub(crate) fn ingestion_job_summary(job: &sdk::IngestionJobSummary) -> IngestionJobSummary {
    IngestionJobSummary {
        knowledge_base_id: job.knowledge_base_id().to_string(),
        data_source_id: job.data_source_id().to_string(),
        ingestion_job_id: job.ingestion_job_id().to_string(),
        status: IngestionJobStatus::from_wire(job.status().as_str()),
        description: job.description().map(str::to_string),
        statistics: job.statistics().map(ingestion_statistics),
        started_at: timestamp(job.started_at()),
        updated_at: timestamp(job.updated_at()),
    }
}

pub(crate) fn knowledge_base(kb: &sdk::KnowledgeBase) -> KnowledgeBase {
    KnowledgeBase {
        knowledge_base_id: kb.knowledge_base_id().to_string(),
        knowledge_base_arn: kb.knowledge_base_arn().to_string(),
        name: kb.name().to_string(),
        description: kb.description().map(str::to_string),
        role_arn: kb.role_arn().to_string(),
        status: kb.status().as_str().to_string(),
        created_at: timestamp(kb.created_at()),
        updated_at: timestamp(kb.updated_at()),
        failure_reasons: kb.failure_reasons().to_vec(),
    }
}

pub(crate) fn knowledge_base_summary(kb: &sdk::KnowledgeBaseSummary) -> KnowledgeBaseSummary {
    KnowledgeBaseSummary {
        knowledge_base_id: kb.knowledge_base_id().to_string(),
        name: kb.name().to_string(),
        description: kb.description().map(str::to_string),
        status: kb.status().as_str().to_string(),
        updated_at: timestamp(kb.updated_at()),
    }
}
