//! KMS Lighthouse connector
//!
//! KMS Lighthouse repositories are exposed over HTTP, so they are ingested
//! through a web crawler data source seeded with the repository document
//! endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;

use super::base::ConnectorBase;
use super::traits::DataSourceConnector;
use super::web_crawler::{validate_web_configuration, web_configuration};
use crate::domain::connector::{ConnectorConfig, ConnectorType};
use crate::domain::data_source::DataSourceConfiguration;
use crate::domain::error::ConnectorResult;
use crate::domain::ingestion::{IngestionJob, IngestionOptions, IngestionStats};
use crate::domain::lighthouse::{KmsAuthenticationConfig, KmsLighthouseConfig};
use crate::infrastructure::bedrock_agent::BedrockAgentApi;

const REPOSITORY_RATE_LIMIT: u32 = 50;
const CATEGORY_RATE_LIMIT: u32 = 30;

const REPOSITORY_INCLUSION_PATTERNS: [&str; 2] =
    [r".*\.(pdf|doc|docx|txt|md)$", r".*\/documents\/.*"];
const REPOSITORY_EXCLUSION_PATTERNS: [&str; 2] = [r".*\/temp\/.*", r".*\/archive\/.*"];

const CATEGORY_INCLUSION_PATTERNS: [&str; 3] =
    [r".*\/knowledge\/.*", r".*\/procedures\/.*", r".*\/guidelines\/.*"];
const CATEGORY_EXCLUSION_PATTERNS: [&str; 2] = [r".*\/draft\/.*", r".*\/obsolete\/.*"];

#[derive(Debug, Clone)]
pub struct KmsLighthouseConnector {
    base: ConnectorBase,
}

impl KmsLighthouseConnector {
    pub fn new(
        client: Arc<dyn BedrockAgentApi>,
        knowledge_base_id: impl Into<String>,
        config: ConnectorConfig,
    ) -> Self {
        Self {
            base: ConnectorBase::new(client, knowledge_base_id, config),
        }
    }

    /// Web crawler payload for the endpoints and patterns of `kms`
    ///
    /// Authentication, API key and document size settings have no web crawler
    /// counterpart and are not sent. Fails when `kms` has no base URL.
    pub fn create_kms_lighthouse_configuration(
        &self,
        kms: &KmsLighthouseConfig,
    ) -> ConnectorResult<DataSourceConfiguration> {
        kms.validate()?;

        if let Some(auth) = &kms.authentication {
            tracing::debug!(
                base_url = %kms.base_url,
                method = auth.method.as_str(),
                headers = auth.custom_headers.len(),
                "KMS Lighthouse authentication is recorded but not forwarded to the crawler"
            );
        }

        Ok(web_configuration(
            kms.document_endpoints.clone(),
            kms.inclusion_patterns.clone(),
            kms.exclusion_patterns.clone(),
            kms.rate_limit,
            None,
        ))
    }

    /// One seed per repository under `{base_url}/api/repositories/{repo}/documents`
    pub fn create_kms_lighthouse_configuration_for_repositories(
        &self,
        base_url: &str,
        api_key: &str,
        repositories: &[String],
    ) -> ConnectorResult<DataSourceConfiguration> {
        let kms = KmsLighthouseConfig::new(base_url)?
            .with_api_key(api_key)
            .with_rate_limit(REPOSITORY_RATE_LIMIT)
            .with_document_endpoints(
                repositories
                    .iter()
                    .map(|repo| format!("{}/api/repositories/{}/documents", base_url, repo))
                    .collect(),
            )
            .with_inclusion_patterns(to_strings(&REPOSITORY_INCLUSION_PATTERNS))
            .with_exclusion_patterns(to_strings(&REPOSITORY_EXCLUSION_PATTERNS));

        self.create_kms_lighthouse_configuration(&kms)
    }

    /// One seed per category under `{base_url}/api/categories/{category}/documents`
    pub fn create_kms_lighthouse_configuration_by_category(
        &self,
        base_url: &str,
        api_key: &str,
        categories: &[String],
        custom_headers: &BTreeMap<String, String>,
    ) -> ConnectorResult<DataSourceConfiguration> {
        let mut kms = KmsLighthouseConfig::new(base_url)?
            .with_api_key(api_key)
            .with_rate_limit(CATEGORY_RATE_LIMIT)
            .with_document_endpoints(
                categories
                    .iter()
                    .map(|category| format!("{}/api/categories/{}/documents", base_url, category))
                    .collect(),
            )
            .with_inclusion_patterns(to_strings(&CATEGORY_INCLUSION_PATTERNS))
            .with_exclusion_patterns(to_strings(&CATEGORY_EXCLUSION_PATTERNS));

        if !custom_headers.is_empty() {
            kms = kms.with_authentication(KmsAuthenticationConfig::custom_headers(
                custom_headers.clone(),
            ));
        }

        self.create_kms_lighthouse_configuration(&kms)
    }

    /// Start ingestion, generating a `kms-lighthouse-<millis>` token when none is given
    pub async fn start_kms_lighthouse_ingestion(
        &self,
        data_source_id: &str,
        options: &IngestionOptions,
    ) -> ConnectorResult<IngestionJob> {
        let client_token = options
            .client_token
            .clone()
            .unwrap_or_else(|| format!("kms-lighthouse-{}", Utc::now().timestamp_millis()));

        let job = self
            .start_ingestion(data_source_id, Some(&client_token))
            .await
            .map_err(|e| {
                e.context(format!(
                    "Failed to start KMS Lighthouse ingestion for data source: {}",
                    data_source_id
                ))
            })?;

        tracing::info!(
            ingestion_job_id = %job.ingestion_job_id,
            data_source_id = %data_source_id,
            client_token = %client_token,
            monitoring = options.monitoring_enabled,
            parallel = options.enable_parallel_processing,
            batch_size = options.batch_size,
            "Started KMS Lighthouse ingestion"
        );

        Ok(job)
    }

    pub async fn get_ingestion_stats(
        &self,
        data_source_id: &str,
        ingestion_job_id: &str,
    ) -> ConnectorResult<IngestionStats> {
        let job = self.get_ingestion_job(data_source_id, ingestion_job_id).await?;
        Ok(IngestionStats::from_job(&job))
    }
}

fn to_strings(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

impl DataSourceConnector for KmsLighthouseConnector {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::KmsLighthouse
    }

    fn base(&self) -> &ConnectorBase {
        &self.base
    }

    fn validate_configuration(&self, configuration: &DataSourceConfiguration) -> ConnectorResult<()> {
        validate_web_configuration(configuration)
    }
}
