//! Lighthouse demo command - basic, category-based and authenticated KMS Lighthouse setups

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use clap::Args;

use super::demo::expect_kind;
use super::{AwsArgs, Outcome};
use crate::domain::connector::{ConnectorConfig, ConnectorType};
use crate::domain::error::ConnectorResult;
use crate::domain::ingestion::IngestionOptions;
use crate::domain::lighthouse::{KmsAuthenticationConfig, KmsLighthouseConfig};
use crate::infrastructure::bedrock_agent::BedrockAgentApi;
use crate::infrastructure::connector::{Connector, ConnectorFactory, DataSourceConnector};

/// Arguments for the lighthouse demo command
#[derive(Args, Clone, Debug)]
pub struct LighthouseDemoArgs {
    /// Knowledge base the KMS Lighthouse data sources are attached to
    #[arg(long, default_value = "kb-lighthouse-123")]
    pub knowledge_base_id: String,

    #[command(flatten)]
    pub aws: AwsArgs,
}

pub async fn run(args: LighthouseDemoArgs) -> anyhow::Result<()> {
    let config = super::load_config(&args.aws);
    let client = super::connect(&config).await;

    let result = run_steps(client.clone(), &args.knowledge_base_id, &mut |outcome| {
        println!("{}", outcome)
    })
    .await;
    drop(client);

    super::report("KMS Lighthouse Connector", result)
}

pub async fn run_steps(
    client: Arc<dyn BedrockAgentApi>,
    knowledge_base_id: &str,
    emit: &mut (dyn FnMut(Outcome) + Send),
) -> ConnectorResult<()> {
    emit(basic_integration(client.clone(), knowledge_base_id).await?);
    emit(category_integration(client.clone(), knowledge_base_id).await?);
    emit(authenticated_integration(client, knowledge_base_id).await?);
    Ok(())
}

/// Repository seeds, default options, then the job statistics
pub async fn basic_integration(
    client: Arc<dyn BedrockAgentApi>,
    knowledge_base_id: &str,
) -> ConnectorResult<Outcome> {
    let connector =
        ConnectorFactory::create_connector(ConnectorType::KmsLighthouse, client, knowledge_base_id);
    let kms = expect_kind(&connector, Connector::as_kms_lighthouse)?;

    let configuration = kms.create_kms_lighthouse_configuration_for_repositories(
        "https://lighthouse.company.com",
        "your-api-key",
        &[
            "technical-docs".to_string(),
            "procedures".to_string(),
            "knowledge-base".to_string(),
        ],
    )?;
    let data_source = kms
        .create_data_source("KMS Lighthouse Technical Documentation", configuration)
        .await?;

    let options = IngestionOptions::default()
        .with_monitoring(true)
        .with_batch_size(50)
        .with_metadata_extraction(true);
    let job = kms
        .start_kms_lighthouse_ingestion(&data_source.data_source_id, &options)
        .await?;
    let stats = kms
        .get_ingestion_stats(&data_source.data_source_id, &job.ingestion_job_id)
        .await?;

    Ok(Outcome::new("Basic KMS Lighthouse Integration")
        .line(format!(
            "Created KMS Lighthouse data source: {}",
            data_source.data_source_id
        ))
        .line(format!(
            "Started KMS Lighthouse ingestion job: {}",
            job.ingestion_job_id
        ))
        .line(format!("Ingestion stats: {}", stats)))
}

/// Category seeds with custom headers on a connector with a tuned configuration
pub async fn category_integration(
    client: Arc<dyn BedrockAgentApi>,
    knowledge_base_id: &str,
) -> ConnectorResult<Outcome> {
    let config = ConnectorConfig::default()
        .with_max_results(100)
        .with_retry_attempts(5)
        .with_retry_delay_ms(2000)
        .with_validation(true);
    let connector = ConnectorFactory::create_connector_with_config(
        ConnectorType::KmsLighthouse,
        client,
        knowledge_base_id,
        config,
    );
    let kms = expect_kind(&connector, Connector::as_kms_lighthouse)?;

    let custom_headers = BTreeMap::from([
        ("X-Department".to_string(), "Engineering".to_string()),
        ("X-Access-Level".to_string(), "Internal".to_string()),
    ]);
    let configuration = kms.create_kms_lighthouse_configuration_by_category(
        "https://lighthouse.company.com",
        "advanced-api-key",
        &[
            "engineering".to_string(),
            "architecture".to_string(),
            "best-practices".to_string(),
            "troubleshooting".to_string(),
        ],
        &custom_headers,
    )?;
    let data_source = kms
        .create_data_source("KMS Lighthouse Engineering Knowledge", configuration)
        .await?;

    let options = IngestionOptions::default()
        .with_client_token(format!("engineering-docs-{}", Utc::now().timestamp_millis()))
        .with_monitoring(true)
        .with_batch_size(25)
        .with_parallel_processing(true)
        .with_metadata_extraction(true)
        .with_retry_attempts(5);
    let job = kms
        .start_kms_lighthouse_ingestion(&data_source.data_source_id, &options)
        .await?;

    Ok(Outcome::new("Advanced KMS Lighthouse Integration")
        .line(format!(
            "Created advanced KMS Lighthouse data source: {}",
            data_source.data_source_id
        ))
        .line(format!("Started advanced ingestion: {}", job.ingestion_job_id)))
}

/// Fully specified configuration with bearer authentication
pub async fn authenticated_integration(
    client: Arc<dyn BedrockAgentApi>,
    knowledge_base_id: &str,
) -> ConnectorResult<Outcome> {
    let connector =
        ConnectorFactory::create_connector(ConnectorType::KmsLighthouse, client, knowledge_base_id);
    let kms = expect_kind(&connector, Connector::as_kms_lighthouse)?;

    let authentication = KmsAuthenticationConfig::bearer_token("your-bearer-token")
        .with_custom_header("X-API-Version", "v2")
        .with_custom_header("X-Client-ID", "knowledge-base-connector");

    let lighthouse = KmsLighthouseConfig::new("https://secure-lighthouse.company.com")?
        .with_api_key("secure-api-key")
        .add_document_endpoint("https://secure-lighthouse.company.com/api/secure/documents")
        .add_document_endpoint("https://secure-lighthouse.company.com/api/confidential/documents")
        .add_inclusion_pattern(r".*\.(pdf|docx|md)$")
        .add_inclusion_pattern(r".*\/secure\/.*")
        .add_inclusion_pattern(r".*\/confidential\/.*")
        .add_exclusion_pattern(r".*\/draft\/.*")
        .add_exclusion_pattern(r".*\/personal\/.*")
        .with_rate_limit(20)
        .with_authentication(authentication)
        .with_metadata_extraction(true)
        .with_max_document_size(20 * 1024 * 1024);

    let configuration = kms.create_kms_lighthouse_configuration(&lighthouse)?;
    let data_source = kms
        .create_data_source("KMS Lighthouse Secure Documents", configuration)
        .await?;

    let options = IngestionOptions::default()
        .with_client_token(format!("secure-ingestion-{}", Utc::now().timestamp_millis()))
        .with_monitoring(true)
        .with_batch_size(10)
        .with_parallel_processing(false)
        .with_metadata_extraction(true)
        .with_retry_attempts(3);
    let job = kms
        .start_kms_lighthouse_ingestion(&data_source.data_source_id, &options)
        .await?;

    let data_sources = kms.list_data_sources().await?;

    Ok(Outcome::new("KMS Lighthouse with Authentication")
        .line(format!(
            "Created secure KMS Lighthouse data source: {}",
            data_source.data_source_id
        ))
        .line(format!("Started secure ingestion: {}", job.ingestion_job_id))
        .line(format!(
            "Total KMS Lighthouse data sources: {}",
            data_sources.len()
        ))
        .lines(data_sources.iter().map(|ds| {
            format!(
                "- {} (ID: {}, Status: {})",
                ds.name, ds.data_source_id, ds.status
            )
        })))
}
