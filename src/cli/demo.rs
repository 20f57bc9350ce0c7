//! Demo command - exercises every connector kind against one knowledge base

use std::sync::Arc;

use chrono::Utc;
use clap::Args;

use super::{AwsArgs, Outcome};
use crate::domain::connector::{ConnectorConfig, ConnectorType};
use crate::domain::error::{ConnectorError, ConnectorResult};
use crate::domain::ingestion::IngestionOptions;
use crate::infrastructure::bedrock_agent::BedrockAgentApi;
use crate::infrastructure::connector::{Connector, ConnectorFactory, DataSourceConnector};
use crate::infrastructure::knowledge_base::KnowledgeBaseManager;

/// Arguments for the demo command
#[derive(Args, Clone, Debug)]
pub struct DemoArgs {
    /// Knowledge base the demo data sources are attached to
    #[arg(long, default_value = "kb-example-123")]
    pub knowledge_base_id: String,

    #[command(flatten)]
    pub aws: AwsArgs,
}

/// Run the demo
pub async fn run(args: DemoArgs) -> anyhow::Result<()> {
    let config = super::load_config(&args.aws);
    let client = super::connect(&config).await;

    let result = run_steps(client.clone(), &args.knowledge_base_id, &mut |outcome| {
        println!("{}", outcome)
    })
    .await;
    drop(client);

    super::report("Connector", result)
}

/// Run every step in order, stopping at the first failure
pub async fn run_steps(
    client: Arc<dyn BedrockAgentApi>,
    knowledge_base_id: &str,
    emit: &mut (dyn FnMut(Outcome) + Send),
) -> ConnectorResult<()> {
    emit(knowledge_base_management(client.clone()).await?);
    emit(s3_data_source(client.clone(), knowledge_base_id).await?);
    emit(web_crawler_data_source(client.clone(), knowledge_base_id).await?);
    emit(kms_lighthouse_data_source(client, knowledge_base_id).await?);
    Ok(())
}

pub async fn knowledge_base_management(
    client: Arc<dyn BedrockAgentApi>,
) -> ConnectorResult<Outcome> {
    let manager = KnowledgeBaseManager::new(client);
    let knowledge_bases = manager.list_knowledge_bases().await?;

    Ok(Outcome::new("Knowledge Base Management Demo")
        .line(format!("Found {} knowledge bases", knowledge_bases.len()))
        .lines(
            knowledge_bases
                .iter()
                .map(|kb| format!("- {} (ID: {})", kb.name, kb.knowledge_base_id)),
        ))
}

pub async fn s3_data_source(
    client: Arc<dyn BedrockAgentApi>,
    knowledge_base_id: &str,
) -> ConnectorResult<Outcome> {
    let config = ConnectorConfig::default()
        .with_max_results(25)
        .with_retry_attempts(3)
        .with_validation(true);
    let connector = ConnectorFactory::create_connector_with_config(
        ConnectorType::S3,
        client,
        knowledge_base_id,
        config,
    );
    let s3 = expect_kind(&connector, Connector::as_s3)?;

    let configuration = s3.create_s3_configuration_with_prefixes(
        "my-documents-bucket",
        &["documents/".to_string(), "manuals/".to_string()],
        &["temp/".to_string(), "archive/".to_string()],
    );
    let data_source = s3
        .create_data_source("Corporate Documents S3 Source", configuration)
        .await?;

    let client_token = format!("ingestion-{}", Utc::now().timestamp_millis());
    let job = s3
        .start_ingestion(&data_source.data_source_id, Some(&client_token))
        .await?;
    let status = s3
        .get_ingestion_job(&data_source.data_source_id, &job.ingestion_job_id)
        .await?;

    Ok(Outcome::new("S3 Data Source Demo")
        .line(format!("Created S3 data source: {}", data_source.data_source_id))
        .line(format!("Started ingestion job: {}", job.ingestion_job_id))
        .line(format!("Ingestion status: {}", status.status)))
}

pub async fn web_crawler_data_source(
    client: Arc<dyn BedrockAgentApi>,
    knowledge_base_id: &str,
) -> ConnectorResult<Outcome> {
    let connector =
        ConnectorFactory::create_connector(ConnectorType::WebCrawler, client, knowledge_base_id);
    let web = expect_kind(&connector, Connector::as_web_crawler)?;

    let configuration = web.create_web_crawler_configuration("https://docs.example.com");
    let data_source = web
        .create_data_source("Documentation Web Crawler", configuration)
        .await?;
    let data_sources = web.list_data_sources().await?;

    Ok(Outcome::new("Web Crawler Data Source Demo")
        .line(format!(
            "Created Web Crawler data source: {}",
            data_source.data_source_id
        ))
        .line(format!("Total data sources in KB: {}", data_sources.len())))
}

pub async fn kms_lighthouse_data_source(
    client: Arc<dyn BedrockAgentApi>,
    knowledge_base_id: &str,
) -> ConnectorResult<Outcome> {
    let connector =
        ConnectorFactory::create_connector(ConnectorType::KmsLighthouse, client, knowledge_base_id);
    let kms = expect_kind(&connector, Connector::as_kms_lighthouse)?;

    let configuration = kms.create_kms_lighthouse_configuration_for_repositories(
        "https://lighthouse.example.com",
        "api-key-123",
        &[
            "documentation".to_string(),
            "procedures".to_string(),
            "knowledge".to_string(),
        ],
    )?;
    let data_source = kms
        .create_data_source("KMS Lighthouse Repository", configuration)
        .await?;

    let options = IngestionOptions::default()
        .with_monitoring(true)
        .with_batch_size(50)
        .with_metadata_extraction(true);
    let job = kms
        .start_kms_lighthouse_ingestion(&data_source.data_source_id, &options)
        .await?;

    Ok(Outcome::new("KMS Lighthouse Data Source Demo")
        .line(format!(
            "Created KMS Lighthouse data source: {}",
            data_source.data_source_id
        ))
        .line(format!(
            "Started KMS Lighthouse ingestion: {}",
            job.ingestion_job_id
        )))
}

/// Narrow a factory-built connector to the kind that was requested
pub(crate) fn expect_kind<'a, T>(
    connector: &'a Connector,
    narrow: fn(&'a Connector) -> Option<&'a T>,
) -> ConnectorResult<&'a T> {
    narrow(connector).ok_or_else(|| {
        ConnectorError::configuration(format!(
            "Factory returned an unexpected connector: {}",
            connector.connector_type()
        ))
    })
}
