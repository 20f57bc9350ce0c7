//! Read-only inspection commands

use std::sync::Arc;

use clap::Args;
use serde::Serialize;

use super::AwsArgs;
use crate::domain::connector::ConnectorType;
use crate::domain::error::{ConnectorError, ConnectorResult};
use crate::domain::ingestion::IngestionStats;
use crate::infrastructure::bedrock_agent::BedrockAgentApi;
use crate::infrastructure::connector::ConnectorFactory;
use crate::infrastructure::knowledge_base::KnowledgeBaseManager;

#[derive(Args, Clone, Debug)]
pub struct KnowledgeBasesArgs {
    /// Print JSON instead of one line per entry
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub aws: AwsArgs,
}

#[derive(Args, Clone, Debug)]
pub struct DataSourcesArgs {
    #[arg(long)]
    pub knowledge_base_id: String,

    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub aws: AwsArgs,
}

#[derive(Args, Clone, Debug)]
pub struct IngestionJobsArgs {
    #[arg(long)]
    pub knowledge_base_id: String,

    #[arg(long)]
    pub data_source_id: String,

    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub aws: AwsArgs,
}

#[derive(Args, Clone, Debug)]
pub struct IngestionStatusArgs {
    #[arg(long)]
    pub knowledge_base_id: String,

    #[arg(long)]
    pub data_source_id: String,

    #[arg(long)]
    pub ingestion_job_id: String,

    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub aws: AwsArgs,
}

pub async fn knowledge_bases(args: KnowledgeBasesArgs) -> anyhow::Result<()> {
    let config = super::load_config(&args.aws);
    let manager = KnowledgeBaseManager::new(super::connect(&config).await)
        .with_page_size(config.connector.max_results);

    let knowledge_bases = manager.list_knowledge_bases().await?;
    let lines = knowledge_bases
        .iter()
        .map(|kb| format!("{}\t{}\t{}", kb.knowledge_base_id, kb.status, kb.name));

    print(&knowledge_bases, args.json, lines)
}

pub async fn data_sources(args: DataSourcesArgs) -> anyhow::Result<()> {
    let config = super::load_config(&args.aws);
    let client = super::connect(&config).await;

    let data_sources = client
        .list_data_sources(&args.knowledge_base_id, config.connector.max_results)
        .await?;
    let lines = data_sources
        .iter()
        .map(|ds| format!("{}\t{}\t{}", ds.data_source_id, ds.status, ds.name));

    print(&data_sources, args.json, lines)
}

pub async fn ingestion_jobs(args: IngestionJobsArgs) -> anyhow::Result<()> {
    let config = super::load_config(&args.aws);
    let client = super::connect(&config).await;

    let jobs = client
        .list_ingestion_jobs(
            &args.knowledge_base_id,
            &args.data_source_id,
            config.connector.max_results,
        )
        .await?;
    let lines = jobs.iter().map(|job| {
        let indexed = job
            .statistics
            .map(|stats| stats.documents_indexed())
            .unwrap_or_default();
        format!("{}\t{}\t{} indexed", job.ingestion_job_id, job.status, indexed)
    });

    print(&jobs, args.json, lines)
}

pub async fn ingestion_status(args: IngestionStatusArgs) -> anyhow::Result<()> {
    let config = super::load_config(&args.aws);
    let client = super::connect(&config).await;

    let stats = ingestion_stats(
        client,
        &args.knowledge_base_id,
        &args.data_source_id,
        &args.ingestion_job_id,
    )
    .await?;

    let line = stats.to_string();
    print(&stats, args.json, std::iter::once(line))
}

/// Statistics of one job, read through the KMS Lighthouse connector
pub async fn ingestion_stats(
    client: Arc<dyn BedrockAgentApi>,
    knowledge_base_id: &str,
    data_source_id: &str,
    ingestion_job_id: &str,
) -> ConnectorResult<IngestionStats> {
    let connector =
        ConnectorFactory::create_connector(ConnectorType::KmsLighthouse, client, knowledge_base_id);
    let kms = connector.as_kms_lighthouse().ok_or_else(|| {
        ConnectorError::configuration("Factory returned an unexpected connector")
    })?;

    kms.get_ingestion_stats(data_source_id, ingestion_job_id).await
}

pub fn connector_types() -> anyhow::Result<()> {
    for connector_type in ConnectorFactory::available_types() {
        println!(
            "{}\t{}\t{}",
            connector_type,
            connector_type.data_source_type(),
            connector_type.label()
        );
    }
    Ok(())
}

fn print<T, I>(value: &T, json: bool, lines: I) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    I: IntoIterator<Item = String>,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        for line in lines {
            println!("{}", line);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingestion::{IngestionJob, IngestionJobStatistics, IngestionJobStatus};
    use crate::infrastructure::bedrock_agent::mock::InMemoryBedrockAgent;

    #[tokio::test]
    async fn test_ingestion_stats_reads_job() {
        let client = Arc::new(InMemoryBedrockAgent::new().with_ingestion_job(IngestionJob {
            knowledge_base_id: "KB1".to_string(),
            data_source_id: "DS1".to_string(),
            ingestion_job_id: "JOB1".to_string(),
            status: IngestionJobStatus::Complete,
            description: None,
            statistics: Some(IngestionJobStatistics {
                documents_scanned: 10,
                new_documents_indexed: 7,
                documents_failed: 1,
                ..Default::default()
            }),
            failure_reasons: Vec::new(),
            started_at: None,
            updated_at: None,
        }));

        let stats = ingestion_stats(client, "KB1", "DS1", "JOB1").await.unwrap();

        assert_eq!(stats.job_id, "JOB1");
        assert!(stats.is_complete());
        assert_eq!(stats.documents_processed, 10);
        assert_eq!(stats.documents_failed, 1);
    }

    #[tokio::test]
    async fn test_ingestion_stats_missing_job() {
        let client = Arc::new(InMemoryBedrockAgent::new());

        let err = ingestion_stats(client, "KB1", "DS1", "JOB1").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_print_serializes_json() {
        assert!(print(&vec!["a"], true, Vec::<String>::new()).is_ok());
        assert!(print(&vec!["a"], false, vec!["a".to_string()]).is_ok());
    }
}
