//! CLI module for the knowledge base connectors
//!
//! Provides the demo drivers and a few read-only inspection commands:
//! - `demo`: knowledge bases, S3, web crawler and KMS Lighthouse walkthrough
//! - `lighthouse-demo`: KMS Lighthouse basic, category and authenticated setups
//! - `knowledge-bases`, `data-sources`, `ingestion-jobs`, `ingestion-status`
//! - `connector-types`: the connector kinds the factory can build

pub mod demo;
pub mod inspect;
pub mod lighthouse;

use std::error::Error as _;
use std::fmt;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::domain::error::ConnectorError;
use crate::infrastructure::bedrock_agent::{BedrockAgentApi, BedrockAgentClient};
use crate::infrastructure::logging;

/// Manage Amazon Bedrock knowledge base data sources
#[derive(Parser)]
#[command(name = "kb-connectors")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Walk through knowledge base listing, S3, web crawler and KMS Lighthouse sources
    Demo(demo::DemoArgs),

    /// Walk through the KMS Lighthouse connector setups
    LighthouseDemo(lighthouse::LighthouseDemoArgs),

    /// List knowledge bases
    KnowledgeBases(inspect::KnowledgeBasesArgs),

    /// List the data sources of a knowledge base
    DataSources(inspect::DataSourcesArgs),

    /// List the ingestion jobs of a data source
    IngestionJobs(inspect::IngestionJobsArgs),

    /// Show the statistics of one ingestion job
    IngestionStatus(inspect::IngestionStatusArgs),

    /// List the supported connector types
    ConnectorTypes,
}

/// AWS overrides shared by every command talking to the service
#[derive(Args, Clone, Debug, Default)]
pub struct AwsArgs {
    /// AWS region (overrides config)
    #[arg(long)]
    pub region: Option<String>,

    /// Named AWS profile (overrides config)
    #[arg(long)]
    pub profile: Option<String>,

    /// Bedrock Agent endpoint URL (overrides config)
    #[arg(long)]
    pub endpoint_url: Option<String>,
}

/// Result of one demo step, printed as a heading followed by its lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Outcome {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.heading)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Load `.env` and configuration, apply CLI overrides and start logging
pub fn load_config(aws: &AwsArgs) -> AppConfig {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().unwrap_or_default();
    if let Some(region) = &aws.region {
        config.aws.region = Some(region.clone());
    }
    if let Some(profile) = &aws.profile {
        config.aws.profile = Some(profile.clone());
    }
    if let Some(endpoint_url) = &aws.endpoint_url {
        config.aws.endpoint_url = Some(endpoint_url.clone());
    }

    logging::init_logging(&config.logging);
    config
}

/// Shared Bedrock Agent client built from the resolved configuration
pub async fn connect(config: &AppConfig) -> Arc<dyn BedrockAgentApi> {
    Arc::new(BedrockAgentClient::from_settings(&config.aws).await)
}

/// Print the failure of a demo run on stderr and turn it into the command error
pub(crate) fn report(label: &str, result: Result<(), ConnectorError>) -> anyhow::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("{} Error: {}", label, err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            Err(anyhow::anyhow!("{} run aborted", label))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        let outcome = Outcome::new("S3 Data Source Demo")
            .line("Created S3 data source: DS0001")
            .lines(["Started ingestion job: JOB0002"]);

        assert_eq!(
            outcome.to_string(),
            "=== S3 Data Source Demo ===\nCreated S3 data source: DS0001\nStarted ingestion job: JOB0002\n"
        );
    }

    #[test]
    fn test_report_passes_success_through() {
        assert!(report("Connector", Ok(())).is_ok());
    }

    #[test]
    fn test_report_turns_connector_errors_into_command_errors() {
        let err = report("Connector", Err(ConnectorError::validation("bad bucket"))).unwrap_err();

        assert_eq!(err.to_string(), "Connector run aborted");
    }

    #[test]
    fn test_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "kb-connectors",
            "demo",
            "--knowledge-base-id",
            "KB1",
            "--region",
            "eu-west-1",
        ])
        .unwrap();

        match cli.command {
            Command::Demo(args) => {
                assert_eq!(args.knowledge_base_id, "KB1");
                assert_eq!(args.aws.region.as_deref(), Some("eu-west-1"));
            }
            _ => panic!("expected demo command"),
        }

        let cli = Cli::try_parse_from(["kb-connectors", "connector-types"]).unwrap();
        assert!(matches!(cli.command, Command::ConnectorTypes));
    }
}
