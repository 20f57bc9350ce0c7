use clap::Parser;
use kb_connectors::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo(args) => cli::demo::run(args).await,
        Command::LighthouseDemo(args) => cli::lighthouse::run(args).await,
        Command::KnowledgeBases(args) => cli::inspect::knowledge_bases(args).await,
        Command::DataSources(args) => cli::inspect::data_sources(args).await,
        Command::IngestionJobs(args) => cli::inspect::ingestion_jobs(args).await,
        Command::IngestionStatus(args) => cli::inspect::ingestion_status(args).await,
        Command::ConnectorTypes => cli::inspect::connector_types(),
    }
}
