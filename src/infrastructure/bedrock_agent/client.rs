//! Bedrock Agent control-plane client

use std::fmt::Debug;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::convert;
use super::error::{missing_payload, sdk_error};
use crate::config::AwsConfig;
use crate::domain::data_source::{
    CreateDataSourceRequest, DataSource, DataSourceSummary, DeletedDataSource,
    UpdateDataSourceRequest,
};
use crate::domain::error::ConnectorResult;
use crate::domain::ingestion::{IngestionJob, IngestionJobSummary, StartIngestionJobRequest};
use crate::domain::knowledge_base::{
    CreateKnowledgeBaseRequest, DeletedKnowledgeBase, KnowledgeBase, KnowledgeBaseSummary,
};

/// Operations of the Bedrock Agent service used by connectors and the manager
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BedrockAgentApi: Send + Sync + Debug {
    async fn create_data_source(&self, request: CreateDataSourceRequest)
    -> ConnectorResult<DataSource>;

    async fn update_data_source(&self, request: UpdateDataSourceRequest)
    -> ConnectorResult<DataSource>;

    async fn delete_data_source(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
    ) -> ConnectorResult<DeletedDataSource>;

    async fn get_data_source(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
    ) -> ConnectorResult<DataSource>;

    async fn list_data_sources(
        &self,
        knowledge_base_id: &str,
        max_results: u32,
    ) -> ConnectorResult<Vec<DataSourceSummary>>;

    async fn start_ingestion_job(
        &self,
        request: StartIngestionJobRequest,
    ) -> ConnectorResult<IngestionJob>;

    async fn get_ingestion_job(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
        ingestion_job_id: &str,
    ) -> ConnectorResult<IngestionJob>;

    async fn list_ingestion_jobs(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
        max_results: u32,
    ) -> ConnectorResult<Vec<IngestionJobSummary>>;

    async fn create_knowledge_base(
        &self,
        request: CreateKnowledgeBaseRequest,
    ) -> ConnectorResult<KnowledgeBase>;

    async fn get_knowledge_base(&self, knowledge_base_id: &str) -> ConnectorResult<KnowledgeBase>;

    async fn list_knowledge_bases(&self, max_results: u32)
    -> ConnectorResult<Vec<KnowledgeBaseSummary>>;

    async fn delete_knowledge_base(
        &self,
        knowledge_base_id: &str,
    ) -> ConnectorResult<DeletedKnowledgeBase>;
}

/// Real Bedrock Agent client backed by the AWS SDK
#[derive(Debug, Clone)]
pub struct BedrockAgentClient {
    client: aws_sdk_bedrockagent::Client,
}

impl BedrockAgentClient {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_bedrockagent::Client::new(config),
        }
    }

    pub fn from_client(client: aws_sdk_bedrockagent::Client) -> Self {
        Self { client }
    }

    /// Load credentials and region from the default provider chain, overridden by `settings`
    pub async fn from_settings(settings: &AwsConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = &settings.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        tracing::debug!(
            region = ?sdk_config.region().map(|r| r.as_ref().to_string()),
            "Loaded AWS configuration"
        );

        Self::new(&sdk_config)
    }

    fn max_results(value: u32) -> i32 {
        i32::try_from(value).unwrap_or(i32::MAX)
    }
}

#[async_trait]
impl BedrockAgentApi for BedrockAgentClient {
    async fn create_data_source(
        &self,
        request: CreateDataSourceRequest,
    ) -> ConnectorResult<DataSource> {
        let configuration = convert::data_source_configuration(&request.data_source_configuration)?;

        let output = self
            .client
            .create_data_source()
            .knowledge_base_id(request.knowledge_base_id)
            .name(request.name)
            .set_description(request.description)
            .data_source_configuration(configuration)
            .set_client_token(request.client_token)
            .send()
            .await
            .map_err(|e| sdk_error("CreateDataSource", e))?;

        output
            .data_source()
            .map(convert::data_source)
            .ok_or_else(|| missing_payload("CreateDataSource", "dataSource"))
    }

    async fn update_data_source(
        &self,
        request: UpdateDataSourceRequest,
    ) -> ConnectorResult<DataSource> {
        let configuration = convert::data_source_configuration(&request.data_source_configuration)?;

        let output = self
            .client
            .update_data_source()
            .knowledge_base_id(request.knowledge_base_id)
            .data_source_id(request.data_source_id)
            .name(request.name)
            .set_description(request.description)
            .data_source_configuration(configuration)
            .send()
            .await
            .map_err(|e| sdk_error("UpdateDataSource", e))?;

        output
            .data_source()
            .map(convert::data_source)
            .ok_or_else(|| missing_payload("UpdateDataSource", "dataSource"))
    }

    async fn delete_data_source(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
    ) -> ConnectorResult<DeletedDataSource> {
        let output = self
            .client
            .delete_data_source()
            .knowledge_base_id(knowledge_base_id)
            .data_source_id(data_source_id)
            .send()
            .await
            .map_err(|e| sdk_error("DeleteDataSource", e))?;

        Ok(DeletedDataSource {
            knowledge_base_id: output.knowledge_base_id().to_string(),
            data_source_id: output.data_source_id().to_string(),
            status: output.status().as_str().to_string(),
        })
    }

    async fn get_data_source(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
    ) -> ConnectorResult<DataSource> {
        let output = self
            .client
            .get_data_source()
            .knowledge_base_id(knowledge_base_id)
            .data_source_id(data_source_id)
            .send()
            .await
            .map_err(|e| sdk_error("GetDataSource", e))?;

        output
            .data_source()
            .map(convert::data_source)
            .ok_or_else(|| missing_payload("GetDataSource", "dataSource"))
    }

    async fn list_data_sources(
        &self,
        knowledge_base_id: &str,
        max_results: u32,
    ) -> ConnectorResult<Vec<DataSourceSummary>> {
        let output = self
            .client
            .list_data_sources()
            .knowledge_base_id(knowledge_base_id)
            .max_results(Self::max_results(max_results))
            .send()
            .await
            .map_err(|e| sdk_error("ListDataSources", e))?;

        Ok(output
            .data_source_summaries()
            .iter()
            .map(convert::data_source_summary)
            .collect())
    }

    async fn start_ingestion_job(
        &self,
        request: StartIngestionJobRequest,
    ) -> ConnectorResult<IngestionJob> {
        let output = self
            .client
            .start_ingestion_job()
            .knowledge_base_id(request.knowledge_base_id)
            .data_source_id(request.data_source_id)
            .set_client_token(request.client_token)
            .set_description(request.description)
            .send()
            .await
            .map_err(|e| sdk_error("StartIngestionJob", e))?;

        output
            .ingestion_job()
            .map(convert::ingestion_job)
            .ok_or_else(|| missing_payload("StartIngestionJob", "ingestionJob"))
    }

    async fn get_ingestion_job(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
        ingestion_job_id: &str,
    ) -> ConnectorResult<IngestionJob> {
        let output = self
            .client
            .get_ingestion_job()
            .knowledge_base_id(knowledge_base_id)
            .data_source_id(data_source_id)
            .ingestion_job_id(ingestion_job_id)
            .send()
            .await
            .map_err(|e| sdk_error("GetIngestionJob", e))?;

        output
            .ingestion_job()
            .map(convert::ingestion_job)
            .ok_or_else(|| missing_payload("GetIngestionJob", "ingestionJob"))
    }

    async fn list_ingestion_jobs(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
        max_results: u32,
    ) -> ConnectorResult<Vec<IngestionJobSummary>> {
        let output = self
            .client
            .list_ingestion_jobs()
            .knowledge_base_id(knowledge_base_id)
            .data_source_id(data_source_id)
            .max_results(Self::max_results(max_results))
            .send()
            .await
            .map_err(|e| sdk_error("ListIngestionJobs", e))?;

        Ok(output
            .ingestion_job_summaries()
            .iter()
            .map(convert::ingestion_job_summary)
            .collect())
    }

    async fn create_knowledge_base(
        &self,
        request: CreateKnowledgeBaseRequest,
    ) -> ConnectorResult<KnowledgeBase> {
        let knowledge_base_configuration =
            convert::knowledge_base_configuration(&request.knowledge_base_configuration)?;
        let storage_configuration = convert::storage_configuration(&request.storage_configuration)?;

        let output = self
            .client
            .create_knowledge_base()
            .name(request.name)
            .set_description(request.description)
            .role_arn(request.role_arn)
            .knowledge_base_configuration(knowledge_base_configuration)
            .storage_configuration(storage_configuration)
            .set_client_token(request.client_token)
            .send()
            .await
            .map_err(|e| sdk_error("CreateKnowledgeBase", e))?;

        output
            .knowledge_base()
            .map(convert::knowledge_base)
            .ok_or_else(|| missing_payload("CreateKnowledgeBase", "knowledgeBase"))
    }

    async fn get_knowledge_base(&self, knowledge_base_id: &str) -> ConnectorResult<KnowledgeBase> {
        let output = self
            .client
            .get_knowledge_base()
            .knowledge_base_id(knowledge_base_id)
            .send()
            .await
            .map_err(|e| sdk_error("GetKnowledgeBase", e))?;

        output
            .knowledge_base()
            .map(convert::knowledge_base)
            .ok_or_else(|| missing_payload("GetKnowledgeBase", "knowledgeBase"))
    }

    async fn list_knowledge_bases(
        &self,
        max_results: u32,
    ) -> ConnectorResult<Vec<KnowledgeBaseSummary>> {
        let output = self
            .client
            .list_knowledge_bases()
            .max_results(Self::max_results(max_results))
            .send()
            .await
            .map_err(|e| sdk_error("ListKnowledgeBases", e))?;

        Ok(output
            .knowledge_base_summaries()
            .iter()
            .map(convert::knowledge_base_summary)
            .collect())
    }

    async fn delete_knowledge_base(
        &self,
        knowledge_base_id: &str,
    ) -> ConnectorResult<DeletedKnowledgeBase> {
        let output = self
            .client
            .delete_knowledge_base()
            .knowledge_base_id(knowledge_base_id)
            .send()
            .await
            .map_err(|e| sdk_error("DeleteKnowledgeBase", e))?;

        Ok(DeletedKnowledgeBase {
            knowledge_base_id: output.knowledge_base_id().to_string(),
            status: output.status().as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_results_saturates() {
        assert_eq!(BedrockAgentClient::max_results(50), 50);
        assert_eq!(BedrockAgentClient::max_results(u32::MAX), i32::MAX);
    }

    #[tokio::test]
    async fn test_from_settings_uses_region_override() {
        let settings = AwsConfig {
            region: Some("eu-west-1".to_string()),
            profile: None,
            endpoint_url: Some("http://localhost:4566".to_string()),
        };

        let client = BedrockAgentClient::from_settings(&settings).await;
        assert_eq!(
            client.client.config().region().map(|r| r.as_ref()),
            Some("eu-west-1")
        );
    }
}
