//! Knowledge base lifecycle operations

use std::fmt;
use std::sync::Arc;

use crate::domain::error::ConnectorResult;
use crate::domain::knowledge_base::{
    CreateKnowledgeBaseRequest, DeletedKnowledgeBase, KnowledgeBase, KnowledgeBaseConfiguration,
    KnowledgeBaseSummary, OpenSearchServerlessConfiguration, OpenSearchServerlessFieldMapping,
    StorageConfiguration,
};
use crate::infrastructure::bedrock_agent::BedrockAgentApi;

/// Page size of `list_knowledge_bases`
pub const DEFAULT_KNOWLEDGE_BASE_PAGE_SIZE: u32 = 50;

/// Create, inspect and delete knowledge bases
#[derive(Clone)]
pub struct KnowledgeBaseManager {
    client: Arc<dyn BedrockAgentApi>,
    page_size: u32,
}

impl fmt::Debug for KnowledgeBaseManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnowledgeBaseManager")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl KnowledgeBaseManager {
    pub fn new(client: Arc<dyn BedrockAgentApi>) -> Self {
        Self {
            client,
            page_size: DEFAULT_KNOWLEDGE_BASE_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub async fn create_knowledge_base(
        &self,
        name: &str,
        description: &str,
        role_arn: &str,
        knowledge_base_configuration: KnowledgeBaseConfiguration,
        storage_configuration: StorageConfiguration,
    ) -> ConnectorResult<KnowledgeBase> {
        let request = CreateKnowledgeBaseRequest {
            name: name.to_string(),
            description: Some(description.to_string()).filter(|d| !d.is_empty()),
            role_arn: role_arn.to_string(),
            knowledge_base_configuration,
            storage_configuration,
            client_token: None,
        };

        let knowledge_base = self
            .client
            .create_knowledge_base(request)
            .await
            .map_err(|e| e.context(format!("Failed to create knowledge base: {}", name)))?;

        tracing::info!(
            knowledge_base_id = %knowledge_base.knowledge_base_id,
            name = %name,
            status = %knowledge_base.status,
            "Created knowledge base"
        );

        Ok(knowledge_base)
    }

    pub async fn get_knowledge_base(&self, knowledge_base_id: &str) -> ConnectorResult<KnowledgeBase> {
        self.client
            .get_knowledge_base(knowledge_base_id)
            .await
            .map_err(|e| e.context(format!("Failed to get knowledge base: {}", knowledge_base_id)))
    }

    pub async fn list_knowledge_bases(&self) -> ConnectorResult<Vec<KnowledgeBaseSummary>> {
        self.client
            .list_knowledge_bases(self.page_size)
            .await
            .map_err(|e| e.context("Failed to list knowledge bases"))
    }

    pub async fn delete_knowledge_base(
        &self,
        knowledge_base_id: &str,
    ) -> ConnectorResult<DeletedKnowledgeBase> {
        let deleted = self
            .client
            .delete_knowledge_base(knowledge_base_id)
            .await
            .map_err(|e| {
                e.context(format!(
                    "Failed to delete knowledge base: {}",
                    knowledge_base_id
                ))
            })?;

        tracing::info!(
            knowledge_base_id = %knowledge_base_id,
            status = %deleted.status,
            "Deleted knowledge base"
        );

        Ok(deleted)
    }

    /// `Ok(false)` only when the service reports the knowledge base as missing
    pub async fn knowledge_base_exists(&self, knowledge_base_id: &str) -> ConnectorResult<bool> {
        match self.get_knowledge_base(knowledge_base_id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn create_open_search_serverless_config(
        &self,
        collection_arn: &str,
        vector_index_name: &str,
        text_field: &str,
        vector_field: &str,
        metadata_field: &str,
    ) -> StorageConfiguration {
        StorageConfiguration::OpenSearchServerless(OpenSearchServerlessConfiguration {
            collection_arn: collection_arn.to_string(),
            vector_index_name: vector_index_name.to_string(),
            field_mapping: OpenSearchServerlessFieldMapping {
                vector_field: vector_field.to_string(),
                text_field: text_field.to_string(),
                metadata_field: metadata_field.to_string(),
            },
        })
    }

    pub fn vector_configuration(&self, embedding_model_arn: &str) -> KnowledgeBaseConfiguration {
        KnowledgeBaseConfiguration::vector(embedding_model_arn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ConnectorError;
    use crate::infrastructure::bedrock_agent::mock::{Failure, InMemoryBedrockAgent};
    use crate::infrastructure::bedrock_agent::MockBedrockAgentApi;

    const EMBEDDING_MODEL: &str =
        "arn:aws:bedrock:us-east-1::foundation-model/amazon.titan-embed-text-v2:0";

    #[tokio::test]
    async fn test_create_knowledge_base() {
        let client = Arc::new(InMemoryBedrockAgent::new());
        let manager = KnowledgeBaseManager::new(client.clone());

        let storage = manager.create_open_search_serverless_config(
            "arn:aws:aoss:us-east-1:123456789012:collection/kb",
            "kb-index",
            "text",
            "vector",
            "metadata",
        );
        let knowledge_base = manager
            .create_knowledge_base(
                "support-kb",
                "Support articles",
                "arn:aws:iam::123456789012:role/kb-role",
                manager.vector_configuration(EMBEDDING_MODEL),
                storage,
            )
            .await
            .unwrap();

        assert_eq!(knowledge_base.name, "support-kb");

        let requests = client.created_knowledge_base_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].knowledge_base_configuration,
            KnowledgeBaseConfiguration::Vector {
                embedding_model_arn: EMBEDDING_MODEL.to_string()
            }
        );
        match &requests[0].storage_configuration {
            StorageConfiguration::OpenSearchServerless(config) => {
                assert_eq!(config.vector_index_name, "kb-index");
                assert_eq!(config.field_mapping.text_field, "text");
                assert_eq!(config.field_mapping.vector_field, "vector");
                assert_eq!(config.field_mapping.metadata_field, "metadata");
            }
        }
    }

    #[tokio::test]
    async fn test_list_uses_page_size() {
        let mut mock = MockBedrockAgentApi::new();
        mock.expect_list_knowledge_bases()
            .withf(|max| *max == 50)
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let manager = KnowledgeBaseManager::new(Arc::new(mock));
        assert!(manager.list_knowledge_bases().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_bounded() {
        let client = Arc::new(
            InMemoryBedrockAgent::new()
                .with_knowledge_base("KB1", "one")
                .with_knowledge_base("KB2", "two")
                .with_knowledge_base("KB3", "three"),
        );
        let manager = KnowledgeBaseManager::new(client).with_page_size(2);

        assert_eq!(manager.list_knowledge_bases().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_knowledge_base_exists() {
        let client = Arc::new(InMemoryBedrockAgent::new().with_knowledge_base("KB1", "one"));
        let manager = KnowledgeBaseManager::new(client);

        assert!(manager.knowledge_base_exists("KB1").await.unwrap());
        assert!(!manager.knowledge_base_exists("KB2").await.unwrap());
    }

    #[tokio::test]
    async fn test_knowledge_base_exists_propagates_remote_failures() {
        let client = Arc::new(
            InMemoryBedrockAgent::new().with_failure("GetKnowledgeBase", Failure::Throttled),
        );
        let manager = KnowledgeBaseManager::new(client);

        let err = manager.knowledge_base_exists("KB1").await.unwrap_err();
        assert!(matches!(err, ConnectorError::RemoteCall { .. }));
        assert!(err.message().starts_with("Failed to get knowledge base: KB1"));
    }

    #[tokio::test]
    async fn test_delete_knowledge_base() {
        let client = Arc::new(InMemoryBedrockAgent::new().with_knowledge_base("KB1", "one"));
        let manager = KnowledgeBaseManager::new(client);

        let deleted = manager.delete_knowledge_base("KB1").await.unwrap();
        assert_eq!(deleted.status, "DELETING");

        let err = manager.delete_knowledge_base("KB1").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
