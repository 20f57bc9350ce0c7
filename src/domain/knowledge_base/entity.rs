//! Knowledge base entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::configuration::{KnowledgeBaseConfiguration, StorageConfiguration};

/// Knowledge base as reported by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub knowledge_base_id: String,
    pub knowledge_base_arn: String,
    pub name: String,
    pub description: Option<String>,
    pub role_arn: String,
    /// Service status, e.g. `ACTIVE` or `CREATING`
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failure_reasons: Vec<String>,
}

/// Entry of a knowledge base listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBaseSummary {
    pub knowledge_base_id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Acknowledgement of a delete call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedKnowledgeBase {
    pub knowledge_base_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateKnowledgeBaseRequest {
    pub name: String,
    pub description: Option<String>,
    /// IAM role the service assumes to reach the model and the vector store
    pub role_arn: String,
    pub knowledge_base_configuration: KnowledgeBaseConfiguration,
    pub storage_configuration: StorageConfiguration,
    pub client_token: Option<String>,
}
