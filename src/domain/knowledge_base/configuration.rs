//! Knowledge base configuration and vector storage settings

use serde::{Deserialize, Serialize};

/// How documents in a knowledge base are represented
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KnowledgeBaseConfiguration {
    /// Embeddings produced by a Bedrock embedding model
    Vector { embedding_model_arn: String },
}

impl KnowledgeBaseConfiguration {
    pub fn vector(embedding_model_arn: impl Into<String>) -> Self {
        Self::Vector {
            embedding_model_arn: embedding_model_arn.into(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Vector { .. } => "VECTOR",
        }
    }
}

/// Vector store backing a knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageConfiguration {
    OpenSearchServerless(OpenSearchServerlessConfiguration),
}

impl StorageConfiguration {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::OpenSearchServerless(_) => "OPENSEARCH_SERVERLESS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenSearchServerlessConfiguration {
    pub collection_arn: String,
    pub vector_index_name: String,
    pub field_mapping: OpenSearchServerlessFieldMapping,
}

/// Index fields holding the embedding, the chunk text and its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenSearchServerlessFieldMapping {
    pub vector_field: String,
    pub text_field: String,
    pub metadata_field: String,
}
