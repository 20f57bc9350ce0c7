//! Knowledge base domain - service entities and vector store settings

mod configuration;
mod entity;

pub use configuration::{
    KnowledgeBaseConfiguration, OpenSearchServerlessConfiguration, OpenSearchServerlessFieldMapping,
    StorageConfiguration,
};
pub use entity::{
    CreateKnowledgeBaseRequest, DeletedKnowledgeBase, KnowledgeBase, KnowledgeBaseSummary,
};
