//! Knowledge base management

mod manager;

pub use manager::{KnowledgeBaseManager, DEFAULT_KNOWLEDGE_BASE_PAGE_SIZE};
