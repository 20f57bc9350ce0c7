//! Infrastructure layer - AWS Bedrock Agent plumbing and connector implementations

pub mod bedrock_agent;
pub mod connector;
pub mod knowledge_base;
pub mod logging;

pub use bedrock_agent::{BedrockAgentApi, BedrockAgentClient};
pub use connector::{Connector, ConnectorFactory, DataSourceConnector};
pub use knowledge_base::KnowledgeBaseManager;
