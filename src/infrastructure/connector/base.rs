//! State shared by every data source connector

use std::fmt;
use std::sync::Arc;

use crate::domain::connector::ConnectorConfig;
use crate::domain::data_source::{DataSourceConfiguration, DataSourceType};
use crate::domain::error::{ConnectorError, ConnectorResult};
use crate::infrastructure::bedrock_agent::BedrockAgentApi;

/// Client handle, target knowledge base and settings of a connector
#[derive(Clone)]
pub struct ConnectorBase {
    client: Arc<dyn BedrockAgentApi>,
    knowledge_base_id: String,
    config: ConnectorConfig,
}

impl ConnectorBase {
    pub fn new(
        client: Arc<dyn BedrockAgentApi>,
        knowledge_base_id: impl Into<String>,
        config: ConnectorConfig,
    ) -> Self {
        Self {
            client,
            knowledge_base_id: knowledge_base_id.into(),
            config,
        }
    }

    pub fn client(&self) -> &dyn BedrockAgentApi {
        self.client.as_ref()
    }

    pub fn knowledge_base_id(&self) -> &str {
        &self.knowledge_base_id
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }
}

impl fmt::Debug for ConnectorBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorBase")
            .field("knowledge_base_id", &self.knowledge_base_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Reject a configuration whose tag differs from `expected` or whose
/// payloads do not match that tag
pub(crate) fn ensure_type(
    configuration: &DataSourceConfiguration,
    expected: DataSourceType,
) -> ConnectorResult<()> {
    if configuration.data_source_type != expected {
        return Err(ConnectorError::validation(format!(
            "expected data source type {}, got {}",
            expected, configuration.data_source_type
        )));
    }
    if !configuration.payload_matches_type() {
        return Err(ConnectorError::validation(format!(
            "{} configuration is missing or mixed with another payload",
            expected
        )));
    }
    Ok(())
}
