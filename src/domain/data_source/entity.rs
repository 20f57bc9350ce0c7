//! Data source entities and requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::configuration::DataSourceConfiguration;

/// Data source as reported by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub knowledge_base_id: String,
    pub data_source_id: String,
    pub name: String,
    /// Service status, e.g. `AVAILABLE` or `DELETING`
    pub status: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failure_reasons: Vec<String>,
}

/// Entry of a data source listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceSummary {
    pub knowledge_base_id: String,
    pub data_source_id: String,
    pub name: String,
    pub status: String,
    pub description: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Acknowledgement of a delete call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedDataSource {
    pub knowledge_base_id: String,
    pub data_source_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDataSourceRequest {
    pub knowledge_base_id: String,
    pub name: String,
    pub description: Option<String>,
    pub data_source_configuration: DataSourceConfiguration,
    /// Idempotency key
    pub client_token: Option<String>,
}

impl CreateDataSourceRequest {
    pub fn new(
        knowledge_base_id: impl Into<String>,
        name: impl Into<String>,
        data_source_configuration: DataSourceConfiguration,
    ) -> Self {
        Self {
            knowledge_base_id: knowledge_base_id.into(),
            name: name.into(),
            description: None,
            data_source_configuration,
            client_token: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_client_token(mut self, client_token: impl Into<String>) -> Self {
        self.client_token = Some(client_token.into());
        self
    }
}

/// Update of an existing data source; the service requires the name on every update
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDataSourceRequest {
    pub knowledge_base_id: String,
    pub data_source_id: String,
    pub name: String,
    pub description: Option<String>,
    pub data_source_configuration: DataSourceConfiguration,
}

impl UpdateDataSourceRequest {
    pub fn new(
        knowledge_base_id: impl Into<String>,
        data_source_id: impl Into<String>,
        name: impl Into<String>,
        data_source_configuration: DataSourceConfiguration,
    ) -> Self {
        Self {
            knowledge_base_id: knowledge_base_id.into(),
            data_source_id: data_source_id.into(),
            name: name.into(),
            description: None,
            data_source_configuration,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
