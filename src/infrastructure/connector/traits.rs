//! Capability shared by all data source connectors

use std::fmt::Debug;

use async_trait::async_trait;
use uuid::Uuid;

use super::base::ConnectorBase;
use crate::domain::connector::{ConnectorConfig, ConnectorType};
use crate::domain::data_source::{
    CreateDataSourceRequest, DataSource, DataSourceConfiguration, DataSourceSummary,
    DeletedDataSource, UpdateDataSourceRequest,
};
use crate::domain::error::ConnectorResult;
use crate::domain::ingestion::{IngestionJob, IngestionJobSummary, StartIngestionJobRequest};

/// Data source management against one knowledge base
///
/// Implementors supply their kind, their shared state and a shallow
/// configuration check; every remote operation is provided on top of those.
/// Each operation issues exactly one call and never retries.
#[async_trait]
pub trait DataSourceConnector: Send + Sync + Debug {
    fn connector_type(&self) -> ConnectorType;

    fn base(&self) -> &ConnectorBase;

    /// Shallow structural check of `configuration` for this connector kind
    fn validate_configuration(&self, configuration: &DataSourceConfiguration)
    -> ConnectorResult<()>;

    fn knowledge_base_id(&self) -> &str {
        self.base().knowledge_base_id()
    }

    fn config(&self) -> &ConnectorConfig {
        self.base().config()
    }

    /// Validate (when enabled) and create a data source with a fresh idempotency token
    async fn create_data_source(
        &self,
        name: &str,
        configuration: DataSourceConfiguration,
    ) -> ConnectorResult<DataSource> {
        let label = self.connector_type().label();
        self.ensure_valid(&configuration)?;

        let request = CreateDataSourceRequest::new(self.knowledge_base_id(), name, configuration)
            .with_client_token(Uuid::new_v4().to_string());

        let data_source = self
            .base()
            .client()
            .create_data_source(request)
            .await
            .map_err(|e| e.context(format!("Failed to create {} data source: {}", label, name)))?;

        tracing::info!(
            connector = %self.connector_type(),
            knowledge_base_id = %self.knowledge_base_id(),
            data_source_id = %data_source.data_source_id,
            name = %name,
            "Created data source"
        );

        Ok(data_source)
    }

    /// Validate (when enabled) and replace the configuration of a data source
    async fn update_data_source(
        &self,
        data_source_id: &str,
        name: &str,
        configuration: DataSourceConfiguration,
    ) -> ConnectorResult<DataSource> {
        let label = self.connector_type().label();
        self.ensure_valid(&configuration)?;

        let request = UpdateDataSourceRequest::new(
            self.knowledge_base_id(),
            data_source_id,
            name,
            configuration,
        );

        let data_source = self
            .base()
            .client()
            .update_data_source(request)
            .await
            .map_err(|e| {
                e.context(format!(
                    "Failed to update {} data source: {}",
                    label, data_source_id
                ))
            })?;

        tracing::info!(
            connector = %self.connector_type(),
            data_source_id = %data_source_id,
            "Updated data source"
        );

        Ok(data_source)
    }

    async fn delete_data_source(&self, data_source_id: &str) -> ConnectorResult<DeletedDataSource> {
        let label = self.connector_type().label();

        let deleted = self
            .base()
            .client()
            .delete_data_source(self.knowledge_base_id(), data_source_id)
            .await
            .map_err(|e| {
                e.context(format!(
                    "Failed to delete {} data source: {}",
                    label, data_source_id
                ))
            })?;

        tracing::info!(
            connector = %self.connector_type(),
            data_source_id = %data_source_id,
            status = %deleted.status,
            "Deleted data source"
        );

        Ok(deleted)
    }

    /// Data sources of the knowledge base, at most `max_results`
    async fn list_data_sources(&self) -> ConnectorResult<Vec<DataSourceSummary>> {
        self.base()
            .client()
            .list_data_sources(self.knowledge_base_id(), self.config().max_results)
            .await
            .map_err(|e| e.context("Failed to list data sources"))
    }

    async fn get_data_source(&self, data_source_id: &str) -> ConnectorResult<DataSource> {
        self.base()
            .client()
            .get_data_source(self.knowledge_base_id(), data_source_id)
            .await
            .map_err(|e| e.context(format!("Failed to get data source: {}", data_source_id)))
    }

    /// Start an ingestion job; the token is forwarded only when given
    async fn start_ingestion(
        &self,
        data_source_id: &str,
        client_token: Option<&str>,
    ) -> ConnectorResult<IngestionJob> {
        let mut request = StartIngestionJobRequest::new(self.knowledge_base_id(), data_source_id);
        if let Some(token) = client_token {
            request = request.with_client_token(token);
        }

        let job = self
            .base()
            .client()
            .start_ingestion_job(request)
            .await
            .map_err(|e| {
                e.context(format!(
                    "Failed to start ingestion for data source: {}",
                    data_source_id
                ))
            })?;

        tracing::info!(
            connector = %self.connector_type(),
            data_source_id = %data_source_id,
            ingestion_job_id = %job.ingestion_job_id,
            status = %job.status,
            "Started ingestion job"
        );

        Ok(job)
    }

    async fn get_ingestion_job(
        &self,
        data_source_id: &str,
        ingestion_job_id: &str,
    ) -> ConnectorResult<IngestionJob> {
        self.base()
            .client()
            .get_ingestion_job(self.knowledge_base_id(), data_source_id, ingestion_job_id)
            .await
            .map_err(|e| e.context("Failed to get ingestion job status"))
    }

    async fn list_ingestion_jobs(
        &self,
        data_source_id: &str,
    ) -> ConnectorResult<Vec<IngestionJobSummary>> {
        self.base()
            .client()
            .list_ingestion_jobs(
                self.knowledge_base_id(),
                data_source_id,
                self.config().max_results,
            )
            .await
            .map_err(|e| e.context("Failed to list ingestion jobs"))
    }

    /// `Ok(false)` only when the service reports the data source as missing
    async fn data_source_exists(&self, data_source_id: &str) -> ConnectorResult<bool> {
        match self.get_data_source(data_source_id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Run `validate_configuration` unless validation is disabled in the config
    fn ensure_valid(&self, configuration: &DataSourceConfiguration) -> ConnectorResult<()> {
        if !self.config().enable_validation {
            return Ok(());
        }

        self.validate_configuration(configuration).map_err(|e| {
            tracing::warn!(
                connector = %self.connector_type(),
                error = %e,
                "Rejected data source configuration"
            );
            e.context(format!(
                "Invalid {} data source configuration",
                self.connector_type().label()
            ))
        })
    }
}
