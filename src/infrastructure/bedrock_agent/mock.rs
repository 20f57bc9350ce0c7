//! In-memory Bedrock Agent double for connector and manager tests

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::client::BedrockAgentApi;
use crate::domain::data_source::{
    CreateDataSourceRequest, DataSource, DataSourceSummary, DeletedDataSource,
    UpdateDataSourceRequest,
};
use crate::domain::error::{ConnectorError, ConnectorResult};
use crate::domain::ingestion::{
    IngestionJob, IngestionJobStatus, IngestionJobSummary, StartIngestionJobRequest,
};
use crate::domain::knowledge_base::{
    CreateKnowledgeBaseRequest, DeletedKnowledgeBase, KnowledgeBase, KnowledgeBaseSummary,
};

/// Failure injected for a named operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    NotFound,
    Throttled,
}

impl Failure {
    fn into_error(self, operation: &str) -> ConnectorError {
        match self {
            Self::NotFound => ConnectorError::not_found(format!(
                "{} failed: ResourceNotFoundException",
                operation
            )),
            Self::Throttled => ConnectorError::remote_call(
                format!("{} request failed", operation),
                std::io::Error::other("ThrottlingException: Rate exceeded"),
            ),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    next_id: u32,
    data_sources: BTreeMap<(String, String), DataSource>,
    ingestion_jobs: BTreeMap<(String, String), Vec<IngestionJob>>,
    knowledge_bases: BTreeMap<String, KnowledgeBase>,
    created: Vec<CreateDataSourceRequest>,
    updated: Vec<UpdateDataSourceRequest>,
    started: Vec<StartIngestionJobRequest>,
    created_knowledge_bases: Vec<CreateKnowledgeBaseRequest>,
    calls: Vec<String>,
}

impl State {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}{:04}", prefix, self.next_id)
    }
}

/// Stateful stand-in for the Bedrock Agent service
#[derive(Debug, Default)]
pub struct InMemoryBedrockAgent {
    state: Mutex<State>,
    failures: Mutex<HashMap<String, Failure>>,
}

impl InMemoryBedrockAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call of `operation` (e.g. `"GetDataSource"`) fail
    pub fn with_failure(self, operation: &str, failure: Failure) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(operation.to_string(), failure);
        self
    }

    pub fn with_knowledge_base(self, knowledge_base_id: &str, name: &str) -> Self {
        self.state.lock().unwrap().knowledge_bases.insert(
            knowledge_base_id.to_string(),
            KnowledgeBase {
                knowledge_base_id: knowledge_base_id.to_string(),
                knowledge_base_arn: format!(
                    "arn:aws:bedrock:us-east-1:123456789012:knowledge-base/{}",
                    knowledge_base_id
                ),
                name: name.to_string(),
                description: None,
                role_arn: "arn:aws:iam::123456789012:role/kb-role".to_string(),
                status: "ACTIVE".to_string(),
                created_at: Some(Utc::now()),
                updated_at: Some(Utc::now()),
                failure_reasons: Vec::new(),
            },
        );
        self
    }

    pub fn with_data_source(self, knowledge_base_id: &str, data_source_id: &str, name: &str) -> Self {
        self.state.lock().unwrap().data_sources.insert(
            (knowledge_base_id.to_string(), data_source_id.to_string()),
            data_source(knowledge_base_id, data_source_id, name, None),
        );
        self
    }

    pub fn with_ingestion_job(self, job: IngestionJob) -> Self {
        self.state
            .lock()
            .unwrap()
            .ingestion_jobs
            .entry((job.knowledge_base_id.clone(), job.data_source_id.clone()))
            .or_default()
            .push(job);
        self
    }

    pub fn created_requests(&self) -> Vec<CreateDataSourceRequest> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn updated_requests(&self) -> Vec<UpdateDataSourceRequest> {
        self.state.lock().unwrap().updated.clone()
    }

    pub fn started_requests(&self) -> Vec<StartIngestionJobRequest> {
        self.state.lock().unwrap().started.clone()
    }

    pub fn created_knowledge_base_requests(&self) -> Vec<CreateKnowledgeBaseRequest> {
        self.state.lock().unwrap().created_knowledge_bases.clone()
    }

    /// Operation names in call order
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn enter(&self, operation: &str) -> ConnectorResult<()> {
        self.state.lock().unwrap().calls.push(operation.to_string());

        match self.failures.lock().unwrap().get(operation) {
            Some(failure) => Err(failure.into_error(operation)),
            None => Ok(()),
        }
    }
}

fn data_source(
    knowledge_base_id: &str,
    data_source_id: &str,
    name: &str,
    description: Option<String>,
) -> DataSource {
    let now = Utc::now();
    DataSource {
        knowledge_base_id: knowledge_base_id.to_string(),
        data_source_id: data_source_id.to_string(),
        name: name.to_string(),
        status: "AVAILABLE".to_string(),
        description,
        created_at: Some(now),
        updated_at: Some(now),
        failure_reasons: Vec::new(),
    }
}

fn not_found(operation: &str, what: &str) -> ConnectorError {
    Failure::NotFound.into_error(operation).context(what)
}

#[async_trait]
impl BedrockAgentApi for InMemoryBedrockAgent {
    async fn create_data_source(
        &self,
        request: CreateDataSourceRequest,
    ) -> ConnectorResult<DataSource> {
        self.enter("CreateDataSource")?;

        let mut state = self.state.lock().unwrap();
        let id = state.next_id("DS");
        let created = data_source(
            &request.knowledge_base_id,
            &id,
            &request.name,
            request.description.clone(),
        );
        state.data_sources.insert(
            (request.knowledge_base_id.clone(), id),
            created.clone(),
        );
        state.created.push(request);
        Ok(created)
    }

    async fn update_data_source(
        &self,
        request: UpdateDataSourceRequest,
    ) -> ConnectorResult<DataSource> {
        self.enter("UpdateDataSource")?;

        let mut state = self.state.lock().unwrap();
        let key = (
            request.knowledge_base_id.clone(),
            request.data_source_id.clone(),
        );
        let updated = match state.data_sources.get_mut(&key) {
            Some(existing) => {
                existing.name = request.name.clone();
                existing.description = request.description.clone();
                existing.updated_at = Some(Utc::now());
                existing.clone()
            }
            None => {
                return Err(not_found("UpdateDataSource", &request.data_source_id));
            }
        };
        state.updated.push(request);
        Ok(updated)
    }

    async fn delete_data_source(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
    ) -> ConnectorResult<DeletedDataSource> {
        self.enter("DeleteDataSource")?;

        let mut state = self.state.lock().unwrap();
        state
            .data_sources
            .remove(&(knowledge_base_id.to_string(), data_source_id.to_string()))
            .map(|_| DeletedDataSource {
                knowledge_base_id: knowledge_base_id.to_string(),
                data_source_id: data_source_id.to_string(),
                status: "DELETING".to_string(),
            })
            .ok_or_else(|| not_found("DeleteDataSource", data_source_id))
    }

    async fn get_data_source(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
    ) -> ConnectorResult<DataSource> {
        self.enter("GetDataSource")?;

        self.state
            .lock()
            .unwrap()
            .data_sources
            .get(&(knowledge_base_id.to_string(), data_source_id.to_string()))
            .cloned()
            .ok_or_else(|| not_found("GetDataSource", data_source_id))
    }

    async fn list_data_sources(
        &self,
        knowledge_base_id: &str,
        max_results: u32,
    ) -> ConnectorResult<Vec<DataSourceSummary>> {
        self.enter("ListDataSources")?;

        Ok(self
            .state
            .lock()
            .unwrap()
            .data_sources
            .values()
            .filter(|ds| ds.knowledge_base_id == knowledge_base_id)
            .take(max_results as usize)
            .map(|ds| DataSourceSummary {
                knowledge_base_id: ds.knowledge_base_id.clone(),
                data_source_id: ds.data_source_id.clone(),
                name: ds.name.clone(),
                status: ds.status.clone(),
                description: ds.description.clone(),
                updated_at: ds.updated_at,
            })
            .collect())
    }

    async fn start_ingestion_job(
        &self,
        request: StartIngestionJobRequest,
    ) -> ConnectorResult<IngestionJob> {
        self.enter("StartIngestionJob")?;

        let mut state = self.state.lock().unwrap();
        let key = (
            request.knowledge_base_id.clone(),
            request.data_source_id.clone(),
        );
        if !state.data_sources.contains_key(&key) {
            return Err(not_found("StartIngestionJob", &request.data_source_id));
        }

        let job = IngestionJob {
            knowledge_base_id: request.knowledge_base_id.clone(),
            data_source_id: request.data_source_id.clone(),
            ingestion_job_id: state.next_id("JOB"),
            status: IngestionJobStatus::Starting,
            description: request.description.clone(),
            statistics: None,
            failure_reasons: Vec::new(),
            started_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        };
        state.ingestion_jobs.entry(key).or_default().push(job.clone());
        state.started.push(request);
        Ok(job)
    }

    async fn get_ingestion_job(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
        ingestion_job_id: &str,
    ) -> ConnectorResult<IngestionJob> {
        self.enter("GetIngestionJob")?;

        self.state
            .lock()
            .unwrap()
            .ingestion_jobs
            .get(&(knowledge_base_id.to_string(), data_source_id.to_string()))
            .and_then(|jobs| jobs.iter().find(|job| job.ingestion_job_id == ingestion_job_id))
            .cloned()
            .ok_or_else(|| not_found("GetIngestionJob", ingestion_job_id))
    }

    async fn list_ingestion_jobs(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
        max_results: u32,
    ) -> ConnectorResult<Vec<IngestionJobSummary>> {
        self.enter("ListIngestionJobs")?;

        let state = self.state.lock().unwrap();
        let jobs = state
            .ingestion_jobs
            .get(&(knowledge_base_id.to_string(), data_source_id.to_string()))
            .map(|jobs| jobs.as_slice())
            .unwrap_or_default();

        Ok(jobs
            .iter()
            .take(max_results as usize)
            .map(|job| IngestionJobSummary {
                knowledge_base_id: job.knowledge_base_id.clone(),
                data_source_id: job.data_source_id.clone(),
                ingestion_job_id: job.ingestion_job_id.clone(),
                status: job.status.clone(),
                description: job.description.clone(),
                statistics: job.statistics,
                started_at: job.started_at,
                updated_at: job.updated_at,
            })
            .collect())
    }

    async fn create_knowledge_base(
        &self,
        request: CreateKnowledgeBaseRequest,
    ) -> ConnectorResult<KnowledgeBase> {
        self.enter("CreateKnowledgeBase")?;

        let mut state = self.state.lock().unwrap();
        let id = state.next_id("KB");
        let knowledge_base = KnowledgeBase {
            knowledge_base_id: id.clone(),
            knowledge_base_arn: format!(
                "arn:aws:bedrock:us-east-1:123456789012:knowledge-base/{}",
                id
            ),
            name: request.name.clone(),
            description: request.description.clone(),
            role_arn: request.role_arn.clone(),
            status: "CREATING".to_string(),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
            failure_reasons: Vec::new(),
        };
        state.knowledge_bases.insert(id, knowledge_base.clone());
        state.created_knowledge_bases.push(request);
        Ok(knowledge_base)
    }

    async fn get_knowledge_base(&self, knowledge_base_id: &str) -> ConnectorResult<KnowledgeBase> {
        self.enter("GetKnowledgeBase")?;

        self.state
            .lock()
            .unwrap()
            .knowledge_bases
            .get(knowledge_base_id)
            .cloned()
            .ok_or_else(|| not_found("GetKnowledgeBase", knowledge_base_id))
    }

    async fn list_knowledge_bases(
        &self,
        max_results: u32,
    ) -> ConnectorResult<Vec<KnowledgeBaseSummary>> {
        self.enter("ListKnowledgeBases")?;

        Ok(self
            .state
            .lock()
            .unwrap()
            .knowledge_bases
            .values()
            .take(max_results as usize)
            .map(|kb| KnowledgeBaseSummary {
                knowledge_base_id: kb.knowledge_base_id.clone(),
                name: kb.name.clone(),
                description: kb.description.clone(),
                status: kb.status.clone(),
                updated_at: kb.updated_at,
            })
            .collect())
    }

    async fn delete_knowledge_base(
        &self,
        knowledge_base_id: &str,
    ) -> ConnectorResult<DeletedKnowledgeBase> {
        self.enter("DeleteKnowledgeBase")?;

        self.state
            .lock()
            .unwrap()
            .knowledge_bases
            .remove(knowledge_base_id)
            .map(|_| DeletedKnowledgeBase {
                knowledge_base_id: knowledge_base_id.to_string(),
                status: "DELETING".to_string(),
            })
            .ok_or_else(|| not_found("DeleteKnowledgeBase", knowledge_base_id))
    }
}
