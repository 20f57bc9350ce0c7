//! KMS Lighthouse crawl settings

use std::fmt;

use serde::{Deserialize, Serialize};

use super::authentication::KmsAuthenticationConfig;
use crate::domain::error::{ConnectorError, ConnectorResult};

pub const DEFAULT_RATE_LIMIT: u32 = 50;
pub const DEFAULT_MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// Settings describing which parts of a KMS Lighthouse instance to crawl
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KmsLighthouseConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    #[serde(default)]
    pub document_endpoints: Vec<String>,
    #[serde(default)]
    pub inclusion_patterns: Vec<String>,
    #[serde(default)]
    pub exclusion_patterns: Vec<String>,
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,
    pub authentication: Option<KmsAuthenticationConfig>,
    #[serde(default = "default_true")]
    pub enable_metadata_extraction: bool,
    #[serde(default = "default_max_document_size")]
    pub max_document_size: u64,
}

fn default_rate_limit() -> u32 {
    DEFAULT_RATE_LIMIT
}

fn default_true() -> bool {
    true
}

fn default_max_document_size() -> u64 {
    DEFAULT_MAX_DOCUMENT_SIZE
}

impl KmsLighthouseConfig {
    /// Start a configuration for `base_url`; an empty URL is rejected
    pub fn new(base_url: impl Into<String>) -> ConnectorResult<Self> {
        let config = Self {
            base_url: base_url.into(),
            api_key: None,
            document_endpoints: Vec::new(),
            inclusion_patterns: Vec::new(),
            exclusion_patterns: Vec::new(),
            rate_limit: DEFAULT_RATE_LIMIT,
            authentication: None,
            enable_metadata_extraction: true,
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConnectorResult<()> {
        if self.base_url.is_empty() {
            return Err(ConnectorError::configuration(
                "KMS Lighthouse base URL is required",
            ));
        }
        Ok(())
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn add_document_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.document_endpoints.push(endpoint.into());
        self
    }

    pub fn with_document_endpoints(mut self, endpoints: Vec<String>) -> Self {
        self.document_endpoints = endpoints;
        self
    }

    pub fn add_inclusion_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.inclusion_patterns.push(pattern.into());
        self
    }

    pub fn with_inclusion_patterns(mut self, patterns: Vec<String>) -> Self {
        self.inclusion_patterns = patterns;
        self
    }

    pub fn add_exclusion_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.exclusion_patterns.push(pattern.into());
        self
    }

    pub fn with_exclusion_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclusion_patterns = patterns;
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: u32) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    pub fn with_authentication(mut self, authentication: KmsAuthenticationConfig) -> Self {
        self.authentication = Some(authentication);
        self
    }

    pub fn with_metadata_extraction(mut self, enabled: bool) -> Self {
        self.enable_metadata_extraction = enabled;
        self
    }

    pub fn with_max_document_size(mut self, max_document_size: u64) -> Self {
        self.max_document_size = max_document_size;
        self
    }
}

impl fmt::Debug for KmsLighthouseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KmsLighthouseConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("document_endpoints", &self.document_endpoints)
            .field("inclusion_patterns", &self.inclusion_patterns)
            .field("exclusion_patterns", &self.exclusion_patterns)
            .field("rate_limit", &self.rate_limit)
            .field("authentication", &self.authentication)
            .field("enable_metadata_extraction", &self.enable_metadata_extraction)
            .field("max_document_size", &self.max_document_size)
            .finish()
    }
}
