//! KMS Lighthouse crawl and authentication settings

mod authentication;
mod config;

pub use authentication::{KmsAuthentication, KmsAuthenticationConfig};
pub use config::{KmsLighthouseConfig, DEFAULT_MAX_DOCUMENT_SIZE, DEFAULT_RATE_LIMIT};
