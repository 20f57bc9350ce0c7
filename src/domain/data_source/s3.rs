//! S3 source settings

use serde::{Deserialize, Serialize};

use super::configuration::S3DataSourceConfiguration;

const S3_ARN_PREFIX: &str = "arn:aws:s3:::";

/// Inputs for an S3 data source: bucket plus prefix filters
///
/// Empty prefixes are dropped on insertion; order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct S3SourceConfig {
    pub bucket_name: String,
    pub bucket_owner_account_id: Option<String>,
    pub inclusion_prefixes: Vec<String>,
    pub exclusion_prefixes: Vec<String>,
}

impl S3SourceConfig {
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            ..Self::default()
        }
    }

    pub fn with_bucket_owner_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.bucket_owner_account_id = Some(account_id.into());
        self
    }

    pub fn with_inclusion_prefix(mut self, prefix: impl Into<String>) -> Self {
        push_prefix(&mut self.inclusion_prefixes, prefix.into());
        self
    }

    pub fn with_inclusion_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for prefix in prefixes {
            push_prefix(&mut self.inclusion_prefixes, prefix.into());
        }
        self
    }

    pub fn with_exclusion_prefix(mut self, prefix: impl Into<String>) -> Self {
        push_prefix(&mut self.exclusion_prefixes, prefix.into());
        self
    }

    pub fn with_exclusion_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for prefix in prefixes {
            push_prefix(&mut self.exclusion_prefixes, prefix.into());
        }
        self
    }

    /// `arn:aws:s3:::<bucket>`, or `None` when no bucket name is set
    pub fn bucket_arn(&self) -> Option<String> {
        if self.bucket_name.is_empty() {
            None
        } else {
            Some(format!("{}{}", S3_ARN_PREFIX, self.bucket_name))
        }
    }

    /// Service payload for these settings
    ///
    /// A missing bucket yields an empty ARN, which connector validation rejects.
    pub fn to_configuration(&self) -> S3DataSourceConfiguration {
        S3DataSourceConfiguration {
            bucket_arn: self.bucket_arn().unwrap_or_default(),
            inclusion_prefixes: self.inclusion_prefixes.clone(),
            exclusion_prefixes: self.exclusion_prefixes.clone(),
            bucket_owner_account_id: self.bucket_owner_account_id.clone(),
        }
    }
}

fn push_prefix(prefixes: &mut Vec<String>, prefix: String) {
    if !prefix.is_empty() {
        prefixes.push(prefix);
    }
}
