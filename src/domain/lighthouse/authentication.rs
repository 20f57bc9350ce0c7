//! Authentication settings for a KMS Lighthouse instance

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

const REDACTED: &str = "[REDACTED]";

/// How the crawler would authenticate against KMS Lighthouse
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KmsAuthentication {
    Basic {
        username: String,
        password: String,
    },
    BearerToken {
        token: String,
    },
    #[serde(rename = "oauth2")]
    OAuth2 {
        client_id: String,
        client_secret: String,
        token_url: String,
    },
    #[default]
    CustomHeaders,
    AwsSecretsManager {
        secret_arn: String,
    },
}

impl KmsAuthentication {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "BASIC",
            Self::BearerToken { .. } => "BEARER_TOKEN",
            Self::OAuth2 { .. } => "OAUTH2",
            Self::CustomHeaders => "CUSTOM_HEADERS",
            Self::AwsSecretsManager { .. } => "AWS_SECRETS_MANAGER",
        }
    }
}

impl fmt::Debug for KmsAuthentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &REDACTED)
                .finish(),
            Self::BearerToken { .. } => f
                .debug_struct("BearerToken")
                .field("token", &REDACTED)
                .finish(),
            Self::OAuth2 {
                client_id,
                token_url,
                ..
            } => f
                .debug_struct("OAuth2")
                .field("client_id", client_id)
                .field("client_secret", &REDACTED)
                .field("token_url", token_url)
                .finish(),
            Self::CustomHeaders => f.write_str("CustomHeaders"),
            Self::AwsSecretsManager { secret_arn } => f
                .debug_struct("AwsSecretsManager")
                .field("secret_arn", secret_arn)
                .finish(),
        }
    }
}

/// Authentication method plus extra request headers
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KmsAuthenticationConfig {
    #[serde(default)]
    pub method: KmsAuthentication,
    #[serde(default)]
    pub custom_headers: BTreeMap<String, String>,
}

impl KmsAuthenticationConfig {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_method(KmsAuthentication::Basic {
            username: username.into(),
            password: password.into(),
        })
    }

    pub fn bearer_token(token: impl Into<String>) -> Self {
        Self::with_method(KmsAuthentication::BearerToken {
            token: token.into(),
        })
    }

    pub fn oauth2(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self::with_method(KmsAuthentication::OAuth2 {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: token_url.into(),
        })
    }

    pub fn secrets_manager(secret_arn: impl Into<String>) -> Self {
        Self::with_method(KmsAuthentication::AwsSecretsManager {
            secret_arn: secret_arn.into(),
        })
    }

    pub fn custom_headers<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::default().with_custom_headers(headers)
    }

    fn with_method(method: KmsAuthentication) -> Self {
        Self {
            method,
            custom_headers: BTreeMap::new(),
        }
    }

    pub fn with_custom_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_custom_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.custom_headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

// Header values frequently carry tokens, so only names are printed
impl fmt::Debug for KmsAuthenticationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KmsAuthenticationConfig")
            .field("method", &self.method)
            .field("custom_headers", &self.custom_headers.keys().collect::<Vec<_>>())
            .finish()
    }
}
