use thiserror::Error;

/// Boxed error carried as the cause of a failed remote call
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used by every connector operation
pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Errors raised while building requests for, or talking to, the Bedrock Agent service
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Remote call failed: {message}")]
    RemoteCall {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ConnectorError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Remote failure wrapping the underlying cause
    pub fn remote_call(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::RemoteCall {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Remote call that succeeded on the wire but returned something unusable
    pub fn unexpected_response(message: impl Into<String>) -> Self {
        Self::RemoteCall {
            message: message.into(),
            source: None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Prefix the message with the operation that failed, keeping kind and cause
    pub fn context(self, context: impl std::fmt::Display) -> Self {
        match self {
            Self::Validation { message } => Self::Validation {
                message: format!("{}: {}", context, message),
            },
            Self::NotFound { message } => Self::NotFound {
                message: format!("{}: {}", context, message),
            },
            Self::RemoteCall { message, source } => Self::RemoteCall {
                message: format!("{}: {}", context, message),
                source,
            },
            Self::Configuration { message } => Self::Configuration {
                message: format!("{}: {}", context, message),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::NotFound { message }
            | Self::RemoteCall { message, .. }
            | Self::Configuration { message } => message,
        }
    }
}
