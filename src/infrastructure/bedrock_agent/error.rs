//! Mapping of SDK failures onto `ConnectorError`

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_bedrockagent::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_smithy_types::error::operation::BuildError;

use crate::domain::error::ConnectorError;

const RESOURCE_NOT_FOUND: &str = "ResourceNotFoundException";

/// Convert a failed SDK call; `ResourceNotFoundException` becomes `NotFound`
pub(crate) fn sdk_error<E, R>(operation: &str, err: SdkError<E, R>) -> ConnectorError
where
    E: ProvideErrorMetadata + Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    let service_error = err.as_service_error();
    let code = service_error.and_then(|e| e.code());

    if code == Some(RESOURCE_NOT_FOUND) {
        let message = service_error
            .and_then(|e| e.message())
            .unwrap_or(RESOURCE_NOT_FOUND);
        return ConnectorError::not_found(format!("{} failed: {}", operation, message));
    }

    tracing::debug!(
        operation = operation,
        code = code.unwrap_or("none"),
        error = %DisplayErrorContext(&err),
        "Bedrock Agent request failed"
    );

    ConnectorError::remote_call(format!("{} request failed", operation), err)
}

/// Payload the SDK refused to assemble
pub(crate) fn build_error(shape: &str, err: BuildError) -> ConnectorError {
    ConnectorError::validation(format!("Incomplete {}: {}", shape, err))
}

pub(crate) fn missing_payload(operation: &str, field: &str) -> ConnectorError {
    ConnectorError::unexpected_response(format!("{} response did not include {}", operation, field))
}
