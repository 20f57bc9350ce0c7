//! Connector domain - shared connector settings and kinds

mod config;
mod connector_type;

pub use config::ConnectorConfig;
pub use connector_type::ConnectorType;
