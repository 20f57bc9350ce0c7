//! Bedrock Agent service boundary

mod client;
mod convert;
mod error;
#[cfg(test)]
pub mod mock;

pub use client::{BedrockAgentApi, BedrockAgentClient};

#[cfg(test)]
pub use client::MockBedrockAgentApi;
