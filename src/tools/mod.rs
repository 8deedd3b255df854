//! Callable operations exposed to clients.
//!
//! Each tool takes JSON arguments and returns JSON output. Tools are collected
//! into a [`ToolRegistry`] once at startup and handed to the transport layer.

pub mod definitions;
mod registry;

pub use registry::ToolRegistry;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Error type for tool dispatch and execution
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Tool execution failed: {0}")]
    Execution(String),
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        ToolError::InvalidArguments(e.to_string())
    }
}

/// A named operation callable with JSON arguments
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON schema describing the accepted arguments
    fn parameters(&self) -> Value;

    async fn execute(&self, args: Value) -> Result<Value, ToolError>;
}
