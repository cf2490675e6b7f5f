//! LLM Gateway port
//!
//! Defines the interface for communicating with the local model runtime.

use async_trait::async_trait;
use futures::stream::BoxStream;
use toolcall_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The model runtime could not be reached at all
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Stream error: {0}")]
    Stream(String),
}

/// Finite, non-restartable sequence of response chunks.
pub type ChunkStream = BoxStream<'static, Result<String, GatewayError>>;

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// One-shot, non-streaming completion
    async fn generate(&self, model: &Model, system: &str, prompt: &str)
    -> Result<String, GatewayError>;

    /// Streaming chat completion over the full message list
    async fn chat(&self, model: &Model, messages: &[Message]) -> Result<ChunkStream, GatewayError>;
}
