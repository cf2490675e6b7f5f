//! Application layer for ollama-toolcall
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    api_service::ApiService,
    llm_gateway::{ChunkStream, GatewayError, LlmGateway},
    output::{ChatOutput, NoOutput},
    tool_executor::{ToolExecutorPort, ToolHandler},
};
pub use use_cases::chat_session::{ChatSession, HELP_TEXT, SessionConfig, SessionError, SessionStep};
pub use use_cases::run_prompt::{ConversationReply, PromptError, RunPromptUseCase, ToolInvocation};
