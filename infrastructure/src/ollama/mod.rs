//! Ollama adapter for the [`LlmGateway`](toolcall_application::LlmGateway) port
//!
//! - `generate` → `POST /api/generate` (non-streaming, JSON format)
//! - `chat` → `POST /api/chat` (streamed JSON Lines)

mod gateway;
mod stream;
mod types;

pub use gateway::{DEFAULT_HOST, OllamaGateway};
