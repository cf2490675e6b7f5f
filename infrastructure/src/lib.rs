//! Infrastructure layer for ollama-toolcall
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Ollama HTTP gateway, the tool registry
//! with its built-in tools, the public API clients behind them, and
//! configuration file loading.

pub mod api;
pub mod config;
pub mod ollama;
pub mod tools;

// Re-export commonly used types
pub use api::{ApiEndpoints, HttpApiService, MockApiService};
pub use config::{ConfigError, ConfigLoader, ConfigSource, FileConfig};
pub use ollama::{DEFAULT_HOST, OllamaGateway};
pub use tools::{ToolRegistry, default_registry};
