//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod api_service;
pub mod llm_gateway;
pub mod output;
pub mod tool_executor;
