//! Prompt domain
//!
//! System instructions for each response mode. Both embed the serialized tool
//! manifest so the model sees the exact descriptor set the registry dispatches.

mod template;

pub use template::PromptTemplate;
