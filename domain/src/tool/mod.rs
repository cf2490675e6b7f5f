//! Tool domain module
//!
//! This module defines the core abstractions for the **Tool System**: how a
//! locally hosted model requests an external capability (weather, geocoding,
//! web search) by emitting a structured call instead of free text.
//!
//! # Overview
//!
//! ```text
//! ┌────────────────┐    ┌────────────────┐    ┌────────────────┐
//! │ ToolDescriptor │───▶│ CallDescriptor │───▶│ String / Error │
//! │ (advertised)   │    │ (extracted)    │    │ (dispatched)   │
//! └───────┬────────┘    └────────────────┘    └────────────────┘
//!         │
//!         └─ ToolManifest: {"tools": [...]} embedded in system instructions
//! ```
//!
//! # Key Types
//!
//! - [`ToolDescriptor`]: name, description and ordered [`ParameterSpec`]s
//! - [`ToolManifest`]: deterministic JSON rendering of the descriptor set
//! - [`CallDescriptor`]: `{functionName, parameters}` as emitted by the model
//! - [`ToolError`]: code + message, shared by every tool implementation
//!
//! # Extraction
//!
//! [`extractor`] recovers call descriptors from model output. Strict mode
//! treats a parse failure as an error; embedded mode treats it as "no call".
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions and parsing, no I/O
//! - **Application** (`ToolExecutorPort`, `ToolHandler`): dispatch contract
//! - **Infrastructure** (`ToolRegistry`): name → handler routing and the
//!   built-in weather/search handlers

pub mod entities;
pub mod extractor;
pub mod resolver;
pub mod traits;
pub mod value_objects;

pub use entities::{CallDescriptor, CallParameter, ParameterSpec, ToolDescriptor, ToolManifest};
pub use resolver::resolve_parameter;
pub use traits::{RequiredParameterValidator, ToolValidator};
pub use value_objects::{ToolError, ToolErrorCode};
