//! Tool Executor port
//!
//! Defines the interface for dispatching calls to registered tools.

use async_trait::async_trait;
use toolcall_domain::{CallParameter, ToolDescriptor, ToolError, ToolManifest};

/// A tool implementation.
///
/// Handlers resolve their own parameters and may fail with tool-specific codes.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, parameters: &[CallParameter]) -> Result<String, ToolError>;
}

/// Port for tool execution
///
/// This port defines how the application layer executes tools.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// All descriptors in registration order
    fn descriptors(&self) -> Vec<&ToolDescriptor>;

    /// Get the descriptor of a specific tool
    fn descriptor(&self, name: &str) -> Option<&ToolDescriptor> {
        self.descriptors().into_iter().find(|d| d.name == name)
    }

    /// Serialized descriptor set for model instructions
    fn manifest(&self) -> String {
        ToolManifest::new(self.descriptors()).to_string()
    }

    /// Look up `function_name` and invoke it.
    ///
    /// Fails with `UNKNOWN_FUNCTION` without invoking anything when the name is
    /// not registered. Handler errors propagate unchanged.
    async fn execute(
        &self,
        function_name: &str,
        parameters: &[CallParameter],
    ) -> Result<String, ToolError>;
}
