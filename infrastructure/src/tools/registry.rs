//! Tool Registry
//!
//! The [`ToolRegistry`] stores each tool's descriptor together with its
//! handler and implements [`ToolExecutorPort`], so it is both the source of the
//! manifest advertised to the model and the dispatcher that runs calls.
//!
//! # Usage
//!
//! ```ignore
//! let registry = ToolRegistry::new()
//!     .register(weather_from_location_definition(), WeatherFromLocation::new(api.clone()))
//!     .register(web_search_definition(), WebSearch::new(api));
//!
//! let result = registry.execute("WebSearch", &params).await;
//! ```
//!
//! Registering a name twice replaces the earlier entry in place, so the
//! manifest order is the order of first registration.

use std::sync::Arc;

use async_trait::async_trait;
use toolcall_application::ports::tool_executor::{ToolExecutorPort, ToolHandler};
use toolcall_domain::{CallParameter, ToolDescriptor, ToolError};

struct RegisteredTool {
    descriptor: ToolDescriptor,
    handler: Arc<dyn ToolHandler>,
}

/// Registered tools in registration order
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    pub fn register<H: ToolHandler + 'static>(self, descriptor: ToolDescriptor, handler: H) -> Self {
        self.register_arc(descriptor, Arc::new(handler))
    }

    /// Register a tool (Arc version)
    pub fn register_arc(mut self, descriptor: ToolDescriptor, handler: Arc<dyn ToolHandler>) -> Self {
        let entry = RegisteredTool {
            descriptor,
            handler,
        };

        match self
            .tools
            .iter_mut()
            .find(|t| t.descriptor.name == entry.descriptor.name)
        {
            Some(existing) => {
                tracing::debug!(tool = %entry.descriptor.name, "Replaced tool");
                *existing = entry;
            }
            None => {
                tracing::debug!(tool = %entry.descriptor.name, "Registered tool");
                self.tools.push(entry);
            }
        }

        self
    }

    /// Find the handler registered under `name`
    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.tools
            .iter()
            .find(|t| t.descriptor.name == name)
            .map(|t| &t.handler)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn descriptors(&self) -> Vec<&ToolDescriptor> {
        self.tools.iter().map(|t| &t.descriptor).collect()
    }

    async fn execute(
        &self,
        function_name: &str,
        parameters: &[CallParameter],
    ) -> Result<String, ToolError> {
        let Some(handler) = self.lookup(function_name) else {
            tracing::warn!(tool = function_name, "Unknown tool requested");
            return Err(ToolError::unknown_function(function_name));
        };

        tracing::debug!(tool = function_name, params = parameters.len(), "Executing tool");
        handler.call(parameters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use toolcall_domain::{ParameterSpec, ToolErrorCode, ToolManifest, resolve_parameter};

    /// Echoes `text` and counts invocations.
    struct EchoHandler {
        prefix: &'static str,
        calls: Arc<AtomicUsize>,
    }

    impl EchoHandler {
        fn new(prefix: &'static str) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    prefix,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl ToolHandler for EchoHandler {
        async fn call(&self, parameters: &[CallParameter]) -> Result<String, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let text = resolve_parameter("text", parameters)?;
            Ok(format!("{}{}", self.prefix, text))
        }
    }

    fn echo_definition(name: &str) -> ToolDescriptor {
        ToolDescriptor::new(name, "Echo text back")
            .with_parameter(ParameterSpec::new("text", "Text to echo", true))
    }

    #[tokio::test]
    async fn test_descriptors_in_registration_order() {
        let (a, _) = EchoHandler::new("");
        let (b, _) = EchoHandler::new("");
        let registry = ToolRegistry::new()
            .register(echo_definition("Zeta"), a)
            .register(echo_definition("Alpha"), b);

        let names: Vec<&str> = registry.descriptors().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[tokio::test]
    async fn test_reregistration_overwrites_in_place() {
        let (first, first_calls) = EchoHandler::new("first:");
        let (other, _) = EchoHandler::new("");
        let (second, second_calls) = EchoHandler::new("second:");
        let registry = ToolRegistry::new()
            .register(echo_definition("Echo"), first)
            .register(echo_definition("Other"), other)
            .register(echo_definition("Echo"), second);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.descriptors()[0].name, "Echo");

        let params = vec![CallParameter::new("text", "hi")];
        assert_eq!(registry.execute("Echo", &params).await.unwrap(), "second:hi");
        assert_eq!(first_calls.load(Ordering::SeqCst), 0);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_function_invokes_nothing() {
        let (echo, calls) = EchoHandler::new("");
        let registry = ToolRegistry::new().register(echo_definition("Echo"), echo);

        let err = registry.execute("UnknownTool", &[]).await.unwrap_err();

        assert_eq!(err.code, ToolErrorCode::UnknownFunction);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_handler_errors_propagate_unchanged() {
        let (echo, calls) = EchoHandler::new("");
        let registry = ToolRegistry::new().register(echo_definition("Echo"), echo);

        let err = registry.execute("Echo", &[]).await.unwrap_err();

        assert_eq!(err, ToolError::missing_parameter("text"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_manifest_is_deterministic() {
        let (echo, _) = EchoHandler::new("");
        let registry = ToolRegistry::new().register(echo_definition("Echo"), echo);

        assert_eq!(registry.manifest(), registry.manifest());
        assert_eq!(
            registry.manifest(),
            ToolManifest::new(registry.descriptors()).to_string()
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup("Echo").is_none());
        assert_eq!(registry.manifest(), r#"{"tools":[]}"#);
    }
}
