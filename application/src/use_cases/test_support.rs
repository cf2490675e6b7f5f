//! Hand-written port mocks shared by use case tests.

use crate::ports::llm_gateway::{ChunkStream, GatewayError, LlmGateway};
use crate::ports::output::ChatOutput;
use crate::ports::tool_executor::ToolExecutorPort;
use async_trait::async_trait;
use futures::StreamExt;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use toolcall_domain::{
    CallDescriptor, CallParameter, Message, Model, ParameterSpec, ToolDescriptor, ToolError,
    resolve_parameter,
};

// ==================== Gateway ====================

/// Gateway that replays scripted responses in order.
#[derive(Default)]
pub struct ScriptedGateway {
    generate_responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    chat_responses: Mutex<VecDeque<Vec<Result<String, GatewayError>>>>,
    generate_calls: AtomicUsize,
    chat_calls: AtomicUsize,
    chunks_pulled: Arc<AtomicUsize>,
    last_system: Mutex<Option<String>>,
    last_messages: Mutex<Vec<Message>>,
    last_model: Mutex<Option<Model>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_ok(self, text: &str) -> Self {
        self.generate_responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    pub fn generate_err(self, err: GatewayError) -> Self {
        self.generate_responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn chat_ok(self, chunks: &[&str]) -> Self {
        self.chat_chunks(chunks.iter().map(|c| Ok(c.to_string())).collect())
    }

    pub fn chat_chunks(self, chunks: Vec<Result<String, GatewayError>>) -> Self {
        self.chat_responses.lock().unwrap().push_back(chunks);
        self
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }

    /// Chunks consumed from chat streams so far
    pub fn chunks_pulled(&self) -> usize {
        self.chunks_pulled.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.generate_calls() + self.chat_calls()
    }

    pub fn last_system(&self) -> Option<String> {
        self.last_system.lock().unwrap().clone()
    }

    pub fn last_messages(&self) -> Vec<Message> {
        self.last_messages.lock().unwrap().clone()
    }

    pub fn last_model(&self) -> Option<Model> {
        self.last_model.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn generate(
        &self,
        model: &Model,
        system: &str,
        _prompt: &str,
    ) -> Result<String, GatewayError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_system.lock().unwrap() = Some(system.to_string());
        *self.last_model.lock().unwrap() = Some(model.clone());
        self.generate_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::RequestFailed("No more responses".into())))
    }

    async fn chat(&self, model: &Model, messages: &[Message]) -> Result<ChunkStream, GatewayError> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = messages.to_vec();
        *self.last_model.lock().unwrap() = Some(model.clone());
        let chunks = self
            .chat_responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GatewayError::RequestFailed("No more responses".into()))?;
        let pulled = self.chunks_pulled.clone();
        Ok(futures::stream::iter(chunks)
            .inspect(move |_| {
                pulled.fetch_add(1, Ordering::SeqCst);
            })
            .boxed())
    }
}

// ==================== Tools ====================

/// Executor with two weather tools and canned results.
pub struct StubExecutor {
    descriptors: Vec<ToolDescriptor>,
    calls: Mutex<Vec<CallDescriptor>>,
}

impl StubExecutor {
    pub fn weather() -> Self {
        Self {
            descriptors: vec![
                ToolDescriptor::new("WeatherFromLocation", "Current temperature for a city")
                    .with_parameter(ParameterSpec::new("location", "City name", true)),
                ToolDescriptor::new("WeatherFromLatLon", "Current temperature at coordinates")
                    .with_parameter(ParameterSpec::new("latitude", "Latitude", true))
                    .with_parameter(ParameterSpec::new("longitude", "Longitude", true)),
            ],
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls that reached a registered tool
    pub fn calls(&self) -> Vec<CallDescriptor> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ToolExecutorPort for StubExecutor {
    fn descriptors(&self) -> Vec<&ToolDescriptor> {
        self.descriptors.iter().collect()
    }

    async fn execute(
        &self,
        function_name: &str,
        parameters: &[CallParameter],
    ) -> Result<String, ToolError> {
        if self.descriptor(function_name).is_none() {
            return Err(ToolError::unknown_function(function_name));
        }
        self.calls.lock().unwrap().push(CallDescriptor {
            function_name: function_name.to_string(),
            parameters: parameters.to_vec(),
        });

        match function_name {
            "WeatherFromLocation" => {
                resolve_parameter("location", parameters)?;
                Ok("58 degrees Fahrenheit".to_string())
            }
            _ => {
                resolve_parameter("latitude", parameters)?;
                resolve_parameter("longitude", parameters)?;
                Ok("61 degrees Fahrenheit".to_string())
            }
        }
    }
}

// ==================== Output ====================

/// Output that records every event as a tagged string.
#[derive(Default)]
pub struct RecordingOutput {
    events: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingOutput {
    fn record(&self, kind: &'static str, text: impl Into<String>) {
        self.events.lock().unwrap().push((kind, text.into()));
    }

    pub fn chunks(&self) -> Vec<String> {
        self.of("chunk")
    }

    pub fn of(&self, kind: &str) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.of(kind).len()
    }
}

impl ChatOutput for RecordingOutput {
    fn on_chunk(&self, chunk: &str) {
        self.record("chunk", chunk);
    }

    fn on_stream_end(&self) {
        self.record("stream_end", "");
    }

    fn on_tool_call(&self, call: &CallDescriptor) {
        self.record("tool_call", call.function_name.clone());
    }

    fn on_tool_result(&self, _name: &str, result: &str) {
        self.record("tool_result", result);
    }

    fn on_tool_error(&self, _name: &str, error: &ToolError) {
        self.record("tool_error", error.to_string());
    }

    fn on_missing_parameters(&self, _name: &str, missing: &[String]) {
        self.record("missing", missing.join(", "));
    }

    fn on_tools(&self, tools: &[&ToolDescriptor]) {
        self.record("tools", tools.len().to_string());
    }

    fn on_error(&self, message: &str) {
        self.record("error", message);
    }

    fn info(&self, message: &str) {
        self.record("info", message);
    }
}
