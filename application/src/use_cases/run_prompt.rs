//! Run Prompt use case.
//!
//! Drives one round of model interaction in either response mode:
//!
//! - **Direct**: one-shot `generate` with the direct system instruction, strict
//!   parse of the whole response, then dispatch.
//! - **Conversational**: streamed `chat` over the history plus the new user
//!   turn, each chunk forwarded to the [`ChatOutput`] as it arrives, then an
//!   embedded-mode scan of the accumulated text and an optional dispatch.
//!
//! In conversational mode a tool result is shown to the user but is not fed
//! back into the model within the same round.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::output::ChatOutput;
use crate::ports::tool_executor::ToolExecutorPort;
use futures::TryStreamExt;
use std::sync::Arc;
use thiserror::Error;
use toolcall_domain::util::preview;
use toolcall_domain::{
    CallDescriptor, Conversation, EmbeddedStrategy, ExtractError, Message, Model, PromptTemplate,
    ToolError, extract_embedded, parse_strict,
};
use tracing::{debug, info, warn};

/// Errors that end a single round.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PromptError {
    #[error("Model error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Could not parse model response: {0}")]
    Parse(#[from] ExtractError),

    #[error("Tool {name} failed: {source}")]
    Tool { name: String, source: ToolError },
}

impl PromptError {
    /// Only an unreachable model runtime ends the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PromptError::Gateway(GatewayError::Connection(_)))
    }
}

/// A dispatched call and what it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub call: CallDescriptor,
    pub result: Result<String, ToolError>,
}

/// Outcome of a conversational round.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationReply {
    /// Full accumulated response text
    pub response: String,
    /// Present when the response carried a call
    pub invocation: Option<ToolInvocation>,
}

/// Use case for running one prompt round.
#[derive(Clone)]
pub struct RunPromptUseCase {
    gateway: Arc<dyn LlmGateway>,
    tools: Arc<dyn ToolExecutorPort>,
}

impl RunPromptUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, tools: Arc<dyn ToolExecutorPort>) -> Self {
        Self { gateway, tools }
    }

    pub fn tools(&self) -> &Arc<dyn ToolExecutorPort> {
        &self.tools
    }

    /// System instruction for conversational mode with the current manifest.
    pub fn conversational_system(&self) -> String {
        PromptTemplate::conversational_system(&self.tools.manifest())
    }

    /// Run a direct-mode round and return the tool's result.
    ///
    /// A parse failure aborts the round without invoking any tool.
    pub async fn execute_direct(
        &self,
        model: &Model,
        prompt: &str,
        output: &dyn ChatOutput,
    ) -> Result<String, PromptError> {
        info!("Direct request to {}: {}", model, preview(prompt, 100));

        let system = PromptTemplate::direct_system(&self.tools.manifest());
        let response = self.gateway.generate(model, &system, prompt).await?;
        debug!("Direct response: {}", preview(&response, 200));

        let call = parse_strict(&response).inspect_err(|e| warn!("Strict parse failed: {}", e))?;

        self.dispatch(&call, output)
            .await
            .map_err(|source| PromptError::Tool {
                name: call.function_name.clone(),
                source,
            })
    }

    /// Run a conversational round.
    ///
    /// `history` is sent in order. When it carries no system turn, the
    /// conversational system instruction is sent ahead of it so every round
    /// sees the tool manifest. The caller owns committing turns.
    pub async fn execute_conversational(
        &self,
        model: &Model,
        history: &Conversation,
        input: &str,
        strategy: EmbeddedStrategy,
        output: &dyn ChatOutput,
    ) -> Result<ConversationReply, PromptError> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        if history.system().is_none() {
            messages.push(Message::system(self.conversational_system()));
        }
        messages.extend(history.messages());
        messages.push(Message::user(input));

        info!(
            "Chat request to {} ({} messages): {}",
            model,
            messages.len(),
            preview(input, 100)
        );

        let stream = self.gateway.chat(model, &messages).await?;

        // Sequential fold: display each chunk, then accumulate it.
        // The first stream error ends consumption.
        let response = stream
            .try_fold(String::new(), |mut text, chunk| async move {
                output.on_chunk(&chunk);
                text.push_str(&chunk);
                Ok::<_, GatewayError>(text)
            })
            .await;
        output.on_stream_end();
        let response = response?;

        let invocation = match extract_embedded(&response, strategy) {
            Some(call) => {
                let result = self.dispatch(&call, output).await;
                Some(ToolInvocation { call, result })
            }
            None => {
                debug!("No call present in response");
                None
            }
        };

        Ok(ConversationReply {
            response,
            invocation,
        })
    }

    /// Dispatch a call and report it to `output`.
    pub async fn dispatch(
        &self,
        call: &CallDescriptor,
        output: &dyn ChatOutput,
    ) -> Result<String, ToolError> {
        info!(
            "Dispatching {} with {} parameters",
            call.function_name,
            call.parameters.len()
        );
        output.on_tool_call(call);

        let result = self
            .tools
            .execute(&call.function_name, &call.parameters)
            .await;

        match &result {
            Ok(text) => output.on_tool_result(&call.function_name, text),
            Err(e) => {
                warn!("Tool {} failed: {}", call.function_name, e);
                output.on_tool_error(&call.function_name, e);
            }
        }

        result
    }
}
