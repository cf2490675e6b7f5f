//! Interactive chat session.
//!
//! [`ChatSession`] is the session state machine. Each input line is classified
//! and handled to completion before the next one is read:
//!
//! ```text
//! awaiting-input ─▶ classifying ─┬─▶ command        ─┐
//!                                ├─▶ explicit /tool ─┼─▶ awaiting-input
//!                                └─▶ freeform       ─┘
//!                  exit / quit ─▶ ended
//! ```
//!
//! The session owns its history and its [`SessionConfig`]. `/model` mutates
//! only the session's own config, which is passed into every request.

use crate::ports::output::ChatOutput;
use crate::use_cases::run_prompt::{PromptError, RunPromptUseCase};
use std::sync::Arc;
use thiserror::Error;
use toolcall_domain::{
    CallDescriptor, Conversation, EmbeddedStrategy, InputKind, Message, Model,
    RequiredParameterValidator, SessionCommand, ToolError, ToolResultPolicy, ToolValidator,
    classify_input,
};
use tracing::{debug, info};

pub const HELP_TEXT: &str = r#"Commands:
  /help                          Show this help
  /tools                         List available tools
  /clear                         Clear conversation history
  /model [name]                  Show or switch the active model
  /tool <Name> key="value" ...   Run a tool directly, without the model
  exit, quit, /exit, /quit       End the session

Anything else is sent to the model."#;

/// Session-scoped settings
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Active model, changed by `/model <name>`
    pub model: Model,
    /// Whether conversational tool results are added to history
    pub tool_results: ToolResultPolicy,
    /// Keep the conversational system instruction as a permanent first turn.
    /// When false the instruction is not stored in history but is still sent
    /// ahead of it on every conversational round.
    pub keep_system_turn: bool,
    pub embedded_strategy: EmbeddedStrategy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            tool_results: ToolResultPolicy::default(),
            keep_system_turn: true,
            embedded_strategy: EmbeddedStrategy::default(),
        }
    }
}

/// Failures that end the session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{0}")]
    Fatal(PromptError),
}

/// What the caller should do after a line was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    Continue,
    Ended,
}

/// Interactive session state machine
pub struct ChatSession {
    prompt: RunPromptUseCase,
    config: SessionConfig,
    history: Conversation,
    output: Arc<dyn ChatOutput>,
    ended: bool,
}

impl ChatSession {
    pub fn new(prompt: RunPromptUseCase, config: SessionConfig, output: Arc<dyn ChatOutput>) -> Self {
        let history = Self::fresh_history(&prompt, &config);
        Self {
            prompt,
            config,
            history,
            output,
            ended: false,
        }
    }

    fn fresh_history(prompt: &RunPromptUseCase, config: &SessionConfig) -> Conversation {
        if config.keep_system_turn {
            Conversation::with_system(prompt.conversational_system())
        } else {
            Conversation::new()
        }
    }

    pub fn history(&self) -> &Conversation {
        &self.history
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn model(&self) -> &Model {
        &self.config.model
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Registered tool names in registration order
    pub fn tool_names(&self) -> Vec<String> {
        self.prompt
            .tools()
            .descriptors()
            .iter()
            .map(|d| d.name.clone())
            .collect()
    }

    /// Handle one input line to completion.
    ///
    /// Only a fatal failure is returned as `Err`; everything else is reported
    /// through the output and the session continues.
    pub async fn handle_line(&mut self, line: &str) -> Result<SessionStep, SessionError> {
        if self.ended {
            return Ok(SessionStep::Ended);
        }

        match classify_input(line) {
            InputKind::Blank => {}
            InputKind::Invalid(e) => self.output.on_error(&e.to_string()),
            InputKind::Command(SessionCommand::Exit) => {
                info!("Session ended by user");
                self.ended = true;
                return Ok(SessionStep::Ended);
            }
            InputKind::Command(SessionCommand::Tool(call)) => self.run_explicit_tool(line, call).await,
            InputKind::Command(command) => self.handle_command(command),
            InputKind::Prompt(text) => self.run_freeform(&text).await?,
        }

        Ok(SessionStep::Continue)
    }

    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Help => self.output.info(HELP_TEXT),
            SessionCommand::Tools => self.output.on_tools(&self.prompt.tools().descriptors()),
            SessionCommand::Clear => {
                self.history.clear();
                debug!("History cleared, {} messages remain", self.history.len());
                self.output.info("Conversation history cleared.");
            }
            SessionCommand::Model(None) => {
                self.output
                    .info(&format!("Current model: {}", self.config.model));
            }
            SessionCommand::Model(Some(name)) => {
                self.config.model = Model::from(name.as_str());
                info!("Model switched to {}", self.config.model);
                self.output
                    .info(&format!("Model set to: {}", self.config.model));
            }
            SessionCommand::Unknown(cmd) => {
                self.output
                    .on_error(&format!("Unknown command: {} (type /help)", cmd));
            }
            SessionCommand::Tool(_) | SessionCommand::Exit => {}
        }
    }

    /// `/tool`: validate against the descriptor, then dispatch without the model.
    async fn run_explicit_tool(&mut self, raw: &str, call: CallDescriptor) {
        let tools = self.prompt.tools().clone();
        let Some(descriptor) = tools.descriptor(&call.function_name) else {
            let err = ToolError::unknown_function(&call.function_name);
            self.output.on_tool_error(&call.function_name, &err);
            return;
        };

        if let Err(missing) = RequiredParameterValidator.validate(&call, descriptor) {
            debug!(
                "Explicit call to {} missing {:?}",
                call.function_name, missing
            );
            self.output
                .on_missing_parameters(&call.function_name, &missing);
            return;
        }

        if let Ok(result) = self.prompt.dispatch(&call, self.output.as_ref()).await {
            self.history.push_user(raw.trim());
            self.history.push_assistant(result);
        }
    }

    /// Freeform prompt: one conversational round, committed only on success.
    async fn run_freeform(&mut self, text: &str) -> Result<(), SessionError> {
        let reply = match self
            .prompt
            .execute_conversational(
                &self.config.model,
                &self.history,
                text,
                self.config.embedded_strategy,
                self.output.as_ref(),
            )
            .await
        {
            Ok(reply) => reply,
            Err(e) if e.is_fatal() => return Err(SessionError::Fatal(e)),
            Err(e) => {
                self.output.on_error(&e.to_string());
                return Ok(());
            }
        };

        self.history.push_user(text);
        self.history.push_assistant(reply.response);

        if self.config.tool_results.retains()
            && let Some(invocation) = reply.invocation
            && let Ok(result) = invocation.result
        {
            self.history.push(Message::system(format!(
                "Tool {} returned: {}",
                invocation.call.function_name, result
            )));
        }

        Ok(())
    }
}
