//! Progress reporting while a one-shot request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use toolcall_application::ChatOutput;
use toolcall_domain::{CallDescriptor, Model, ToolDescriptor, ToolError};

/// Shows a spinner until the first event arrives, then forwards
/// every event to the wrapped output.
pub struct ProgressReporter {
    inner: Arc<dyn ChatOutput>,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new(inner: Arc<dyn ChatOutput>) -> Self {
        Self {
            inner,
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start the spinner for a request to `model`.
    pub fn start(&self, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(model.to_string());
        pb.set_message("thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    /// Clear the spinner if it is still running.
    pub fn finish(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    pub fn is_running(&self) -> bool {
        self.spinner
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}

impl ChatOutput for ProgressReporter {
    fn on_chunk(&self, chunk: &str) {
        self.finish();
        self.inner.on_chunk(chunk);
    }

    fn on_stream_end(&self) {
        self.finish();
        self.inner.on_stream_end();
    }

    fn on_tool_call(&self, call: &CallDescriptor) {
        self.finish();
        self.inner.on_tool_call(call);
    }

    fn on_tool_result(&self, name: &str, result: &str) {
        self.finish();
        self.inner.on_tool_result(name, result);
    }

    fn on_tool_error(&self, name: &str, error: &ToolError) {
        self.finish();
        self.inner.on_tool_error(name, error);
    }

    fn on_missing_parameters(&self, name: &str, missing: &[String]) {
        self.finish();
        self.inner.on_missing_parameters(name, missing);
    }

    fn on_tools(&self, tools: &[&ToolDescriptor]) {
        self.finish();
        self.inner.on_tools(tools);
    }

    fn on_error(&self, message: &str) {
        self.finish();
        self.inner.on_error(message);
    }

    fn info(&self, message: &str) {
        self.finish();
        self.inner.info(message);
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
