//! Prompt templates for direct and conversational modes

use crate::tool::extractor::{CALL_END_MARKER, CALL_START_MARKER};

const CALL_SCHEMA: &str = r#"{"functionName": "<tool name>", "parameters": [{"parameterName": "<name>", "parameterValue": "<value>"}]}"#;

/// Templates for the system instruction sent with each request
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction for direct mode.
    ///
    /// The model must answer with one call descriptor and nothing else.
    pub fn direct_system(manifest: &str) -> String {
        format!(
            r#"You are a function-calling assistant with access to the following tools:

{manifest}

Choose the single tool that best answers the user's request and respond ONLY with a JSON object in this exact format:

{schema}

Rules:
- Use a tool name exactly as listed.
- Every parameterValue must be a string, including numbers.
- Include every required parameter.
- Do not add any text, explanation, or markdown before or after the JSON object."#,
            manifest = manifest,
            schema = CALL_SCHEMA,
        )
    }

    /// System instruction for conversational mode.
    ///
    /// The model may chat freely and embeds a call between the delimiter
    /// markers when a tool is needed.
    pub fn conversational_system(manifest: &str) -> String {
        format!(
            r#"You are a helpful assistant. Answer conversationally.

You can use the following tools:

{manifest}

When a tool would help answer the user, write a short sentence saying what you will look up, then emit exactly one call in this format:

{start}
{schema}
{end}

Only emit a call when a tool is needed. Use a tool name exactly as listed and make every parameterValue a string. Never put anything other than the JSON object between the markers."#,
            manifest = manifest,
            schema = CALL_SCHEMA,
            start = CALL_START_MARKER,
            end = CALL_END_MARKER,
        )
    }
}
