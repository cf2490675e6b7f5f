//! Call extraction from model output.
//!
//! Recovers a [`CallDescriptor`] from raw model text using one of two
//! protocols:
//!
//! 1. **Strict** ([`parse_strict`]): the entire response must be one call
//!    descriptor. Any failure is an [`ExtractError`].
//! 2. **Embedded** ([`extract_embedded`]): free text that may contain a call
//!    bounded by [`CALL_START_MARKER`] and [`CALL_END_MARKER`]. Absence or a
//!    malformed payload yields `None`, never an error.
//!
//! [`extract_balanced`] scans for the first balanced `{...}` span that parses
//! as a call. It cannot tell an incidental JSON-like fragment in prose from a
//! real call, so it is only consulted as a degraded fallback when the
//! response carries no start marker at all and the caller opted in via
//! [`EmbeddedStrategy::DelimitedThenBraces`].

use super::entities::CallDescriptor;
use thiserror::Error;

/// Opens a delimited call payload.
pub const CALL_START_MARKER: &str = "<<<FUNCTION_CALL>>>";

/// Closes a delimited call payload.
pub const CALL_END_MARKER: &str = "<<<END_FUNCTION_CALL>>>";

/// Strict-mode parse failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Response JSON is not a call descriptor: {0}")]
    InvalidShape(String),

    #[error("Call descriptor has an empty functionName")]
    EmptyFunctionName,
}

/// Search strategy for embedded mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbeddedStrategy {
    /// Only delimiter-bounded payloads are recognized
    #[default]
    Delimited,
    /// Delimiters first; brace scanning when no start marker is present
    DelimitedThenBraces,
}

/// Parse the whole response as one call descriptor.
///
/// Surrounding whitespace is ignored; anything else outside the JSON object is
/// a failure.
pub fn parse_strict(text: &str) -> Result<CallDescriptor, ExtractError> {
    let value: serde_json::Value =
        serde_json::from_str(text.trim()).map_err(|e| ExtractError::InvalidJson(e.to_string()))?;

    let call: CallDescriptor =
        serde_json::from_value(value).map_err(|e| ExtractError::InvalidShape(e.to_string()))?;

    if call.function_name.trim().is_empty() {
        return Err(ExtractError::EmptyFunctionName);
    }

    Ok(call)
}

/// Find a call in free text according to `strategy`.
pub fn extract_embedded(text: &str, strategy: EmbeddedStrategy) -> Option<CallDescriptor> {
    if text.contains(CALL_START_MARKER) {
        return extract_delimited(text);
    }

    match strategy {
        EmbeddedStrategy::Delimited => None,
        EmbeddedStrategy::DelimitedThenBraces => extract_balanced(text),
    }
}

/// Return the first delimiter-bounded payload that parses as a call.
pub fn extract_delimited(text: &str) -> Option<CallDescriptor> {
    let mut rest = text;

    while let Some(start) = rest.find(CALL_START_MARKER) {
        let after_start = &rest[start + CALL_START_MARKER.len()..];
        let end = after_start.find(CALL_END_MARKER)?;

        // Pair the end marker with the nearest start marker before it
        let inner = &after_start[..end];
        let payload = match inner.rfind(CALL_START_MARKER) {
            Some(pos) => &inner[pos + CALL_START_MARKER.len()..],
            None => inner,
        };

        if let Ok(call) = parse_strict(payload) {
            return Some(call);
        }

        rest = &after_start[end + CALL_END_MARKER.len()..];
    }

    None
}

/// Return the first balanced `{...}` span that parses as a call.
pub fn extract_balanced(text: &str) -> Option<CallDescriptor> {
    let mut offset = 0;

    while let Some(pos) = text[offset..].find('{') {
        let start = offset + pos;
        if let Some(len) = balanced_span_len(&text[start..])
            && let Ok(call) = parse_strict(&text[start..start + len])
        {
            return Some(call);
        }
        offset = start + 1;
    }

    None
}

/// Byte length of the balanced object starting at `s[0] == '{'`, honoring
/// JSON string literals and escapes.
fn balanced_span_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    None
}
