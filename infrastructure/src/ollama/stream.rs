//! JSON Lines stream parser for the Ollama Chat API.
//!
//! Ollama streams one JSON object per line, not SSE. Network chunks may split
//! a line anywhere, so bytes are buffered until a newline arrives.

use super::types::ChatChunk;
use futures::stream::{Stream, StreamExt};
use toolcall_application::ports::llm_gateway::{ChunkStream, GatewayError};

/// Maximum buffered bytes before the stream is aborted.
const MAX_BUF: usize = 16 * 1024 * 1024;

/// Convert a byte stream into a [`ChunkStream`] of content deltas.
pub(crate) fn into_chunk_stream<S, B, E>(bytes: S) -> ChunkStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let stream = bytes
        .scan((Vec::<u8>::new(), false), |(buffer, finished), chunk| {
            let results = if *finished {
                None
            } else {
                Some(match chunk {
                    Ok(bytes) => {
                        buffer.extend_from_slice(bytes.as_ref());
                        if buffer.len() > MAX_BUF {
                            buffer.clear();
                            *finished = true;
                            vec![Err(GatewayError::Stream(
                                "Stream buffer exceeded 16 MiB".into(),
                            ))]
                        } else {
                            drain_lines(buffer, finished)
                        }
                    }
                    Err(e) => {
                        *finished = true;
                        vec![Err(GatewayError::Stream(format!("Stream read error: {}", e)))]
                    }
                })
            };
            async move { results }
        })
        .flat_map(futures::stream::iter);

    Box::pin(stream)
}

/// Parse every complete line in `buffer`, leaving any partial tail.
fn drain_lines(buffer: &mut Vec<u8>, finished: &mut bool) -> Vec<Result<String, GatewayError>> {
    let mut results = Vec::new();

    while !*finished && let Some(pos) = buffer.iter().position(|b| *b == b'\n') {
        let line: Vec<u8> = buffer.drain(..=pos).collect();
        let line = String::from_utf8_lossy(&line);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_json_line(line) {
            LineEvent::Content(text) => results.push(Ok(text)),
            LineEvent::Skip => {}
            LineEvent::Done => *finished = true,
            LineEvent::Error(message) => {
                *finished = true;
                results.push(Err(GatewayError::Stream(message)));
            }
        }
    }

    results
}

#[derive(Debug, PartialEq)]
enum LineEvent {
    Content(String),
    Skip,
    Done,
    Error(String),
}

/// Interpret a single JSON line.
fn parse_json_line(line: &str) -> LineEvent {
    let Ok(chunk) = serde_json::from_str::<ChatChunk>(line) else {
        tracing::debug!(line, "Skipping unparseable stream line");
        return LineEvent::Skip;
    };

    if let Some(error) = chunk.error {
        return LineEvent::Error(error);
    }

    let content = chunk
        .message
        .and_then(|m| m.content)
        .filter(|c| !c.is_empty());

    match (content, chunk.done) {
        (Some(text), _) => LineEvent::Content(text),
        (None, Some(true)) => LineEvent::Done,
        (None, _) => LineEvent::Skip,
    }
}
