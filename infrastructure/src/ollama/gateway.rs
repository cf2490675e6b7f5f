//! Ollama LLM Gateway implementation

use super::stream::into_chunk_stream;
use super::types::{ChatRequest, ErrorBody, GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use std::time::Duration;
use toolcall_application::ports::llm_gateway::{ChunkStream, GatewayError, LlmGateway};
use toolcall_domain::{Message, Model};
use tracing::{debug, info};

pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// LLM Gateway implementation for a local Ollama server
pub struct OllamaGateway {
    client: reqwest::Client,
    host: String,
}

impl OllamaGateway {
    /// Create a gateway for `host`, with an optional overall request timeout
    pub fn new(host: impl Into<String>, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let host = host.into().trim_end_matches('/').to_string();
        info!("OllamaGateway initialized for {}", host);

        Ok(Self { client, host })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    async fn post<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, GatewayError> {
        let url = format!("{}{}", self.host, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.error)
            .unwrap_or(text);
        Err(GatewayError::RequestFailed(format!("{}: {}", status, message)))
    }
}

fn map_send_error(e: reqwest::Error) -> GatewayError {
    if e.is_connect() {
        GatewayError::Connection(format!(
            "Could not reach Ollama ({}). Is `ollama serve` running?",
            e
        ))
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for OllamaGateway {
    async fn generate(
        &self,
        model: &Model,
        system: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        let request = GenerateRequest {
            model: model.as_str(),
            system,
            prompt,
            stream: false,
            format: "json",
        };

        let response = self.post("/api/generate", &request).await?;
        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(body.response)
    }

    async fn chat(&self, model: &Model, messages: &[Message]) -> Result<ChunkStream, GatewayError> {
        let request = ChatRequest {
            model: model.as_str(),
            messages,
            stream: true,
        };

        let response = self.post("/api/chat", &request).await?;
        Ok(into_chunk_stream(response.bytes_stream()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_is_normalized() {
        let gateway = OllamaGateway::new("http://localhost:11434/", None).unwrap();
        assert_eq!(gateway.host(), DEFAULT_HOST);
    }

    #[test]
    fn test_generate_request_shape() {
        let request = GenerateRequest {
            model: "llama3.2",
            system: "sys",
            prompt: "hi",
            stream: false,
            format: "json",
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "model": "llama3.2",
                "system": "sys",
                "prompt": "hi",
                "stream": false,
                "format": "json"
            })
        );
    }

    #[test]
    fn test_chat_request_shape() {
        let messages = vec![Message::system("sys"), Message::user("hi")];
        let request = ChatRequest {
            model: "qwen2.5",
            messages: &messages,
            stream: true,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "model": "qwen2.5",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ],
                "stream": true
            })
        );
    }
}
