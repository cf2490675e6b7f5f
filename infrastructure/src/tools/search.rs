//! `WebSearch` tool: top result for a query.

use async_trait::async_trait;
use std::sync::Arc;
use toolcall_application::ports::{api_service::ApiService, tool_executor::ToolHandler};
use toolcall_domain::{CallParameter, ParameterSpec, ToolDescriptor, ToolError, resolve_parameter};

/// Canonical tool name for the web search tool.
pub const WEB_SEARCH: &str = "WebSearch";

pub fn web_search_definition() -> ToolDescriptor {
    ToolDescriptor::new(
        WEB_SEARCH,
        "Search the web and return the title and summary of the top result",
    )
    .with_parameter(ParameterSpec::new("query", "The search query", true))
}

pub struct WebSearch {
    api: Arc<dyn ApiService>,
}

impl WebSearch {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ToolHandler for WebSearch {
    async fn call(&self, parameters: &[CallParameter]) -> Result<String, ToolError> {
        let query = resolve_parameter("query", parameters)?;
        let hit = self.api.search(query).await?;
        Ok(format!("{}\n{}", hit.title, hit.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiService;
    use toolcall_domain::ToolErrorCode;

    #[tokio::test]
    async fn test_title_then_content() {
        let tool = WebSearch::new(Arc::new(MockApiService::new()));
        let result = tool
            .call(&[CallParameter::new("query", "rust language")])
            .await
            .unwrap();

        let (title, content) = result.split_once('\n').unwrap();
        assert!(title.contains("rust language"));
        assert!(!content.is_empty());
    }

    #[tokio::test]
    async fn test_blank_query_has_no_results() {
        let tool = WebSearch::new(Arc::new(MockApiService::new()));
        let err = tool
            .call(&[CallParameter::new("query", "  ")])
            .await
            .unwrap_err();

        assert!(err.is(ToolErrorCode::NoSearchResults));
    }
}
