//! External API configuration from TOML (`[api]` section)

use crate::api::ApiEndpoints;
use serde::{Deserialize, Serialize};

/// Raw API configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    pub geocoding_url: String,
    pub weather_url: String,
    pub search_url: String,
    pub user_agent: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        let endpoints = ApiEndpoints::default();
        Self {
            geocoding_url: endpoints.geocoding_url,
            weather_url: endpoints.weather_url,
            search_url: endpoints.search_url,
            user_agent: endpoints.user_agent,
        }
    }
}

impl FileApiConfig {
    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints {
            geocoding_url: self.geocoding_url.clone(),
            weather_url: self.weather_url.clone(),
            search_url: self.search_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}
