//! External API port
//!
//! Weather, geocoding and search providers. Every failure is a [`ToolError`]
//! carrying a provider-specific code so tools can propagate it unchanged.

use async_trait::async_trait;
use toolcall_domain::{Coordinates, SearchHit, ToolError};

#[async_trait]
pub trait ApiService: Send + Sync {
    /// Forward geocoding (`GEOCODING_ERROR`, `CITY_NOT_FOUND`)
    async fn geocode(&self, city: &str) -> Result<Coordinates, ToolError>;

    /// Reverse geocoding (`REVERSE_GEOCODING_ERROR`, `LOCATION_NOT_FOUND`)
    async fn reverse_geocode(&self, coords: Coordinates) -> Result<String, ToolError>;

    /// Current temperature in degrees Fahrenheit (`WEATHER_ERROR`)
    async fn current_temperature(&self, coords: Coordinates) -> Result<f64, ToolError>;

    /// Top search result (`SEARCH_ERROR`, `NO_SEARCH_RESULTS`)
    async fn search(&self, query: &str) -> Result<SearchHit, ToolError>;
}
