//! Weather tools: WeatherFromLocation, WeatherFromLatLon

use super::coordinates_from;
use async_trait::async_trait;
use std::sync::Arc;
use toolcall_application::ports::{api_service::ApiService, tool_executor::ToolHandler};
use toolcall_domain::{CallParameter, ParameterSpec, ToolDescriptor, ToolError, resolve_parameter};

/// Tool name constants
pub const WEATHER_FROM_LOCATION: &str = "WeatherFromLocation";
pub const WEATHER_FROM_LAT_LON: &str = "WeatherFromLatLon";

/// Get the tool definition for WeatherFromLocation
pub fn weather_from_location_definition() -> ToolDescriptor {
    ToolDescriptor::new(
        WEATHER_FROM_LOCATION,
        "Get the current temperature in degrees Fahrenheit for a named city",
    )
    .with_parameter(ParameterSpec::new(
        "location",
        "City name, for example \"London\" or \"New York\"",
        true,
    ))
}

/// Get the tool definition for WeatherFromLatLon
pub fn weather_from_lat_lon_definition() -> ToolDescriptor {
    ToolDescriptor::new(
        WEATHER_FROM_LAT_LON,
        "Get the current temperature in degrees Fahrenheit at a latitude and longitude",
    )
    .with_parameter(ParameterSpec::new("latitude", "Latitude in decimal degrees", true))
    .with_parameter(ParameterSpec::new("longitude", "Longitude in decimal degrees", true))
}

fn format_temperature(temperature: f64) -> String {
    format!("{} degrees Fahrenheit", temperature)
}

/// Geocodes the city, then looks up the temperature there.
pub struct WeatherFromLocation {
    api: Arc<dyn ApiService>,
}

impl WeatherFromLocation {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ToolHandler for WeatherFromLocation {
    async fn call(&self, parameters: &[CallParameter]) -> Result<String, ToolError> {
        let location = resolve_parameter("location", parameters)?;
        let coords = self.api.geocode(location).await?;
        tracing::debug!(location, %coords, "Geocoded location");
        let temperature = self.api.current_temperature(coords).await?;
        Ok(format_temperature(temperature))
    }
}

pub struct WeatherFromLatLon {
    api: Arc<dyn ApiService>,
}

impl WeatherFromLatLon {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ToolHandler for WeatherFromLatLon {
    async fn call(&self, parameters: &[CallParameter]) -> Result<String, ToolError> {
        let coords = coordinates_from(parameters)?;
        let temperature = self.api.current_temperature(coords).await?;
        Ok(format_temperature(temperature))
    }
}
