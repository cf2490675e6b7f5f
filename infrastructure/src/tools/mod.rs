//! Built-in tools and the registry that dispatches them
//!
//! | Tool | Parameters | Backed by |
//! |------|------------|-----------|
//! | `WeatherFromLocation` | `location` | geocode, then current temperature |
//! | `WeatherFromLatLon` | `latitude`, `longitude` | current temperature |
//! | `LatLonToCity` | `latitude`, `longitude` | reverse geocode |
//! | `WebSearch` | `query` | search |
//!
//! Every tool talks to the outside world only through an [`ApiService`].

pub mod geocode;
pub mod search;
pub mod weather;

mod registry;

pub use geocode::LatLonToCity;
pub use registry::ToolRegistry;
pub use search::WebSearch;
pub use weather::{WeatherFromLatLon, WeatherFromLocation};

use std::sync::Arc;
use toolcall_application::ports::api_service::ApiService;
use toolcall_domain::{CallParameter, Coordinates, ToolError, resolve_parameter};

/// Create the registry with every built-in tool
pub fn default_registry(api: Arc<dyn ApiService>) -> ToolRegistry {
    ToolRegistry::new()
        .register(
            weather::weather_from_location_definition(),
            WeatherFromLocation::new(api.clone()),
        )
        .register(
            weather::weather_from_lat_lon_definition(),
            WeatherFromLatLon::new(api.clone()),
        )
        .register(geocode::lat_lon_to_city_definition(), LatLonToCity::new(api.clone()))
        .register(search::web_search_definition(), WebSearch::new(api))
}

/// Resolve a coordinate parameter and parse it as a finite number.
fn parse_coordinate(name: &str, parameters: &[CallParameter]) -> Result<f64, ToolError> {
    let raw = resolve_parameter(name, parameters)?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ToolError::invalid_parameter(name, raw))
}

/// `latitude` and `longitude` as [`Coordinates`].
pub(crate) fn coordinates_from(parameters: &[CallParameter]) -> Result<Coordinates, ToolError> {
    Ok(Coordinates::new(
        parse_coordinate("latitude", parameters)?,
        parse_coordinate("longitude", parameters)?,
    ))
}
