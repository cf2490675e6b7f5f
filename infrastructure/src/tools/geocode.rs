//! Reverse geocoding tool: LatLonToCity

use super::coordinates_from;
use async_trait::async_trait;
use std::sync::Arc;
use toolcall_application::ports::{api_service::ApiService, tool_executor::ToolHandler};
use toolcall_domain::{CallParameter, ParameterSpec, ToolDescriptor, ToolError};

pub const LAT_LON_TO_CITY: &str = "LatLonToCity";

pub fn lat_lon_to_city_definition() -> ToolDescriptor {
    ToolDescriptor::new(
        LAT_LON_TO_CITY,
        "Find the name of the place at a latitude and longitude",
    )
    .with_parameter(ParameterSpec::new("latitude", "Latitude in decimal degrees", true))
    .with_parameter(ParameterSpec::new("longitude", "Longitude in decimal degrees", true))
}

pub struct LatLonToCity {
    api: Arc<dyn ApiService>,
}

impl LatLonToCity {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ToolHandler for LatLonToCity {
    async fn call(&self, parameters: &[CallParameter]) -> Result<String, ToolError> {
        let coords = coordinates_from(parameters)?;
        self.api.reverse_geocode(coords).await
    }
}
