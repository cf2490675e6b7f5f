//! Offline API service with canned answers.

use async_trait::async_trait;
use std::sync::Mutex;
use toolcall_application::ports::api_service::ApiService;
use toolcall_domain::{Coordinates, SearchHit, ToolError, ToolErrorCode};

/// (lookup key, coordinates, display name)
const KNOWN_PLACES: &[(&str, f64, f64, &str)] = &[
    ("london", 51.5074, -0.1278, "London, Greater London, England, United Kingdom"),
    ("new york", 40.7128, -74.006, "New York, United States"),
    ("paris", 48.8566, 2.3522, "Paris, Île-de-France, France"),
    ("tokyo", 35.6762, 139.6503, "Tokyo, Japan"),
    ("sydney", -33.8688, 151.2093, "Sydney, New South Wales, Australia"),
];

/// Reverse lookups match a known place within this many degrees.
const MATCH_TOLERANCE: f64 = 0.05;

/// Deterministic [`ApiService`] that never touches the network.
///
/// Every request is appended to a call log so tests can check ordering.
pub struct MockApiService {
    temperature: f64,
    calls: Mutex<Vec<String>>,
}

impl Default for MockApiService {
    fn default() -> Self {
        Self {
            temperature: 72.0,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockApiService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Temperature reported for every location
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Requests received so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl ApiService for MockApiService {
    async fn geocode(&self, city: &str) -> Result<Coordinates, ToolError> {
        self.record(format!("geocode({})", city));
        let key = city.trim().to_lowercase();
        KNOWN_PLACES
            .iter()
            .find(|(name, ..)| *name == key)
            .map(|(_, lat, lon, _)| Coordinates::new(*lat, *lon))
            .ok_or_else(|| {
                ToolError::new(ToolErrorCode::CityNotFound, format!("City not found: {}", city))
            })
    }

    async fn reverse_geocode(&self, coords: Coordinates) -> Result<String, ToolError> {
        self.record(format!(
            "reverse_geocode({}, {})",
            coords.latitude, coords.longitude
        ));
        KNOWN_PLACES
            .iter()
            .find(|(_, lat, lon, _)| {
                (lat - coords.latitude).abs() <= MATCH_TOLERANCE
                    && (lon - coords.longitude).abs() <= MATCH_TOLERANCE
            })
            .map(|(.., display)| display.to_string())
            .ok_or_else(|| {
                ToolError::new(
                    ToolErrorCode::LocationNotFound,
                    format!("No location found at {}", coords),
                )
            })
    }

    async fn current_temperature(&self, coords: Coordinates) -> Result<f64, ToolError> {
        self.record(format!(
            "current_temperature({}, {})",
            coords.latitude, coords.longitude
        ));
        Ok(self.temperature)
    }

    async fn search(&self, query: &str) -> Result<SearchHit, ToolError> {
        self.record(format!("search({})", query));
        let query = query.trim();
        if query.is_empty() {
            return Err(ToolError::new(
                ToolErrorCode::NoSearchResults,
                "No results for an empty query",
            ));
        }
        Ok(SearchHit::new(
            format!("Results for {}", query),
            format!("Offline summary for \"{}\". Run without --mock for live results.", query),
        ))
    }
}
