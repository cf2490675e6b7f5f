//! HTTP-backed API service.
//!
//! | Capability | Provider | Request |
//! |------------|----------|---------|
//! | geocode | Nominatim | `GET {geocoding}/search?format=json&limit=1&q=` |
//! | reverse geocode | Nominatim | `GET {geocoding}/reverse?format=json&lat=&lon=` |
//! | temperature | Open-Meteo | `GET {weather}?current=temperature_2m&temperature_unit=fahrenheit` |
//! | search | DuckDuckGo Instant Answer API | `GET {search}?q=&format=json` |
//!
//! Response bodies are interpreted by the pure `parse_*` functions so the
//! mapping to error codes is tested without the network.

use async_trait::async_trait;
use std::time::Duration;
use toolcall_application::ports::api_service::ApiService;
use toolcall_domain::{Coordinates, SearchHit, ToolError, ToolErrorCode};

pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_SEARCH_URL: &str = "https://api.duckduckgo.com/";
pub const DEFAULT_USER_AGENT: &str = concat!("ollama-toolcall/", env!("CARGO_PKG_VERSION"));

/// Provider base URLs and client identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub geocoding_url: String,
    pub weather_url: String,
    pub search_url: String,
    pub user_agent: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Live providers over a shared [`reqwest::Client`]
pub struct HttpApiService {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
}

impl HttpApiService {
    pub fn new(endpoints: ApiEndpoints) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(endpoints.user_agent.clone())
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, endpoints })
    }

    /// GET `url` and decode the body as JSON, mapping every failure to `code`.
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        code: ToolErrorCode,
    ) -> Result<serde_json::Value, ToolError> {
        tracing::debug!(url, "API request");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ToolError::new(code, format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ToolError::new(
                code,
                format!("Provider returned error: {}", response.status()),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ToolError::new(code, format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl ApiService for HttpApiService {
    async fn geocode(&self, city: &str) -> Result<Coordinates, ToolError> {
        let url = format!("{}/search", self.endpoints.geocoding_url.trim_end_matches('/'));
        let body = self
            .get_json(
                &url,
                &[
                    ("format", "json".to_string()),
                    ("limit", "1".to_string()),
                    ("q", city.to_string()),
                ],
                ToolErrorCode::GeocodingError,
            )
            .await?;
        parse_geocode(city, &body)
    }

    async fn reverse_geocode(&self, coords: Coordinates) -> Result<String, ToolError> {
        let url = format!("{}/reverse", self.endpoints.geocoding_url.trim_end_matches('/'));
        let body = self
            .get_json(
                &url,
                &[
                    ("format", "json".to_string()),
                    ("lat", coords.latitude.to_string()),
                    ("lon", coords.longitude.to_string()),
                ],
                ToolErrorCode::ReverseGeocodingError,
            )
            .await?;
        parse_reverse_geocode(coords, &body)
    }

    async fn current_temperature(&self, coords: Coordinates) -> Result<f64, ToolError> {
        let body = self
            .get_json(
                &self.endpoints.weather_url,
                &[
                    ("latitude", coords.latitude.to_string()),
                    ("longitude", coords.longitude.to_string()),
                    ("current", "temperature_2m".to_string()),
                    ("temperature_unit", "fahrenheit".to_string()),
                ],
                ToolErrorCode::WeatherError,
            )
            .await?;
        parse_temperature(&body)
    }

    async fn search(&self, query: &str) -> Result<SearchHit, ToolError> {
        let body = self
            .get_json(
                &self.endpoints.search_url,
                &[
                    ("q", query.to_string()),
                    ("format", "json".to_string()),
                    ("no_html", "1".to_string()),
                    ("skip_disambig", "1".to_string()),
                ],
                ToolErrorCode::SearchError,
            )
            .await?;
        parse_search(query, &body)
    }
}

/// Nominatim returns coordinates as strings.
fn number_field(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::String(s) => s.parse().ok(),
        other => other.as_f64(),
    }
}

fn parse_geocode(city: &str, body: &serde_json::Value) -> Result<Coordinates, ToolError> {
    let results = body.as_array().ok_or_else(|| {
        ToolError::new(ToolErrorCode::GeocodingError, "Unexpected geocoding response")
    })?;

    let Some(first) = results.first() else {
        return Err(ToolError::new(
            ToolErrorCode::CityNotFound,
            format!("City not found: {}", city),
        ));
    };

    match (number_field(&first["lat"]), number_field(&first["lon"])) {
        (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
        _ => Err(ToolError::new(
            ToolErrorCode::GeocodingError,
            "Geocoding result has no coordinates",
        )),
    }
}

fn parse_reverse_geocode(coords: Coordinates, body: &serde_json::Value) -> Result<String, ToolError> {
    match body["display_name"].as_str() {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ if body.is_object() => Err(ToolError::new(
            ToolErrorCode::LocationNotFound,
            format!("No location found at {}", coords),
        )),
        _ => Err(ToolError::new(
            ToolErrorCode::ReverseGeocodingError,
            "Unexpected reverse geocoding response",
        )),
    }
}

fn parse_temperature(body: &serde_json::Value) -> Result<f64, ToolError> {
    body["current"]["temperature_2m"].as_f64().ok_or_else(|| {
        ToolError::new(
            ToolErrorCode::WeatherError,
            "Weather response has no current temperature",
        )
    })
}

/// Abstract first; otherwise the first related topic with text.
fn parse_search(query: &str, body: &serde_json::Value) -> Result<SearchHit, ToolError> {
    if let Some(abstract_text) = body["AbstractText"].as_str()
        && !abstract_text.is_empty()
    {
        let title = body["Heading"]
            .as_str()
            .filter(|h| !h.is_empty())
            .unwrap_or(query);
        return Ok(SearchHit::new(title, abstract_text));
    }

    let topic = body["RelatedTopics"]
        .as_array()
        .into_iter()
        .flatten()
        .find_map(|t| t["Text"].as_str().filter(|text| !text.is_empty()));

    match topic {
        Some(text) => {
            let title = body["Heading"]
                .as_str()
                .filter(|h| !h.is_empty())
                .unwrap_or(query);
            Ok(SearchHit::new(title, text))
        }
        None => Err(ToolError::new(
            ToolErrorCode::NoSearchResults,
            format!("No results for: {}", query),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_geocode_string_coordinates() {
        let body = json!([{"lat": "51.5073219", "lon": "-0.1276474", "display_name": "London"}]);
        let coords = parse_geocode("London", &body).unwrap();
        assert_eq!(coords, Coordinates::new(51.5073219, -0.1276474));
    }

    #[test]
    fn test_parse_geocode_empty_is_city_not_found() {
        let err = parse_geocode("Atlantis", &json!([])).unwrap_err();
        assert!(err.is(ToolErrorCode::CityNotFound));
        assert!(err.message.contains("Atlantis"));
    }

    #[test]
    fn test_parse_geocode_bad_shape() {
        let err = parse_geocode("London", &json!({"oops": true})).unwrap_err();
        assert!(err.is(ToolErrorCode::GeocodingError));

        let err = parse_geocode("London", &json!([{"lat": "north"}])).unwrap_err();
        assert!(err.is(ToolErrorCode::GeocodingError));
    }

    #[test]
    fn test_parse_reverse_geocode() {
        let coords = Coordinates::new(48.8566, 2.3522);
        let body = json!({"display_name": "Paris, Île-de-France, France"});
        assert_eq!(
            parse_reverse_geocode(coords, &body).unwrap(),
            "Paris, Île-de-France, France"
        );

        let err = parse_reverse_geocode(coords, &json!({"error": "Unable to geocode"})).unwrap_err();
        assert!(err.is(ToolErrorCode::LocationNotFound));

        let err = parse_reverse_geocode(coords, &json!([1, 2])).unwrap_err();
        assert!(err.is(ToolErrorCode::ReverseGeocodingError));
    }

    #[test]
    fn test_parse_temperature() {
        let body = json!({"current": {"time": "2024-01-01T12:00", "temperature_2m": 58.3}});
        assert_eq!(parse_temperature(&body).unwrap(), 58.3);

        let err = parse_temperature(&json!({"current": {}})).unwrap_err();
        assert!(err.is(ToolErrorCode::WeatherError));
    }

    #[test]
    fn test_parse_search_with_abstract() {
        let body = json!({
            "Heading": "Rust (programming language)",
            "AbstractText": "Rust is a systems programming language.",
            "RelatedTopics": []
        });
        let hit = parse_search("rust", &body).unwrap();
        assert_eq!(hit.title, "Rust (programming language)");
        assert_eq!(hit.content, "Rust is a systems programming language.");
    }

    #[test]
    fn test_parse_search_falls_back_to_related_topic() {
        let body = json!({
            "Heading": "",
            "AbstractText": "",
            "RelatedTopics": [
                {"Name": "Group", "Topics": []},
                {"Text": "Topic 1 description", "FirstURL": "https://example.com/1"}
            ]
        });
        let hit = parse_search("obscure", &body).unwrap();
        assert_eq!(hit.title, "obscure");
        assert_eq!(hit.content, "Topic 1 description");
    }

    #[test]
    fn test_parse_search_empty() {
        let body = json!({"AbstractText": "", "RelatedTopics": []});
        let err = parse_search("nothing", &body).unwrap_err();
        assert!(err.is(ToolErrorCode::NoSearchResults));
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = ApiEndpoints::default();
        assert!(endpoints.user_agent.starts_with("ollama-toolcall/"));
        assert!(HttpApiService::new(endpoints).is_ok());
    }
}
