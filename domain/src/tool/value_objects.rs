//! Tool domain value objects: error codes shared by every tool
//!
//! A [`ToolError`] carries both a machine-readable [`ToolErrorCode`] (for
//! branching) and a human-readable message (for display). Tool implementations
//! return their own provider-specific codes, which the dispatcher propagates
//! unchanged.

use serde::{Deserialize, Serialize};

/// Error code taxonomy.
///
/// | Code | Raised by |
/// |------|-----------|
/// | `MISSING_PARAMETER` | Parameter resolution |
/// | `INVALID_PARAMETER` | Tools that interpret a string as a number |
/// | `UNKNOWN_FUNCTION` | Dispatcher lookup |
/// | `GEOCODING_ERROR`, `CITY_NOT_FOUND` | Forward geocoding |
/// | `REVERSE_GEOCODING_ERROR`, `LOCATION_NOT_FOUND` | Reverse geocoding |
/// | `WEATHER_ERROR` | Temperature lookup |
/// | `SEARCH_ERROR`, `NO_SEARCH_RESULTS` | Web search |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolErrorCode {
    MissingParameter,
    InvalidParameter,
    UnknownFunction,
    GeocodingError,
    ReverseGeocodingError,
    CityNotFound,
    LocationNotFound,
    WeatherError,
    SearchError,
    NoSearchResults,
}

impl ToolErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolErrorCode::MissingParameter => "MISSING_PARAMETER",
            ToolErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ToolErrorCode::UnknownFunction => "UNKNOWN_FUNCTION",
            ToolErrorCode::GeocodingError => "GEOCODING_ERROR",
            ToolErrorCode::ReverseGeocodingError => "REVERSE_GEOCODING_ERROR",
            ToolErrorCode::CityNotFound => "CITY_NOT_FOUND",
            ToolErrorCode::LocationNotFound => "LOCATION_NOT_FOUND",
            ToolErrorCode::WeatherError => "WEATHER_ERROR",
            ToolErrorCode::SearchError => "SEARCH_ERROR",
            ToolErrorCode::NoSearchResults => "NO_SEARCH_RESULTS",
        }
    }
}

impl std::fmt::Display for ToolErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error that occurred during tool resolution or execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., `CITY_NOT_FOUND`)
    pub code: ToolErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub fn new(code: ToolErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn missing_parameter(name: &str) -> Self {
        Self::new(
            ToolErrorCode::MissingParameter,
            format!("Missing required parameter: {}", name),
        )
    }

    pub fn invalid_parameter(name: &str, value: &str) -> Self {
        Self::new(
            ToolErrorCode::InvalidParameter,
            format!("Parameter '{}' is not a valid number: {}", name, value),
        )
    }

    pub fn unknown_function(name: &str) -> Self {
        Self::new(
            ToolErrorCode::UnknownFunction,
            format!("Unknown function: {}", name),
        )
    }

    pub fn is(&self, code: ToolErrorCode) -> bool {
        self.code == code
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_display() {
        let err = ToolError::missing_parameter("location");

        assert_eq!(err.code, ToolErrorCode::MissingParameter);
        assert_eq!(
            err.to_string(),
            "[MISSING_PARAMETER] Missing required parameter: location"
        );
    }

    #[test]
    fn test_code_serializes_as_tag() {
        let json = serde_json::to_string(&ToolErrorCode::NoSearchResults).unwrap();
        assert_eq!(json, "\"NO_SEARCH_RESULTS\"");

        let code: ToolErrorCode = serde_json::from_str("\"REVERSE_GEOCODING_ERROR\"").unwrap();
        assert_eq!(code, ToolErrorCode::ReverseGeocodingError);
    }

    #[test]
    fn test_as_str_matches_serde_tag() {
        for code in [
            ToolErrorCode::MissingParameter,
            ToolErrorCode::InvalidParameter,
            ToolErrorCode::UnknownFunction,
            ToolErrorCode::GeocodingError,
            ToolErrorCode::ReverseGeocodingError,
            ToolErrorCode::CityNotFound,
            ToolErrorCode::LocationNotFound,
            ToolErrorCode::WeatherError,
            ToolErrorCode::SearchError,
            ToolErrorCode::NoSearchResults,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_is() {
        let err = ToolError::unknown_function("Nope");
        assert!(err.is(ToolErrorCode::UnknownFunction));
        assert!(!err.is(ToolErrorCode::MissingParameter));
    }
}
