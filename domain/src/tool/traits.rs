//! Tool domain traits
//!
//! Contains pure domain logic traits for call validation.
//! The async `ToolHandler` and `ToolExecutorPort` live in the application layer.

use super::entities::{CallDescriptor, ToolDescriptor};

/// Validator for calls against a tool's declared schema
///
/// This is a pure domain trait that validates calls without any I/O.
pub trait ToolValidator {
    /// Validate a call, returning the names of missing required parameters
    /// in declaration order.
    fn validate(&self, call: &CallDescriptor, definition: &ToolDescriptor) -> Result<(), Vec<String>>;
}

/// Checks that every `required` parameter is present.
///
/// Unknown extra parameters are tolerated; tool implementations ignore them.
#[derive(Debug, Clone, Default)]
pub struct RequiredParameterValidator;

impl ToolValidator for RequiredParameterValidator {
    fn validate(&self, call: &CallDescriptor, definition: &ToolDescriptor) -> Result<(), Vec<String>> {
        let missing: Vec<String> = definition
            .required_parameters()
            .filter(|p| call.get(&p.name).is_none())
            .map(|p| p.name.clone())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ParameterSpec;

    fn lat_lon_tool() -> ToolDescriptor {
        ToolDescriptor::new("WeatherFromLatLon", "Temperature at coordinates")
            .with_parameter(ParameterSpec::new("latitude", "Latitude", true))
            .with_parameter(ParameterSpec::new("longitude", "Longitude", true))
            .with_parameter(ParameterSpec::new("label", "Optional label", false))
    }

    #[test]
    fn test_validator_reports_all_missing_in_order() {
        let call = CallDescriptor::new("WeatherFromLatLon");
        let result = RequiredParameterValidator.validate(&call, &lat_lon_tool());
        assert_eq!(result.unwrap_err(), vec!["latitude", "longitude"]);
    }

    #[test]
    fn test_validator_partial() {
        let call = CallDescriptor::new("WeatherFromLatLon").with_parameter("latitude", "10");
        let result = RequiredParameterValidator.validate(&call, &lat_lon_tool());
        assert_eq!(result.unwrap_err(), vec!["longitude"]);
    }

    #[test]
    fn test_validator_valid_call_ignores_extras() {
        let call = CallDescriptor::new("WeatherFromLatLon")
            .with_parameter("latitude", "10")
            .with_parameter("longitude", "20")
            .with_parameter("unused", "x");
        assert!(RequiredParameterValidator.validate(&call, &lat_lon_tool()).is_ok());
    }
}
