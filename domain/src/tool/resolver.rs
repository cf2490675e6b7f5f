//! Parameter resolution
//!
//! Values are always strings; numeric interpretation belongs to the tool that
//! consumes the resolved value.

use super::entities::CallParameter;
use super::value_objects::ToolError;

/// Return the value of the first parameter named exactly `name`.
///
/// Matching is case-sensitive. Fails with `MISSING_PARAMETER` when absent.
pub fn resolve_parameter<'a>(
    name: &str,
    parameters: &'a [CallParameter],
) -> Result<&'a str, ToolError> {
    parameters
        .iter()
        .find(|p| p.parameter_name == name)
        .map(|p| p.parameter_value.as_str())
        .ok_or_else(|| ToolError::missing_parameter(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::value_objects::ToolErrorCode;

    fn params(pairs: &[(&str, &str)]) -> Vec<CallParameter> {
        pairs.iter().map(|(k, v)| CallParameter::new(*k, *v)).collect()
    }

    #[test]
    fn resolves_present_parameter() {
        let list = params(&[("latitude", "51.5"), ("longitude", "-0.12")]);
        assert_eq!(resolve_parameter("longitude", &list).unwrap(), "-0.12");
    }

    #[test]
    fn first_match_wins() {
        let list = params(&[("location", "Paris"), ("location", "Rome")]);
        assert_eq!(resolve_parameter("location", &list).unwrap(), "Paris");
    }

    #[test]
    fn missing_parameter_is_reported() {
        let list = params(&[("city", "Paris")]);
        let err = resolve_parameter("location", &list).unwrap_err();
        assert_eq!(err.code, ToolErrorCode::MissingParameter);
        assert!(err.message.contains("location"));
    }

    #[test]
    fn match_is_case_sensitive() {
        let list = params(&[("Location", "Paris")]);
        assert!(resolve_parameter("location", &list).is_err());
    }

    #[test]
    fn empty_list_is_missing() {
        assert!(resolve_parameter("query", &[]).is_err());
    }

    #[test]
    fn empty_value_is_still_present() {
        let list = params(&[("query", "")]);
        assert_eq!(resolve_parameter("query", &list).unwrap(), "");
    }
}
