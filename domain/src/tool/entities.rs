//! Tool domain entities

use serde::{Deserialize, Serialize};

/// Definition of a tool advertised to the model
///
/// Field order is part of the wire contract: the descriptor set is embedded
/// verbatim into system instructions, so it must serialize identically on
/// every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique name of the tool (e.g., "WeatherFromLocation")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications, in declaration order
    pub parameters: Vec<ParameterSpec>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name, unique within its tool
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Parameter type tag (currently always "string")
    #[serde(rename = "type")]
    pub param_type: String,
    /// Whether this parameter is required
    pub required: bool,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a parameter. A parameter with an existing name replaces it in place.
    pub fn with_parameter(mut self, param: ParameterSpec) -> Self {
        match self.parameters.iter_mut().find(|p| p.name == param.name) {
            Some(existing) => *existing = param,
            None => self.parameters.push(param),
        }
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| p.required)
    }
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type: "string".to_string(),
            required,
        }
    }
}

/// The descriptor set as advertised to the model: `{"tools": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct ToolManifest<'a> {
    pub tools: Vec<&'a ToolDescriptor>,
}

impl<'a> ToolManifest<'a> {
    pub fn new(tools: impl IntoIterator<Item = &'a ToolDescriptor>) -> Self {
        Self {
            tools: tools.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for ToolManifest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

/// One named argument of a call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CallParameter {
    pub parameter_name: String,
    pub parameter_value: String,
}

impl CallParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            parameter_name: name.into(),
            parameter_value: value.into(),
        }
    }
}

/// A request to invoke a tool, as emitted by the model or typed by the user
///
/// Wire shape: `{"functionName": "...", "parameters": [{"parameterName": "...", "parameterValue": "..."}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CallDescriptor {
    pub function_name: String,
    pub parameters: Vec<CallParameter>,
}

impl CallDescriptor {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(CallParameter::new(name, value));
        self
    }

    /// First value supplied for `name`, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.parameter_name == name)
            .map(|p| p.parameter_value.as_str())
    }
}
