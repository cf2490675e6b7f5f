//! Model value object representing a locally hosted LLM

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Local model identifier (Value Object)
///
/// Well-known Ollama tags get their own variant; anything else is carried
/// verbatim in [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Llama32,
    Llama31,
    Qwen25,
    Mistral,
    Custom(String),
}

impl Model {
    /// Get the tag the model runtime knows this model by
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama32 => "llama3.2",
            Model::Llama31 => "llama3.1",
            Model::Qwen25 => "qwen2.5",
            Model::Mistral => "mistral",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (llama3.2)
    fn default() -> Self {
        Model::Llama32
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "llama3.2" => Model::Llama32,
            "llama3.1" => Model::Llama31,
            "qwen2.5" => Model::Qwen25,
            "mistral" => Model::Mistral,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
