//! Model Providers
//!
//! The closed set of model-hosting backends an [`Agent`](crate::Agent) can
//! target. Adding a backend is a code change, not configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SwarmError;

/// Model-hosting backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    /// OpenAI's public API
    #[default]
    OpenAi,
    /// Azure-hosted OpenAI deployments
    Azure,
}

impl ModelProvider {
    /// Wire name, as used in serialized configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelProvider::OpenAi => "openai",
            ModelProvider::Azure => "azure",
        }
    }
}

impl std::fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelProvider {
    type Err = SwarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ModelProvider::OpenAi),
            "azure" => Ok(ModelProvider::Azure),
            _ => Err(SwarmError::UnknownProvider(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_openai() {
        assert_eq!(ModelProvider::default(), ModelProvider::OpenAi);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&ModelProvider::OpenAi).unwrap(), "\"openai\"");
        assert_eq!(serde_json::to_string(&ModelProvider::Azure).unwrap(), "\"azure\"");
        let parsed: ModelProvider = serde_json::from_str("\"azure\"").unwrap();
        assert_eq!(parsed, ModelProvider::Azure);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Azure".parse::<ModelProvider>().unwrap(), ModelProvider::Azure);
        assert_eq!(" openai ".parse::<ModelProvider>().unwrap(), ModelProvider::OpenAi);
        assert!(matches!(
            "bedrock".parse::<ModelProvider>(),
            Err(SwarmError::UnknownProvider(name)) if name == "bedrock"
        ));
    }
}
