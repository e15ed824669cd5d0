//! Error Types

use thiserror::Error;

/// Result type alias for swarm-core operations
pub type Result<T> = std::result::Result<T, SwarmError>;

/// Errors raised while building the data model from untyped input
#[derive(Error, Debug)]
pub enum SwarmError {
    /// A field carried a value of the wrong type
    #[error("Validation error: field `{field}` expected {expected}, found {found}")]
    Validation {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// Provider name outside the supported set
    #[error("Unknown model provider: {0}")]
    UnknownProvider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SwarmError {
    pub(crate) fn validation(
        field: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        SwarmError::Validation {
            field: field.into(),
            expected,
            found: found.into(),
        }
    }

    /// Whether this is a schema validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, SwarmError::Validation { .. })
    }

    /// Name of the offending field, for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            SwarmError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = SwarmError::validation("model", "a string", "number");
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("model"));
        assert_eq!(
            err.to_string(),
            "Validation error: field `model` expected a string, found number"
        );
    }

    #[test]
    fn test_non_validation_errors() {
        let err = SwarmError::UnknownProvider("anthropic".into());
        assert!(!err.is_validation());
        assert_eq!(err.field(), None);
    }
}
