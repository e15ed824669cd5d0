//! Function Results
//!
//! Normalizes the three shapes an agent function can return into a single
//! record the orchestrator consumes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::agent::Agent;
use crate::context::ContextVariables;
use crate::error::{Result, SwarmError};
use crate::function::FunctionOutput;
use crate::schema::FieldReader;

/// Normalized return value of an agent function
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct FunctionResult {
    /// Textual result, empty when not applicable
    pub value: String,

    /// Agent to hand off to, if any
    pub agent: Option<Agent>,

    /// Variables to merge into shared state
    pub context_variables: ContextVariables,
}

impl FunctionResult {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// A handoff carries no text
    pub fn handoff(agent: Agent) -> Self {
        Self {
            agent: Some(agent),
            ..Self::default()
        }
    }

    pub fn context(context_variables: ContextVariables) -> Self {
        Self {
            context_variables,
            ..Self::default()
        }
    }

    pub fn with_context_variables(mut self, context_variables: ContextVariables) -> Self {
        self.context_variables = context_variables;
        self
    }

    pub fn is_handoff(&self) -> bool {
        self.agent.is_some()
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let mut fields = FieldReader::new(value, "")?;
        let agent = match fields.take("agent") {
            Some(raw) => Some(Agent::read(raw, &fields.path_of("agent"))?),
            None => None,
        };
        let result = Self {
            value: fields.string("value", "")?,
            agent,
            context_variables: fields.object("context_variables")?.into(),
        };
        fields.finish("FunctionResult");
        Ok(result)
    }
}

impl From<FunctionOutput> for FunctionResult {
    fn from(output: FunctionOutput) -> Self {
        match output {
            FunctionOutput::Text(value) => Self::text(value),
            FunctionOutput::Handoff(agent) => {
                tracing::debug!(to = %agent.name, "Function requested handoff");
                Self::handoff(*agent)
            }
            FunctionOutput::ContextUpdate(context) => Self::context(context),
        }
    }
}

impl TryFrom<Value> for FunctionResult {
    type Error = SwarmError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ModelProvider;
    use serde_json::json;

    #[test]
    fn test_text_normalization() {
        let result = FunctionResult::from(FunctionOutput::from("42 degrees"));
        assert_eq!(result.value, "42 degrees");
        assert!(result.agent.is_none());
        assert!(result.context_variables.is_empty());
    }

    #[test]
    fn test_handoff_normalization_leaves_value_empty() {
        let target = Agent::new("Refunds");
        let result = FunctionResult::from(FunctionOutput::from(target.clone()));
        assert!(result.is_handoff());
        assert_eq!(result.agent, Some(target));
        assert_eq!(result.value, "");
        assert!(result.context_variables.is_empty());
    }

    #[test]
    fn test_handoff_normalization_is_logged() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl Write for Capture {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            FunctionResult::from(FunctionOutput::from("no handoff here"));
            FunctionResult::from(FunctionOutput::from(Agent::new("Escalations")));
        });

        let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logged.matches("Function requested handoff").count(), 1);
        assert!(logged.contains("Escalations"));
    }

    #[test]
    fn test_context_normalization() {
        let ctx = ContextVariables::new().with("order_id", "A-17");
        let result = FunctionResult::from(FunctionOutput::from(ctx.clone()));
        assert_eq!(result.value, "");
        assert!(result.agent.is_none());
        assert_eq!(result.context_variables, ctx);
    }

    #[test]
    fn test_round_trip_with_nested_agent() {
        let result = FunctionResult::handoff(Agent {
            name: "Azure Helper".into(),
            provider: ModelProvider::Azure,
            model: "gpt-3.5-turbo".into(),
            ..Agent::default()
        })
        .with_context_variables(ContextVariables::new().with("escalated", true));

        let json = serde_json::to_string(&result).unwrap();
        let back: FunctionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_defaults_from_empty_object() {
        let result = FunctionResult::from_value(json!({})).unwrap();
        assert_eq!(result, FunctionResult::default());
    }

    #[test]
    fn test_nested_agent_error_path() {
        let err = FunctionResult::from_value(json!({"agent": {"model": false}})).unwrap_err();
        assert_eq!(err.field(), Some("agent.model"));

        let err = FunctionResult::from_value(json!({"context_variables": [1]})).unwrap_err();
        assert_eq!(err.field(), Some("context_variables"));
    }
}
