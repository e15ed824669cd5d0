//! Agent Functions
//!
//! Tools an agent can invoke. Every function takes no arguments and returns
//! one of three shapes, which is what drives multi-agent handoff:
//!
//! ```text
//!   FunctionOutput::Text          -> answer, same agent continues
//!   FunctionOutput::Handoff       -> switch to the returned agent
//!   FunctionOutput::ContextUpdate -> merge into shared context
//! ```

use std::sync::Arc;

use crate::agent::Agent;
use crate::context::ContextVariables;
use crate::result::FunctionResult;

/// Value returned by an agent function
#[derive(Clone, Debug, PartialEq)]
pub enum FunctionOutput {
    /// Direct textual answer
    Text(String),
    /// Transfer control to another agent
    Handoff(Box<Agent>),
    /// Opaque update to the shared context
    ContextUpdate(ContextVariables),
}

impl From<String> for FunctionOutput {
    fn from(text: String) -> Self {
        FunctionOutput::Text(text)
    }
}

impl From<&str> for FunctionOutput {
    fn from(text: &str) -> Self {
        FunctionOutput::Text(text.into())
    }
}

impl From<Agent> for FunctionOutput {
    fn from(agent: Agent) -> Self {
        FunctionOutput::Handoff(Box::new(agent))
    }
}

impl From<ContextVariables> for FunctionOutput {
    fn from(context: ContextVariables) -> Self {
        FunctionOutput::ContextUpdate(context)
    }
}

type Callable = dyn Fn() -> FunctionOutput + Send + Sync;

/// A named, zero-argument tool owned by an agent
#[derive(Clone)]
pub struct AgentFunction {
    name: String,
    callable: Arc<Callable>,
}

impl AgentFunction {
    /// Wrap a closure under the name the model will call it by
    pub fn new<F, O>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> O + Send + Sync + 'static,
        O: Into<FunctionOutput>,
    {
        Self {
            name: name.into(),
            callable: Arc::new(move || -> FunctionOutput { f().into() }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the function and return its raw output
    pub fn call(&self) -> FunctionOutput {
        (self.callable)()
    }

    /// Run the function and normalize its output
    pub fn invoke(&self) -> FunctionResult {
        tracing::trace!(function = %self.name, "Invoking agent function");
        FunctionResult::from(self.call())
    }
}

/// Functions compare by name and identity of the underlying callable
impl PartialEq for AgentFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.callable, &other.callable)
    }
}

impl std::fmt::Debug for AgentFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_function() {
        let greet = AgentFunction::new("greet", || "hello");
        assert_eq!(greet.name(), "greet");
        assert_eq!(greet.call(), FunctionOutput::Text("hello".into()));

        let result = greet.invoke();
        assert_eq!(result.value, "hello");
        assert!(result.agent.is_none());
        assert!(result.context_variables.is_empty());
    }

    #[test]
    fn test_handoff_function() {
        let transfer = AgentFunction::new("transfer_to_sales", || Agent {
            name: "Sales".into(),
            ..Agent::default()
        });

        let result = transfer.invoke();
        assert!(result.is_handoff());
        assert_eq!(result.agent.as_ref().map(|a| a.name.as_str()), Some("Sales"));
        assert_eq!(result.value, "");
    }

    #[test]
    fn test_context_update_function() {
        let remember = AgentFunction::new("remember", || {
            ContextVariables::new().with("user_id", 42)
        });

        match remember.call() {
            FunctionOutput::ContextUpdate(ctx) => {
                assert_eq!(ctx.get("user_id"), Some(&serde_json::json!(42)));
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_clone_shares_callable() {
        let f = AgentFunction::new("f", || "x");
        let g = AgentFunction::new("f", || "x");
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
    }
}
