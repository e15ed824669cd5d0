//! Turn Responses
//!
//! Aggregate outcome of one full processing turn: the messages produced,
//! the agent left in control, and the merged context.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::agent::Agent;
use crate::context::ContextVariables;
use crate::error::{Result, SwarmError};
use crate::schema::FieldReader;

/// Outcome of a conversation turn
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Response {
    /// Messages produced during the turn, in order. Their shape belongs to
    /// the calling layer.
    pub messages: Vec<Value>,

    /// Agent active at the end of the turn
    pub agent: Option<Agent>,

    /// Context after all function invocations in the turn
    pub context_variables: ContextVariables,
}

impl Response {
    pub fn new(messages: Vec<Value>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agent = Some(agent);
        self
    }

    pub fn with_context_variables(mut self, context_variables: ContextVariables) -> Self {
        self.context_variables = context_variables;
        self
    }

    pub fn last_message(&self) -> Option<&Value> {
        self.messages.last()
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let mut fields = FieldReader::new(value, "")?;
        let agent = match fields.take("agent") {
            Some(raw) => Some(Agent::read(raw, &fields.path_of("agent"))?),
            None => None,
        };
        let response = Self {
            messages: fields.array("messages")?,
            agent,
            context_variables: fields.object("context_variables")?.into(),
        };
        fields.finish("Response");
        Ok(response)
    }
}

impl TryFrom<Value> for Response {
    type Error = SwarmError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}
