//! Agent Configuration
//!
//! An [`Agent`] is a read-mostly record describing one conversational
//! participant: which model it talks to, through which provider, with what
//! instructions and tools. Agents are cheap to clone (callables are shared)
//! and safe to read from many threads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ProviderConfig;
use crate::error::{Result, SwarmError};
use crate::function::{AgentFunction, FunctionOutput};
use crate::instructions::{InstructionSource, Instructions, DEFAULT_INSTRUCTIONS};
use crate::provider::ModelProvider;
use crate::schema::FieldReader;

/// Default agent display name
pub const DEFAULT_AGENT_NAME: &str = "Agent";

/// Default base model
pub const DEFAULT_MODEL: &str = "gpt-4";

/// OpenAI's name for the 3.5 turbo family and Azure's dotless equivalent
const OPENAI_GPT35: &str = "gpt-3.5-turbo";
const AZURE_GPT35: &str = "gpt-35-turbo";

/// A configured conversational participant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Agent {
    /// Display identity
    pub name: String,

    /// Base model name (e.g., "gpt-4", "gpt-3.5-turbo")
    pub model: String,

    /// Hosting backend
    pub provider: ModelProvider,

    /// Azure deployment overriding the model name
    pub deployment_name: Option<String>,

    /// System prompt, fixed or computed per call
    pub instructions: Instructions,

    /// Invocable tools, in declaration order
    #[serde(skip_serializing)]
    pub functions: Vec<AgentFunction>,

    /// Passed through to the model call
    pub tool_choice: Option<String>,

    /// Whether the model may request several tool calls at once
    pub parallel_tool_calls: bool,
}

impl Default for Agent {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENT_NAME.into(),
            model: DEFAULT_MODEL.into(),
            provider: ModelProvider::default(),
            deployment_name: None,
            instructions: Instructions::default(),
            functions: Vec::new(),
            tool_choice: None,
            parallel_tool_calls: true,
        }
    }
}

impl Agent {
    /// Create an agent with the given name and defaults elsewhere
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn builder() -> AgentBuilder {
        AgentBuilder::new()
    }

    /// The model identifier to send to the provider's API.
    ///
    /// Azure agents use their deployment name when one is set; otherwise the
    /// model name is rewritten to Azure's dotless form. Other providers get
    /// the model name unchanged.
    pub fn model_identifier(&self) -> String {
        match self.provider {
            ModelProvider::Azure => {
                if let Some(deployment) = self.deployment_name.as_deref().filter(|d| !d.is_empty()) {
                    return deployment.to_string();
                }
                let identifier = self.model.replace(OPENAI_GPT35, AZURE_GPT35);
                if identifier != self.model {
                    tracing::trace!(model = %self.model, %identifier, "Rewrote model name for Azure");
                }
                identifier
            }
            ModelProvider::OpenAi => self.model.clone(),
        }
    }

    /// Look up a function by name
    pub fn function(&self, name: &str) -> Option<&AgentFunction> {
        self.functions.iter().find(|f| f.name() == name)
    }

    /// Function names, in declaration order
    pub fn function_names(&self) -> Vec<&str> {
        self.functions.iter().map(AgentFunction::name).collect()
    }

    /// Parse an agent from JSON text, reporting the offending field on error
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build an agent from an untyped JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        Self::read(value, "")
    }

    pub(crate) fn read(value: Value, path: &str) -> Result<Self> {
        let mut fields = FieldReader::new(value, path)?;

        let functions = fields.array("functions")?;
        if !functions.is_empty() {
            return Err(SwarmError::validation(
                fields.path_of("functions"),
                "an empty array (callables cannot be deserialized)",
                format!("array of {}", functions.len()),
            ));
        }

        let agent = Self {
            name: fields.string("name", DEFAULT_AGENT_NAME)?,
            model: fields.string("model", DEFAULT_MODEL)?,
            provider: fields
                .deserialized("provider", "\"openai\" or \"azure\"")?
                .unwrap_or_default(),
            deployment_name: fields.opt_string("deployment_name")?,
            instructions: fields.string("instructions", DEFAULT_INSTRUCTIONS)?.into(),
            functions: Vec::new(),
            tool_choice: fields.opt_string("tool_choice")?,
            parallel_tool_calls: fields.bool("parallel_tool_calls", true)?,
        };
        fields.finish("Agent");
        Ok(agent)
    }
}

impl TryFrom<Value> for Agent {
    type Error = SwarmError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

/// Builder for Agent configuration
#[derive(Default)]
pub struct AgentBuilder {
    agent: Agent,
}

impl AgentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.agent.name = name.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.agent.model = model.into();
        self
    }

    pub fn provider(mut self, provider: ModelProvider) -> Self {
        self.agent.provider = provider;
        self
    }

    pub fn deployment_name(mut self, deployment: impl Into<String>) -> Self {
        self.agent.deployment_name = Some(deployment.into());
        self
    }

    /// Apply provider, model and deployment from a loaded configuration
    pub fn provider_config(mut self, config: ProviderConfig) -> Self {
        self.agent.provider = config.provider;
        self.agent.model = config.model;
        self.agent.deployment_name = config.deployment_name;
        self
    }

    pub fn instructions(mut self, instructions: impl Into<Instructions>) -> Self {
        self.agent.instructions = instructions.into();
        self
    }

    /// Instructions computed each time they are resolved
    pub fn dynamic_instructions<S: InstructionSource + 'static>(mut self, source: S) -> Self {
        self.agent.instructions = Instructions::dynamic(source);
        self
    }

    /// Append a tool
    pub fn function<F, O>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> O + Send + Sync + 'static,
        O: Into<FunctionOutput>,
    {
        self.agent.functions.push(AgentFunction::new(name, f));
        self
    }

    pub fn functions(mut self, functions: Vec<AgentFunction>) -> Self {
        self.agent.functions = functions;
        self
    }

    pub fn tool_choice(mut self, choice: impl Into<String>) -> Self {
        self.agent.tool_choice = Some(choice.into());
        self
    }

    pub fn parallel_tool_calls(mut self, enabled: bool) -> Self {
        self.agent.parallel_tool_calls = enabled;
        self
    }

    pub fn build(self) -> Agent {
        self.agent
    }
}
