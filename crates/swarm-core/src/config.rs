//! Provider Configuration
//!
//! Environment-driven defaults for which backend and model new agents use.
//!
//! | variable | meaning |
//! |---|---|
//! | `SWARM_MODEL_PROVIDER` | `openai` or `azure` |
//! | `SWARM_MODEL` | base model name |
//! | `AZURE_OPENAI_DEPLOYMENT` | Azure deployment name |

use serde::{Deserialize, Serialize};

use crate::agent::DEFAULT_MODEL;
use crate::error::{Result, SwarmError};
use crate::provider::ModelProvider;

pub const ENV_PROVIDER: &str = "SWARM_MODEL_PROVIDER";
pub const ENV_MODEL: &str = "SWARM_MODEL";
pub const ENV_AZURE_DEPLOYMENT: &str = "AZURE_OPENAI_DEPLOYMENT";

/// Backend and model selection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub provider: ModelProvider,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub deployment_name: Option<String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: ModelProvider::default(),
            model: default_model(),
            deployment_name: None,
        }
    }
}

impl ProviderConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match get(ENV_PROVIDER) {
            Some(raw) => raw.parse::<ModelProvider>().map_err(|_| {
                SwarmError::Config(format!("{ENV_PROVIDER} must be \"openai\" or \"azure\", got \"{raw}\""))
            })?,
            None => ModelProvider::default(),
        };

        let config = Self {
            provider,
            model: get(ENV_MODEL).unwrap_or_else(default_model),
            deployment_name: get(ENV_AZURE_DEPLOYMENT),
        };

        tracing::debug!(
            provider = %config.provider,
            model = %config.model,
            deployment = ?config.deployment_name,
            "Loaded provider configuration"
        );

        Ok(config)
    }
}
