//! # swarm-core
//!
//! Data model for multi-agent orchestration with handoffs.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐     ┌──────────────────────────────────────────┐
//! │ ModelProvider │────▶│ Agent                                    │
//! └───────────────┘     │  instructions · functions · model_id()   │
//!                       └───────────────┬──────────────────────────┘
//!                                       │ AgentFunction::call()
//!                       ┌───────────────▼──────────────────────────┐
//!                       │ FunctionOutput: Text | Handoff | Context │
//!                       └───────────────┬──────────────────────────┘
//!                                       │ normalize
//!                       ┌───────────────▼───────┐    ┌──────────┐
//!                       │ FunctionResult        │───▶│ Response │
//!                       └───────────────────────┘    └──────────┘
//! ```
//!
//! The orchestrator that runs turns, calls models and dispatches tools lives
//! outside this crate; it builds agents, calls
//! [`Agent::model_identifier`] before each request, and assembles
//! [`FunctionResult`] and [`Response`] values from what the functions return.
//!
//! ## Usage
//!
//! ```rust
//! use swarm_core::{Agent, FunctionResult, ModelProvider};
//!
//! let sales = Agent::new("Sales");
//! let triage = Agent::builder()
//!     .name("Triage")
//!     .provider(ModelProvider::Azure)
//!     .model("gpt-3.5-turbo")
//!     .function("transfer_to_sales", move || sales.clone())
//!     .build();
//!
//! assert_eq!(triage.model_identifier(), "gpt-35-turbo");
//!
//! let result: FunctionResult = triage.functions[0].invoke();
//! assert_eq!(result.agent.map(|a| a.name), Some("Sales".to_string()));
//! ```

pub mod agent;
pub mod config;
pub mod context;
pub mod error;
pub mod function;
pub mod instructions;
pub mod provider;
pub mod response;
pub mod result;
mod schema;

pub use agent::{Agent, AgentBuilder};
pub use config::ProviderConfig;
pub use context::ContextVariables;
pub use error::{Result, SwarmError};
pub use function::{AgentFunction, FunctionOutput};
pub use instructions::{InstructionSource, Instructions};
pub use provider::ModelProvider;
pub use response::Response;
pub use result::FunctionResult;
