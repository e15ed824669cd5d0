//! Agent Instructions
//!
//! The system prompt of an agent is either fixed text or computed at call
//! time (e.g. to inject the current date). Both forms resolve to a string;
//! when to resolve is up to the orchestrator.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::sync::Arc;

/// Default system prompt for a new agent
pub const DEFAULT_INSTRUCTIONS: &str = "You are a helpful agent.";

/// Anything that can produce instructions on demand
pub trait InstructionSource: Send + Sync {
    fn resolve(&self) -> String;
}

impl<F> InstructionSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn resolve(&self) -> String {
        self()
    }
}

/// Constant or dynamically computed instructions
#[derive(Clone)]
pub enum Instructions {
    /// Fixed text
    Text(String),
    /// Computed on each resolution
    Dynamic(Arc<dyn InstructionSource>),
}

impl Instructions {
    /// Wrap a closure or other source evaluated on every `resolve`
    pub fn dynamic<S: InstructionSource + 'static>(source: S) -> Self {
        Instructions::Dynamic(Arc::new(source))
    }

    /// Produce the instruction text
    pub fn resolve(&self) -> Cow<'_, str> {
        match self {
            Instructions::Text(text) => Cow::Borrowed(text),
            Instructions::Dynamic(source) => Cow::Owned(source.resolve()),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Instructions::Dynamic(_))
    }
}

impl Default for Instructions {
    fn default() -> Self {
        Instructions::Text(DEFAULT_INSTRUCTIONS.into())
    }
}

impl From<String> for Instructions {
    fn from(text: String) -> Self {
        Instructions::Text(text)
    }
}

impl From<&str> for Instructions {
    fn from(text: &str) -> Self {
        Instructions::Text(text.into())
    }
}

impl PartialEq for Instructions {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Instructions::Text(a), Instructions::Text(b)) => a == b,
            (Instructions::Dynamic(a), Instructions::Dynamic(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Debug for Instructions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instructions::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Instructions::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Dynamic instructions serialize as their current resolution
impl Serialize for Instructions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.resolve())
    }
}

impl<'de> Deserialize<'de> for Instructions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Instructions::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_text_resolves_to_itself() {
        let instructions = Instructions::from("Be terse.");
        assert_eq!(instructions.resolve(), "Be terse.");
        assert!(!instructions.is_dynamic());
    }

    #[test]
    fn test_dynamic_resolves_on_every_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let instructions = Instructions::dynamic(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            format!("call #{n}")
        });

        assert_eq!(instructions.resolve(), "call #1");
        assert_eq!(instructions.resolve(), "call #2");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dynamic_with_timestamp() {
        let instructions =
            Instructions::dynamic(|| format!("Today is {}.", chrono::Utc::now().format("%Y-%m-%d")));
        let resolved = instructions.resolve();
        assert!(resolved.starts_with("Today is "));
        assert!(resolved.ends_with('.'));
    }

    #[test]
    fn test_serialize_dynamic_as_resolved_text() {
        let instructions = Instructions::dynamic(|| "computed".to_string());
        assert_eq!(serde_json::to_string(&instructions).unwrap(), "\"computed\"");

        let back: Instructions = serde_json::from_str("\"computed\"").unwrap();
        assert_eq!(back, Instructions::Text("computed".into()));
    }

    #[test]
    fn test_agent_round_trip_freezes_dynamic_instructions() {
        use crate::agent::Agent;

        let agent = Agent::builder()
            .name("Clock")
            .dynamic_instructions(|| "It is noon.".to_string())
            .build();

        let json = serde_json::to_string(&agent).unwrap();
        let back: Agent = serde_json::from_str(&json).unwrap();

        assert_eq!(back.instructions, Instructions::Text("It is noon.".into()));
        assert!(!back.instructions.is_dynamic());
        assert_ne!(back, agent);
        assert_eq!(back.name, agent.name);
        assert_eq!(back.instructions.resolve(), agent.instructions.resolve());
    }

    #[test]
    fn test_dynamic_equality_is_identity() {
        let a = Instructions::dynamic(|| "x".to_string());
        let b = Instructions::dynamic(|| "x".to_string());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
