//! Field-level validation for untyped input.
//!
//! Deserialization goes through a JSON object first so that a type mismatch
//! can be reported against the field that caused it, rather than as a bare
//! line/column position.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Result, SwarmError};

/// Short type name of a JSON value, for error messages
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Consumes the fields of one JSON object, tracking the path for errors
pub(crate) struct FieldReader {
    fields: Map<String, Value>,
    path: String,
}

impl FieldReader {
    /// Start reading a top-level value, which must be an object
    pub fn new(value: Value, path: &str) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self {
                fields,
                path: path.to_string(),
            }),
            other => Err(SwarmError::validation(
                if path.is_empty() { "<root>" } else { path },
                "an object",
                kind(&other),
            )),
        }
    }

    /// Dotted path for a field of this object
    pub fn path_of(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path, field)
        }
    }

    fn mismatch(&self, field: &str, expected: &'static str, found: &Value) -> SwarmError {
        SwarmError::validation(self.path_of(field), expected, kind(found))
    }

    /// Remove a field; explicit nulls count as absent
    pub fn take(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field).filter(|v| !v.is_null())
    }

    /// Remove a field, rejecting explicit nulls
    fn take_required(&mut self, field: &str, expected: &'static str) -> Result<Option<Value>> {
        match self.fields.remove(field) {
            Some(Value::Null) => Err(self.mismatch(field, expected, &Value::Null)),
            other => Ok(other),
        }
    }

    pub fn string(&mut self, field: &str, default: &str) -> Result<String> {
        match self.take_required(field, "a string")? {
            None => Ok(default.to_string()),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(self.mismatch(field, "a string", &other)),
        }
    }

    pub fn opt_string(&mut self, field: &str) -> Result<Option<String>> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(self.mismatch(field, "a string or null", &other)),
        }
    }

    pub fn bool(&mut self, field: &str, default: bool) -> Result<bool> {
        match self.take_required(field, "a boolean")? {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(b),
            Some(other) => Err(self.mismatch(field, "a boolean", &other)),
        }
    }

    pub fn object(&mut self, field: &str) -> Result<Map<String, Value>> {
        match self.take_required(field, "an object")? {
            None => Ok(Map::new()),
            Some(Value::Object(map)) => Ok(map),
            Some(other) => Err(self.mismatch(field, "an object", &other)),
        }
    }

    pub fn array(&mut self, field: &str) -> Result<Vec<Value>> {
        match self.take_required(field, "an array")? {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(self.mismatch(field, "an array", &other)),
        }
    }

    /// Deserialize a field through its serde impl, which is the strict form
    pub fn deserialized<T>(&mut self, field: &str, expected: &'static str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.take_required(field, expected)? {
            None => Ok(None),
            Some(raw) => serde_json::from_value(raw.clone()).map(Some).map_err(|_| {
                let found = match &raw {
                    Value::String(s) => format!("\"{s}\""),
                    other => kind(other).to_string(),
                };
                SwarmError::validation(self.path_of(field), expected, found)
            }),
        }
    }

    /// Log and drop whatever fields were not consumed
    pub fn finish(self, entity: &str) {
        for key in self.fields.keys() {
            tracing::debug!(entity, field = %key, "Ignoring unknown field");
        }
    }
}
