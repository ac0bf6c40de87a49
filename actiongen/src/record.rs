//! Normalized invocation metadata records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logical type of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    /// Free-form text, the type of last resort.
    String,
    /// Integral numbers.
    Integer,
    /// Floating-point numbers.
    Number,
    /// True/false flags.
    Boolean,
    /// Repeated values accumulated into a list.
    Array,
}

impl ParameterType {
    /// The string representation used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Integer => "integer",
            ParameterType::Number => "number",
            ParameterType::Boolean => "boolean",
            ParameterType::Array => "array",
        }
    }
}

/// Metadata for one accepted parameter of a command.
///
/// `default` is carried only when a default actually resolved. Immutable
/// records are never derived from a user-facing action; they are the
/// synthesized invocation identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    /// Resolved default value, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Help text, with the choice set appended when constrained.
    pub description: Option<String>,
    /// Logical value type.
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    /// Whether the invoker must supply a value.
    pub required: bool,
    /// Whether the value is fixed by the generator rather than the invoker.
    pub immutable: bool,
}

impl ParameterRecord {
    /// A mutable, optional parameter of the given type with nothing else
    /// resolved.
    pub fn new(parameter_type: ParameterType) -> Self {
        Self {
            default: None,
            description: None,
            parameter_type,
            required: false,
            immutable: false,
        }
    }

    /// Set the resolved default value.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Set the composed description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// A synthesized identifier entry: a fixed string value the invoker
    /// must not override.
    pub fn immutable(value: Value) -> Self {
        Self {
            default: Some(value),
            description: None,
            parameter_type: ParameterType::String,
            required: false,
            immutable: true,
        }
    }
}

/// The full invocation schema of one command.
///
/// Parameter insertion order is preserved for stable serialization, while
/// equality ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Dot-normalized command name (`server list` becomes `server.list`).
    pub name: String,
    /// Fixed runner designation.
    pub runner_type: String,
    /// Fixed entry-point reference, relative to the pack root.
    pub entry_point: String,
    /// Whether the generated action is enabled.
    pub enabled: bool,
    /// Documentation string of the command implementation.
    pub description: Option<String>,
    /// Accepted parameters keyed by name.
    pub parameters: IndexMap<String, ParameterRecord>,
}
