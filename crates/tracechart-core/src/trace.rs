//! Profiling samples consumed by the layout pipeline.

use crate::expr::Expr;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::path::Path;

/// Canonical text of a key-shaped JSON value.
///
/// Strings are taken as-is, numbers in their JSON spelling and arrays as a
/// parenthesized tuple with quoted string items, so `["x", 0]` becomes
/// `('x', 0)`. Other values cannot be keys.
pub fn key_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Some(format!("'{}'", s)),
                    other => key_text(other).map(Cow::into_owned),
                })
                .collect::<Option<Vec<_>>>()?;
            let text = match parts.as_slice() {
                [single] => format!("({},)", single),
                _ => format!("({})", parts.join(", ")),
            };
            Some(Cow::Owned(text))
        }
        _ => None,
    }
}

/// Identifier accepted from JSON as a string, a number or a tuple of those.
#[doc(hidden)]
#[derive(Deserialize)]
#[serde(try_from = "Value")]
pub struct RawId(String);

impl TryFrom<Value> for RawId {
    type Error = String;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        key_text(&value)
            .map(|text| RawId(text.into_owned()))
            .ok_or_else(|| format!("expected a string, number or array identifier, got {}", value))
    }
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        raw.0
    }
}

/// Opaque identifier of a task, unique within one run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct TaskKey(pub String);

impl TaskKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The key a JSON value names, if it is key-shaped.
    pub fn from_value(value: &Value) -> Option<Self> {
        key_text(value).map(|text| Self(text.into_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TaskKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<RawId> for TaskKey {
    fn from(raw: RawId) -> Self {
        Self(raw.into())
    }
}

impl From<TaskKey> for String {
    fn from(key: TaskKey) -> Self {
        key.0
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Identifier of the worker that executed a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct SlotId(pub String);

impl SlotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for SlotId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for SlotId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<RawId> for SlotId {
    fn from(raw: RawId) -> Self {
        Self(raw.into())
    }
}

impl From<SlotId> for String {
    fn from(id: SlotId) -> Self {
        id.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// One profiled task execution. Times are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub key: TaskKey,
    pub expression: Expr,
    pub start_time: f64,
    pub end_time: f64,
    pub slot_id: SlotId,
}

impl ExecutionRecord {
    pub fn new(
        key: impl Into<TaskKey>,
        expression: Expr,
        start_time: f64,
        end_time: f64,
        slot_id: impl Into<SlotId>,
    ) -> Self {
        Self {
            key: key.into(),
            expression,
            start_time,
            end_time,
            slot_id: slot_id.into(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// One resource poll: CPU load in percent and resident memory in MB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceSample {
    pub timestamp: f64,
    pub cpu_percent: f64,
    pub memory_mb: f64,
}

impl ResourceSample {
    pub fn new(timestamp: f64, cpu_percent: f64, memory_mb: f64) -> Self {
        Self {
            timestamp,
            cpu_percent,
            memory_mb,
        }
    }
}

/// Everything a collector produced for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub tasks: Vec<ExecutionRecord>,
    #[serde(default)]
    pub resources: Vec<ResourceSample>,
    /// Keys of the whole task graph, including inputs that never ran.
    #[serde(default)]
    pub graph_keys: Vec<TaskKey>,
}

impl Profile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
