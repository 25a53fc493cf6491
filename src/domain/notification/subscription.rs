//! Browser push subscription descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque descriptor of one browser push endpoint.
///
/// The shape is defined by the browser, so it is kept as raw JSON. Two
/// descriptors are the same subscription iff their JSON trees are equal
/// field by field (object key order does not matter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PushSubscription(Value);

impl PushSubscription {
    pub fn new(descriptor: Value) -> Self {
        Self(descriptor)
    }

    /// The push service endpoint, when the descriptor has the usual shape.
    pub fn endpoint(&self) -> Option<&str> {
        self.0.get("endpoint").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for PushSubscription {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// What a registration did. Not surfaced to HTTP callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Added,
    AlreadyRegistered,
}
