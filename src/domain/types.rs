//! Core domain types for event input and filtering decisions.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One analytics event received from the host pipeline.
///
/// The gate only reads events; a kept event is passed through unchanged and a
/// dropped event simply produces no output.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Event name, e.g. "$pageview" or "user signed up"
    pub event: String,

    /// Property map; `None` when the event carries no properties object at all.
    /// An event with an empty map is not the same as one with no map: only the
    /// latter bypasses filtering entirely.
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

/// Outcome of evaluating one event against the filter spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Forward the event unchanged
    Keep,
    /// Suppress the event
    Drop,
}
