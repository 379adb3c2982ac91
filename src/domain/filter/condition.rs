//! Condition records and per-condition evaluation.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::operators::{self, PropertyType};
use crate::domain::error::GateError;

/// One condition record as decoded from the filter definitions file, before
/// validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    /// Name of the event property to inspect
    pub property: String,

    /// Declared comparison type
    #[serde(rename = "type")]
    pub ty: PropertyType,

    /// Symbolic operator name, validated against the registry for `ty`
    pub operator: String,

    /// Comparison operand
    pub value: Value,
}

/// A validated condition. Only constructed through [`Condition::validate`], so
/// its operator is guaranteed to be registered for its declared type.
#[derive(Debug, Clone)]
pub struct Condition {
    pub property: String,
    pub ty: PropertyType,
    pub operator: String,
    pub value: Value,
    /// Compiled pattern for `regex`/`not_regex` conditions with a string operand
    pattern: Option<Regex>,
}

impl Condition {
    /// Validate a raw condition record.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the operator is not registered for
    /// the declared type, or when a `regex`/`not_regex` operand is not a valid
    /// regular expression.
    pub fn validate(raw: RawCondition) -> Result<Self, GateError> {
        if !operators::is_registered(raw.ty, &raw.operator) {
            return Err(GateError::Config(format!(
                "invalid operator \"{}\" for type \"{}\" in condition for \"{}\"",
                raw.operator, raw.ty, raw.property
            )));
        }

        // Patterns are compiled once here rather than per event; a non-string
        // operand is left uncompiled and fails the condition at evaluation time
        // like any other operand type mismatch.
        let pattern = if matches!(raw.operator.as_str(), "regex" | "not_regex") {
            match raw.value.as_str() {
                Some(p) => Some(Regex::new(p).map_err(|e| {
                    GateError::Config(format!(
                        "invalid regex pattern '{}' in condition for \"{}\": {}",
                        p, raw.property, e
                    ))
                })?),
                None => None,
            }
        } else {
            None
        };

        Ok(Self {
            property: raw.property,
            ty: raw.ty,
            operator: raw.operator,
            value: raw.value,
            pattern,
        })
    }

    /// Evaluate this condition against an observed property value.
    ///
    /// Upstream event data is not guaranteed to match the declared schema, so
    /// a runtime type mismatch on either side is treated as unsatisfied rather
    /// than an error.
    ///
    /// # Panics
    ///
    /// Panics if the operator is not registered for the declared type. That
    /// cannot happen for conditions built through [`Condition::validate`]; a
    /// panic here surfaces a validation bug instead of silently misclassifying
    /// events.
    pub fn is_satisfied_by(&self, observed: &Value) -> bool {
        match self.ty {
            PropertyType::String => {
                let (Some(a), Some(b)) = (observed.as_str(), self.value.as_str()) else {
                    return false;
                };
                match self.operator.as_str() {
                    "is" => a == b,
                    "is_not" => a != b,
                    "contains" => a.contains(b),
                    "not_contains" => !a.contains(b),
                    "regex" => self.pattern.as_ref().is_some_and(|re| re.is_match(a)),
                    "not_regex" => self.pattern.as_ref().is_some_and(|re| !re.is_match(a)),
                    other => panic!("invariant violation: operator '{other}' not registered for type string"),
                }
            }
            PropertyType::Number => {
                let (Some(a), Some(b)) = (observed.as_f64(), self.value.as_f64()) else {
                    return false;
                };
                match self.operator.as_str() {
                    "gt" => a > b,
                    "lt" => a < b,
                    "gte" => a >= b,
                    "lte" => a <= b,
                    "eq" => a == b,
                    "neq" => a != b,
                    other => panic!("invariant violation: operator '{other}' not registered for type number"),
                }
            }
            PropertyType::Boolean => {
                let (Some(a), Some(b)) = (observed.as_bool(), self.value.as_bool()) else {
                    return false;
                };
                match self.operator.as_str() {
                    "is" => a == b,
                    "is_not" => a != b,
                    other => panic!("invariant violation: operator '{other}' not registered for type boolean"),
                }
            }
        }
    }
}
