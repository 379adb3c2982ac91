//! Typed operator registry for filter conditions.

use serde::Deserialize;
use std::fmt;

/// Declared type of a condition, controlling how the operand and the observed
/// property value are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::String => write!(f, "string"),
            PropertyType::Number => write!(f, "number"),
            PropertyType::Boolean => write!(f, "boolean"),
        }
    }
}

/// Operators registered for a declared type.
///
/// This table is the single source of truth for validation: a condition whose
/// operator is not listed here for its type must never enter a FilterSpec.
pub fn registered_operators(ty: PropertyType) -> &'static [&'static str] {
    match ty {
        PropertyType::String => &["is", "is_not", "contains", "not_contains", "regex", "not_regex"],
        PropertyType::Number => &["gt", "lt", "gte", "lte", "eq", "neq"],
        PropertyType::Boolean => &["is", "is_not"],
    }
}

/// Check whether `operator` is registered for `ty`.
pub fn is_registered(ty: PropertyType, operator: &str) -> bool {
    registered_operators(ty).contains(&operator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_operators() {
        assert!(is_registered(PropertyType::String, "is"));
        assert!(is_registered(PropertyType::String, "not_contains"));
        assert!(is_registered(PropertyType::String, "regex"));
        assert!(!is_registered(PropertyType::String, "gt"));
        assert!(!is_registered(PropertyType::String, "eq"));
    }

    #[test]
    fn test_number_operators() {
        assert!(is_registered(PropertyType::Number, "gt"));
        assert!(is_registered(PropertyType::Number, "lte"));
        assert!(is_registered(PropertyType::Number, "neq"));
        assert!(!is_registered(PropertyType::Number, "contains"));
        assert!(!is_registered(PropertyType::Number, "is"));
    }

    #[test]
    fn test_boolean_operators() {
        assert!(is_registered(PropertyType::Boolean, "is"));
        assert!(is_registered(PropertyType::Boolean, "is_not"));
        assert!(!is_registered(PropertyType::Boolean, "eq"));
        assert!(!is_registered(PropertyType::Boolean, "regex"));
    }
}
