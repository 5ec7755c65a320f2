//! Property keys and values.
//!
//! Entities carry properties like "health", "status", or "loot".
//! These are application-specific - the engine doesn't interpret them.
//!
//! ## PropertyValue Types
//!
//! - `Int`: Numbers (health, counters, scores)
//! - `Float`: Fractional numbers (weights, ratios)
//! - `Bool`: Flags (alive, looted)
//! - `Text`: Strings (status names, labels)

use std::borrow::Borrow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// Key for accessing entity properties.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyKey(pub String);

impl PropertyKey {
    /// Create a new property key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// Lets map lookups take &str without allocating a key.
impl Borrow<str> for PropertyKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value of an entity property.
///
/// Supports multiple types to handle different application needs.
/// Equality is variant-strict except for `Int`/`Float`, which compare
/// numerically. Ordering goes through [`PropertyValue::try_cmp`] so that
/// incomparable kinds surface as errors instead of arbitrary results.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Integer value (health, counters).
    Int(i64),
    /// Fractional value (weights, ratios).
    Float(f64),
    /// Boolean flag (alive, looted).
    Bool(bool),
    /// Text value (status names, labels).
    Text(String),
}

impl PropertyValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Name of this value's kind, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Int(_) => "int",
            PropertyValue::Float(_) => "float",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Text(_) => "text",
        }
    }

    /// Order two values, failing when their kinds are not mutually ordered.
    ///
    /// `Int` and `Float` order against each other numerically; `Bool` and
    /// `Text` only order within their own kind. NaN floats are treated as
    /// unordered and also fail.
    pub fn try_cmp(&self, other: &PropertyValue) -> Result<Ordering, RuleError> {
        use PropertyValue::*;

        let ordering = match (self, other) {
            (Int(a), Int(b)) => Some(a.cmp(b)),
            (Float(a), Float(b)) => a.partial_cmp(b),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)),
            (Bool(a), Bool(b)) => Some(a.cmp(b)),
            (Text(a), Text(b)) => Some(a.cmp(b)),
            _ => None,
        };

        ordering.ok_or_else(|| RuleError::TypeMismatch {
            lhs: self.type_name(),
            rhs: other.type_name(),
        })
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        use PropertyValue::*;

        match (self, other) {
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Int(a), Float(b)) | (Float(b), Int(a)) => *a as f64 == *b,
            (Bool(a), Bool(b)) => a == b,
            (Text(a), Text(b)) => a == b,
            _ => false,
        }
    }
}

// Convenient From implementations
impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(v as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Text(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Int(v) => write!(f, "{v}"),
            PropertyValue::Float(v) => write!(f, "{v}"),
            PropertyValue::Bool(v) => write!(f, "{v}"),
            PropertyValue::Text(v) => write!(f, "{v:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_key() {
        let key1 = PropertyKey::new("health");
        let key2: PropertyKey = "health".into();
        assert_eq!(key1, key2);
        assert_eq!(key1.as_str(), "health");
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(PropertyValue::Int(5).as_int(), Some(5));
        assert_eq!(PropertyValue::Int(5).as_bool(), None);
        assert_eq!(PropertyValue::Bool(true).as_bool(), Some(true));
        assert_eq!(PropertyValue::Text("dead".to_string()).as_text(), Some("dead"));
        assert_eq!(PropertyValue::Float(0.5).as_float(), Some(0.5));
    }

    #[test]
    fn test_value_from() {
        let int: PropertyValue = 42i32.into();
        assert_eq!(int.as_int(), Some(42));

        let boolean: PropertyValue = true.into();
        assert_eq!(boolean.as_bool(), Some(true));

        let text: PropertyValue = "dead".into();
        assert_eq!(text.as_text(), Some("dead"));
    }

    #[test]
    fn test_numeric_equality_coerces() {
        assert_eq!(PropertyValue::Int(1), PropertyValue::Float(1.0));
        assert_ne!(PropertyValue::Int(1), PropertyValue::Float(1.5));
        assert_ne!(PropertyValue::Int(1), PropertyValue::Bool(true));
        assert_ne!(PropertyValue::Int(1), PropertyValue::Text("1".to_string()));
    }

    #[test]
    fn test_try_cmp_same_kind() {
        assert_eq!(
            PropertyValue::Int(3).try_cmp(&PropertyValue::Int(5)),
            Ok(Ordering::Less)
        );
        assert_eq!(
            PropertyValue::Text("alpha".into()).try_cmp(&PropertyValue::Text("beta".into())),
            Ok(Ordering::Less)
        );
        assert_eq!(
            PropertyValue::Bool(false).try_cmp(&PropertyValue::Bool(true)),
            Ok(Ordering::Less)
        );
    }

    #[test]
    fn test_try_cmp_numeric_cross_kind() {
        assert_eq!(
            PropertyValue::Int(2).try_cmp(&PropertyValue::Float(2.5)),
            Ok(Ordering::Less)
        );
        assert_eq!(
            PropertyValue::Float(3.0).try_cmp(&PropertyValue::Int(2)),
            Ok(Ordering::Greater)
        );
    }

    #[test]
    fn test_try_cmp_mismatch() {
        let err = PropertyValue::Text("bob".into())
            .try_cmp(&PropertyValue::Int(5))
            .unwrap_err();
        assert_eq!(
            err,
            RuleError::TypeMismatch { lhs: "text", rhs: "int" }
        );
    }

    #[test]
    fn test_try_cmp_nan() {
        let err = PropertyValue::Float(f64::NAN)
            .try_cmp(&PropertyValue::Float(1.0))
            .unwrap_err();
        assert!(matches!(err, RuleError::TypeMismatch { .. }));
    }
}
