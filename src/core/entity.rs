//! Entities and their identifiers.
//!
//! An [`Entity`] is a named-property store: one stateful object the rule
//! system observes and mutates. Entities live in a [`World`](super::World)
//! and are referred to by [`EntityId`], so conditions and actions never
//! own the objects they inspect.
//!
//! ## Usage
//!
//! ```
//! use entity_rules::core::Entity;
//!
//! let mut goblin = Entity::new();
//! goblin.set_property("health", 100);
//!
//! assert_eq!(goblin.property("health").and_then(|v| v.as_int()), Some(100));
//! assert!(goblin.property("mana").is_none());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::property::{PropertyKey, PropertyValue};

/// Unique identifier for an entity within a [`World`](super::World).
///
/// Conditions and actions hold an `EntityId` rather than a reference,
/// so they never own or extend an entity's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// A named-property store.
///
/// Created empty; properties are set and overwritten freely. Absent
/// properties read back as `None` (or a caller-supplied default via
/// [`Entity::property_or`]) rather than failing. There is no deletion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    properties: FxHashMap<PropertyKey, PropertyValue>,
}

impl Entity {
    /// Create an empty entity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, overwriting any previous value. Always succeeds.
    pub fn set_property(&mut self, name: impl Into<PropertyKey>, value: impl Into<PropertyValue>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Get the current value of a property, or `None` if it was never set.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Get the current value of a property, falling back to `default`
    /// when absent. Never fails.
    #[must_use]
    pub fn property_or<'a>(&'a self, name: &str, default: &'a PropertyValue) -> &'a PropertyValue {
        self.properties.get(name).unwrap_or(default)
    }

    /// Number of properties currently set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
