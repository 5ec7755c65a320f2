//! Actions: mutations applied to entity state when a trigger fires.
//!
//! Actions are the sole mutators in the rule layer. Each `perform` call
//! makes exactly one property mutation on exactly one entity - no
//! batching, no rollback.
//!
//! Entity binding follows the same discipline as conditions: bound after
//! construction via [`Action::set_entity`], and an unbound invocation
//! fails with [`RuleError::Unbound`].

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, PropertyKey, PropertyValue, World};
use crate::error::RuleError;

use super::condition::{bound_id, resolve};

/// A single mutation of one entity's property store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Overwrite the entity's property unconditionally.
    SetProperty {
        entity: Option<EntityId>,
        property: PropertyKey,
        value: PropertyValue,
    },

    /// Add a signed delta to an integer property. An unset property
    /// counts as zero; a non-integer current value is a `TypeMismatch`.
    ModifyProperty {
        entity: Option<EntityId>,
        property: PropertyKey,
        delta: i64,
    },
}

impl Action {
    /// Create an unbound set-property action.
    pub fn set_property(
        property: impl Into<PropertyKey>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        Self::SetProperty {
            entity: None,
            property: property.into(),
            value: value.into(),
        }
    }

    /// Create an unbound modify-property action.
    pub fn modify_property(property: impl Into<PropertyKey>, delta: i64) -> Self {
        Self::ModifyProperty {
            entity: None,
            property: property.into(),
            delta,
        }
    }

    /// Bind this action to an entity (builder form of
    /// [`Action::set_entity`]).
    #[must_use]
    pub fn with_entity(mut self, id: EntityId) -> Self {
        self.set_entity(id);
        self
    }

    /// Bind this action to an entity, overwriting any previous binding.
    pub fn set_entity(&mut self, id: EntityId) {
        match self {
            Self::SetProperty { entity, .. } | Self::ModifyProperty { entity, .. } => {
                *entity = Some(id);
            }
        }
    }

    /// Apply this action to the world.
    pub fn perform(&self, world: &mut World) -> Result<(), RuleError> {
        match self {
            Self::SetProperty {
                entity,
                property,
                value,
            } => {
                let id = bound_id(*entity, property)?;
                world
                    .require_mut(id)?
                    .set_property(property.clone(), value.clone());
                Ok(())
            }

            Self::ModifyProperty {
                entity,
                property,
                delta,
            } => {
                let current = resolve(world, *entity, property)?
                    .property(property.as_str())
                    .map(|value| {
                        value.as_int().ok_or(RuleError::TypeMismatch {
                            lhs: value.type_name(),
                            rhs: "int",
                        })
                    })
                    .transpose()?
                    .unwrap_or(0);

                let id = bound_id(*entity, property)?;
                world
                    .require_mut(id)?
                    .set_property(property.clone(), current + delta);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_entity() -> (World, EntityId) {
        let mut world = World::new();
        let id = world.spawn();
        (world, id)
    }

    #[test]
    fn test_set_property() {
        let (mut world, id) = world_with_entity();

        let action = Action::set_property("loot", true).with_entity(id);
        action.perform(&mut world).unwrap();

        assert_eq!(
            world.entity(id).and_then(|e| e.property("loot")?.as_bool()),
            Some(true)
        );
    }

    #[test]
    fn test_set_property_overwrites() {
        let (mut world, id) = world_with_entity();
        world.entity_mut(id).unwrap().set_property("status", "alive");

        let action = Action::set_property("status", "dead").with_entity(id);
        action.perform(&mut world).unwrap();

        assert_eq!(
            world.entity(id).and_then(|e| e.property("status")?.as_text().map(String::from)),
            Some("dead".to_string())
        );
    }

    #[test]
    fn test_modify_property() {
        let (mut world, id) = world_with_entity();
        world.entity_mut(id).unwrap().set_property("health", 10);

        let action = Action::modify_property("health", -3).with_entity(id);
        action.perform(&mut world).unwrap();

        assert_eq!(
            world.entity(id).and_then(|e| e.property("health")?.as_int()),
            Some(7)
        );
    }

    #[test]
    fn test_modify_unset_property_starts_at_zero() {
        let (mut world, id) = world_with_entity();

        let action = Action::modify_property("score", 5).with_entity(id);
        action.perform(&mut world).unwrap();

        assert_eq!(
            world.entity(id).and_then(|e| e.property("score")?.as_int()),
            Some(5)
        );
    }

    #[test]
    fn test_modify_non_integer_property() {
        let (mut world, id) = world_with_entity();
        world.entity_mut(id).unwrap().set_property("name", "bob");

        let action = Action::modify_property("name", 1).with_entity(id);
        assert_eq!(
            action.perform(&mut world),
            Err(RuleError::TypeMismatch { lhs: "text", rhs: "int" })
        );
    }

    #[test]
    fn test_unbound_action_fails() {
        let mut world = World::new();

        let action = Action::set_property("loot", true);
        assert_eq!(
            action.perform(&mut world),
            Err(RuleError::Unbound { property: "loot".into() })
        );
    }

    #[test]
    fn test_stale_id_fails() {
        let mut world = World::new();
        let stale = EntityId::new(3);

        let action = Action::set_property("loot", true).with_entity(stale);
        assert_eq!(
            action.perform(&mut world),
            Err(RuleError::UnknownEntity(stale))
        );
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::set_property("loot", true);

        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
