//! The entity registry.
//!
//! A [`World`] owns every entity and hands out [`EntityId`]s. Conditions
//! and actions resolve their bound ids against the world at evaluation
//! time, which keeps them strictly non-owning: dropping the world drops
//! the entities, and a stale id fails loudly instead of dangling.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::RuleError;

use super::entity::{Entity, EntityId};

/// Owns all entities and allocates their ids.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct World {
    entities: FxHashMap<EntityId, Entity>,
    next_id: u32,
}

impl World {
    /// Create an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh, empty entity and return its id.
    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, Entity::new());
        id
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Look up an entity mutably by id.
    #[must_use]
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Look up an entity, failing with [`RuleError::UnknownEntity`] when
    /// the id does not resolve.
    pub fn require(&self, id: EntityId) -> Result<&Entity, RuleError> {
        self.entities.get(&id).ok_or(RuleError::UnknownEntity(id))
    }

    /// Mutable counterpart of [`World::require`].
    pub fn require_mut(&mut self, id: EntityId) -> Result<&mut Entity, RuleError> {
        self.entities
            .get_mut(&id)
            .ok_or(RuleError::UnknownEntity(id))
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_allocates_distinct_ids() {
        let mut world = World::new();
        let a = world.spawn();
        let b = world.spawn();

        assert_ne!(a, b);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_spawned_entity_is_empty() {
        let mut world = World::new();
        let id = world.spawn();

        assert!(world.entity(id).is_some_and(Entity::is_empty));
    }

    #[test]
    fn test_mutate_through_world() {
        let mut world = World::new();
        let id = world.spawn();

        world
            .entity_mut(id)
            .expect("just spawned")
            .set_property("health", 100);

        assert_eq!(
            world.entity(id).and_then(|e| e.property("health")?.as_int()),
            Some(100)
        );
    }

    #[test]
    fn test_require_unknown_id() {
        let world = World::new();
        let stale = EntityId::new(7);

        assert_eq!(world.require(stale), Err(RuleError::UnknownEntity(stale)));
    }
}
