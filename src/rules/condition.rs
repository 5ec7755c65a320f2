//! Conditions: read-only predicates over entity state.
//!
//! Leaf conditions inspect one property of one entity; combinators build
//! boolean trees over other conditions. Evaluation never mutates state -
//! actions are the sole mutators.
//!
//! Entity-aware leaves are bound to an entity after construction via
//! [`Condition::set_entity`] (or at construction via
//! [`Condition::with_entity`]). Evaluating an unbound leaf is a wiring
//! defect and fails with [`RuleError::Unbound`] rather than silently
//! reading as false.

use serde::{Deserialize, Serialize};

use crate::core::{Entity, EntityId, PropertyKey, PropertyValue, World};
use crate::error::RuleError;

/// A predicate over entity state, or a boolean combination of other
/// predicates.
///
/// The tree owns its children, so a condition can never reference itself
/// and evaluation is a plain recursive traversal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    // === Constants ===

    /// Always true.
    Always,

    /// Always false.
    Never,

    // === Combinators ===

    /// True iff the child is false.
    Not(Box<Condition>),

    /// True iff every child is true. Empty is vacuously true.
    All(Vec<Condition>),

    /// True iff at least one child is true. Empty is false.
    Any(Vec<Condition>),

    // === Entity leaves ===

    /// True iff the entity's current property value equals `value`.
    /// An unset property never equals any target value.
    PropertyEquals {
        entity: Option<EntityId>,
        property: PropertyKey,
        value: PropertyValue,
    },

    /// True iff the entity's current property value orders strictly
    /// below `value`. Fails with `TypeMismatch` when the operands are
    /// not mutually ordered, including when the property is unset.
    PropertyLessThan {
        entity: Option<EntityId>,
        property: PropertyKey,
        value: PropertyValue,
    },
}

impl Condition {
    /// Create an unbound equality leaf.
    pub fn property_equals(
        property: impl Into<PropertyKey>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        Self::PropertyEquals {
            entity: None,
            property: property.into(),
            value: value.into(),
        }
    }

    /// Create an unbound less-than leaf.
    pub fn property_less_than(
        property: impl Into<PropertyKey>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        Self::PropertyLessThan {
            entity: None,
            property: property.into(),
            value: value.into(),
        }
    }

    /// Create an AND condition.
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::All(conditions.into_iter().collect())
    }

    /// Create an OR condition.
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    /// Negate this condition.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Add another condition with AND.
    #[must_use]
    pub fn and(self, other: Condition) -> Self {
        match self {
            Self::All(mut conditions) => {
                conditions.push(other);
                Self::All(conditions)
            }
            _ => Self::All(vec![self, other]),
        }
    }

    /// Add another condition with OR.
    #[must_use]
    pub fn or(self, other: Condition) -> Self {
        match self {
            Self::Any(mut conditions) => {
                conditions.push(other);
                Self::Any(conditions)
            }
            _ => Self::Any(vec![self, other]),
        }
    }

    /// Bind this condition to an entity (builder form of
    /// [`Condition::set_entity`]).
    #[must_use]
    pub fn with_entity(mut self, id: EntityId) -> Self {
        self.set_entity(id);
        self
    }

    /// Bind every entity-aware leaf in this tree to `id`, overwriting
    /// any previous binding. Injected after construction; leaves must be
    /// bound before they are evaluated.
    pub fn set_entity(&mut self, id: EntityId) {
        match self {
            Self::Always | Self::Never => {}
            Self::Not(child) => child.set_entity(id),
            Self::All(children) | Self::Any(children) => {
                for child in children {
                    child.set_entity(id);
                }
            }
            Self::PropertyEquals { entity, .. } | Self::PropertyLessThan { entity, .. } => {
                *entity = Some(id);
            }
        }
    }

    /// Evaluate this condition against the world.
    ///
    /// Children evaluate left-to-right in insertion order; `All` and
    /// `Any` short-circuit. Reads entity state, never writes it.
    pub fn met(&self, world: &World) -> Result<bool, RuleError> {
        match self {
            Self::Always => Ok(true),

            Self::Never => Ok(false),

            Self::Not(child) => Ok(!child.met(world)?),

            Self::All(children) => {
                for child in children {
                    if !child.met(world)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Self::Any(children) => {
                for child in children {
                    if child.met(world)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Self::PropertyEquals {
                entity,
                property,
                value,
            } => {
                let entity = resolve(world, *entity, property)?;
                Ok(entity.property(property.as_str()) == Some(value))
            }

            Self::PropertyLessThan {
                entity,
                property,
                value,
            } => {
                let entity = resolve(world, *entity, property)?;
                let current =
                    entity
                        .property(property.as_str())
                        .ok_or(RuleError::TypeMismatch {
                            lhs: "unset",
                            rhs: value.type_name(),
                        })?;
                Ok(current.try_cmp(value)?.is_lt())
            }
        }
    }
}

/// Check that a leaf was bound to an entity, failing loudly otherwise.
pub(crate) fn bound_id(
    entity: Option<EntityId>,
    property: &PropertyKey,
) -> Result<EntityId, RuleError> {
    entity.ok_or_else(|| RuleError::Unbound {
        property: property.clone(),
    })
}

/// Resolve a leaf's bound entity id, failing loudly on unbound leaves
/// and stale ids.
pub(crate) fn resolve<'w>(
    world: &'w World,
    entity: Option<EntityId>,
    property: &PropertyKey,
) -> Result<&'w Entity, RuleError> {
    world.require(bound_id(entity, property)?)
}
