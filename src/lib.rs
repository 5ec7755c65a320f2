//! # entity-rules
//!
//! A minimal rule-evaluation layer: entities hold named properties,
//! conditions inspect those properties (or combine other conditions),
//! and triggers fire an action when a condition becomes true.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned Cadence**: The crate never schedules anything.
//!    Embedders decide when to check each trigger.
//!
//! 2. **Non-Owning Rules**: Conditions and actions refer to entities by
//!    id, resolved against a [`World`] at evaluation time. Rules never
//!    own or extend an entity's lifetime.
//!
//! 3. **Loud Failures**: Wiring defects (unbound leaves, stale ids) and
//!    type errors in comparisons surface as [`RuleError`] from the
//!    offending call. Nothing is silently treated as false.
//!
//! ## Modules
//!
//! - `core`: Entities, property values, and the entity registry
//! - `rules`: Conditions, actions, triggers
//! - `error`: The crate error type

pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Entity, EntityId, PropertyKey, PropertyValue, World};
pub use crate::error::RuleError;
pub use crate::rules::{Action, Condition, Trigger, TriggerSet};
