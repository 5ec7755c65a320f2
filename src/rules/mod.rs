//! The rule layer: conditions, actions, and triggers.
//!
//! ## Key Components
//!
//! - [`Condition`]: a read-only predicate over entity state, composable
//!   with `Not`/`All`/`Any`
//! - [`Action`]: a mutation applied to one entity's properties
//! - [`Trigger`]: one condition bound to one action, with a single
//!   check-and-fire operation
//! - [`TriggerSet`]: an ordered collection of triggers checked in one
//!   sweep
//!
//! ## Design Philosophy
//!
//! The layer is deliberately inert: it never decides *when* to check a
//! trigger. Embedders call [`Trigger::trigger`] at whatever cadence
//! suits them, and the layer only answers "did the condition hold, and
//! did the action run". Conditions never mutate; actions are the sole
//! mutators.
//!
//! ## Example Usage
//!
//! ```
//! use entity_rules::core::World;
//! use entity_rules::rules::{Action, Condition, Trigger};
//!
//! let mut world = World::new();
//! let goblin = world.spawn();
//! world.entity_mut(goblin).unwrap().set_property("health", 100);
//!
//! let trigger = Trigger::new(
//!     "flee when hurt",
//!     Condition::property_less_than("health", 20).with_entity(goblin),
//!     Action::set_property("status", "fleeing").with_entity(goblin),
//! );
//!
//! assert_eq!(trigger.trigger(&mut world), Ok(false));
//!
//! world.entity_mut(goblin).unwrap().set_property("health", 5);
//! assert_eq!(trigger.trigger(&mut world), Ok(true));
//! ```

pub mod action;
pub mod condition;
pub mod trigger;

pub use action::Action;
pub use condition::Condition;
pub use trigger::{Trigger, TriggerSet};
