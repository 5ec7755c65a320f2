//! Core types: entities, property values, and the entity registry.
//!
//! This module contains the state the rule layer operates on. It knows
//! nothing about conditions or actions; those live in [`crate::rules`].

pub mod entity;
pub mod property;
pub mod world;

pub use entity::{Entity, EntityId};
pub use property::{PropertyKey, PropertyValue};
pub use world::World;
