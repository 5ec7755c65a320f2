//! Crate error types.
//!
//! Every failure surfaces synchronously from the offending call
//! (`met`, `perform`, or `trigger`). The crate performs no internal
//! recovery: a condition is never silently treated as false, and an
//! action failure is never swallowed.

use crate::core::{EntityId, PropertyKey};

/// Errors raised while evaluating conditions or performing actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// An entity-aware condition or action leaf was used before
    /// `set_entity` bound it to an entity. A wiring defect in the caller.
    #[error("property `{property}` evaluated before an entity was bound")]
    Unbound { property: PropertyKey },

    /// A bound entity id no longer resolves in the world.
    #[error("no entity registered under {0}")]
    UnknownEntity(EntityId),

    /// An ordered comparison or numeric update was attempted between
    /// value kinds that are not mutually ordered.
    #[error("cannot order {lhs} against {rhs}")]
    TypeMismatch {
        lhs: &'static str,
        rhs: &'static str,
    },
}
