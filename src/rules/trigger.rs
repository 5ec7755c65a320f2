//! Triggers: the binding of one condition to one action.
//!
//! A trigger is stateless across calls. Every [`Trigger::trigger`]
//! invocation re-evaluates the condition fresh; there is no memory of
//! prior firings, no edge detection, and no debounce. Callers own the
//! cadence entirely - per frame, per event, on a timer.

use serde::{Deserialize, Serialize};

use crate::core::World;
use crate::error::RuleError;

use super::action::Action;
use super::condition::Condition;

/// One condition paired with one action, with a check-and-fire
/// operation.
///
/// Both halves are fixed at construction. The name exists only for
/// diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    name: String,
    condition: Condition,
    action: Action,
}

impl Trigger {
    /// Create a trigger from a condition and an action.
    pub fn new(name: impl Into<String>, condition: Condition, action: Action) -> Self {
        Self {
            name: name.into(),
            condition,
            action,
        }
    }

    /// The trigger's diagnostic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound condition.
    #[must_use]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// The bound action.
    #[must_use]
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Evaluate the condition and fire the action if it holds.
    ///
    /// Returns `Ok(true)` iff the action fired. The action runs at most
    /// once per call, and only when the condition was true at the moment
    /// of that call; missed firings are not queued. Errors from either
    /// half propagate unmodified - no recovery, no suppression.
    pub fn trigger(&self, world: &mut World) -> Result<bool, RuleError> {
        if !self.condition.met(world)? {
            return Ok(false);
        }
        self.action.perform(world)?;
        tracing::debug!(trigger = %self.name, "trigger fired");
        Ok(true)
    }
}

/// An ordered collection of triggers checked in one sweep.
///
/// This is a convenience only: each call to [`TriggerSet::run`] checks
/// every trigger exactly once, in insertion order. Scheduling remains
/// the caller's job.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TriggerSet {
    triggers: Vec<Trigger>,
}

impl TriggerSet {
    /// Create an empty trigger set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trigger.
    pub fn push(&mut self, trigger: Trigger) {
        self.triggers.push(trigger);
    }

    /// Number of triggers in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Whether the set holds no triggers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Check every trigger once, in insertion order, and return how many
    /// fired. The first error aborts the sweep and propagates.
    pub fn run(&self, world: &mut World) -> Result<usize, RuleError> {
        let mut fired = 0;
        for trigger in &self.triggers {
            if trigger.trigger(world)? {
                tracing::trace!(trigger = %trigger.name(), "fired during sweep");
                fired += 1;
            }
        }
        Ok(fired)
    }
}
