//! Two-way value bindings
//!
//! A binding lets a component read a value owned elsewhere and push a new
//! value back when the user interacts with it. Components never hold the
//! value themselves; they go through [`Binding::get`] on every render and
//! [`Binding::set`] inside event handlers.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tokio::sync::mpsc;

/// Read/write access to an integer owned by the caller
#[cfg_attr(test, mockall::automock)]
pub trait Binding {
    /// Current value
    fn get(&self) -> i64;

    /// Replace the value
    fn set(&self, value: i64);
}

impl Binding for Cell<i64> {
    fn get(&self) -> i64 {
        Cell::get(self)
    }

    fn set(&self, value: i64) {
        Cell::set(self, value);
    }
}

// =============================================================================
// State Binding
// =============================================================================

/// Shared cell owned by the view that declares it
///
/// Clones point at the same storage, so the owner keeps one handle and
/// passes another to the component.
#[derive(Debug, Clone, Default)]
pub struct StateBinding {
    cell: Rc<Cell<i64>>,
}

impl StateBinding {
    /// Create new state with an initial value
    pub fn new(value: i64) -> Self {
        Self {
            cell: Rc::new(Cell::new(value)),
        }
    }
}

impl Binding for StateBinding {
    fn get(&self) -> i64 {
        self.cell.get()
    }

    fn set(&self, value: i64) {
        self.cell.set(value);
    }
}

// =============================================================================
// Constant Binding
// =============================================================================

/// Binding that always reads the same value and drops writes
///
/// Used for previews and read-only displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantBinding(pub i64);

impl ConstantBinding {
    /// Create a constant binding
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl Binding for ConstantBinding {
    fn get(&self) -> i64 {
        self.0
    }

    fn set(&self, value: i64) {
        tracing::trace!(constant = self.0, ignored = value, "write to constant binding dropped");
    }
}

// =============================================================================
// Closure Binding
// =============================================================================

/// Binding built from a getter and a setter closure
pub struct FnBinding<G, S> {
    getter: G,
    setter: S,
}

impl<G, S> FnBinding<G, S>
where
    G: Fn() -> i64,
    S: Fn(i64),
{
    /// Create a binding from a getter/setter pair
    pub fn new(getter: G, setter: S) -> Self {
        Self { getter, setter }
    }
}

impl<G, S> Binding for FnBinding<G, S>
where
    G: Fn() -> i64,
    S: Fn(i64),
{
    fn get(&self) -> i64 {
        (self.getter)()
    }

    fn set(&self, value: i64) {
        (self.setter)(value);
    }
}

impl<G, S> fmt::Debug for FnBinding<G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBinding").finish_non_exhaustive()
    }
}

// =============================================================================
// Channel Binding
// =============================================================================

/// Message emitted by a [`ChannelBinding`] when the user picks a new value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChanged {
    /// Value the binding showed when the write happened
    pub previous: i64,
    /// Value the owner should store
    pub value: i64,
}

/// Binding that reports writes as messages instead of mutating in place
///
/// Reads return the snapshot the owner rendered with. The owner drains the
/// receiver, updates its model and renders again with a fresh snapshot.
#[derive(Debug, Clone)]
pub struct ChannelBinding {
    snapshot: i64,
    sender: mpsc::UnboundedSender<RatingChanged>,
}

impl ChannelBinding {
    /// Wrap an existing sender
    pub fn new(snapshot: i64, sender: mpsc::UnboundedSender<RatingChanged>) -> Self {
        Self { snapshot, sender }
    }

    /// Create a binding together with the receiver the owner consumes
    pub fn channel(snapshot: i64) -> (Self, mpsc::UnboundedReceiver<RatingChanged>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(snapshot, sender), receiver)
    }

    /// Same sender, new snapshot
    pub fn with_snapshot(&self, snapshot: i64) -> Self {
        Self {
            snapshot,
            sender: self.sender.clone(),
        }
    }
}

impl Binding for ChannelBinding {
    fn get(&self) -> i64 {
        self.snapshot
    }

    fn set(&self, value: i64) {
        let message = RatingChanged {
            previous: self.snapshot,
            value,
        };
        if self.sender.send(message).is_err() {
            tracing::warn!(value, "rating owner dropped its receiver; change lost");
        }
    }
}
