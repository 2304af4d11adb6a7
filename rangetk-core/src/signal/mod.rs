//! Change-detecting signal cells.
//!
//! A signal stores one value and a list of listeners. Setting a signal to a
//! value equal to the stored one is a no-op: nothing is written and nothing
//! is notified. Setting it to a different value swaps the cell and invokes
//! every listener with the old/new pair. This is the notification contract
//! the slider model builds on: one notification per effective change,
//! never one for a no-op.
//!
//! Signals are [Rc]-based and deliberately `!Send`; they belong to the
//! thread that drives the UI.

use std::rc::Rc;

use crate::reference::Ref;

/// Contains the [value::ValueSignal] cell.
pub mod value;

/// Contains the [map::MappedSignal] read-only view.
pub mod map;

pub use map::MappedSignal;
pub use value::ValueSignal;

/// The old/new pair delivered to listeners after an effective change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Changed<T> {
    /// The value the cell held before the change.
    pub old: T,
    /// The value the cell holds now.
    pub new: T,
}

/// A listener invoked with the old/new pair after an effective change.
pub type Listener<T> = Rc<dyn Fn(&Changed<T>)>;

/// A boxed signal.
pub type BoxedSignal<T> = Box<dyn Signal<T>>;

/// The base trait for signal cells.
pub trait Signal<T: Clone + PartialEq + 'static> {
    /// Get the current value.
    fn get(&self) -> Ref<'_, T>;

    /// Replace the current value.
    ///
    /// Returns the old/new pair when the new value differs from the stored
    /// one, and `None` for a no-op. Listeners are only invoked for
    /// effective changes.
    fn set(&self, value: T) -> Option<Changed<T>>;

    /// Register a listener to be invoked after every effective change.
    fn subscribe(&self, listener: Listener<T>);

    /// Clone into a boxed trait object sharing the same cell.
    fn dyn_clone(&self) -> BoxedSignal<T>;
}
