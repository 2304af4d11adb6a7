use std::cell::RefCell;
use std::rc::Rc;

use crate::reference::Ref;
use crate::signal::map::MappedSignal;
use crate::signal::{BoxedSignal, Changed, Listener, Signal};

/// A shared, change-detecting value cell based on [Rc] and [RefCell].
///
/// Clones share the cell and the listener list, so a handle cloned out of
/// a model stays live: setting through any handle notifies listeners
/// registered through any other.
pub struct ValueSignal<T: 'static> {
    value: Rc<RefCell<T>>,
    listeners: Rc<RefCell<Vec<Listener<T>>>>,
}

impl<T: Clone + PartialEq + 'static> ValueSignal<T> {
    /// Creates a new signal with the given value.
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            listeners: Rc::new(RefCell::new(Vec::with_capacity(1))),
        }
    }

    /// Create a read-only view that applies `map` to this signal's value
    /// on every access.
    pub fn map<U>(&self, map: impl Fn(&T) -> U + 'static) -> MappedSignal<T, U>
    where
        U: Clone + PartialEq + 'static,
    {
        MappedSignal::new(self.dyn_clone(), map)
    }

    fn notify(&self, change: &Changed<T>) {
        // Snapshot the list so a listener may subscribe or set through a
        // cloned handle without re-borrowing the registry.
        let listeners: Vec<Listener<T>> = self.listeners.borrow().to_vec();
        for listener in listeners {
            listener(change);
        }
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> for ValueSignal<T> {
    fn get(&self) -> Ref<'_, T> {
        Ref::Cell(self.value.borrow())
    }

    fn set(&self, value: T) -> Option<Changed<T>> {
        let change = {
            let mut stored = self.value.borrow_mut();
            if *stored == value {
                return None;
            }
            let old = std::mem::replace(&mut *stored, value.clone());
            Changed { old, new: value }
        };
        self.notify(&change);
        Some(change)
    }

    fn subscribe(&self, listener: Listener<T>) {
        self.listeners.borrow_mut().push(listener);
    }

    fn dyn_clone(&self) -> BoxedSignal<T> {
        Box::new(self.clone())
    }
}

impl<T: 'static> Clone for ValueSignal<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}
