use std::rc::Rc;

use crate::reference::Ref;
use crate::signal::{BoxedSignal, Changed, Listener, Signal};

/// A read-only view over another signal, applying a mapping function when
/// the value is requested.
///
/// The view cannot be mutated and does not carry its own listeners:
/// [Signal::set] is a no-op and [Signal::subscribe] drops the listener.
/// Callers that need notifications subscribe to the source signal instead.
pub struct MappedSignal<T: Clone + PartialEq + 'static, U: 'static> {
    source: BoxedSignal<T>,
    map: Rc<dyn Fn(&T) -> U>,
}

impl<T, U> MappedSignal<T, U>
where
    T: Clone + PartialEq + 'static,
    U: Clone + PartialEq + 'static,
{
    /// Create a new mapped view over the given source signal.
    pub fn new(source: BoxedSignal<T>, map: impl Fn(&T) -> U + 'static) -> Self {
        Self {
            source,
            map: Rc::new(map),
        }
    }

    /// Get the source signal.
    pub fn source(&self) -> BoxedSignal<T> {
        self.source.dyn_clone()
    }
}

impl<T, U> Signal<U> for MappedSignal<T, U>
where
    T: Clone + PartialEq + 'static,
    U: Clone + PartialEq + 'static,
{
    fn get(&self) -> Ref<'_, U> {
        Ref::Owned((self.map)(&*self.source.get()))
    }

    fn set(&self, _: U) -> Option<Changed<U>> {
        // Mapped views are read-only.
        None
    }

    fn subscribe(&self, _: Listener<U>) {
        // Listeners belong on the source signal.
    }

    fn dyn_clone(&self) -> BoxedSignal<U> {
        Box::new(self.clone())
    }
}

impl<T, U> Clone for MappedSignal<T, U>
where
    T: Clone + PartialEq + 'static,
    U: Clone + PartialEq + 'static,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.dyn_clone(),
            map: self.map.clone(),
        }
    }
}
