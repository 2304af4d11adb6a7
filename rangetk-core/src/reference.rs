use std::cell;
use std::fmt;
use std::ops::Deref;

/// A reference to a value of type `T`, either borrowed out of a signal
/// cell or computed and owned.
///
/// Signal cells hand out [Ref::Cell] borrows; mapped views compute their
/// value on access and hand out [Ref::Owned].
pub enum Ref<'a, T> {
    /// An owned value.
    Owned(T),
    /// A borrow of a signal cell.
    Cell(cell::Ref<'a, T>),
}

impl<T> Ref<'_, T> {
    /// Extract an owned value, cloning out of a borrow if necessary.
    pub fn into_owned(self) -> T
    where
        T: Clone,
    {
        match self {
            Ref::Owned(value) => value,
            Ref::Cell(value) => value.clone(),
        }
    }
}

impl<T> Deref for Ref<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match self {
            Ref::Owned(value) => value,
            Ref::Cell(value) => value,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Ref<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T: fmt::Display> fmt::Display for Ref<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}
