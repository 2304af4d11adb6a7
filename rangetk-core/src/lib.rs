#![warn(missing_docs)]

//! Core primitives for rangetk => See the `rangetk` crate.
//!
//! Contains the change-detecting signal cells and the redraw flags shared
//! by the slider components.

/// Contains the signal system for change notification.
pub mod signal;

/// Contains the [reference::Ref] type for representing a reference to a value.
pub mod reference;

/// Contains the [redraw::Redraw] flags reported to the embedding renderer.
pub mod redraw;
