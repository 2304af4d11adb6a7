#![warn(missing_docs)]

//! Platform-independent dual-thumb range slider logic.

pub use nalgebra as math;

pub use rangetk_core as core;
pub use rangetk_slider as slider;

/// A "prelude" for users of the rangetk toolkit.
///
/// Importing this module brings into scope the most common types
/// needed to drive a range slider.
///
/// ```rust
/// use rangetk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::redraw::Redraw;
    pub use crate::core::reference::Ref;
    pub use crate::core::signal::{Changed, MappedSignal, Signal, ValueSignal};

    pub use crate::slider::config::{ConfigError, SliderConfig};
    pub use crate::slider::drag::DragController;
    pub use crate::slider::event::{RangeEvent, RangeProperty, Thumb};
    pub use crate::slider::model::RangeSlider;
    pub use crate::slider::track::{fraction_of, value_at, Track};

    // Math
    pub use nalgebra::Vector2;
}
