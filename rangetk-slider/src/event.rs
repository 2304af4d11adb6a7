//! Notification payloads raised by the slider model.

/// Identifies one of the two draggable handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    /// The handle holding the lower value.
    Lower,
    /// The handle holding the upper value.
    Upper,
}

/// The numeric property a [RangeEvent::Value] notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeProperty {
    /// The lower bound of the allowed range.
    Minimum,
    /// The upper bound of the allowed range.
    Maximum,
    /// The lower thumb's value.
    LowerValue,
    /// The upper thumb's value.
    UpperValue,
    /// The drag-layer increment granularity.
    StepSize,
}

/// A notification raised by [RangeSlider](crate::model::RangeSlider).
///
/// Value notifications fire once per effective change and never for a
/// no-op: a setter whose coerced result equals the stored value raises
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeEvent {
    /// A numeric property changed, with the stored value before and after.
    Value {
        /// Which property changed.
        property: RangeProperty,
        /// The stored value before the change.
        old: f64,
        /// The stored value after the change.
        new: f64,
    },
    /// The clamping flag flipped.
    Clamping {
        /// The flag before the change.
        old: bool,
        /// The flag after the change.
        new: bool,
    },
    /// A drag session grabbed a thumb.
    DragStarted(Thumb),
    /// A drag session released its thumb.
    DragCompleted(Thumb),
}
