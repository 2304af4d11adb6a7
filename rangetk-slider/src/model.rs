//! The dual-thumb value model.
//!
//! [RangeSlider] owns four interdependent numeric properties plus a step
//! size and a clamping flag. Every property setter coerces rather than
//! rejects: the stored state is always valid for rendering while clamping
//! is enabled. When clamping is disabled no validation occurs at all; the
//! model may then hold `lower > upper` or values outside the bounds, and
//! keeping the state presentable is the caller's responsibility.

use std::rc::Rc;

use rangetk_core::signal::{Signal, ValueSignal};

use crate::event::{RangeEvent, RangeProperty};

/// A listener invoked with every notification the model raises.
pub type EventListener = Rc<dyn Fn(&RangeEvent)>;

/// The value model of a dual-thumb range slider.
///
/// ### Coercion
///
/// With clamping enabled, the thumb setters bound each value against the
/// global range *and* the other thumb:
///
/// - the lower value lands in `[minimum, min(maximum, upper_value)]`
/// - the upper value lands in `[max(minimum, lower_value), maximum]`
///
/// The bounds themselves store as-is; minimum and maximum may be assigned
/// in any order, including inverted. An effective bound change re-coerces
/// both thumb values so the containment invariants hold after every
/// mutation.
///
/// ### Notifications
///
/// Every effective change raises one [RangeEvent] carrying the old/new
/// pair; a setter whose coerced result equals the stored value raises
/// nothing. The four numeric properties are backed by
/// [ValueSignal] cells, so bindings can hold cloned handles
/// (see [RangeSlider::lower_signal]) and subscribe to them directly.
///
/// ### Non-finite input
///
/// NaN and infinite assignments are dropped at every numeric entry point:
/// the previous value stays, nothing fires, and a warning is logged.
pub struct RangeSlider {
    minimum: ValueSignal<f64>,
    maximum: ValueSignal<f64>,
    lower_value: ValueSignal<f64>,
    upper_value: ValueSignal<f64>,
    step_size: f64,
    clamping_enabled: ValueSignal<bool>,
    listeners: Vec<EventListener>,
}

/// Framework default for [RangeSlider::minimum].
pub const DEFAULT_MINIMUM: f64 = 0.0;
/// Framework default for [RangeSlider::maximum].
pub const DEFAULT_MAXIMUM: f64 = 100.0;
/// Framework default for [RangeSlider::step_size].
pub const DEFAULT_STEP_SIZE: f64 = 1.0;

/// Clamp `x` into `[lo, hi]`.
///
/// When the interval is inverted (`lo > hi`) the lower bound wins and `lo`
/// is returned regardless of `x`. Callers guarantee finite arguments.
fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        lo
    } else {
        x.clamp(lo, hi)
    }
}

impl RangeSlider {
    /// Create a model with the framework defaults: range `0..=100`, both
    /// thumbs spanning the full range, step size `1`, clamping enabled.
    pub fn new() -> Self {
        Self {
            minimum: ValueSignal::new(DEFAULT_MINIMUM),
            maximum: ValueSignal::new(DEFAULT_MAXIMUM),
            lower_value: ValueSignal::new(DEFAULT_MINIMUM),
            upper_value: ValueSignal::new(DEFAULT_MAXIMUM),
            step_size: DEFAULT_STEP_SIZE,
            clamping_enabled: ValueSignal::new(true),
            listeners: Vec::new(),
        }
    }

    fn apply_with(mut self, f: impl FnOnce(&mut Self)) -> Self {
        f(&mut self);
        self
    }

    /// Sets the allowed range and returns self.
    pub fn with_range(self, minimum: f64, maximum: f64) -> Self {
        self.apply_with(|this| {
            this.set_minimum(minimum);
            this.set_maximum(maximum);
        })
    }

    /// Sets both thumb values and returns self.
    ///
    /// The upper value applies first, so raising both thumbs from the
    /// defaults lands exactly where a caller with `lower <= upper` expects.
    pub fn with_values(self, lower: f64, upper: f64) -> Self {
        self.apply_with(|this| {
            this.set_upper_value(upper);
            this.set_lower_value(lower);
        })
    }

    /// Sets the step size and returns self.
    pub fn with_step(self, step_size: f64) -> Self {
        self.apply_with(|this| {
            this.set_step_size(step_size);
        })
    }

    /// Sets the clamping flag and returns self.
    pub fn with_clamping(self, enabled: bool) -> Self {
        self.apply_with(|this| {
            this.set_clamping_enabled(enabled);
        })
    }

    /// The lower bound of the allowed range.
    pub fn minimum(&self) -> f64 {
        *self.minimum.get()
    }

    /// The upper bound of the allowed range.
    pub fn maximum(&self) -> f64 {
        *self.maximum.get()
    }

    /// The lower thumb's value.
    pub fn lower_value(&self) -> f64 {
        *self.lower_value.get()
    }

    /// The upper thumb's value.
    pub fn upper_value(&self) -> f64 {
        *self.upper_value.get()
    }

    /// Both thumb values as a `(lower, upper)` pair.
    pub fn values(&self) -> (f64, f64) {
        (self.lower_value(), self.upper_value())
    }

    /// The drag-layer increment granularity; `0` means continuous.
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Whether out-of-range assignments are coerced into range.
    pub fn is_clamping_enabled(&self) -> bool {
        *self.clamping_enabled.get()
    }

    /// A live handle on the minimum bound for data binding.
    pub fn minimum_signal(&self) -> ValueSignal<f64> {
        self.minimum.clone()
    }

    /// A live handle on the maximum bound for data binding.
    pub fn maximum_signal(&self) -> ValueSignal<f64> {
        self.maximum.clone()
    }

    /// A live handle on the lower thumb's value for data binding.
    pub fn lower_signal(&self) -> ValueSignal<f64> {
        self.lower_value.clone()
    }

    /// A live handle on the upper thumb's value for data binding.
    pub fn upper_signal(&self) -> ValueSignal<f64> {
        self.upper_value.clone()
    }

    /// A live handle on the clamping flag for data binding.
    pub fn clamping_signal(&self) -> ValueSignal<bool> {
        self.clamping_enabled.clone()
    }

    /// Register a listener for every notification the model raises.
    pub fn on_event(&mut self, listener: impl Fn(&RangeEvent) + 'static) {
        self.listeners.push(Rc::new(listener));
    }

    pub(crate) fn emit(&self, event: &RangeEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    /// Set the lower bound of the allowed range.
    ///
    /// The bound itself stores as-is, inverted pairs included. With
    /// clamping enabled an effective change re-coerces both thumb values.
    /// Returns whether any stored property changed.
    pub fn set_minimum(&mut self, value: f64) -> bool {
        if !self.accept_finite(RangeProperty::Minimum, value) {
            return false;
        }
        let changed = self.store(&self.minimum, RangeProperty::Minimum, value);
        if changed && self.is_clamping_enabled() {
            self.reclamp_values();
        }
        changed
    }

    /// Set the upper bound of the allowed range. Symmetric to
    /// [RangeSlider::set_minimum].
    pub fn set_maximum(&mut self, value: f64) -> bool {
        if !self.accept_finite(RangeProperty::Maximum, value) {
            return false;
        }
        let changed = self.store(&self.maximum, RangeProperty::Maximum, value);
        if changed && self.is_clamping_enabled() {
            self.reclamp_values();
        }
        changed
    }

    /// Set the lower thumb's value.
    ///
    /// With clamping enabled the stored result is
    /// `clamp(value, minimum, min(maximum, upper_value))`; with clamping
    /// disabled the value stores unchanged. Returns whether the stored
    /// value changed.
    pub fn set_lower_value(&mut self, value: f64) -> bool {
        if !self.accept_finite(RangeProperty::LowerValue, value) {
            return false;
        }
        let target = if self.is_clamping_enabled() {
            self.coerce_lower(value)
        } else {
            value
        };
        self.store(&self.lower_value, RangeProperty::LowerValue, target)
    }

    /// Set the upper thumb's value.
    ///
    /// With clamping enabled the stored result is
    /// `clamp(value, max(minimum, lower_value), maximum)`; with clamping
    /// disabled the value stores unchanged. Returns whether the stored
    /// value changed.
    pub fn set_upper_value(&mut self, value: f64) -> bool {
        if !self.accept_finite(RangeProperty::UpperValue, value) {
            return false;
        }
        let target = if self.is_clamping_enabled() {
            self.coerce_upper(value)
        } else {
            value
        };
        self.store(&self.upper_value, RangeProperty::UpperValue, target)
    }

    /// Set the drag-layer increment granularity; `0` means continuous.
    ///
    /// Negative and non-finite values are dropped with a warning.
    pub fn set_step_size(&mut self, value: f64) -> bool {
        if !self.accept_finite(RangeProperty::StepSize, value) {
            return false;
        }
        if value < 0.0 {
            log::warn!("ignoring negative step size assignment: {value}");
            return false;
        }
        if self.step_size == value {
            return false;
        }
        let old = self.step_size;
        self.step_size = value;
        self.emit(&RangeEvent::Value {
            property: RangeProperty::StepSize,
            old,
            new: value,
        });
        true
    }

    /// Enable or disable clamping.
    ///
    /// Enabling re-coerces both thumb values so the containment invariants
    /// are restored when leaving the escape hatch; disabling changes
    /// nothing retroactively.
    pub fn set_clamping_enabled(&mut self, enabled: bool) -> bool {
        match self.clamping_enabled.set(enabled) {
            Some(change) => {
                self.emit(&RangeEvent::Clamping {
                    old: change.old,
                    new: change.new,
                });
                if enabled {
                    self.reclamp_values();
                }
                true
            },
            None => false,
        }
    }

    fn coerce_lower(&self, value: f64) -> f64 {
        clamp(value, self.minimum(), self.maximum().min(self.upper_value()))
    }

    fn coerce_upper(&self, value: f64) -> f64 {
        clamp(value, self.minimum().max(self.lower_value()), self.maximum())
    }

    /// Pull both thumb values back into range after a bound or flag
    /// change: lower first, then upper against the updated lower.
    fn reclamp_values(&self) {
        let lower = self.coerce_lower(self.lower_value());
        self.store(&self.lower_value, RangeProperty::LowerValue, lower);
        let upper = self.coerce_upper(self.upper_value());
        self.store(&self.upper_value, RangeProperty::UpperValue, upper);
    }

    fn store(&self, cell: &ValueSignal<f64>, property: RangeProperty, value: f64) -> bool {
        match cell.set(value) {
            Some(change) => {
                self.emit(&RangeEvent::Value {
                    property,
                    old: change.old,
                    new: change.new,
                });
                true
            },
            None => false,
        }
    }

    fn accept_finite(&self, property: RangeProperty, value: f64) -> bool {
        if value.is_finite() {
            true
        } else {
            log::warn!("ignoring non-finite {property:?} assignment: {value}");
            false
        }
    }
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new()
    }
}
