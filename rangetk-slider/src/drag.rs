//! Drag-session routing from gesture positions to model values.
//!
//! [DragController] owns no model state. The embedding gesture layer feeds
//! it press/move/release positions together with the [RangeSlider] they
//! target; the controller picks the thumb, snaps candidates to the step
//! grid and routes them through the model's coercing setters. Every
//! operation returns the [Redraw] flags the embedder should repaint.

use nalgebra::Vector2;
use rangetk_core::redraw::Redraw;

use crate::event::{RangeEvent, Thumb};
use crate::model::RangeSlider;
use crate::track::{fraction_of, value_at, Track};

/// A drag session controller for one slider.
#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    track: Track,
    active: Option<Thumb>,
}

/// Snap `value` to the nearest multiple of `step`; `0` means continuous.
fn snap(value: f64, step: f64) -> f64 {
    if step > 0.0 {
        (value / step).round() * step
    } else {
        value
    }
}

fn flag_of(thumb: Thumb) -> Redraw {
    match thumb {
        Thumb::Lower => Redraw::LOWER_THUMB,
        Thumb::Upper => Redraw::UPPER_THUMB,
    }
}

impl DragController {
    /// Create a controller over the given track geometry.
    pub fn new(track: Track) -> Self {
        Self {
            track,
            active: None,
        }
    }

    /// The track geometry the controller maps positions through.
    pub fn track(&self) -> Track {
        self.track
    }

    /// Replace the track geometry after a relayout. An active session
    /// keeps its grab and maps subsequent positions through the new track.
    pub fn set_track(&mut self, track: Track) {
        self.track = track;
    }

    /// The thumb grabbed by the active session, if any.
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.active
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Start a session at a press position: grabs the thumb whose current
    /// fraction is nearest, the upper thumb winning exact ties since it is
    /// drawn on top. Raises [RangeEvent::DragStarted] and returns the
    /// grabbed thumb's flag so the embedder can repaint its active state.
    ///
    /// A press during an active session or at a non-finite position is
    /// ignored.
    pub fn begin(&mut self, slider: &RangeSlider, point: Vector2<f64>) -> Redraw {
        if self.active.is_some() || !point.x.is_finite() {
            return Redraw::empty();
        }
        let fraction = self.track.fraction_at(point);
        let (minimum, maximum) = (slider.minimum(), slider.maximum());
        let to_lower = (fraction - fraction_of(slider.lower_value(), minimum, maximum)).abs();
        let to_upper = (fraction - fraction_of(slider.upper_value(), minimum, maximum)).abs();
        let thumb = if to_upper <= to_lower {
            Thumb::Upper
        } else {
            Thumb::Lower
        };
        self.active = Some(thumb);
        slider.emit(&RangeEvent::DragStarted(thumb));
        flag_of(thumb)
    }

    /// Move the grabbed thumb toward a cursor position. The position maps
    /// to a candidate value, snaps to the step grid and runs through the
    /// thumb's coercing setter, so bounds win over the grid at the track
    /// ends. Returns the thumb and track flags on an effective change,
    /// empty flags otherwise.
    ///
    /// A move without an active session or at a non-finite position is
    /// ignored.
    pub fn drag_to(&mut self, slider: &mut RangeSlider, point: Vector2<f64>) -> Redraw {
        let Some(thumb) = self.active else {
            return Redraw::empty();
        };
        if !point.x.is_finite() {
            return Redraw::empty();
        }
        let fraction = self.track.fraction_at(point);
        let candidate = value_at(fraction, slider.minimum(), slider.maximum());
        let candidate = snap(candidate, slider.step_size());
        let changed = match thumb {
            Thumb::Lower => slider.set_lower_value(candidate),
            Thumb::Upper => slider.set_upper_value(candidate),
        };
        if changed {
            flag_of(thumb) | Redraw::TRACK
        } else {
            Redraw::empty()
        }
    }

    /// End the active session. Raises [RangeEvent::DragCompleted] and
    /// returns the released thumb's flag; ignored without a session.
    pub fn end(&mut self, slider: &RangeSlider) -> Redraw {
        let Some(thumb) = self.active.take() else {
            return Redraw::empty();
        };
        slider.emit(&RangeEvent::DragCompleted(thumb));
        flag_of(thumb)
    }
}
