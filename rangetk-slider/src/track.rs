//! Pixel-space geometry of the slider track.
//!
//! The track is a horizontal strip; thumbs travel along its x axis. This
//! module converts between surface coordinates, track fractions in
//! `0..=1` and model values, so the drag layer never touches pixels and
//! the model never touches geometry.

use nalgebra::Vector2;

/// The horizontal strip the thumbs travel along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Top-left corner of the track in surface coordinates.
    pub origin: Vector2<f64>,
    /// Usable length in pixels along the x axis.
    pub length: f64,
}

impl Track {
    /// Create a track at `origin` spanning `length` pixels.
    pub fn new(origin: Vector2<f64>, length: f64) -> Self {
        Self { origin, length }
    }

    /// The fraction of `point` along the track, clamped into `0..=1`.
    ///
    /// A track without positive length has no interior, so every point
    /// maps to `0`.
    pub fn fraction_at(&self, point: Vector2<f64>) -> f64 {
        if self.length <= 0.0 {
            return 0.0;
        }
        ((point.x - self.origin.x) / self.length).clamp(0.0, 1.0)
    }

    /// The x coordinate of `fraction` along the track.
    pub fn x_of(&self, fraction: f64) -> f64 {
        self.origin.x + fraction.clamp(0.0, 1.0) * self.length.max(0.0)
    }
}

/// The fraction of `value` within `minimum..=maximum`, clamped into
/// `0..=1`. A degenerate or inverted range has no interior, so every
/// value maps to `0`.
pub fn fraction_of(value: f64, minimum: f64, maximum: f64) -> f64 {
    let span = maximum - minimum;
    if span <= 0.0 {
        return 0.0;
    }
    ((value - minimum) / span).clamp(0.0, 1.0)
}

/// The value at `fraction` of `minimum..=maximum`.
pub fn value_at(fraction: f64, minimum: f64, maximum: f64) -> f64 {
    minimum + fraction.clamp(0.0, 1.0) * (maximum - minimum)
}
