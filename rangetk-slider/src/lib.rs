#![warn(missing_docs)]

//! Range slider logic for rangetk => See the `rangetk` crate.
//!
//! Contains the dual-thumb value model plus the drag, track and config
//! layers around it.

/// Contains the [model::RangeSlider] value model.
pub mod model;

/// Contains the [event::RangeEvent] notification payloads.
pub mod event;

/// Contains the [track::Track] surface geometry.
pub mod track;

/// Contains the [drag::DragController] session routing.
pub mod drag;

/// Contains the [config::SliderConfig] defaults layer.
pub mod config;
