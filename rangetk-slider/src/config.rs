//! Declarative slider defaults loaded from TOML.
//!
//! A [SliderConfig] holds an optional override per state field. Configs
//! parse from TOML content or files, merge with later-overrides-earlier
//! precedence and apply onto a [RangeSlider] through its normal setters,
//! so the coercion and notification rules of direct assignment hold.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::RangeSlider;

/// Errors that can occur while loading slider configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration content is not valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Declarative overrides for a slider's initial state.
///
/// Every field is optional; a missing field keeps the framework default.
///
/// ```toml
/// minimum = 0.0
/// maximum = 10.0
/// lower_value = 2.5
/// upper_value = 7.5
/// step_size = 0.5
/// clamping_enabled = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SliderConfig {
    /// Override for the lower bound of the allowed range.
    pub minimum: Option<f64>,
    /// Override for the upper bound of the allowed range.
    pub maximum: Option<f64>,
    /// Override for the lower thumb's initial value.
    pub lower_value: Option<f64>,
    /// Override for the upper thumb's initial value.
    pub upper_value: Option<f64>,
    /// Override for the drag-layer step granularity.
    pub step_size: Option<f64>,
    /// Override for the clamping flag.
    pub clamping_enabled: Option<bool>,
}

impl SliderConfig {
    /// Parse a configuration from TOML content. Unknown keys are ignored.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::info!("Loading slider config from: {:?}", path);
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Merge a loaded config into the current config; fields present in
    /// `other` override fields present here.
    pub fn merge(&mut self, other: Self) {
        if let Some(minimum) = other.minimum {
            self.minimum = Some(minimum);
        }
        if let Some(maximum) = other.maximum {
            self.maximum = Some(maximum);
        }
        if let Some(lower) = other.lower_value {
            self.lower_value = Some(lower);
        }
        if let Some(upper) = other.upper_value {
            self.upper_value = Some(upper);
        }
        if let Some(step) = other.step_size {
            self.step_size = Some(step);
        }
        if let Some(enabled) = other.clamping_enabled {
            self.clamping_enabled = Some(enabled);
        }
    }

    /// Apply the overrides onto a model through its setters.
    ///
    /// The clamping flag applies first so an escape-hatch config stores
    /// its bounds and values verbatim, then the bounds, the step size,
    /// the upper value and the lower value.
    pub fn apply(&self, slider: &mut RangeSlider) {
        if let Some(enabled) = self.clamping_enabled {
            slider.set_clamping_enabled(enabled);
        }
        if let Some(minimum) = self.minimum {
            slider.set_minimum(minimum);
        }
        if let Some(maximum) = self.maximum {
            slider.set_maximum(maximum);
        }
        if let Some(step) = self.step_size {
            slider.set_step_size(step);
        }
        if let Some(upper) = self.upper_value {
            slider.set_upper_value(upper);
        }
        if let Some(lower) = self.lower_value {
            slider.set_lower_value(lower);
        }
    }

    /// Build a model from the framework defaults plus these overrides.
    pub fn build(&self) -> RangeSlider {
        let mut slider = RangeSlider::new();
        self.apply(&mut slider);
        slider
    }
}

impl RangeSlider {
    /// Build a model from the framework defaults plus the overrides in
    /// `config`. Equivalent to [SliderConfig::build].
    pub fn from_config(config: &SliderConfig) -> Self {
        config.build()
    }
}
