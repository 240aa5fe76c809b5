//! Declarative multi-slider configuration.
//!
//! Every field has a default, so a YAML document only needs the keys it
//! changes:
//!
//! ```yaml
//! thumbs: 3
//! values: [10, 50, 90]
//! bounded: true
//! major_tick_spacing: 25
//! paint_ticks: true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SliderError;
use crate::multi_slider::{Orientation, SliderStyle};

/// Settings a [`MultiSlider`](crate::MultiSlider) can be built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiSliderConfig {
    /// Number of thumbs
    pub thumbs: usize,
    /// Shared lower bound
    pub minimum: i32,
    /// Shared upper bound
    pub maximum: i32,
    /// Initial values in index order; empty spreads thumbs evenly
    pub values: Vec<i32>,
    pub orientation: Orientation,
    pub inverted: bool,
    /// Keep thumbs in index order while dragging
    pub bounded: bool,
    pub snap_to_ticks: bool,
    pub major_tick_spacing: i32,
    pub minor_tick_spacing: i32,
    pub paint_track: bool,
    pub paint_ticks: bool,
    pub paint_labels: bool,
    pub enabled: bool,
    pub style: SliderStyle,
}

impl Default for MultiSliderConfig {
    fn default() -> Self {
        Self {
            thumbs: 2,
            minimum: 0,
            maximum: 100,
            values: Vec::new(),
            orientation: Orientation::Horizontal,
            inverted: false,
            bounded: false,
            snap_to_ticks: false,
            major_tick_spacing: 0,
            minor_tick_spacing: 0,
            paint_track: true,
            paint_ticks: false,
            paint_labels: false,
            enabled: true,
            style: SliderStyle::default(),
        }
    }
}

impl MultiSliderConfig {
    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::Config`] for malformed YAML and the
    /// [`validate`](Self::validate) errors for inconsistent settings.
    pub fn from_yaml(yaml: &str) -> Result<Self, SliderError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::Config`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, SliderError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check that the settings describe a buildable slider.
    ///
    /// # Errors
    ///
    /// Fails on zero thumbs, an inverted range, or a non-empty value list
    /// whose length differs from the thumb count.
    pub fn validate(&self) -> Result<(), SliderError> {
        if self.thumbs == 0 {
            return Err(SliderError::NoThumbs);
        }
        if self.minimum > self.maximum {
            return Err(SliderError::InvalidRange {
                min: self.minimum,
                max: self.maximum,
            });
        }
        if !self.values.is_empty() && self.values.len() != self.thumbs {
            return Err(SliderError::ValueCountMismatch {
                expected: self.thumbs,
                found: self.values.len(),
            });
        }
        Ok(())
    }
}
