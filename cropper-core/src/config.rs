//! Cropper configuration.
//!
//! Every field has a default, so hosts may supply a partial JSON document
//! (or none at all) and get the stock behavior for everything they omit.

use crate::error::{CropperError, Result};
use crate::orientation::Orientation;
use crate::surface::Rgba;
use serde::{Deserialize, Serialize};

/// Smallest zoom the controller will ever apply.
pub const DEFAULT_MIN_ZOOM: f64 = 0.01;
/// Divisor applied to zoom amounts when no explicit strength is given.
pub const DEFAULT_ZOOM_STRENGTH: f64 = 100.0;
/// Zoom amount per unit of wheel `deltaY`.
pub const DEFAULT_WHEEL_SENSITIVITY: f64 = 0.1;
/// Zoom amount applied by a single zoom button press.
pub const DEFAULT_ZOOM_STEP: f64 = 10.0;
pub const DEFAULT_IMAGE_SRC: &str = "0.jpg";

/// Viewport transform behavior.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Keep the sampled window inside the image after every pan and zoom.
    /// Off by default: the viewport behaves like a free camera.
    pub clamp_to_bounds: bool,
    /// Lower bound for zoom. Must be positive.
    pub min_zoom: f64,
    /// Default divisor for `zoom_by` amounts.
    pub zoom_strength: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            clamp_to_bounds: false,
            min_zoom: DEFAULT_MIN_ZOOM,
            zoom_strength: DEFAULT_ZOOM_STRENGTH,
        }
    }
}

/// Top-level cropper configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropperConfig {
    pub viewport: ViewportConfig,
    /// Painted under the image so transparent regions never show the page.
    pub background: Rgba,
    /// Preset applied when the cropper is created.
    pub initial_orientation: Orientation,
    pub wheel_sensitivity: f64,
    pub zoom_step: f64,
    /// Image to load on startup.
    pub image_src: String,
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            background: Rgba::WHITE,
            initial_orientation: Orientation::Equal,
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            zoom_step: DEFAULT_ZOOM_STEP,
            image_src: DEFAULT_IMAGE_SRC.to_string(),
        }
    }
}

impl CropperConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CropperConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let vp = &self.viewport;
        if !(vp.min_zoom.is_finite() && vp.min_zoom > 0.0) {
            return Err(CropperError::InvalidConfig(format!(
                "min_zoom must be positive, got {}",
                vp.min_zoom
            )));
        }
        if !vp.zoom_strength.is_finite() || vp.zoom_strength == 0.0 {
            return Err(CropperError::InvalidConfig(format!(
                "zoom_strength must be finite and non-zero, got {}",
                vp.zoom_strength
            )));
        }
        if !self.wheel_sensitivity.is_finite() {
            return Err(CropperError::InvalidConfig(
                "wheel_sensitivity must be finite".to_string(),
            ));
        }
        if !self.zoom_step.is_finite() {
            return Err(CropperError::InvalidConfig(
                "zoom_step must be finite".to_string(),
            ));
        }
        if self.image_src.trim().is_empty() {
            return Err(CropperError::InvalidConfig(
                "image_src must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
