//! Display configuration: how the terminal maps to a device viewport.
//!
//! A terminal has no notion of logical pixels or accessibility font
//! scale, so these are configured here. Cell dimensions are only used
//! when the terminal does not report its pixel size.

use gridline_layout::{DisplayMetrics, Platform};
use serde::{Deserialize, Serialize};

/// Default cell width in logical pixels.
pub const DEFAULT_CELL_WIDTH: u16 = 8;

/// Default cell height in logical pixels.
pub const DEFAULT_CELL_HEIGHT: u16 = 16;

/// Display settings.
///
/// # Examples
///
/// ```
/// use gridline_config::DisplayConfig;
/// use gridline_layout::Platform;
///
/// let config: DisplayConfig = serde_json5::from_str("{ platform: 'android', font_scale: 1.2 }").unwrap();
/// let metrics = config.metrics();
/// assert_eq!(metrics.platform, Platform::Android);
/// assert_eq!(metrics.font_scale(), 1.2);
/// assert_eq!(config.cell_width, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Platform whose typography rules apply.
    pub platform: Platform,
    /// Accessibility font scale.
    pub font_scale: f64,
    /// Physical pixels per logical pixel.
    pub pixel_ratio: f64,
    /// Fallback cell width in logical pixels.
    pub cell_width: u16,
    /// Fallback cell height in logical pixels.
    pub cell_height: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            font_scale: 1.0,
            pixel_ratio: 1.0,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }
}

impl DisplayConfig {
    /// Returns the display metrics to hand to the layout resolver.
    #[must_use]
    pub fn metrics(&self) -> DisplayMetrics {
        DisplayMetrics::new(self.platform)
            .with_font_scale(self.font_scale)
            .with_pixel_ratio(self.pixel_ratio)
    }

    /// Validates the display settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::InvalidDisplay`] if a scale factor is
    /// not a positive finite number or a cell dimension is zero.
    pub fn validate(&self) -> crate::Result<()> {
        check_factor("font_scale", self.font_scale)?;
        check_factor("pixel_ratio", self.pixel_ratio)?;
        check_cell("cell_width", self.cell_width)?;
        check_cell("cell_height", self.cell_height)
    }
}

fn check_factor(field: &'static str, value: f64) -> crate::Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(crate::ConfigError::InvalidDisplay {
            field,
            reason: format!("{value} is not a positive number"),
        })
    }
}

fn check_cell(field: &'static str, value: u16) -> crate::Result<()> {
    if value == 0 {
        return Err(crate::ConfigError::InvalidDisplay {
            field,
            reason: "must be at least 1 pixel".to_string(),
        });
    }
    Ok(())
}
