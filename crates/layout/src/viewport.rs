//! Viewport dimensions and the classifications derived from them.
//!
//! Everything here is a pure function of a [`Viewport`] and the host's
//! [`DisplayMetrics`]. Nothing is cached: callers recompute after every
//! viewport change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Diagonal length (in logical pixels, after font-scale compensation) at or
/// above which a viewport is considered a tablet.
pub const TABLET_DIAGONAL_THRESHOLD: f64 = 1000.0;

/// Widths strictly below this are [`DeviceClass::Small`].
pub const BREAKPOINT_SMALL: f64 = 350.0;

/// Widths strictly below this (and not small) are [`DeviceClass::Medium`].
pub const BREAKPOINT_MEDIUM: f64 = 400.0;

/// The visible screen area in logical pixels.
///
/// # Examples
///
/// ```
/// use gridline_layout::{Orientation, Viewport};
///
/// let viewport = Viewport::new(800.0, 400.0);
/// assert_eq!(viewport.orientation(), Orientation::Landscape);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport, clamping negative or non-finite dimensions to zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Creates a viewport, rejecting dimensions that are not strictly
    /// positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimension`] naming the offending axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline_layout::Viewport;
    ///
    /// assert!(Viewport::try_new(320.0, 480.0).is_ok());
    /// assert!(Viewport::try_new(0.0, 480.0).is_err());
    /// assert!(Viewport::try_new(320.0, f64::NAN).is_err());
    /// ```
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        Ok(Self { width, height })
    }

    /// Returns `true` if either dimension is zero.
    ///
    /// Degenerate viewports fall back to the smallest device class and a
    /// single grid column.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns the Euclidean diagonal length.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    /// Returns the orientation of this viewport.
    ///
    /// Portrait iff width is strictly less than height, so a square
    /// viewport is landscape.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.width < self.height {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn check_dimension(axis: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension { axis, value })
    }
}

/// Screen orientation, derived from a [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Taller than wide.
    #[default]
    Portrait,
    /// At least as wide as tall.
    Landscape,
}

impl Orientation {
    /// Returns a lowercase label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse device bucket used to select layout policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Narrow phones (width below 350).
    Small,
    /// Regular phones (width 350 up to 400).
    Medium,
    /// Large phones (width 400 and above).
    Large,
    /// Tablets, detected by diagonal size.
    Tablet,
}

impl DeviceClass {
    /// Returns a lowercase label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Tablet => "tablet",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The platform whose text rendering metrics are in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// The reference platform: font sizes are used as computed.
    #[default]
    Ios,
    /// Android text rendering.
    Android,
    /// Browser text rendering.
    Web,
    /// Desktop text rendering.
    Desktop,
}

/// The platform font sizes are calibrated against.
pub const REFERENCE_PLATFORM: Platform = Platform::Ios;

impl Platform {
    /// All known platforms.
    pub const ALL: [Platform; 4] = [Self::Ios, Self::Android, Self::Web, Self::Desktop];

    /// Returns the identifier used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }

    /// Returns `true` for the platform font sizes are calibrated against.
    #[must_use]
    pub fn is_reference(self) -> bool {
        self == REFERENCE_PLATFORM
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LayoutError::UnknownPlatform(s.to_string()))
    }
}

/// Host display properties that influence layout.
///
/// # Examples
///
/// ```
/// use gridline_layout::{DisplayMetrics, Platform};
///
/// let metrics = DisplayMetrics::new(Platform::Android).with_font_scale(1.3);
/// assert_eq!(metrics.font_scale(), 1.3);
/// assert_eq!(metrics.pixel_ratio(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Platform whose text metrics apply.
    pub platform: Platform,
    /// Accessibility font scale reported by the host.
    pub font_scale: f64,
    /// Physical pixels per logical pixel.
    pub pixel_ratio: f64,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(Platform::default())
    }
}

impl DisplayMetrics {
    /// Creates metrics for a platform with unit font scale and pixel ratio.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            font_scale: 1.0,
            pixel_ratio: 1.0,
        }
    }

    /// Sets the accessibility font scale.
    #[must_use]
    pub fn with_font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = font_scale;
        self
    }

    /// Sets the physical-to-logical pixel ratio.
    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Font scale to compute with; unusable values read as 1.0.
    #[must_use]
    pub fn font_scale(&self) -> f64 {
        positive_or_one(self.font_scale)
    }

    /// Pixel ratio to compute with; unusable values read as 1.0.
    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        positive_or_one(self.pixel_ratio)
    }
}

fn positive_or_one(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

/// Returns the orientation of `viewport`.
#[must_use]
pub fn orientation(viewport: &Viewport) -> Orientation {
    viewport.orientation()
}

/// Returns `true` if the viewport is tablet sized.
///
/// The diagonal is divided by the accessibility font scale, since OS-level
/// zoom inflates reported dimensions without changing the physical screen.
///
/// # Examples
///
/// ```
/// use gridline_layout::{DisplayMetrics, Viewport, is_tablet};
///
/// let metrics = DisplayMetrics::default();
/// assert!(is_tablet(&Viewport::new(1024.0, 768.0), &metrics));
/// assert!(!is_tablet(&Viewport::new(320.0, 480.0), &metrics));
/// ```
#[must_use]
pub fn is_tablet(viewport: &Viewport, metrics: &DisplayMetrics) -> bool {
    if viewport.is_degenerate() {
        return false;
    }
    viewport.diagonal() / metrics.font_scale() >= TABLET_DIAGONAL_THRESHOLD
}

/// Classifies the viewport into a [`DeviceClass`].
///
/// Width comparisons are strict, so a width exactly on a breakpoint lands in
/// the larger class.
///
/// # Examples
///
/// ```
/// use gridline_layout::{DeviceClass, DisplayMetrics, Viewport, classify_device};
///
/// let metrics = DisplayMetrics::default();
/// assert_eq!(classify_device(&Viewport::new(349.0, 600.0), &metrics), DeviceClass::Small);
/// assert_eq!(classify_device(&Viewport::new(350.0, 600.0), &metrics), DeviceClass::Medium);
/// assert_eq!(classify_device(&Viewport::new(400.0, 600.0), &metrics), DeviceClass::Large);
/// ```
#[must_use]
pub fn classify_device(viewport: &Viewport, metrics: &DisplayMetrics) -> DeviceClass {
    if viewport.is_degenerate() {
        return DeviceClass::Small;
    }
    if is_tablet(viewport, metrics) {
        return DeviceClass::Tablet;
    }
    if viewport.width < BREAKPOINT_SMALL {
        DeviceClass::Small
    } else if viewport.width < BREAKPOINT_MEDIUM {
        DeviceClass::Medium
    } else {
        DeviceClass::Large
    }
}

/// Grid column count when nothing in [`GRID_COLUMN_POLICY`] applies.
pub const DEFAULT_GRID_COLUMNS: usize = 2;

/// Grid columns per device class as `(class, portrait, landscape)`.
///
/// This is product policy rather than a formula: large phones jump
/// straight to four columns in landscape.
pub const GRID_COLUMN_POLICY: &[(DeviceClass, usize, usize)] = &[
    (DeviceClass::Small, 2, 2),
    (DeviceClass::Medium, 2, 3),
    (DeviceClass::Large, 2, 4),
    (DeviceClass::Tablet, 4, 4),
];

/// Looks up the column count for a device class and orientation.
///
/// # Examples
///
/// ```
/// use gridline_layout::{DeviceClass, Orientation, columns_for};
///
/// assert_eq!(columns_for(DeviceClass::Medium, Orientation::Landscape), 3);
/// assert_eq!(columns_for(DeviceClass::Large, Orientation::Landscape), 4);
/// ```
#[must_use]
pub fn columns_for(class: DeviceClass, orientation: Orientation) -> usize {
    GRID_COLUMN_POLICY
        .iter()
        .find(|(c, _, _)| *c == class)
        .map_or(DEFAULT_GRID_COLUMNS, |&(_, portrait, landscape)| {
            match orientation {
                Orientation::Portrait => portrait,
                Orientation::Landscape => landscape,
            }
        })
}

/// Returns the grid column count for the viewport. Always at least 1.
#[must_use]
pub fn grid_columns(viewport: &Viewport, metrics: &DisplayMetrics) -> usize {
    if viewport.is_degenerate() {
        return 1;
    }
    columns_for(classify_device(viewport, metrics), viewport.orientation()).max(1)
}
