//! Spacing and typography scaled to the viewport.
//!
//! Lengths are percentages of the viewport width snapped to the device
//! pixel grid; font sizes scale linearly with width against a 320-pixel
//! reference screen.

use serde::{Deserialize, Serialize};

use crate::viewport::{DeviceClass, DisplayMetrics, Viewport, classify_device};

/// Viewport width that font base sizes are designed for.
pub const REFERENCE_WIDTH: f64 = 320.0;

/// Pixels subtracted from scaled font sizes on non-reference platforms.
///
/// An empirical offset for differences between text rendering engines.
pub const NON_REFERENCE_FONT_ADJUSTMENT: u32 = 2;

/// Snaps a logical-pixel value to the nearest value the device can render
/// without sub-pixel blur.
///
/// # Examples
///
/// ```
/// use gridline_layout::{DisplayMetrics, nearest_device_pixel};
///
/// let retina = DisplayMetrics::default().with_pixel_ratio(2.0);
/// assert_eq!(nearest_device_pixel(10.3, &retina), 10.5);
/// ```
#[must_use]
pub fn nearest_device_pixel(value: f64, metrics: &DisplayMetrics) -> f64 {
    let ratio = metrics.pixel_ratio();
    (value * ratio).round() / ratio
}

fn round_to_pixels(value: f64, metrics: &DisplayMetrics) -> u32 {
    let rounded = nearest_device_pixel(value, metrics).round();
    if rounded.is_finite() && rounded > 0.0 {
        // Saturating float-to-int cast
        rounded as u32
    } else {
        0
    }
}

/// Converts a percentage of `dimension` to whole pixels.
///
/// # Examples
///
/// ```
/// use gridline_layout::{DisplayMetrics, scaled_pixels};
///
/// let metrics = DisplayMetrics::default();
/// assert_eq!(scaled_pixels(4.0, 320.0, &metrics), 13);
/// ```
#[must_use]
pub fn scaled_pixels(percentage: f64, dimension: f64, metrics: &DisplayMetrics) -> u32 {
    round_to_pixels(percentage * dimension / 100.0, metrics)
}

/// Converts a percentage of the viewport width to whole pixels.
#[must_use]
pub fn width_percent(percentage: f64, viewport: &Viewport, metrics: &DisplayMetrics) -> u32 {
    scaled_pixels(percentage, viewport.width, metrics)
}

/// Converts a percentage of the viewport height to whole pixels.
#[must_use]
pub fn height_percent(percentage: f64, viewport: &Viewport, metrics: &DisplayMetrics) -> u32 {
    scaled_pixels(percentage, viewport.height, metrics)
}

/// Scales a base font size to the viewport width.
///
/// Non-reference platforms get [`NON_REFERENCE_FONT_ADJUSTMENT`] pixels
/// less. The result never drops below zero.
///
/// # Examples
///
/// ```
/// use gridline_layout::{DisplayMetrics, Platform, scaled_font_size};
///
/// let ios = DisplayMetrics::new(Platform::Ios);
/// let android = DisplayMetrics::new(Platform::Android);
/// assert_eq!(scaled_font_size(16.0, 320.0, &ios), 16);
/// assert_eq!(scaled_font_size(16.0, 320.0, &android), 14);
/// assert_eq!(scaled_font_size(16.0, 640.0, &ios), 32);
/// ```
#[must_use]
pub fn scaled_font_size(base_size: f64, viewport_width: f64, metrics: &DisplayMetrics) -> u32 {
    let scale = viewport_width / REFERENCE_WIDTH;
    let snapped = round_to_pixels(base_size * scale, metrics);
    if metrics.platform.is_reference() {
        snapped
    } else {
        snapped.saturating_sub(NON_REFERENCE_FONT_ADJUSTMENT)
    }
}

/// Size tags of the spacing scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingSize {
    /// 1% of width.
    ExtraSmall,
    /// 2% of width.
    Small,
    /// 4% of width.
    Medium,
    /// 6% of width.
    Large,
    /// 8% of width.
    ExtraLarge,
}

impl SpacingSize {
    /// All sizes, smallest first.
    pub const ALL: [SpacingSize; 5] = [
        Self::ExtraSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
    ];

    /// Percentage of the viewport width this size stands for.
    #[must_use]
    pub const fn percentage(self) -> f64 {
        match self {
            Self::ExtraSmall => 1.0,
            Self::Small => 2.0,
            Self::Medium => 4.0,
            Self::Large => 6.0,
            Self::ExtraLarge => 8.0,
        }
    }

    /// Short token name (`xs` .. `xl`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::ExtraSmall => "xs",
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
            Self::ExtraLarge => "xl",
        }
    }
}

/// Spacing lengths in pixels for one viewport width.
///
/// # Examples
///
/// ```
/// use gridline_layout::{DisplayMetrics, SpacingScale, SpacingSize, Viewport};
///
/// let spacing = SpacingScale::for_viewport(&Viewport::new(320.0, 568.0), &DisplayMetrics::default());
/// assert_eq!(spacing.get(SpacingSize::Small), 6);
/// assert_eq!(spacing.get(SpacingSize::ExtraLarge), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingScale {
    values: [u32; 5],
}

impl SpacingScale {
    /// Computes the scale for a viewport.
    #[must_use]
    pub fn for_viewport(viewport: &Viewport, metrics: &DisplayMetrics) -> Self {
        Self {
            values: SpacingSize::ALL.map(|size| width_percent(size.percentage(), viewport, metrics)),
        }
    }

    /// Returns the length for a size tag.
    #[must_use]
    pub fn get(&self, size: SpacingSize) -> u32 {
        self.values[size as usize]
    }

    /// Iterates over `(size, pixels)` pairs, smallest first.
    pub fn iter(&self) -> impl Iterator<Item = (SpacingSize, u32)> + '_ {
        SpacingSize::ALL.into_iter().map(|size| (size, self.get(size)))
    }
}

/// Text roles of the typography scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// Page title.
    H1,
    /// Section title.
    H2,
    /// Card title.
    H3,
    /// Minor heading.
    H4,
    /// Body copy.
    Body,
    /// Captions and hints.
    Caption,
    /// Fine print.
    Small,
}

impl TextRole {
    /// All roles, largest first.
    pub const ALL: [TextRole; 7] = [
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::Body,
        Self::Caption,
        Self::Small,
    ];

    /// Font size at the reference width.
    #[must_use]
    pub const fn base_size(self) -> f64 {
        match self {
            Self::H1 => 28.0,
            Self::H2 => 24.0,
            Self::H3 => 20.0,
            Self::H4 => 18.0,
            Self::Body => 16.0,
            Self::Caption => 14.0,
            Self::Small => 12.0,
        }
    }

    /// Short token name.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::Body => "body",
            Self::Caption => "caption",
            Self::Small => "small",
        }
    }
}

/// Font sizes in pixels for one viewport width and platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyScale {
    values: [u32; 7],
}

impl TypographyScale {
    /// Computes the scale for a viewport.
    #[must_use]
    pub fn for_viewport(viewport: &Viewport, metrics: &DisplayMetrics) -> Self {
        Self {
            values: TextRole::ALL
                .map(|role| scaled_font_size(role.base_size(), viewport.width, metrics)),
        }
    }

    /// Returns the font size for a text role.
    #[must_use]
    pub fn get(&self, role: TextRole) -> u32 {
        self.values[role as usize]
    }

    /// Iterates over `(role, pixels)` pairs, largest first.
    pub fn iter(&self) -> impl Iterator<Item = (TextRole, u32)> + '_ {
        TextRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// Spacing size used as horizontal inset for a device class.
#[must_use]
pub const fn padding_size_for(class: DeviceClass) -> SpacingSize {
    match class {
        DeviceClass::Small | DeviceClass::Medium => SpacingSize::Medium,
        DeviceClass::Large => SpacingSize::Large,
        DeviceClass::Tablet => SpacingSize::ExtraLarge,
    }
}

/// Horizontal container inset in pixels for the viewport's device class.
///
/// # Examples
///
/// ```
/// use gridline_layout::{DisplayMetrics, Viewport, adaptive_padding};
///
/// let metrics = DisplayMetrics::default();
/// // Large phone: 6% of 400
/// assert_eq!(adaptive_padding(&Viewport::new(400.0, 700.0), &metrics), 24);
/// ```
#[must_use]
pub fn adaptive_padding(viewport: &Viewport, metrics: &DisplayMetrics) -> u32 {
    let size = padding_size_for(classify_device(viewport, metrics));
    width_percent(size.percentage(), viewport, metrics)
}
