//! Responsive layout resolution for the gridline dashboard.
//!
//! This crate turns viewport dimensions into layout decisions: device
//! class, orientation, grid column count, spacing and typography scales,
//! and adaptive padding. It has no knowledge of any rendering toolkit.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`viewport`]: Viewport, display metrics, and classification
//! - [`scale`]: Pixel snapping, spacing and typography scales
//! - [`resolver`]: The stateful resolver and its change subscription
//! - [`grid`]: Partitioning items into fixed-width grid rows
//! - [`error`]: Error types for strict input construction
//!
//! # Examples
//!
//! ```
//! use gridline_layout::{DeviceClass, DisplayMetrics, Platform, Viewport, ViewportResolver};
//!
//! let metrics = DisplayMetrics::new(Platform::Android);
//! let resolver = ViewportResolver::new(Viewport::new(360.0, 740.0), metrics);
//!
//! let layout = resolver.snapshot();
//! assert_eq!(layout.device_class, DeviceClass::Medium);
//! assert_eq!(layout.grid_columns, 2);
//! ```

pub mod error;
pub mod grid;
pub mod resolver;
pub mod scale;
pub mod viewport;

// Re-export primary types at crate root for convenience
pub use error::{LayoutError, Result};
pub use grid::{CellKey, GridCell, GridItem, GridRow, partition_rows};
pub use resolver::{ResolvedLayout, Subscription, ViewportChange, ViewportResolver};
pub use scale::{
    NON_REFERENCE_FONT_ADJUSTMENT, REFERENCE_WIDTH, SpacingScale, SpacingSize, TextRole,
    TypographyScale, adaptive_padding, height_percent, nearest_device_pixel, padding_size_for,
    scaled_font_size, scaled_pixels, width_percent,
};
pub use viewport::{
    BREAKPOINT_MEDIUM, BREAKPOINT_SMALL, DEFAULT_GRID_COLUMNS, DeviceClass, DisplayMetrics,
    GRID_COLUMN_POLICY, Orientation, Platform, REFERENCE_PLATFORM, TABLET_DIAGONAL_THRESHOLD,
    Viewport, classify_device, columns_for, grid_columns, is_tablet, orientation,
};
