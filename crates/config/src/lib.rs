//! Configuration management for the gridline application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files, environment variables, and defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct, loading and env overrides
//! - [`display`]: Platform, font scale, pixel ratio and cell size
//! - [`refresh`]: Pull-to-refresh timing
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`GRIDLINE_*`)
//! 2. Local config (`./gridline.json5` or `./gridline.json`)
//! 3. User config (`~/.config/gridline/config.json5` or `~/.config/gridline/config.json`)
//! 4. Built-in defaults
//!
//! Only the first config file found is read; files are not merged.
//!
//! ```json5
//! {
//!   display: {
//!     platform: "android",   // ios, android, web or desktop
//!     font_scale: 1.0,
//!     pixel_ratio: 2.0,
//!     cell_width: 8,         // used when the terminal hides its pixel size
//!     cell_height: 16,
//!   },
//!   refresh: { delay_ms: 2000 },
//!   log_filter: "gridline=debug",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use gridline_config::Config;
//!
//! # async fn example() -> gridline_config::Result<()> {
//! let (config, _source) = Config::load().await?;
//! let metrics = config.display.metrics();
//! println!("Rendering as {}", metrics.platform);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod persistence;
pub mod refresh;

// Re-export primary types at crate root for convenience
pub use config::{Config, ConfigSource};
pub use display::DisplayConfig;
pub use error::{ConfigError, Result};
pub use refresh::RefreshConfig;
