//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the gridline application.

use std::fmt;
use std::path::{Path, PathBuf};

use gridline_layout::Platform;
use serde::{Deserialize, Serialize};

use crate::display::DisplayConfig;
use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::refresh::RefreshConfig;

/// Overrides the display platform.
pub const ENV_PLATFORM: &str = "GRIDLINE_PLATFORM";
/// Overrides the accessibility font scale.
pub const ENV_FONT_SCALE: &str = "GRIDLINE_FONT_SCALE";
/// Overrides the pixel ratio.
pub const ENV_PIXEL_RATIO: &str = "GRIDLINE_PIXEL_RATIO";
/// Overrides the refresh delay in milliseconds.
pub const ENV_REFRESH_DELAY_MS: &str = "GRIDLINE_REFRESH_DELAY_MS";
/// Overrides the log filter directive.
pub const ENV_LOG: &str = "GRIDLINE_LOG";

/// Where a loaded configuration came from.
///
/// [`Config::load`] runs before logging is installed, so it hands the
/// source back for the caller to report.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use gridline_config::config::ConfigSource;
///
/// let source = ConfigSource::from(Some(PathBuf::from("gridline.json5")));
/// assert_eq!(source.to_string(), "gridline.json5");
/// assert_eq!(ConfigSource::from(None).to_string(), "defaults");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file was found.
    Defaults,
}

impl From<Option<PathBuf>> for ConfigSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Defaults, Self::File)
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("defaults"),
        }
    }
}

/// The main configuration struct for the gridline application.
///
/// # Examples
///
/// ```
/// use gridline_config::{Config, RefreshConfig};
///
/// let config = Config::default();
/// assert_eq!(config.refresh.delay_ms, 2000);
///
/// let config = Config {
///     refresh: RefreshConfig::with_delay_ms(500),
///     log_filter: Some("gridline=debug".to_string()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How the terminal maps to a device viewport.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Pull-to-refresh timing.
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// `tracing` filter directive, e.g. `"gridline=debug"`.
    ///
    /// When unset the binary uses its built-in default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations, then applies
    /// environment overrides.
    ///
    /// If no configuration file is found, the defaults are used. The
    /// returned [`ConfigSource`] names the file that was read.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, if an environment override is malformed, or if the
    /// result fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gridline_config::Config;
    ///
    /// # async fn example() -> gridline_config::Result<()> {
    /// let (config, source) = Config::load().await?;
    /// println!("Loaded {source}; refresh takes {:?}", config.refresh.delay());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<(Self, ConfigSource)> {
        let path = find_config_file();
        let config = Self::load_with(path.clone(), |name| std::env::var(name).ok())?;
        Ok((config, ConfigSource::from(path)))
    }

    /// Loads configuration from an optional file and an environment
    /// lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with<F>(path: Option<PathBuf>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                read_config_file(&path)?
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Self::default()
            }
        };
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file, without environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails
    /// validation.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies `GRIDLINE_*` overrides read through `env`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if a value cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline_config::Config;
    /// use gridline_layout::Platform;
    ///
    /// let mut config = Config::default();
    /// config
    ///     .apply_env(|name| match name {
    ///         "GRIDLINE_PLATFORM" => Some("android".to_string()),
    ///         "GRIDLINE_REFRESH_DELAY_MS" => Some("250".to_string()),
    ///         _ => None,
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(config.display.platform, Platform::Android);
    /// assert_eq!(config.refresh.delay_ms, 250);
    /// ```
    pub fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &'static str| {
            env(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(|value| (name, value))
        };

        if let Some((name, value)) = lookup(ENV_PLATFORM) {
            self.display.platform = parse_env::<Platform>(name, value)?;
        }
        if let Some((name, value)) = lookup(ENV_FONT_SCALE) {
            self.display.font_scale = parse_env(name, value)?;
        }
        if let Some((name, value)) = lookup(ENV_PIXEL_RATIO) {
            self.display.pixel_ratio = parse_env(name, value)?;
        }
        if let Some((name, value)) = lookup(ENV_REFRESH_DELAY_MS) {
            self.refresh.delay_ms = parse_env(name, value)?;
        }
        if let Some((_, value)) = lookup(ENV_LOG) {
            self.log_filter = Some(value);
        }
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline_config::{Config, RefreshConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.refresh = RefreshConfig::with_delay_ms(120_000);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.display.validate()?;
        self.refresh.validate()?;
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { name, value })
}
