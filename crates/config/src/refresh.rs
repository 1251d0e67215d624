//! Pull-to-refresh timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default delay before a refresh completes, in milliseconds.
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 2000;

/// Longest accepted refresh delay, in milliseconds.
pub const MAX_REFRESH_DELAY_MS: u64 = 60_000;

/// Refresh settings.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use gridline_config::RefreshConfig;
///
/// let config = RefreshConfig::default();
/// assert_eq!(config.delay(), Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Simulated fetch latency in milliseconds.
    pub delay_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_REFRESH_DELAY_MS,
        }
    }
}

impl RefreshConfig {
    /// Creates a config with the given delay.
    #[must_use]
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    /// Returns the delay as a [`Duration`].
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Validates the refresh configuration.
    ///
    /// A zero delay is allowed and completes on the next tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the delay exceeds [`MAX_REFRESH_DELAY_MS`].
    pub fn validate(&self) -> crate::Result<()> {
        if self.delay_ms > MAX_REFRESH_DELAY_MS {
            return Err(crate::ConfigError::InvalidRefreshDelay {
                reason: format!(
                    "delay {}ms exceeds maximum of {}ms",
                    self.delay_ms, MAX_REFRESH_DELAY_MS
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay() {
        assert_eq!(RefreshConfig::default().delay_ms, DEFAULT_REFRESH_DELAY_MS);
    }

    #[test]
    fn validate_at_boundaries() {
        assert!(RefreshConfig::with_delay_ms(0).validate().is_ok());
        assert!(
            RefreshConfig::with_delay_ms(MAX_REFRESH_DELAY_MS)
                .validate()
                .is_ok()
        );
        assert!(
            RefreshConfig::with_delay_ms(MAX_REFRESH_DELAY_MS + 1)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: RefreshConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RefreshConfig::default());
    }
}
