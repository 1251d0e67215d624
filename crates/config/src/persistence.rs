//! Configuration file discovery, reading and writing.
//!
//! Files are parsed with `serde_json5`, so plain JSON works too. Saving
//! always writes pretty-printed JSON.
//!
//! # File Locations
//!
//! Candidates are checked in this order, first hit wins:
//!
//! 1. Local: `./gridline.json5`, `./gridline.json`
//! 2. User: `~/.config/gridline/config.json5`, `~/.config/gridline/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Application directory name under the platform config/state dirs.
const APP_DIR: &str = "gridline";

/// Local file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["gridline.json5", "gridline.json"];

/// File names inside the user config directory, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Name of the log file inside [`log_dir`].
pub const LOG_FILE_NAME: &str = "gridline.log";

/// Lists candidate config paths, highest priority first.
///
/// `local_dir` is usually the working directory; `user_dir` the platform
/// config directory (without the `gridline` component).
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use gridline_config::persistence::config_candidates;
///
/// let candidates = config_candidates(Path::new("."), Some(Path::new("/home/me/.config")));
/// assert_eq!(candidates[0], Path::new("./gridline.json5"));
/// assert_eq!(candidates[3], Path::new("/home/me/.config/gridline/config.json"));
/// ```
#[must_use]
pub fn config_candidates(local_dir: &Path, user_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .map(|dir| dir.join(APP_DIR))
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));
    local.chain(user).collect()
}

/// Finds the configuration file in the default locations.
///
/// # Examples
///
/// ```no_run
/// use gridline_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir();
    first_existing(&config_candidates(Path::new("."), user_dir.as_deref()))
}

/// Returns the first candidate that exists on disk.
#[must_use]
pub fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.is_file()).cloned()
}

/// Returns the user configuration directory, typically
/// `~/.config/gridline/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default user configuration file path,
/// `~/.config/gridline/config.json5`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Returns the directory log files are written to.
///
/// Prefers the platform state directory (`~/.local/state/gridline` on
/// Linux) and falls back to the cache directory where there is none.
///
/// # Errors
///
/// Returns an error if neither directory can be determined.
pub fn log_dir() -> Result<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a JSON5 (or JSON) configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Examples
///
/// ```no_run
/// use gridline_config::persistence::read_config_file;
/// use gridline_config::Config;
///
/// # fn main() -> gridline_config::Result<()> {
/// let config: Config = read_config_file("gridline.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "read config file");
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a value as pretty JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written, or the
/// value cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        platform: String,
        delay_ms: u64,
    }

    #[test]
    fn candidates_without_user_dir() {
        let candidates = config_candidates(Path::new("/work"), None);
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/work/gridline.json5"),
                PathBuf::from("/work/gridline.json"),
            ]
        );
    }

    #[test]
    fn local_file_wins_over_user_file() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::create_dir_all(user.path().join(APP_DIR)).unwrap();
        std::fs::write(user.path().join(APP_DIR).join("config.json5"), "{}").unwrap();

        let candidates = config_candidates(local.path(), Some(user.path()));
        assert_eq!(
            first_existing(&candidates),
            Some(user.path().join(APP_DIR).join("config.json5"))
        );

        std::fs::write(local.path().join("gridline.json"), "{}").unwrap();
        assert_eq!(
            first_existing(&candidates),
            Some(local.path().join("gridline.json"))
        );
    }

    #[test]
    fn json5_preferred_over_json() {
        let local = TempDir::new().unwrap();
        std::fs::write(local.path().join("gridline.json"), "{}").unwrap();
        std::fs::write(local.path().join("gridline.json5"), "{}").unwrap();

        let candidates = config_candidates(local.path(), None);
        assert_eq!(
            first_existing(&candidates),
            Some(local.path().join("gridline.json5"))
        );
    }

    #[test]
    fn directory_named_like_config_is_skipped() {
        let local = TempDir::new().unwrap();
        std::fs::create_dir(local.path().join("gridline.json5")).unwrap();
        assert!(first_existing(&config_candidates(local.path(), None)).is_none());
    }

    #[test]
    fn read_json5_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gridline.json5");
        std::fs::write(
            &path,
            r#"
            {
                // Pretend to be an Android phone
                platform: "android",
                delay_ms: 1500,
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(sample.platform, "android");
        assert_eq!(sample.delay_ms, 1500);
    }

    #[test]
    fn read_missing_file_reports_path() {
        let err = read_config_file::<Sample>("/nonexistent/gridline.json").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("/nonexistent/gridline.json"));
    }

    #[test]
    fn read_invalid_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gridline.json");
        std::fs::write(&path, "platform = android").unwrap();

        let err = read_config_file::<Sample>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseJson5(_)));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("gridline").join("config.json");
        let sample = Sample {
            platform: "web".to_string(),
            delay_ms: 10,
        };

        write_config_file(&path, &sample).unwrap();
        let loaded: Sample = read_config_file(&path).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn user_paths_end_with_app_dir() {
        // Skipped where the environment has no home directory.
        if dirs::config_dir().is_some() {
            assert!(user_config_dir().unwrap().ends_with(APP_DIR));
            assert!(
                default_user_config_path()
                    .unwrap()
                    .ends_with("gridline/config.json5")
            );
        }
    }
}
