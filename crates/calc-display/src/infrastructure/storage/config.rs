//! TOML-based configuration for the display binary.
//!
//! Reads and writes `AppConfig` to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\CalcDisplay\config.toml`
//! - Linux:    `~/.config/calcdisplay/config.toml`
//! - macOS:    `~/Library/Application Support/CalcDisplay/config.toml`
//!
//! Example:
//!
//! ```toml
//! [app]
//! log_level = "debug"
//!
//! [haptics]
//! enabled = true
//! duration_ms = 20
//!
//! [messages]
//! syntax_error = "Syntax error"
//! ```
//!
//! # Serde default values
//!
//! Every field has a `#[serde(default = "...")]` helper and every section is
//! `#[serde(default)]`, so a missing file, an empty file, or a file written by
//! an older version all load without error.

use std::path::{Path, PathBuf};

use calc_core::MessageKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A stored file parsed as TOML but its fields do not fit together.
    #[error("invalid stored data at {path}: {reason}")]
    Invalid { path: PathBuf, reason: &'static str },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub haptics: HapticsConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSection {
    /// Schema version string – bump when breaking changes are introduced.
    #[serde(default = "default_version")]
    pub version: String,
    /// `tracing` log level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Restore the last display state on start and save it on exit.
    #[serde(default = "default_true")]
    pub persist_display_state: bool,
}

/// Haptic feedback for drag gestures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HapticsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Pulse length in milliseconds.  `0` disables haptics.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

/// User-facing message overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesConfig {
    /// Shown for failed and cancelled calculations.
    #[serde(default = "default_syntax_error")]
    pub syntax_error: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_version() -> String {
    "1.0".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}
fn default_duration_ms() -> u64 {
    20
}
fn default_syntax_error() -> String {
    MessageKey::SyntaxError.default_text().to_string()
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: default_version(),
            log_level: default_log_level(),
            persist_display_state: default_true(),
        }
    }
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_duration_ms(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            syntax_error: default_syntax_error(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from `path`, returning `AppConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("CalcDisplay"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("calcdisplay"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("CalcDisplay")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_app_config_defaults() {
        // Arrange / Act
        let cfg = AppConfig::default();

        // Assert
        assert_eq!(cfg.app.log_level, "info");
        assert!(cfg.app.persist_display_state);
        assert!(cfg.haptics.enabled);
        assert_eq!(cfg.haptics.duration_ms, 20);
        assert_eq!(cfg.messages.syntax_error, "Error");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").expect("deserialize empty");

        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_partial_section_overrides_only_given_fields() {
        // Arrange
        let toml_str = r#"
[haptics]
duration_ms = 45

[messages]
syntax_error = "Erreur de syntaxe"
"#;

        // Act
        let cfg: AppConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.haptics.duration_ms, 45);
        assert!(cfg.haptics.enabled, "unspecified fields keep their defaults");
        assert_eq!(cfg.messages.syntax_error, "Erreur de syntaxe");
        assert_eq!(cfg.app, AppSection::default());
    }

    #[test]
    fn test_invalid_toml_returns_parse_error() {
        let result: Result<AppConfig, toml::de::Error> = toml::from_str("[[[ not valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_missing_file_returns_default() {
        let path = std::env::temp_dir()
            .join(format!("calc_test_{}", Uuid::new_v4()))
            .join("config.toml");

        let cfg = load_config_from(&path).expect("missing file is not an error");

        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip_via_temp_dir() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("calc_test_{}", Uuid::new_v4()));
        let path = dir.join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.app.log_level = "debug".to_string();
        cfg.haptics.enabled = false;

        // Act
        save_config_to(&cfg, &path).expect("save");
        let loaded = load_config_from(&path).expect("load");

        // Assert
        assert_eq!(loaded, cfg);

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_config_from_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("calc_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[haptics\nenabled = ").unwrap();

        let result = load_config_from(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(
                path.ends_with("config.toml"),
                "config file must be named config.toml, got {path:?}"
            );
        }
        // NoPlatformConfigDir is acceptable in a stripped CI environment.
    }
}
