//! Persisted display state.
//!
//! The display state survives restarts: the binary writes the current
//! [`DisplayViewState`] to `display_state.toml` next to the config file on
//! exit and restores it on the next start.  Restoring goes through
//! `CalculatorDisplay::set_view_state`, so listeners see it like any other
//! externally triggered change.

use std::path::Path;

use calc_core::{DisplayViewState, Operation};
use serde::{Deserialize, Serialize};

use super::config::ConfigError;

/// File name of the snapshot inside the config directory.
pub const SNAPSHOT_FILE: &str = "display_state.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SnapshotKind {
    Default,
    Valid,
    Error,
}

/// Flat on-disk form of a [`DisplayViewState`].
#[derive(Debug, Serialize, Deserialize)]
struct DisplaySnapshot {
    kind: SnapshotKind,
    #[serde(default)]
    operation: Operation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<f64>,
    /// Result text for valid states, message for error states.
    #[serde(default)]
    text: String,
    #[serde(default)]
    precision: u32,
}

impl From<&DisplayViewState> for DisplaySnapshot {
    fn from(state: &DisplayViewState) -> Self {
        let kind = match state {
            DisplayViewState::Default => SnapshotKind::Default,
            DisplayViewState::Valid { .. } => SnapshotKind::Valid,
            DisplayViewState::Error { .. } => SnapshotKind::Error,
        };
        let precision = match state {
            DisplayViewState::Valid { precision, .. } => *precision,
            _ => 0,
        };
        Self {
            kind,
            operation: state.operation(),
            result: state.result(),
            text: state.text().to_string(),
            precision,
        }
    }
}

impl TryFrom<DisplaySnapshot> for DisplayViewState {
    type Error = &'static str;

    fn try_from(snapshot: DisplaySnapshot) -> Result<Self, <DisplayViewState as TryFrom<DisplaySnapshot>>::Error> {
        match snapshot.kind {
            SnapshotKind::Default => Ok(DisplayViewState::Default),
            SnapshotKind::Valid => {
                let result = snapshot.result.ok_or("valid state without a result")?;
                Ok(DisplayViewState::valid(
                    snapshot.operation,
                    result,
                    snapshot.text,
                    snapshot.precision,
                ))
            }
            SnapshotKind::Error => Ok(DisplayViewState::error(snapshot.operation, snapshot.text)),
        }
    }
}

/// Loads a saved state, or `None` when no snapshot exists yet.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for unreadable files, [`ConfigError::Parse`]
/// for corrupt ones and [`ConfigError::Invalid`] for records that do not
/// describe a state (a valid state with no result).
pub fn load_snapshot(path: &Path) -> Result<Option<DisplayViewState>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let snapshot: DisplaySnapshot = toml::from_str(&content)?;
            let state = DisplayViewState::try_from(snapshot).map_err(|reason| ConfigError::Invalid {
                path: path.to_path_buf(),
                reason,
            })?;
            Ok(Some(state))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Writes `state` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] or [`ConfigError::Serialize`].
pub fn save_snapshot(path: &Path, state: &DisplayViewState) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(&DisplaySnapshot::from(state))?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
