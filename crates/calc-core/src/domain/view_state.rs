//! Immutable display view state.
//!
//! A [`DisplayViewState`] is a complete description of what the calculator
//! display should show.  States are never mutated: the display replaces the
//! whole snapshot, which makes it safe to hand the same state to the view, to
//! listeners, and to a persisted snapshot at once.

use serde::{Deserialize, Serialize};

/// What the engine was asked to do with the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Evaluate to a number.
    #[default]
    Numeric,
    /// Simplify symbolically.
    Simplify,
    /// Rewrite with elementary functions.
    Elementary,
}

/// Snapshot of the calculator display.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayViewState {
    /// Nothing calculated yet (or the input was cleared).
    #[default]
    Default,
    /// A successful calculation.
    Valid {
        operation: Operation,
        result: f64,
        /// Rendering of `result` as produced by the engine.
        text: String,
        precision: u32,
    },
    /// A failed or cancelled calculation.
    Error {
        operation: Operation,
        /// Short, user-facing, localised message.
        message: String,
    },
}

impl DisplayViewState {
    pub fn valid(operation: Operation, result: f64, text: impl Into<String>, precision: u32) -> Self {
        Self::Valid {
            operation,
            result,
            text: text.into(),
            precision,
        }
    }

    pub fn error(operation: Operation, message: impl Into<String>) -> Self {
        Self::Error {
            operation,
            message: message.into(),
        }
    }

    /// Text the display widget renders for this state.
    pub fn text(&self) -> &str {
        match self {
            Self::Default => "",
            Self::Valid { text, .. } => text,
            Self::Error { message, .. } => message,
        }
    }

    /// `false` only for [`DisplayViewState::Error`].
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Error { .. })
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Default => Operation::default(),
            Self::Valid { operation, .. } | Self::Error { operation, .. } => *operation,
        }
    }

    /// Numeric result, when there is one.
    pub fn result(&self) -> Option<f64> {
        match self {
            Self::Valid { result, .. } => Some(*result),
            _ => None,
        }
    }
}

/// Payload of a display-state-changed event.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayChange {
    pub old: DisplayViewState,
    pub new: DisplayViewState,
}
