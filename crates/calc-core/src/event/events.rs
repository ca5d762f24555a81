//! Events exchanged on the calculator bus.
//!
//! # Why one enum? (for beginners)
//!
//! Every event the engine or the display can emit is a variant of
//! [`CalculatorEvent`], and each variant carries exactly the payload that
//! belongs to it.  A listener therefore handles events with a single `match`,
//! and the compiler checks that a `CalculationResult` is never read as a
//! failure.  [`CalculatorEventType`] is the payload-free discriminant, handy
//! for filtering.

use thiserror::Error;

use crate::domain::view_state::{DisplayChange, Operation};

/// Payload-free discriminant of a [`CalculatorEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorEventType {
    CalculationStarted,
    CalculationResult,
    CalculationFailed,
    CalculationCancelled,
    CalculationFinished,
    DisplayStateChanged,
}

/// Successful engine output.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorOutput {
    pub result: f64,
    /// Engine rendering of `result`, already formatted for display.
    pub string_result: String,
}

impl CalculatorOutput {
    pub fn new(result: f64, string_result: impl Into<String>) -> Self {
        Self {
            result,
            string_result: string_result.into(),
        }
    }
}

/// The expression parsed but could not be evaluated (division by zero, domain error...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("evaluation failed: {reason}")]
pub struct CalculatorEvalError {
    pub reason: String,
}

/// The expression could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse failed: {}", .message.as_deref().unwrap_or("<no message>"))]
pub struct CalculatorParseError {
    /// Localised, user-presentable description, if the parser produced one.
    pub message: Option<String>,
    /// Character offset in the expression where parsing stopped.
    pub position: Option<usize>,
}

impl CalculatorParseError {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            position: None,
        }
    }

    /// The localised message, if present and not blank.
    pub fn localized_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// Why a calculation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorFailure {
    #[error(transparent)]
    Evaluation(#[from] CalculatorEvalError),
    #[error(transparent)]
    Parse(#[from] CalculatorParseError),
}

/// An event on the calculator bus.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorEvent {
    CalculationStarted {
        operation: Operation,
        expression: String,
    },
    CalculationResult {
        operation: Operation,
        output: CalculatorOutput,
    },
    CalculationFailed {
        operation: Operation,
        failure: CalculatorFailure,
    },
    CalculationCancelled {
        operation: Operation,
    },
    CalculationFinished,
    DisplayStateChanged(DisplayChange),
}

impl CalculatorEvent {
    pub fn kind(&self) -> CalculatorEventType {
        match self {
            Self::CalculationStarted { .. } => CalculatorEventType::CalculationStarted,
            Self::CalculationResult { .. } => CalculatorEventType::CalculationResult,
            Self::CalculationFailed { .. } => CalculatorEventType::CalculationFailed,
            Self::CalculationCancelled { .. } => CalculatorEventType::CalculationCancelled,
            Self::CalculationFinished => CalculatorEventType::CalculationFinished,
            Self::DisplayStateChanged(_) => CalculatorEventType::DisplayStateChanged,
        }
    }

    /// `true` if this event's kind is one of `types`.
    pub fn is_of_type(&self, types: &[CalculatorEventType]) -> bool {
        types.contains(&self.kind())
    }
}
