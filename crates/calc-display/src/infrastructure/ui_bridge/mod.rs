//! Command bridge: exposes the display and the drag processor to a front end.
//!
//! The headless binary reads one command per line and hands it to
//! [`AppState::execute`].  A graphical front end would call the same method.
//!
//! # Command language
//!
//! ```text
//! result <value> <text>               engine finished with a value
//! parse-error [message...]            engine could not parse the input
//! eval-error [reason...]              engine could not evaluate the input
//! cancel                              calculation was cancelled
//! clear                               user cleared the display
//! type <text>                         insert text at the editor cursor
//! drag <up|down|left|right> <glyph>   drag a directional button
//! show                                report the current state
//! ```
//!
//! Calculation commands are fired the way the engine fires them: a
//! `CalculationStarted`, the outcome, and a `CalculationFinished`, all tagged
//! with one fresh sequence id.

use std::str::FromStr;
use std::sync::Arc;

use calc_core::{
    CalculatorEvalError, CalculatorEvent, CalculatorFailure, CalculatorOutput,
    CalculatorParseError, DirectionalButton, DisplayViewState, DragButton, DragDirection,
    MotionSample, Operation, Point, UnknownDirection,
};
use thiserror::Error;

use crate::application::{
    calculator::Calculator,
    cursor_drag::{CursorDragProcessor, DragProcessor},
    display::{CalculatorDisplay, CalculatorDisplayView},
};
use crate::infrastructure::{
    editor::TextEditor, event_bus::CalculatorEventBus, haptics::ConfiguredVibrator,
    messages::ConfiguredMessageBundle, storage::config::AppConfig, view::TracingDisplayView,
};

/// Error type for command parsing.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
    #[error(transparent)]
    InvalidDirection(#[from] UnknownDirection),
}

/// One parsed front-end command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Result { value: f64, text: String },
    ParseError { message: Option<String> },
    EvalError { reason: String },
    Cancel,
    Clear,
    Type(String),
    Drag { direction: DragDirection, glyph: String },
    Show,
}

impl Command {
    /// `true` for commands that play the engine's role.
    ///
    /// The binary runs these on a blocking worker thread, like a real engine
    /// delivering results off the UI thread.
    pub fn is_calculation(&self) -> bool {
        matches!(
            self,
            Self::Result { .. } | Self::ParseError { .. } | Self::EvalError { .. } | Self::Cancel
        )
    }
}

fn rest(words: &[&str]) -> Option<String> {
    (!words.is_empty()).then(|| words.join(" "))
}

impl FromStr for Command {
    type Err = ScriptError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Err(ScriptError::Empty);
        };

        match name {
            "result" => {
                let raw = args.first().ok_or(ScriptError::MissingArgument {
                    command: "result",
                    argument: "value",
                })?;
                let value: f64 = raw
                    .parse()
                    .map_err(|_| ScriptError::InvalidNumber(raw.to_string()))?;
                let text = rest(&args[1..]).unwrap_or_else(|| raw.to_string());
                Ok(Self::Result { value, text })
            }
            "parse-error" => Ok(Self::ParseError { message: rest(args) }),
            "eval-error" => Ok(Self::EvalError {
                reason: rest(args).unwrap_or_default(),
            }),
            "cancel" => Ok(Self::Cancel),
            "clear" => Ok(Self::Clear),
            "type" => rest(args).map(Self::Type).ok_or(ScriptError::MissingArgument {
                command: "type",
                argument: "text",
            }),
            "drag" => {
                let direction = args.first().ok_or(ScriptError::MissingArgument {
                    command: "drag",
                    argument: "direction",
                })?;
                let glyph = rest(&args[1..]).ok_or(ScriptError::MissingArgument {
                    command: "drag",
                    argument: "glyph",
                })?;
                Ok(Self::Drag {
                    direction: direction.parse()?,
                    glyph,
                })
            }
            "show" => Ok(Self::Show),
            other => Err(ScriptError::UnknownCommand(other.to_string())),
        }
    }
}

/// What a front end shows after a command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub display: String,
    pub display_valid: bool,
    pub editor: String,
    pub cursor: usize,
    /// Whether a drag command was handled; `None` for other commands.
    pub drag_handled: Option<bool>,
}

// ── Shared application state ──────────────────────────────────────────────────

/// Every service the front end talks to, wired together.
pub struct AppState {
    pub bus: Arc<CalculatorEventBus>,
    pub display: Arc<CalculatorDisplay>,
    /// The display only holds its view weakly; this keeps it alive.
    pub view: Arc<TracingDisplayView>,
    pub editor: Arc<TextEditor>,
    pub vibrator: Arc<ConfiguredVibrator>,
    pub drag_processor: CursorDragProcessor,
    pub config: AppConfig,
}

impl AppState {
    /// Wires the bus, display, view, editor, vibrator and drag processor from `config`.
    pub fn new(config: AppConfig) -> Arc<Self> {
        let bus = Arc::new(CalculatorEventBus::new());
        let messages = Arc::new(ConfiguredMessageBundle::new(&config.messages));
        let display = CalculatorDisplay::new(Arc::clone(&bus) as Arc<dyn Calculator>, messages);

        let view = Arc::new(TracingDisplayView::new());
        let as_view: Arc<dyn CalculatorDisplayView> = view.clone();
        display.attach_view(Some(&as_view));

        let editor = Arc::new(TextEditor::new());
        let vibrator = Arc::new(ConfiguredVibrator::new(&config.haptics));
        let drag_processor = CursorDragProcessor::new(editor.clone(), vibrator.clone());

        Arc::new(Self {
            bus,
            display,
            view,
            editor,
            vibrator,
            drag_processor,
            config,
        })
    }

    /// Runs one command and reports the resulting state.
    pub fn execute(&self, command: Command) -> CommandOutcome {
        let mut drag_handled = None;

        match command {
            Command::Result { value, text } => self.calculate(CalculatorEvent::CalculationResult {
                operation: Operation::Numeric,
                output: CalculatorOutput::new(value, text),
            }),
            Command::ParseError { message } => self.calculate(CalculatorEvent::CalculationFailed {
                operation: Operation::Numeric,
                failure: CalculatorFailure::Parse(CalculatorParseError {
                    message,
                    position: None,
                }),
            }),
            Command::EvalError { reason } => self.calculate(CalculatorEvent::CalculationFailed {
                operation: Operation::Numeric,
                failure: CalculatorEvalError { reason }.into(),
            }),
            Command::Cancel => self.calculate(CalculatorEvent::CalculationCancelled {
                operation: Operation::Numeric,
            }),
            Command::Clear => self.display.set_view_state(DisplayViewState::Default),
            Command::Type(text) => self.editor.insert(&text),
            Command::Drag { direction, glyph } => {
                let button = DragButton::Directional(DirectionalButton::new("").with_label(direction, glyph));
                drag_handled = Some(self.drag_processor.process_drag_event(
                    direction,
                    &button,
                    Point::default(),
                    &MotionSample::default(),
                ));
            }
            Command::Show => {}
        }

        let state = self.display.view_state();
        CommandOutcome {
            display: state.text().to_string(),
            display_valid: state.is_valid(),
            editor: self.editor.text(),
            cursor: self.editor.cursor(),
            drag_handled,
        }
    }

    fn calculate(&self, outcome: CalculatorEvent) {
        let sequence = self.bus.next_sequence();
        self.bus.fire_calculator_event_for_sequence(
            CalculatorEvent::CalculationStarted {
                operation: Operation::Numeric,
                expression: self.editor.text(),
            },
            sequence,
        );
        self.bus.fire_calculator_event_for_sequence(outcome, sequence);
        self.bus
            .fire_calculator_event_for_sequence(CalculatorEvent::CalculationFinished, sequence);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::{CURSOR_TO_END, CURSOR_TO_START};

    fn parse(line: &str) -> Result<Command, ScriptError> {
        line.parse()
    }

    // ── Parsing ───────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_result_with_and_without_text() {
        assert_eq!(
            parse("result 4 4.000"),
            Ok(Command::Result { value: 4.0, text: "4.000".to_string() })
        );
        assert_eq!(
            parse("result 0.5"),
            Ok(Command::Result { value: 0.5, text: "0.5".to_string() })
        );
    }

    #[test]
    fn test_parse_errors_keep_message_words() {
        assert_eq!(
            parse("parse-error Unexpected token"),
            Ok(Command::ParseError { message: Some("Unexpected token".to_string()) })
        );
        assert_eq!(parse("parse-error"), Ok(Command::ParseError { message: None }));
        assert_eq!(
            parse("eval-error division by zero"),
            Ok(Command::EvalError { reason: "division by zero".to_string() })
        );
    }

    #[test]
    fn test_parse_drag() {
        assert_eq!(
            parse("drag LEFT ◁◁"),
            Ok(Command::Drag {
                direction: DragDirection::Left,
                glyph: CURSOR_TO_START.to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse("   "), Err(ScriptError::Empty));
        assert_eq!(parse("explode"), Err(ScriptError::UnknownCommand("explode".to_string())));
        assert_eq!(parse("result four"), Err(ScriptError::InvalidNumber("four".to_string())));
        assert!(matches!(parse("drag sideways ▷▷"), Err(ScriptError::InvalidDirection(_))));
        assert!(matches!(
            parse("drag up"),
            Err(ScriptError::MissingArgument { command: "drag", argument: "glyph" })
        ));
        assert!(matches!(parse("type"), Err(ScriptError::MissingArgument { .. })));
    }

    #[test]
    fn test_calculation_commands_are_flagged() {
        assert!(Command::Cancel.is_calculation());
        assert!(Command::ParseError { message: None }.is_calculation());
        assert!(!Command::Clear.is_calculation());
        assert!(!Command::Show.is_calculation());
    }

    // ── Execution ─────────────────────────────────────────────────────────────

    #[test]
    fn test_result_then_clear() {
        // Arrange
        let state = AppState::new(AppConfig::default());

        // Act
        let shown = state.execute(Command::Result { value: 4.0, text: "4".to_string() });
        let cleared = state.execute(Command::Clear);

        // Assert
        assert_eq!(shown.display, "4");
        assert!(shown.display_valid);
        assert_eq!(state.view.rendered(), "");
        assert_eq!(cleared.display, "");
    }

    #[test]
    fn test_failures_use_configured_message() {
        let mut config = AppConfig::default();
        config.messages.syntax_error = "Syntax error".to_string();
        let state = AppState::new(config);

        let eval = state.execute(Command::EvalError { reason: "overflow".to_string() });
        assert_eq!(eval.display, "Syntax error");
        assert!(!eval.display_valid);

        let parse = state.execute(Command::ParseError { message: Some("Unexpected token".to_string()) });
        assert_eq!(parse.display, "Unexpected token");

        let cancelled = state.execute(Command::Cancel);
        assert_eq!(cancelled.display, "Syntax error");
    }

    #[test]
    fn test_drag_moves_editor_cursor_and_vibrates() {
        // Arrange
        let state = AppState::new(AppConfig::default());
        state.execute(Command::Type("2+2".to_string()));

        // Act
        let to_start = state.execute(Command::Drag {
            direction: DragDirection::Left,
            glyph: CURSOR_TO_START.to_string(),
        });
        let to_end = state.execute(Command::Drag {
            direction: DragDirection::Right,
            glyph: CURSOR_TO_END.to_string(),
        });
        let other = state.execute(Command::Drag {
            direction: DragDirection::Up,
            glyph: "π".to_string(),
        });

        // Assert
        assert_eq!((to_start.drag_handled, to_start.cursor), (Some(true), 0));
        assert_eq!((to_end.drag_handled, to_end.cursor), (Some(true), 3));
        assert_eq!(other.drag_handled, Some(false));
        assert_eq!(state.vibrator.pulses(), 2);
    }

    #[test]
    fn test_calculation_advances_display_marker() {
        let state = AppState::new(AppConfig::default());
        let before = state.display.last_event_data();

        state.execute(Command::Result { value: 1.0, text: "1".to_string() });

        assert!(state.display.last_event_data().is_after(&before));
        assert!(state.display.last_event_data().sequence_id.is_some());
    }
}
