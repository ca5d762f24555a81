//! Drag gesture types for calculator buttons.
//!
//! Gesture recognition itself (thresholds, angles, timing) happens in the UI
//! toolkit.  By the time a gesture reaches this crate it has already been
//! classified into a [`DragDirection`]; what remains is deciding what the
//! dragged button means in that direction.

/// Glyph on a directional button that moves the editor cursor to position 0.
pub const CURSOR_TO_START: &str = "◁◁";

/// Glyph on a directional button that moves the editor cursor past the last character.
pub const CURSOR_TO_END: &str = "▷▷";

/// Direction of a recognised drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragDirection {
    Up,
    Down,
    Left,
    Right,
}

impl DragDirection {
    pub const ALL: [DragDirection; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

impl std::str::FromStr for DragDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

/// Returned when a direction name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown drag direction: {0:?}")]
pub struct UnknownDirection(pub String);

/// A point in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Raw motion sample that completed the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionSample {
    pub x: f32,
    pub y: f32,
    /// Milliseconds since gesture tracking started.
    pub time_ms: u64,
}

/// Labels of a button that shows one glyph per drag direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectionalButton {
    /// Text shown in the middle of the button (the tap action).
    pub text: String,
    pub up: Option<String>,
    pub down: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
}

impl DirectionalButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter for the glyph shown towards `direction`.
    pub fn with_label(mut self, direction: DragDirection, label: impl Into<String>) -> Self {
        let label = Some(label.into());
        match direction {
            DragDirection::Up => self.up = label,
            DragDirection::Down => self.down = label,
            DragDirection::Left => self.left = label,
            DragDirection::Right => self.right = label,
        }
        self
    }

    /// Glyph resolved for `direction`, if the button has one.
    pub fn text_for(&self, direction: DragDirection) -> Option<&str> {
        match direction {
            DragDirection::Up => self.up.as_deref(),
            DragDirection::Down => self.down.as_deref(),
            DragDirection::Left => self.left.as_deref(),
            DragDirection::Right => self.right.as_deref(),
        }
    }
}

/// The button a drag gesture started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragButton {
    /// Ordinary button with a single label.
    Plain { text: String },
    /// Button with extra glyphs reachable by dragging.
    Directional(DirectionalButton),
}

impl DragButton {
    /// Directional labels, or `None` for a plain button.
    pub fn as_directional(&self) -> Option<&DirectionalButton> {
        match self {
            Self::Directional(button) => Some(button),
            Self::Plain { .. } => None,
        }
    }
}
