//! CursorDragProcessor: turns cursor-jump glyph drags into editor commands.
//!
//! Buttons on the calculator keypad carry extra glyphs reachable by dragging
//! towards them.  Two of those glyphs move the expression cursor:
//! [`CURSOR_TO_START`] and [`CURSOR_TO_END`].  This processor recognises them,
//! gives haptic feedback, and moves the cursor.  Every other gesture is left
//! for the next processor.
//!
//! The editor and the vibrator are injected, so the processor is testable
//! without a device.

use std::sync::Arc;

use calc_core::{DragButton, DragDirection, MotionSample, Point, CURSOR_TO_END, CURSOR_TO_START};
use tracing::trace;

/// Expression editor commands the processor needs.
#[cfg_attr(test, mockall::automock)]
pub trait Editor: Send + Sync {
    fn set_cursor_on_start(&self);
    fn set_cursor_on_end(&self);
}

/// Haptic feedback.
#[cfg_attr(test, mockall::automock)]
pub trait Vibrator: Send + Sync {
    /// Fire-and-forget pulse.
    fn vibrate(&self);
}

/// Interprets a recognised drag gesture.
pub trait DragProcessor: Send + Sync {
    /// Returns `true` if the gesture was handled and must not be passed on.
    fn process_drag_event(
        &self,
        direction: DragDirection,
        button: &DragButton,
        start_point: Point,
        motion: &MotionSample,
    ) -> bool;
}

/// Moves the editor cursor to either end of the expression.
pub struct CursorDragProcessor {
    editor: Arc<dyn Editor>,
    vibrator: Arc<dyn Vibrator>,
}

impl CursorDragProcessor {
    pub fn new(editor: Arc<dyn Editor>, vibrator: Arc<dyn Vibrator>) -> Self {
        Self { editor, vibrator }
    }
}

impl DragProcessor for CursorDragProcessor {
    fn process_drag_event(
        &self,
        direction: DragDirection,
        button: &DragButton,
        _start_point: Point,
        _motion: &MotionSample,
    ) -> bool {
        let Some(label) = button.as_directional().and_then(|b| b.text_for(direction)) else {
            return false;
        };

        match label {
            CURSOR_TO_START => {
                self.vibrator.vibrate();
                self.editor.set_cursor_on_start();
            }
            CURSOR_TO_END => {
                self.vibrator.vibrate();
                self.editor.set_cursor_on_end();
            }
            _ => return false,
        }

        trace!(?direction, label, "cursor drag handled");
        true
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
