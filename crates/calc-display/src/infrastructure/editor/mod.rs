//! In-memory expression editor.
//!
//! Holds the expression text and a cursor measured in characters (not bytes),
//! so glyphs like `π` or `√` count as one position.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::application::cursor_drag::Editor;

pub mod mock;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct EditorState {
    text: String,
    /// Character index in `0..=text.chars().count()`.
    cursor: usize,
}

impl EditorState {
    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

/// Thread-safe expression buffer with a cursor.
#[derive(Debug, Default)]
pub struct TextEditor {
    state: Mutex<EditorState>,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor holding `text` with the cursor after the last character.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            state: Mutex::new(EditorState { text, cursor }),
        }
    }

    /// Inserts `fragment` at the cursor and moves the cursor past it.
    pub fn insert(&self, fragment: &str) {
        let mut state = self.state();
        let at = state.byte_offset(state.cursor);
        state.text.insert_str(at, fragment);
        state.cursor += fragment.chars().count();
    }

    /// Replaces the whole text; the cursor moves to the end.
    pub fn set_text(&self, text: impl Into<String>) {
        let mut state = self.state();
        state.text = text.into();
        state.cursor = state.len();
    }

    pub fn text(&self) -> String {
        self.state().text.clone()
    }

    pub fn cursor(&self) -> usize {
        self.state().cursor
    }

    fn state(&self) -> MutexGuard<'_, EditorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Editor for TextEditor {
    fn set_cursor_on_start(&self) {
        self.state().cursor = 0;
        trace!("editor cursor moved to start");
    }

    fn set_cursor_on_end(&self) {
        let mut state = self.state();
        state.cursor = state.len();
        trace!(cursor = state.cursor, "editor cursor moved to end");
    }
}
