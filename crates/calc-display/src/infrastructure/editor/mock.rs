//! Recording editor for integration tests.
//!
//! Unit tests in the application layer use `mockall` expectations; tests that
//! drive the whole pipeline only need to count what happened, which is what
//! [`RecordingEditor`] does.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::application::cursor_drag::Editor;

#[derive(Debug, Default)]
pub struct RecordingEditor {
    start_calls: AtomicU32,
    end_calls: AtomicU32,
}

impl RecordingEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_calls(&self) -> u32 {
        self.start_calls.load(Ordering::SeqCst)
    }

    pub fn end_calls(&self) -> u32 {
        self.end_calls.load(Ordering::SeqCst)
    }
}

impl Editor for RecordingEditor {
    fn set_cursor_on_start(&self) {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn set_cursor_on_end(&self) {
        self.end_calls.fetch_add(1, Ordering::SeqCst);
    }
}
