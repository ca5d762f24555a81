//! Recording display view for integration tests.

use std::sync::Mutex;

use calc_core::DisplayViewState;

use crate::application::display::CalculatorDisplayView;

/// Stores every state pushed into it, oldest first.
#[derive(Debug, Default)]
pub struct RecordingDisplayView {
    states: Mutex<Vec<DisplayViewState>>,
}

impl RecordingDisplayView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> Vec<DisplayViewState> {
        self.states.lock().expect("lock poisoned").clone()
    }
}

impl CalculatorDisplayView for RecordingDisplayView {
    fn set_state(&self, state: &DisplayViewState) {
        self.states.lock().expect("lock poisoned").push(state.clone());
    }
}
