//! Display views.
//!
//! [`TracingDisplayView`] is the headless stand-in for the display widget: it
//! renders each state as a log line.

use std::sync::Mutex;

use calc_core::DisplayViewState;
use tracing::info;

use crate::application::display::CalculatorDisplayView;

pub mod mock;

/// Logs every state it is given and remembers the last rendered text.
#[derive(Debug, Default)]
pub struct TracingDisplayView {
    rendered: Mutex<String>,
}

impl TracingDisplayView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the last state pushed into this view.
    pub fn rendered(&self) -> String {
        self.rendered
            .lock()
            .map(|text| text.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl CalculatorDisplayView for TracingDisplayView {
    fn set_state(&self, state: &DisplayViewState) {
        match state {
            DisplayViewState::Default => info!("display: <empty>"),
            DisplayViewState::Valid { text, operation, .. } => {
                info!(?operation, "display: {text}")
            }
            DisplayViewState::Error { message, operation } => {
                info!(?operation, "display error: {message}")
            }
        }

        let mut rendered = self
            .rendered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *rendered = state.text().to_string();
    }
}
