//! Recording listener for tests.
//!
//! Subscribe a [`RecordingListener`] to a bus and inspect, in order, every
//! event it was handed.

use std::sync::Mutex;

use calc_core::{CalculatorEvent, CalculatorEventData, CalculatorEventType, DisplayChange};

use crate::application::calculator::CalculatorEventListener;

/// A listener that stores every delivered `(data, event)` pair.
#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<(CalculatorEventData, CalculatorEvent)>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// All delivered events, oldest first.
    pub fn events(&self) -> Vec<(CalculatorEventData, CalculatorEvent)> {
        self.events.lock().expect("lock poisoned").clone()
    }

    /// Kinds of all delivered events, oldest first.
    pub fn kinds(&self) -> Vec<CalculatorEventType> {
        self.events
            .lock()
            .expect("lock poisoned")
            .iter()
            .map(|(_, event)| event.kind())
            .collect()
    }

    /// Display changes only, with the event data they were published under.
    pub fn display_changes(&self) -> Vec<(CalculatorEventData, DisplayChange)> {
        self.events
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter_map(|(data, event)| match event {
                CalculatorEvent::DisplayStateChanged(change) => Some((*data, change.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().expect("lock poisoned").clear();
    }
}

impl CalculatorEventListener for RecordingListener {
    fn on_calculator_event(&self, data: &CalculatorEventData, event: &CalculatorEvent) {
        self.events
            .lock()
            .expect("lock poisoned")
            .push((*data, event.clone()));
    }
}
