//! Integration tests for the calculator display pipeline.
//!
//! These tests exercise the display end-to-end:
//! `CalculatorEventBus` + `CalculatorDisplay` + recording infrastructure.

use std::sync::{Arc, Mutex, Weak};

use calc_core::{
    CalculatorEvalError, CalculatorEvent, CalculatorEventData, CalculatorEventType,
    CalculatorOutput, CalculatorParseError, DefaultMessages, DisplayViewState, EventId,
    Operation, SequenceId,
};
use calc_display::application::{
    calculator::{Calculator, CalculatorEventListener, ListenerId},
    display::{CalculatorDisplay, CalculatorDisplayView},
};
use calc_display::infrastructure::{
    event_bus::{mock::RecordingListener, CalculatorEventBus},
    view::mock::RecordingDisplayView,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Harness {
    bus: Arc<CalculatorEventBus>,
    display: Arc<CalculatorDisplay>,
    view: Arc<RecordingDisplayView>,
    recorder: Arc<RecordingListener>,
}

fn harness() -> Harness {
    let bus = Arc::new(CalculatorEventBus::new());
    let display = CalculatorDisplay::new(bus.clone(), Arc::new(DefaultMessages));

    let view = Arc::new(RecordingDisplayView::new());
    let as_view: Arc<dyn CalculatorDisplayView> = view.clone();
    display.attach_view(Some(&as_view));

    let recorder = Arc::new(RecordingListener::new());
    let weak: Weak<dyn CalculatorEventListener> = Arc::downgrade(&recorder) as _;
    bus.add_calculator_event_listener(weak);

    Harness {
        bus,
        display,
        view,
        recorder,
    }
}

fn result(value: f64, text: &str) -> CalculatorEvent {
    CalculatorEvent::CalculationResult {
        operation: Operation::Numeric,
        output: CalculatorOutput::new(value, text),
    }
}

/// Forwards to a bus, but fires an engine event right after each
/// subscription, as a concurrent engine thread could.
struct BusyEngine {
    bus: Arc<CalculatorEventBus>,
}

impl Calculator for BusyEngine {
    fn add_calculator_event_listener(&self, listener: Weak<dyn CalculatorEventListener>) -> ListenerId {
        let id = self.bus.add_calculator_event_listener(listener);
        self.bus.fire_calculator_event(CalculatorEvent::CalculationFinished);
        id
    }

    fn remove_calculator_event_listener(&self, id: ListenerId) -> bool {
        self.bus.remove_calculator_event_listener(id)
    }

    fn fire_calculator_event(&self, event: CalculatorEvent) -> CalculatorEventData {
        self.bus.fire_calculator_event(event)
    }

    fn fire_calculator_event_for_sequence(
        &self,
        event: CalculatorEvent,
        sequence_id: SequenceId,
    ) -> CalculatorEventData {
        self.bus.fire_calculator_event_for_sequence(event, sequence_id)
    }

    fn create_first_event_data_id(&self) -> EventId {
        self.bus.create_first_event_data_id()
    }
}

/// Asks the display for its view whenever a display change is published.
#[derive(Default)]
struct ViewReadingListener {
    display: Mutex<Weak<CalculatorDisplay>>,
    saw_view: Mutex<Vec<bool>>,
}

impl CalculatorEventListener for ViewReadingListener {
    fn on_calculator_event(&self, _data: &CalculatorEventData, event: &CalculatorEvent) {
        if !matches!(event, CalculatorEvent::DisplayStateChanged(_)) {
            return;
        }
        if let Some(display) = self.display.lock().unwrap().upgrade() {
            self.saw_view.lock().unwrap().push(display.view().is_some());
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_result_reaches_view_and_listeners() {
    // Arrange
    let h = harness();

    // Act
    h.bus.fire_calculator_event(result(4.0, "4"));

    // Assert
    assert_eq!(
        *h.display.view_state(),
        DisplayViewState::valid(Operation::Numeric, 4.0, "4", 0)
    );
    assert_eq!(h.view.states().last().map(|s| s.text().to_string()), Some("4".to_string()));

    let changes = h.recorder.display_changes();
    assert_eq!(changes.len(), 1, "exactly one display change must be published");
    assert_eq!(changes[0].1.old, DisplayViewState::Default);
    assert_eq!(changes[0].1.new.text(), "4");
}

#[test]
fn test_full_engine_sequence_tags_the_display_change() {
    // Arrange
    let h = harness();
    let sequence = h.bus.next_sequence();

    // Act
    h.bus.fire_calculator_event_for_sequence(
        CalculatorEvent::CalculationStarted {
            operation: Operation::Numeric,
            expression: "1+".to_string(),
        },
        sequence,
    );
    h.bus.fire_calculator_event_for_sequence(
        CalculatorEvent::CalculationFailed {
            operation: Operation::Numeric,
            failure: CalculatorParseError::with_message("Unexpected end").into(),
        },
        sequence,
    );
    h.bus
        .fire_calculator_event_for_sequence(CalculatorEvent::CalculationFinished, sequence);

    // Assert
    assert_eq!(h.display.view_state().text(), "Unexpected end");
    assert!(!h.display.view_state().is_valid());

    let changes = h.recorder.display_changes();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].0.sequence_id, Some(sequence));
    assert!(h.recorder.kinds().contains(&CalculatorEventType::CalculationFinished));
}

#[test]
fn test_evaluation_error_and_cancel_show_generic_message() {
    let h = harness();

    h.bus.fire_calculator_event(CalculatorEvent::CalculationFailed {
        operation: Operation::Simplify,
        failure: CalculatorEvalError {
            reason: "overflow".to_string(),
        }
        .into(),
    });
    assert_eq!(
        *h.display.view_state(),
        DisplayViewState::error(Operation::Simplify, "Error")
    );

    h.bus.fire_calculator_event(result(1.0, "1"));
    h.bus.fire_calculator_event(CalculatorEvent::CalculationCancelled {
        operation: Operation::Numeric,
    });
    assert_eq!(h.display.view_state().text(), "Error");
}

#[test]
fn test_external_clear_is_published_without_sequence() {
    // Arrange
    let h = harness();
    h.bus.fire_calculator_event(result(7.0, "7"));
    h.recorder.clear();

    // Act
    h.display.set_view_state(DisplayViewState::Default);

    // Assert
    let changes = h.recorder.display_changes();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].0.sequence_id, None);
    assert_eq!(changes[0].1.old.text(), "7");
    assert_eq!(changes[0].1.new, DisplayViewState::Default);
    assert_eq!(h.view.states().last(), Some(&DisplayViewState::Default));
}

#[test]
fn test_started_and_finished_do_not_change_display() {
    let h = harness();
    let before = h.display.last_event_data();

    h.bus.fire_calculator_event(CalculatorEvent::CalculationStarted {
        operation: Operation::Numeric,
        expression: "2*3".to_string(),
    });
    h.bus.fire_calculator_event(CalculatorEvent::CalculationFinished);

    assert_eq!(*h.display.view_state(), DisplayViewState::Default);
    assert_eq!(h.display.last_event_data(), before);
    assert!(h.recorder.display_changes().is_empty());
}

#[test]
fn test_dropping_display_unregisters_it() {
    // Arrange
    let h = harness();
    assert_eq!(h.bus.listener_count(), 2);

    // Act
    drop(h.display);

    // Assert
    assert_eq!(h.bus.listener_count(), 1, "only the recorder must remain");
    h.bus.fire_calculator_event(result(1.0, "1"));
    assert!(h.recorder.display_changes().is_empty());
}

#[test]
fn test_dropped_view_is_not_kept_alive() {
    let h = harness();

    drop(h.view);
    h.bus.fire_calculator_event(result(3.0, "3"));

    assert!(h.display.view().is_none());
    assert_eq!(h.display.view_state().text(), "3");
}

#[test]
fn test_concurrent_results_leave_one_consistent_state() {
    // Arrange
    let h = harness();
    let workers: Vec<_> = (0..8)
        .map(|i| {
            let bus = Arc::clone(&h.bus);
            std::thread::spawn(move || {
                for j in 0..25 {
                    let value = f64::from(i * 100 + j);
                    bus.fire_calculator_event(result(value, &value.to_string()));
                }
            })
        })
        .collect();

    // Act
    for worker in workers {
        worker.join().expect("worker must not panic");
    }

    // Assert
    let changes = h.recorder.display_changes();
    assert_eq!(changes.len(), 200);
    let final_state = h.display.view_state();
    assert!(final_state.is_valid());
    assert_eq!(
        final_state.text(),
        final_state.result().map(|r| r.to_string()).unwrap_or_default()
    );
}

#[test]
fn test_event_fired_while_display_subscribes_does_not_unsubscribe_it() {
    // Arrange
    let bus = Arc::new(CalculatorEventBus::new());
    let engine = Arc::new(BusyEngine { bus: Arc::clone(&bus) });

    // Act
    let display = CalculatorDisplay::new(engine, Arc::new(DefaultMessages));
    bus.fire_calculator_event(result(4.0, "4"));

    // Assert
    assert_eq!(bus.listener_count(), 1);
    assert_eq!(display.view_state().text(), "4");
}

#[test]
fn test_listener_may_read_view_during_display_change() {
    // Arrange
    let h = harness();
    let reader = Arc::new(ViewReadingListener::default());
    *reader.display.lock().unwrap() = Arc::downgrade(&h.display);
    let weak: Weak<dyn CalculatorEventListener> = Arc::downgrade(&reader) as _;
    h.bus.add_calculator_event_listener(weak);

    // Act
    h.display.set_view_state(DisplayViewState::Default);
    h.bus.fire_calculator_event(result(5.0, "5"));

    // Assert
    assert_eq!(*reader.saw_view.lock().unwrap(), vec![true, true]);
}
