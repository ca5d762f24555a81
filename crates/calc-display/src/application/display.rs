//! CalculatorDisplay: keeps the display's view state in step with the engine.
//!
//! The display subscribes to the calculator bus, turns result, failure and
//! cancellation events into a new [`DisplayViewState`], pushes that state into
//! the attached view (if any), and announces the change back on the bus.
//!
//! # Threads
//!
//! Calculation events arrive on the engine's background thread while views are
//! attached and detached from the UI thread.  One mutex serialises every
//! swap-push-publish cycle over the `(state, view)` pair.  Readers of the
//! current state use a separate snapshot cell and never wait for a publish to
//! finish.
//!
//! The attached view lives in its own cell next to the snapshot.  It is only
//! written while the mutex is held, so a push always reaches the view that was
//! attached when the state was swapped, but [`CalculatorDisplay::view`] reads
//! it without the mutex.
//!
//! Listeners notified of a `DisplayStateChanged` event, and the view itself,
//! run while that mutex is held: they may call [`CalculatorDisplay::view_state`]
//! and [`CalculatorDisplay::view`] but must not call
//! [`CalculatorDisplay::set_view_state`] or [`CalculatorDisplay::attach_view`]
//! synchronously.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock, Weak};

use calc_core::{
    CalculatorEvent, CalculatorEventData, CalculatorFailure, DisplayChange, DisplayViewState,
    MessageBundle, MessageKey, Operation, SequenceId,
};
use tracing::debug;

use super::calculator::{Calculator, CalculatorEventListener, ListenerId};

/// Widget that renders the display.
///
/// The display holds views weakly and never keeps one alive.
pub trait CalculatorDisplayView: Send + Sync {
    /// Called synchronously, with the display lock held, on every state change.
    fn set_state(&self, state: &DisplayViewState);
}

/// The display synchroniser.
pub struct CalculatorDisplay {
    calculator: Arc<dyn Calculator>,
    messages: Arc<dyn MessageBundle>,
    /// Serialises swap-push-publish; holds the authoritative state.
    state: Mutex<Arc<DisplayViewState>>,
    view: RwLock<Option<Weak<dyn CalculatorDisplayView>>>,
    snapshot: RwLock<Arc<DisplayViewState>>,
    last_event_data: Mutex<CalculatorEventData>,
    listener_id: OnceLock<ListenerId>,
}

impl CalculatorDisplay {
    /// Creates a display in the default state and subscribes it to `calculator`.
    ///
    /// The last-seen marker starts at the calculator's first event id, so the
    /// first real event is always considered newer.
    ///
    /// The display subscribes only once it is fully built, so the bus never
    /// sees a listener that cannot be upgraded yet.
    pub fn new(calculator: Arc<dyn Calculator>, messages: Arc<dyn MessageBundle>) -> Arc<Self> {
        let first = CalculatorEventData::new(calculator.create_first_event_data_id());
        let state = Arc::new(DisplayViewState::default());

        let display = Arc::new(Self {
            calculator,
            messages,
            state: Mutex::new(Arc::clone(&state)),
            view: RwLock::new(None),
            snapshot: RwLock::new(state),
            last_event_data: Mutex::new(first),
            listener_id: OnceLock::new(),
        });

        let listener: Weak<dyn CalculatorEventListener> = Arc::downgrade(&display) as _;
        let listener_id = display.calculator.add_calculator_event_listener(listener);
        display.listener_id.get_or_init(|| listener_id);
        display
    }

    /// Attaches `view`, or detaches the current one when `None`.
    ///
    /// A newly attached view immediately receives the current state.
    pub fn attach_view(&self, view: Option<&Arc<dyn CalculatorDisplayView>>) {
        let state = lock(&self.state);
        *self.view.write().unwrap_or_else(PoisonError::into_inner) = view.map(Arc::downgrade);

        if let Some(view) = view {
            view.set_state(&state);
        }
    }

    /// The attached view, if one is attached and still alive.
    ///
    /// Never waits for a publish in progress.
    pub fn view(&self) -> Option<Arc<dyn CalculatorDisplayView>> {
        self.view
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade)
    }

    /// The current state.
    pub fn view_state(&self) -> Arc<DisplayViewState> {
        let snapshot = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&snapshot)
    }

    /// Replaces the state from outside the event stream (e.g. the user cleared
    /// the input) and publishes the change without a sequence id.
    ///
    /// Does not touch [`last_event_data`](Self::last_event_data).
    pub fn set_view_state(&self, new_state: DisplayViewState) {
        self.commit(new_state, None);
    }

    /// The newest event this display has acted on.
    pub fn last_event_data(&self) -> CalculatorEventData {
        *lock(&self.last_event_data)
    }

    fn set_view_state_for_sequence(&self, new_state: DisplayViewState, sequence_id: SequenceId) {
        self.commit(new_state, Some(sequence_id));
    }

    fn commit(&self, new_state: DisplayViewState, sequence_id: Option<SequenceId>) {
        let mut state = lock(&self.state);

        let new_state = Arc::new(new_state);
        let old_state = std::mem::replace(&mut *state, Arc::clone(&new_state));
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&new_state);

        if let Some(view) = self.view() {
            view.set_state(&new_state);
        }

        let change = CalculatorEvent::DisplayStateChanged(DisplayChange {
            old: (*old_state).clone(),
            new: (*new_state).clone(),
        });
        match sequence_id {
            Some(sequence_id) => self.calculator.fire_calculator_event_for_sequence(change, sequence_id),
            None => self.calculator.fire_calculator_event(change),
        };
    }

    /// Moves the marker forward if `data` is newer; a stale event leaves it alone.
    fn advance_last_event_data(&self, data: &CalculatorEventData) {
        let mut last = lock(&self.last_event_data);
        if data.is_after(&last) {
            *last = *data;
        } else {
            debug!(
                "stale calculator event {} (last seen {}), marker kept",
                data.event_id, last.event_id
            );
        }
    }

    fn generic_error(&self, operation: Operation) -> DisplayViewState {
        DisplayViewState::error(operation, self.messages.message(MessageKey::SyntaxError))
    }

    fn failure_state(&self, operation: Operation, failure: &CalculatorFailure) -> DisplayViewState {
        match failure {
            CalculatorFailure::Parse(parse) => match parse.localized_message() {
                Some(message) => DisplayViewState::error(operation, message),
                None => self.generic_error(operation),
            },
            CalculatorFailure::Evaluation(_) => self.generic_error(operation),
        }
    }
}

impl CalculatorEventListener for CalculatorDisplay {
    /// Stale events (not after the marker) are still applied to the view
    /// state; only the marker refuses to move backwards.
    fn on_calculator_event(&self, data: &CalculatorEventData, event: &CalculatorEvent) {
        let (new_state, sequence_id) = match event {
            CalculatorEvent::CalculationResult { operation, output } => (
                DisplayViewState::valid(*operation, output.result, output.string_result.clone(), 0),
                None,
            ),
            CalculatorEvent::CalculationCancelled { operation } => (self.generic_error(*operation), None),
            CalculatorEvent::CalculationFailed { operation, failure } => {
                (self.failure_state(*operation, failure), data.sequence_id)
            }
            _ => return,
        };

        self.advance_last_event_data(data);

        match sequence_id {
            Some(sequence_id) => self.set_view_state_for_sequence(new_state, sequence_id),
            None => self.set_view_state(new_state),
        }
    }
}

impl Drop for CalculatorDisplay {
    fn drop(&mut self) {
        if let Some(&listener_id) = self.listener_id.get() {
            self.calculator.remove_calculator_event_listener(listener_id);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
