//! In-process calculator event bus.
//!
//! [`CalculatorEventBus`] implements the engine-facing [`Calculator`] trait:
//! it hands out event ids, keeps a registry of listeners, and dispatches every
//! fired event to all of them synchronously on the firing thread.
//!
//! # Listener lifetime
//!
//! Listeners are stored as `Weak` references.  The display subscribes itself
//! and also holds an `Arc` to the bus, so strong references in both directions
//! would leak both.  A listener that can no longer be upgraded is pruned on
//! the next dispatch, so a listener must be alive when it subscribes.
//!
//! # Re-entrancy
//!
//! The registry lock is released before listeners run, so a listener may fire
//! further events (the display does exactly that when it publishes a state
//! change) or subscribe new listeners.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use calc_core::{CalculatorEvent, CalculatorEventData, EventId, EventIdGenerator, SequenceId};
use tracing::debug;
use uuid::Uuid;

use crate::application::calculator::{Calculator, CalculatorEventListener, ListenerId};

pub mod mock;

/// Synchronous fan-out bus for calculator events.
#[derive(Default)]
pub struct CalculatorEventBus {
    listeners: Mutex<Vec<(ListenerId, Weak<dyn CalculatorEventListener>)>>,
    ids: EventIdGenerator,
}

impl CalculatorEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a sequence id for a new calculation request.
    pub fn next_sequence(&self) -> SequenceId {
        self.ids.next_sequence_id()
    }

    /// Number of registered listeners that are still alive.
    pub fn listener_count(&self) -> usize {
        self.registry()
            .iter()
            .filter(|(_, listener)| listener.strong_count() > 0)
            .count()
    }

    fn registry(&self) -> MutexGuard<'_, Vec<(ListenerId, Weak<dyn CalculatorEventListener>)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, data: CalculatorEventData, event: &CalculatorEvent) {
        let live: Vec<Arc<dyn CalculatorEventListener>> = {
            let mut registry = self.registry();
            registry.retain(|(_, listener)| listener.strong_count() > 0);
            registry.iter().filter_map(|(_, listener)| listener.upgrade()).collect()
        };

        debug!(
            event_id = %data.event_id,
            sequence_id = ?data.sequence_id,
            kind = ?event.kind(),
            listeners = live.len(),
            "dispatching calculator event"
        );

        for listener in live {
            listener.on_calculator_event(&data, event);
        }
    }
}

impl Calculator for CalculatorEventBus {
    fn add_calculator_event_listener(&self, listener: Weak<dyn CalculatorEventListener>) -> ListenerId {
        let id = Uuid::new_v4();
        self.registry().push((id, listener));
        id
    }

    fn remove_calculator_event_listener(&self, id: ListenerId) -> bool {
        let mut registry = self.registry();
        let before = registry.len();
        registry.retain(|(listener_id, _)| *listener_id != id);
        registry.len() != before
    }

    fn fire_calculator_event(&self, event: CalculatorEvent) -> CalculatorEventData {
        let data = CalculatorEventData::new(self.ids.next_event_id());
        self.dispatch(data, &event);
        data
    }

    fn fire_calculator_event_for_sequence(
        &self,
        event: CalculatorEvent,
        sequence_id: SequenceId,
    ) -> CalculatorEventData {
        let data = CalculatorEventData::for_sequence(self.ids.next_event_id(), sequence_id);
        self.dispatch(data, &event);
        data
    }

    fn create_first_event_data_id(&self) -> EventId {
        self.ids.first_event_id()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
