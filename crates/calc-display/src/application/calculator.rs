//! The calculator engine's event interface, as seen by the display layer.
//!
//! The engine itself (parsing, evaluation) lives elsewhere.  What the display
//! needs is a way to subscribe to the engine's events and a way to publish its
//! own state changes back onto the same bus.  [`Calculator`] captures exactly
//! that; `infrastructure::event_bus::CalculatorEventBus` is the in-process
//! implementation.

use std::sync::Weak;

use calc_core::{CalculatorEvent, CalculatorEventData, EventId, SequenceId};
use uuid::Uuid;

/// Handle returned by [`Calculator::add_calculator_event_listener`].
pub type ListenerId = Uuid;

/// Receives every event fired on the calculator bus.
///
/// Called synchronously on the thread that fired the event, which may be a
/// background computation thread.
pub trait CalculatorEventListener: Send + Sync {
    fn on_calculator_event(&self, data: &CalculatorEventData, event: &CalculatorEvent);
}

/// Subscription and publication side of the calculator engine.
pub trait Calculator: Send + Sync {
    /// Subscribes `listener` to all future events.
    ///
    /// The bus holds the listener weakly: it stops receiving events once the
    /// last strong reference elsewhere is dropped.
    fn add_calculator_event_listener(&self, listener: Weak<dyn CalculatorEventListener>) -> ListenerId;

    /// Unsubscribes a listener.  Returns `false` if `id` was not registered.
    fn remove_calculator_event_listener(&self, id: ListenerId) -> bool;

    /// Fires `event` outside of any calculation sequence.
    fn fire_calculator_event(&self, event: CalculatorEvent) -> CalculatorEventData;

    /// Fires `event` tagged with `sequence_id` so listeners can correlate it
    /// with the calculation request that caused it.
    fn fire_calculator_event_for_sequence(
        &self,
        event: CalculatorEvent,
        sequence_id: SequenceId,
    ) -> CalculatorEventData;

    /// Id that precedes every event this calculator will fire.
    fn create_first_event_data_id(&self) -> EventId;
}
