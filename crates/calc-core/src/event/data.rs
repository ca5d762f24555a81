//! Event identity and recency ordering.

use std::fmt;

/// Strictly increasing id assigned to every event fired on the calculator bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub u64);

/// Id shared by all events that belong to one calculation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seq{}", self.0)
    }
}

/// Identifies one delivered event: its own id plus the calculation sequence
/// it belongs to, if any.
///
/// Listeners compare these to decide whether an event is newer than the last
/// one they acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalculatorEventData {
    pub event_id: EventId,
    pub sequence_id: Option<SequenceId>,
}

impl CalculatorEventData {
    /// Event data that does not belong to any calculation sequence.
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            sequence_id: None,
        }
    }

    /// Event data tagged with the calculation sequence that produced it.
    pub fn for_sequence(event_id: EventId, sequence_id: SequenceId) -> Self {
        Self {
            event_id,
            sequence_id: Some(sequence_id),
        }
    }

    /// `true` if this event was produced strictly after `other`.
    pub fn is_after(&self, other: &CalculatorEventData) -> bool {
        self.event_id > other.event_id
    }

    /// `true` if both events carry the same sequence id.
    ///
    /// Events without a sequence never belong to the same sequence, not even
    /// as each other.
    pub fn is_same_sequence(&self, other: &CalculatorEventData) -> bool {
        matches!(
            (self.sequence_id, other.sequence_id),
            (Some(a), Some(b)) if a == b
        )
    }

    /// `true` if both events carry a sequence id and this one is newer.
    pub fn is_after_sequence(&self, other: &CalculatorEventData) -> bool {
        matches!(
            (self.sequence_id, other.sequence_id),
            (Some(a), Some(b)) if a > b
        )
    }
}
