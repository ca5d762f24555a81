//! Thread-safe id generator for calculator events and calculation sequences.
//!
//! # Event ids vs sequence ids (for beginners)
//!
//! Every event fired on the calculator bus gets a fresh, strictly increasing
//! *event id*.  Comparing two event ids tells you which event was produced
//! later, which is how the display detects stale deliveries.
//!
//! A *sequence id* groups the events that belong to one calculation request
//! (started → result/failed → finished).  A listener that receives a
//! display-state change tagged with sequence `7` knows it was caused by the
//! calculation that started with sequence `7`.
//!
//! # Thread safety
//!
//! Both counters are `AtomicU64`s.  Events are fired from background
//! computation threads and the UI thread at the same time, and `fetch_add`
//! guarantees no two callers ever receive the same id.

use std::sync::atomic::{AtomicU64, Ordering};

use super::data::{EventId, SequenceId};

/// A thread-safe, monotonically increasing source of [`EventId`]s and
/// [`SequenceId`]s.
///
/// The first event id handed out by [`next_event_id`](Self::next_event_id)
/// is `1`; id `0` is reserved for [`first_event_id`](Self::first_event_id),
/// the marker every listener starts from before any event was seen.
///
/// # Examples
///
/// ```rust
/// use calc_core::event::EventIdGenerator;
///
/// let ids = EventIdGenerator::new();
/// let first = ids.first_event_id();
/// let a = ids.next_event_id();
/// let b = ids.next_event_id();
/// assert!(a > first);
/// assert!(b > a);
/// ```
#[derive(Debug)]
pub struct EventIdGenerator {
    events: AtomicU64,
    sequences: AtomicU64,
}

impl EventIdGenerator {
    /// Creates a generator whose next event id is `1` and next sequence id is `0`.
    pub fn new() -> Self {
        Self {
            events: AtomicU64::new(1),
            sequences: AtomicU64::new(0),
        }
    }

    /// Returns the id that precedes every id this generator will hand out.
    pub fn first_event_id(&self) -> EventId {
        EventId(0)
    }

    /// Returns the next event id and atomically advances the counter.
    ///
    /// `Ordering::Relaxed` is enough: ids order events, they do not publish
    /// memory written by the firing thread.
    pub fn next_event_id(&self) -> EventId {
        EventId(self.events.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns a fresh sequence id for a new calculation request.
    pub fn next_sequence_id(&self) -> SequenceId {
        SequenceId(self.sequences.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for EventIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
