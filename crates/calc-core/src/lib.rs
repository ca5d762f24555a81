//! # calc-core
//!
//! Shared types for the calculator's UI-event layer: the events exchanged on
//! the calculator bus, how their recency is compared, the display view state,
//! and the drag gesture vocabulary.
//!
//! This crate has no dependency on a UI toolkit, an arithmetic engine, or
//! any I/O.
//!
//! # Architecture overview (for beginners)
//!
//! The calculator engine evaluates expressions on a background thread and
//! announces progress by firing events on a bus.  The display listens to that
//! bus and turns results and failures into something the user can read.
//! Separately, buttons with extra glyphs react to drag gestures.
//!
//! - **`event`** – What travels on the bus.  Every event gets a strictly
//!   increasing [`EventId`], which lets a listener tell a late delivery from a
//!   fresh one.
//!
//! - **`domain`** – The [`DisplayViewState`] snapshot, the drag types, and
//!   the message bundle abstraction.

pub mod domain;
pub mod event;

// Re-export the most-used types at the crate root so callers can write
// `calc_core::DisplayViewState` instead of the full module path.
pub use domain::drag::{
    DirectionalButton, DragButton, DragDirection, MotionSample, Point, UnknownDirection,
    CURSOR_TO_END, CURSOR_TO_START,
};
pub use domain::messages::{DefaultMessages, MessageBundle, MessageKey};
pub use domain::view_state::{DisplayChange, DisplayViewState, Operation};
pub use event::{
    CalculatorEvalError, CalculatorEvent, CalculatorEventData, CalculatorEventType,
    CalculatorFailure, CalculatorOutput, CalculatorParseError, EventId, EventIdGenerator,
    SequenceId,
};
