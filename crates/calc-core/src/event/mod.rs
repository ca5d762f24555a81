//! Calculator bus events, their identity, and the id generator.

pub mod data;
pub mod events;
pub mod sequence;

pub use data::{CalculatorEventData, EventId, SequenceId};
pub use events::{
    CalculatorEvalError, CalculatorEvent, CalculatorEventType, CalculatorFailure,
    CalculatorOutput, CalculatorParseError,
};
pub use sequence::EventIdGenerator;
