//! Infrastructure layer for the calculator display.
//!
//! Contains the concrete adapters behind the application traits: the event
//! bus, the text editor, haptics, the logging view, configured messages,
//! file-system storage, and the command bridge used by front ends.
//!
//! **Dependency rule**: this layer may depend on `application` and `calc_core`,
//! but MUST NOT be imported by the `application` or domain layers.

pub mod editor;
pub mod event_bus;
pub mod haptics;
pub mod messages;
pub mod storage;
pub mod ui_bridge;
pub mod view;
