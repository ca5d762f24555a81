//! Domain types with no dependency on the UI toolkit or the calculation engine.
//!
//! - **`view_state`** – the immutable snapshot the calculator display shows.
//! - **`drag`** – drag directions and the buttons a gesture can start on.
//! - **`messages`** – keys and sources of localised user-facing strings.

pub mod drag;
pub mod messages;
pub mod view_state;
