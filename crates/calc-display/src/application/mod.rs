//! Application layer: the display synchroniser and the cursor drag processor.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure types in `calc_core`) and the infrastructure (event bus, editor,
//! vibrator, views, config files).
//!
//! Code in this layer:
//!
//! - **Orchestrates** domain types to fulfil a user goal (e.g., "show the
//!   latest calculation result").
//! - **Depends on abstractions** (traits such as [`calculator::Calculator`] or
//!   [`cursor_drag::Vibrator`]) so the infrastructure can be swapped without
//!   touching it.
//! - **Performs no I/O** of its own.
//!
//! # Sub-modules
//!
//! - **`calculator`**  – The engine's event interface: subscribe, fire, ids.
//! - **`display`**     – Keeps the display view state in step with the
//!   engine's results, failures and cancellations.
//! - **`cursor_drag`** – Maps cursor-jump glyph drags to editor commands.

pub mod calculator;
pub mod cursor_drag;
pub mod display;
