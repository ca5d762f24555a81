//! Storage infrastructure: configuration and display-state persistence.
//!
//! - `config` reads and writes the TOML settings file, falling back to
//!   defaults on first run.
//! - `snapshot` saves the display state on exit and restores it on start.

pub mod config;
pub mod snapshot;
