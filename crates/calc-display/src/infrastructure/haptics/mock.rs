//! Recording vibrator for integration tests.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::application::cursor_drag::Vibrator;

/// Counts `vibrate()` calls without touching any device.
#[derive(Debug, Default)]
pub struct RecordingVibrator {
    calls: AtomicU32,
}

impl RecordingVibrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Vibrator for RecordingVibrator {
    fn vibrate(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}
