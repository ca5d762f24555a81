//! Haptic feedback.
//!
//! There is no vibration motor on a headless host, so [`ConfiguredVibrator`]
//! stands in for the device service: it honours the user's haptics settings,
//! logs each pulse, and counts them.  A device-backed implementation would
//! plug into the same [`Vibrator`] trait.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::application::cursor_drag::Vibrator;
use crate::infrastructure::storage::config::HapticsConfig;

pub mod mock;

/// Vibrator driven by [`HapticsConfig`].
#[derive(Debug)]
pub struct ConfiguredVibrator {
    enabled: bool,
    duration: Duration,
    pulses: AtomicU64,
}

impl ConfiguredVibrator {
    pub fn new(config: &HapticsConfig) -> Self {
        Self {
            enabled: config.enabled,
            duration: Duration::from_millis(config.duration_ms),
            pulses: AtomicU64::new(0),
        }
    }

    /// Pulses actually emitted (disabled haptics emit none).
    pub fn pulses(&self) -> u64 {
        self.pulses.load(Ordering::Relaxed)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Vibrator for ConfiguredVibrator {
    fn vibrate(&self) {
        if !self.enabled || self.duration.is_zero() {
            return;
        }
        self.pulses.fetch_add(1, Ordering::Relaxed);
        debug!(duration_ms = self.duration.as_millis() as u64, "haptic pulse");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_vibrator_counts_pulses() {
        // Arrange
        let vibrator = ConfiguredVibrator::new(&HapticsConfig::default());

        // Act
        vibrator.vibrate();
        vibrator.vibrate();

        // Assert
        assert_eq!(vibrator.pulses(), 2);
    }

    #[test]
    fn test_disabled_vibrator_emits_nothing() {
        let vibrator = ConfiguredVibrator::new(&HapticsConfig {
            enabled: false,
            ..HapticsConfig::default()
        });

        vibrator.vibrate();

        assert_eq!(vibrator.pulses(), 0);
    }

    #[test]
    fn test_zero_duration_emits_nothing() {
        let vibrator = ConfiguredVibrator::new(&HapticsConfig {
            enabled: true,
            duration_ms: 0,
        });

        vibrator.vibrate();

        assert_eq!(vibrator.pulses(), 0);
    }

    #[test]
    fn test_duration_comes_from_config() {
        let vibrator = ConfiguredVibrator::new(&HapticsConfig {
            enabled: true,
            duration_ms: 35,
        });

        assert_eq!(vibrator.duration(), Duration::from_millis(35));
    }
}
