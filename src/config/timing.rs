//! Timing parameters derived from blind configuration.

use super::blind::BlindConfig;
use super::units::{Millis, Percent};

/// Derived timing and preset computed from a [`BlindConfig`].
///
/// Computed once at initialization and read-only for the controller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlindTiming {
    /// Period of one tick; the blind travels one percent per tick.
    pub tick_period: Millis,

    /// Startup slack after a drive pulse during which position is frozen.
    pub motion_lag: Millis,

    /// Preset (favourite) position.
    pub preset: Percent,
}

impl BlindTiming {
    /// Derive timing from a blind configuration.
    pub fn from_config(config: &BlindConfig) -> Self {
        Self {
            tick_period: config.motion_time_per_percent(),
            motion_lag: config.motion_lag,
            preset: config.preset_position,
        }
    }

    /// Build timing from a full-travel duration.
    pub fn new(motion_time: Millis, motion_lag: Millis, preset: Percent) -> Self {
        Self {
            tick_period: motion_time / 100,
            motion_lag,
            preset,
        }
    }

    /// Time for a full travel.
    #[inline]
    pub fn motion_time(&self) -> Millis {
        Millis(self.tick_period.0 * 100)
    }

    /// Whether drive pulses open a motion-lag window.
    #[inline]
    pub fn has_motion_lag(&self) -> bool {
        !self.motion_lag.is_zero()
    }
}
