//! Blind configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::{Millis, Percent};

/// Complete configuration of one relay-driven blind.
#[derive(Debug, Clone, Deserialize)]
pub struct BlindConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Pin driving the raise relay.
    pub up_pin: u8,

    /// Pin driving the lower relay.
    pub down_pin: u8,

    /// Pin driving the stop relay.
    pub stop_pin: u8,

    /// Favourite position, reached by pulsing the stop relay from rest.
    pub preset_position: Percent,

    /// Time for a full travel from closed to open.
    #[serde(rename = "motion_time_ms")]
    pub motion_time: Millis,

    /// Slack between a drive pulse and the blind actually moving.
    #[serde(default, rename = "motion_lag_ms")]
    pub motion_lag: Millis,

    /// How long a relay is held active per pulse.
    #[serde(default = "default_pulse", rename = "pulse_ms")]
    pub pulse: Millis,

    /// Relay inputs are energised by driving the pin low.
    #[serde(default = "default_active_low")]
    pub active_low: bool,
}

/// Default relay hold time.
pub const DEFAULT_PULSE: Millis = Millis(333);

fn default_pulse() -> Millis {
    DEFAULT_PULSE
}

fn default_active_low() -> bool {
    true
}

impl BlindConfig {
    /// Time to travel one percent.
    pub fn motion_time_per_percent(&self) -> Millis {
        self.motion_time / 100
    }

    /// The three relay pins in up, down, stop order.
    pub fn pins(&self) -> [u8; 3] {
        [self.up_pin, self.down_pin, self.stop_pin]
    }
}
