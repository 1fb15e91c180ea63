//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{BlindConfig, SystemConfig};

/// Shortest full-travel time that still yields a 1 ms tick.
pub const MIN_MOTION_TIME_MS: u32 = 100;

/// Validate a system configuration.
///
/// Checks:
/// - Each blind drives three distinct pins
/// - Full travel time gives a tick period of at least 1 ms
/// - Pulse hold time is non-zero
///
/// Preset range is already enforced while deserializing.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, blind) in config.blinds.iter() {
        validate_blind(blind)?;
    }

    Ok(())
}

/// Validate a single blind configuration.
pub fn validate_blind(config: &BlindConfig) -> Result<()> {
    let pins = config.pins();
    for (i, pin) in pins.iter().enumerate() {
        if pins[i + 1..].contains(pin) {
            return Err(Error::Config(ConfigError::DuplicatePin {
                blind: config.name.clone(),
                pin: *pin,
            }));
        }
    }

    if config.motion_time.0 < MIN_MOTION_TIME_MS {
        return Err(Error::Config(ConfigError::MotionTimeTooShort(
            config.motion_time.0,
        )));
    }

    if config.pulse.is_zero() {
        return Err(Error::Config(ConfigError::InvalidPulseDuration(config.pulse.0)));
    }

    Ok(())
}
