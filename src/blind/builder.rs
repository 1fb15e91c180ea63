//! Builder pattern for BlindController.

use crate::config::units::{Millis, Percent};
use crate::config::{BlindConfig, BlindTiming, SystemConfig, MIN_MOTION_TIME_MS};
use crate::error::{ConfigError, Error, Result};
use crate::motion::Clock;

use super::driver::BlindController;
use super::relay::Actuator;
use super::report::Reporter;

/// Builder for creating BlindController instances.
pub struct BlindControllerBuilder<A, C, R = ()>
where
    A: Actuator,
    C: Clock,
    R: Reporter,
{
    actuator: Option<A>,
    clock: Option<C>,
    reporter: R,
    name: Option<heapless::String<32>>,
    motion_time: Option<Millis>,
    motion_lag: Millis,
    preset: Option<Percent>,
}

impl<A, C> Default for BlindControllerBuilder<A, C, ()>
where
    A: Actuator,
    C: Clock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, C> BlindControllerBuilder<A, C, ()>
where
    A: Actuator,
    C: Clock,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            actuator: None,
            clock: None,
            reporter: (),
            name: None,
            motion_time: None,
            motion_lag: Millis::ZERO,
            preset: None,
        }
    }
}

impl<A, C, R> BlindControllerBuilder<A, C, R>
where
    A: Actuator,
    C: Clock,
    R: Reporter,
{
    /// Set the relay actuator.
    pub fn actuator(mut self, actuator: A) -> Self {
        self.actuator = Some(actuator);
        self
    }

    /// Set the time source.
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the status sink.
    pub fn reporter<R2: Reporter>(self, reporter: R2) -> BlindControllerBuilder<A, C, R2> {
        BlindControllerBuilder {
            actuator: self.actuator,
            clock: self.clock,
            reporter,
            name: self.name,
            motion_time: self.motion_time,
            motion_lag: self.motion_lag,
            preset: self.preset,
        }
    }

    /// Set the blind name, truncated to 32 bytes on a character boundary.
    pub fn name(mut self, name: &str) -> Self {
        let mut truncated = heapless::String::new();
        for c in name.chars() {
            if truncated.push(c).is_err() {
                warn!("blind name truncated to '{}'", truncated.as_str());
                break;
            }
        }
        self.name = Some(truncated);
        self
    }

    /// Set the full travel time from closed to open.
    pub fn motion_time(mut self, motion_time: Millis) -> Self {
        self.motion_time = Some(motion_time);
        self
    }

    /// Set the startup slack after a drive pulse.
    pub fn motion_lag(mut self, motion_lag: Millis) -> Self {
        self.motion_lag = motion_lag;
        self
    }

    /// Set the preset position.
    pub fn preset(mut self, preset: Percent) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Configure from a BlindConfig.
    pub fn from_blind_config(mut self, config: &BlindConfig) -> Self {
        self.name = Some(config.name.clone());
        self.motion_time = Some(config.motion_time);
        self.motion_lag = config.motion_lag;
        self.preset = Some(config.preset_position);
        self
    }

    /// Configure from SystemConfig by blind key.
    pub fn from_config(self, config: &SystemConfig, blind_name: &str) -> Result<Self> {
        let blind_config = config.blind(blind_name).ok_or_else(|| {
            Error::Config(ConfigError::BlindNotFound(
                heapless::String::try_from(blind_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_blind_config(blind_config))
    }

    /// Build the BlindController.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the travel time is
    /// too short for a 1 ms tick.
    pub fn build(self) -> Result<BlindController<A, C, R>> {
        let actuator = self
            .actuator
            .ok_or(Error::Config(ConfigError::MissingField("actuator")))?;

        let clock = self
            .clock
            .ok_or(Error::Config(ConfigError::MissingField("clock")))?;

        let motion_time = self
            .motion_time
            .ok_or(Error::Config(ConfigError::MissingField("motion_time")))?;

        let preset = self
            .preset
            .ok_or(Error::Config(ConfigError::MissingField("preset")))?;

        if motion_time.0 < MIN_MOTION_TIME_MS {
            return Err(Error::Config(ConfigError::MotionTimeTooShort(motion_time.0)));
        }

        let name = self.name.unwrap_or_else(|| {
            let mut name = heapless::String::new();
            let _ = name.push_str("blind");
            name
        });

        let timing = BlindTiming::new(motion_time, self.motion_lag, preset);

        Ok(BlindController::new(name, timing, actuator, clock, self.reporter))
    }
}
