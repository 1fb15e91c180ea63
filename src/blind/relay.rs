//! Relay actuation.
//!
//! A blind is driven by three momentary relays. The controller only ever asks
//! for a pulse on one of them; how the pulse reaches the hardware is the
//! [`Actuator`]'s business.

use core::fmt;

use embedded_hal::digital::OutputPin;

use crate::config::units::{Instant, Millis};
use crate::config::BlindConfig;
use crate::error::ActuatorError;

/// One of the three control relays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Relay {
    /// Raise relay.
    Up,
    /// Lower relay.
    Down,
    /// Stop relay.
    Stop,
}

impl Relay {
    /// All relays, in up, down, stop order.
    pub const ALL: [Relay; 3] = [Relay::Up, Relay::Down, Relay::Stop];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Relay::Up => 0,
            Relay::Down => 1,
            Relay::Stop => 2,
        }
    }

    /// Get the relay name as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            Relay::Up => "up",
            Relay::Down => "down",
            Relay::Stop => "stop",
        }
    }
}

impl fmt::Display for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One-way command interface to the relays.
///
/// `pulse` must not block: it starts the pulse and returns. Completion happens
/// in `poll`, which the controller calls from its own `poll`.
pub trait Actuator {
    /// Start a pulse on `relay` at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the relay could not be driven. The caller has no
    /// feedback channel, so it only logs the failure.
    fn pulse(&mut self, relay: Relay, now: Instant) -> Result<(), ActuatorError>;

    /// Finish any pulses whose hold time has elapsed.
    ///
    /// # Errors
    ///
    /// Returns the first pin failure; remaining relays are still released.
    fn poll(&mut self, _now: Instant) -> Result<(), ActuatorError> {
        Ok(())
    }

    /// When `poll` next has work to do.
    fn next_release(&self) -> Option<Instant> {
        None
    }
}

/// Relay actuator over three embedded-hal output pins.
///
/// A pulse drives the pin to its active level and releases it after the hold
/// time. A pulse requested while the same relay is still held is merged into
/// the one in flight.
pub struct PinActuator<UP, DOWN, STOP>
where
    UP: OutputPin,
    DOWN: OutputPin,
    STOP: OutputPin,
{
    up: UP,
    down: DOWN,
    stop: STOP,

    /// Relays are energised by a low level.
    active_low: bool,

    /// How long each pulse holds the relay.
    hold: Millis,

    /// Pending release per relay, indexed by `Relay::index`.
    release_at: [Option<Instant>; 3],
}

impl<UP, DOWN, STOP> PinActuator<UP, DOWN, STOP>
where
    UP: OutputPin,
    DOWN: OutputPin,
    STOP: OutputPin,
{
    /// Take ownership of the pins and drive all relays inactive.
    ///
    /// # Errors
    ///
    /// Returns `ActuatorError::PinError` if any pin cannot be driven.
    pub fn new(
        up: UP,
        down: DOWN,
        stop: STOP,
        hold: Millis,
        active_low: bool,
    ) -> Result<Self, ActuatorError> {
        let mut actuator = Self {
            up,
            down,
            stop,
            active_low,
            hold,
            release_at: [None; 3],
        };

        for relay in Relay::ALL {
            actuator.drive(relay, false)?;
        }

        Ok(actuator)
    }

    /// Build from a blind configuration's pulse settings.
    ///
    /// # Errors
    ///
    /// Returns `ActuatorError::PinError` if any pin cannot be driven.
    pub fn from_config(
        config: &BlindConfig,
        up: UP,
        down: DOWN,
        stop: STOP,
    ) -> Result<Self, ActuatorError> {
        Self::new(up, down, stop, config.pulse, config.active_low)
    }

    /// Whether a pulse on `relay` is in flight.
    #[inline]
    pub fn is_held(&self, relay: Relay) -> bool {
        self.release_at[relay.index()].is_some()
    }

    /// Pulse hold time.
    #[inline]
    pub fn hold(&self) -> Millis {
        self.hold
    }

    /// Give the pins back.
    pub fn release(self) -> (UP, DOWN, STOP) {
        (self.up, self.down, self.stop)
    }

    fn drive(&mut self, relay: Relay, active: bool) -> Result<(), ActuatorError> {
        let high = active != self.active_low;
        match relay {
            Relay::Up => set_level(&mut self.up, high),
            Relay::Down => set_level(&mut self.down, high),
            Relay::Stop => set_level(&mut self.stop, high),
        }
    }
}

fn set_level<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), ActuatorError> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| ActuatorError::PinError)
}

impl<UP, DOWN, STOP> Actuator for PinActuator<UP, DOWN, STOP>
where
    UP: OutputPin,
    DOWN: OutputPin,
    STOP: OutputPin,
{
    fn pulse(&mut self, relay: Relay, now: Instant) -> Result<(), ActuatorError> {
        if self.is_held(relay) {
            trace!("{} relay already held, pulse merged", relay);
            return Ok(());
        }

        self.drive(relay, true)?;
        self.release_at[relay.index()] = Some(now + self.hold);
        Ok(())
    }

    fn poll(&mut self, now: Instant) -> Result<(), ActuatorError> {
        let mut result = Ok(());
        for relay in Relay::ALL {
            match self.release_at[relay.index()] {
                Some(at) if at <= now => {
                    self.release_at[relay.index()] = None;
                    if let Err(e) = self.drive(relay, false) {
                        result = result.and(Err(e));
                    }
                }
                _ => {}
            }
        }
        result
    }

    fn next_release(&self) -> Option<Instant> {
        self.release_at.iter().flatten().min().copied()
    }
}
