//! Blind motion controller.
//!
//! Dead-reckoning position estimation and the Opening / Closing / Stopped
//! state machine for a blind with no position sensor.

use heapless::String;

use crate::config::units::{Instant, Percent};
use crate::config::BlindTiming;
use crate::error::TimerError;
use crate::motion::{Clock, Deadline, MotionState, TickTimer};

use super::builder::BlindControllerBuilder;
use super::relay::{Actuator, Relay};
use super::report::Reporter;

/// Motion controller for one blind.
///
/// Generic over:
/// - `A`: relay actuator (must implement [`Actuator`])
/// - `C`: time source (must implement [`Clock`])
/// - `R`: status sink (must implement [`Reporter`], defaults to `()`)
///
/// The position is never measured. It starts at fully open and moves one
/// percent per tick period while the blind is believed to be travelling.
/// Target requests return immediately; the host calls [`poll`](Self::poll)
/// from its main loop to advance the estimate and finish relay pulses.
pub struct BlindController<A, C, R = ()>
where
    A: Actuator,
    C: Clock,
    R: Reporter,
{
    /// Blind name for logging.
    name: String<32>,

    /// Timing and preset from configuration.
    timing: BlindTiming,

    /// Relay output.
    actuator: A,

    /// Time source.
    clock: C,

    /// Status sink.
    reporter: R,

    /// Dead-reckoned position.
    position: Percent,

    /// Believed direction of travel.
    state: MotionState,

    /// Last commanded target.
    target: Percent,

    /// Current move was started through the preset path.
    moving_to_preset: bool,

    /// Armed while the motor is assumed not to be moving yet.
    motion_lag: Deadline,

    /// Advances the position once per tick period.
    ticker: TickTimer,
}

impl<A, C> BlindController<A, C>
where
    A: Actuator,
    C: Clock,
{
    /// Start building a controller.
    pub fn builder() -> BlindControllerBuilder<A, C> {
        BlindControllerBuilder::new()
    }
}

impl<A, C, R> BlindController<A, C, R>
where
    A: Actuator,
    C: Clock,
    R: Reporter,
{
    /// Create a controller at rest, fully open.
    pub(crate) fn new(
        name: String<32>,
        timing: BlindTiming,
        actuator: A,
        clock: C,
        reporter: R,
    ) -> Self {
        Self {
            name,
            timing,
            actuator,
            clock,
            reporter,
            position: Percent::OPEN,
            state: MotionState::Stopped,
            target: Percent::OPEN,
            moving_to_preset: false,
            motion_lag: Deadline::new(),
            ticker: TickTimer::new(),
        }
    }

    /// Get the blind name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the timing parameters.
    #[inline]
    pub fn timing(&self) -> &BlindTiming {
        &self.timing
    }

    /// Estimated position.
    pub fn current_position(&self) -> Percent {
        trace!("{}: current position requested: {}", self.name.as_str(), self.position);
        self.position
    }

    /// Believed direction of travel.
    pub fn motion_state(&self) -> MotionState {
        trace!("{}: motion state requested: {}", self.name.as_str(), self.state);
        self.state
    }

    /// Last commanded target.
    pub fn target_position(&self) -> Percent {
        trace!("{}: target position requested: {}", self.name.as_str(), self.target);
        self.target
    }

    /// Whether the current move was started through the preset path.
    #[inline]
    pub fn is_moving_to_preset(&self) -> bool {
        self.moving_to_preset
    }

    /// Whether the motion-lag window is open.
    #[inline]
    pub fn is_awaiting_motion(&self) -> bool {
        self.motion_lag.is_armed()
    }

    /// Whether the tick timer is running.
    #[inline]
    pub fn is_tick_timer_active(&self) -> bool {
        self.ticker.is_active()
    }

    /// Get the actuator.
    #[inline]
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Get the reporter.
    #[inline]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Take the controller apart.
    pub fn into_parts(self) -> (A, C, R) {
        (self.actuator, self.clock, self.reporter)
    }

    /// Command a new target position.
    ///
    /// Decides the relay pulse and direction, evaluated in priority order:
    ///
    /// 1. target equals the estimate: stop here (stop relay if moving, or a
    ///    nudge on up/down when resting at an endpoint)
    /// 2. target is the preset and the blind is at rest: stop relay starts
    ///    travel towards the preset
    /// 3. target above the estimate: open (up relay unless already opening)
    /// 4. target below the estimate: close (down relay unless already closing)
    ///
    /// Starts the tick timer if motion results and none is running. Returns
    /// before any pulse completes.
    pub fn set_target_position(&mut self, position: Percent) {
        let now = self.clock.now();
        info!("{}: set target position {}", self.name.as_str(), position);

        let previous = self.state;
        self.target = position;
        self.moving_to_preset = false;

        if position == self.position {
            if self.state.is_moving() {
                self.pulse(Relay::Stop, now);
                self.halt();
            } else if position == Percent::OPEN {
                self.pulse(Relay::Up, now);
            } else if position == Percent::CLOSED {
                self.pulse(Relay::Down, now);
            }

            self.state = MotionState::Stopped;
        } else if position == self.timing.preset && !self.state.is_moving() {
            self.state = if position > self.position {
                MotionState::Opening
            } else {
                MotionState::Closing
            };

            debug!("{}: {} towards preset", self.name.as_str(), self.state);
            self.pulse(Relay::Stop, now);
            self.moving_to_preset = true;
        } else if position > self.position {
            if self.state != MotionState::Opening {
                self.pulse(Relay::Up, now);
                self.await_motion(now);
            }

            self.state = MotionState::Opening;
        } else {
            if self.state != MotionState::Closing {
                self.pulse(Relay::Down, now);
                self.await_motion(now);
            }

            self.state = MotionState::Closing;
        }

        if self.state != previous {
            debug!("{}: {} -> {}", self.name.as_str(), previous, self.state);
            self.reporter.state(self.state);
        }

        if self.state.is_moving() {
            match self.ticker.start(now, self.timing.tick_period) {
                Ok(()) => debug!(
                    "{}: tick timer started every {}",
                    self.name.as_str(),
                    self.timing.tick_period
                ),
                Err(TimerError::AlreadyActive) => {}
                Err(e) => error!("{}: tick timer not started: {}", self.name.as_str(), e),
            }
        }
    }

    /// Stop at the current estimated position.
    pub fn stop(&mut self) {
        self.set_target_position(self.position);
    }

    /// Process everything due up to now.
    ///
    /// Expires the motion-lag window, runs one [`tick`](Self::tick) per
    /// elapsed tick period (catching up in order after a late call) and
    /// releases finished relay pulses. When the lag expires at the same
    /// instant as a tick, the lag expires first.
    pub fn poll(&mut self) {
        let now = self.clock.now();

        loop {
            let lag_due = self.motion_lag.expires_at().filter(|at| *at <= now);
            let tick_due = self.ticker.next_due().filter(|at| *at <= now);

            match (lag_due, tick_due) {
                (Some(lag), Some(tick)) if lag <= tick => self.end_motion_lag(),
                (Some(_), None) => self.end_motion_lag(),
                (_, Some(_)) => {
                    self.ticker.poll_due(now);
                    self.advance(now);
                }
                (None, None) => break,
            }
        }

        if let Err(e) = self.actuator.poll(now) {
            warn!("{}: relay release failed: {}", self.name.as_str(), e);
        }
    }

    /// When [`poll`](Self::poll) next has work to do, if ever.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.motion_lag.expires_at(),
            self.ticker.next_due(),
            self.actuator.next_release(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Advance the estimate by one tick period.
    ///
    /// [`poll`](Self::poll) calls this once per elapsed period; hosts running
    /// their own periodic timer may call it directly instead. Each call
    /// consumes one period of the tick timer and does nothing while the
    /// timer is stopped.
    pub fn tick(&mut self) {
        if !self.ticker.skip() {
            trace!("{}: tick ignored, timer stopped", self.name.as_str());
            return;
        }

        let now = self.clock.now();
        if self.motion_lag.poll_expired(now) {
            debug!("{}: motion lag elapsed", self.name.as_str());
        }
        self.advance(now);
    }

    fn advance(&mut self, now: Instant) {
        if self.motion_lag.is_armed() {
            trace!("{}: tick warming up", self.name.as_str());
            return;
        }

        self.position = match self.state {
            MotionState::Closing => self.position.step_down(),
            MotionState::Opening => self.position.step_up(),
            MotionState::Stopped => self.position,
        };

        if self.position.is_multiple_of_ten() {
            debug!(
                "{}: estimated position {} -> {}",
                self.name.as_str(),
                self.position,
                self.target
            );
            self.reporter.position(self.position);
        }

        if self.position == self.target {
            self.finish_move(now);
        }
    }

    fn finish_move(&mut self, now: Instant) {
        info!("{}: reached target position {}", self.name.as_str(), self.position);

        let previous = self.state;
        self.state = MotionState::Stopped;
        self.reporter.position(self.position);
        if previous != MotionState::Stopped {
            self.reporter.state(self.state);
        }

        // Endpoints stop mechanically; mid-travel needs the stop relay
        if !self.position.is_endpoint() && !self.moving_to_preset {
            self.pulse(Relay::Stop, now);
        }

        self.ticker.cancel();
        self.moving_to_preset = false;
    }

    /// Drop the timers of an interrupted move.
    fn halt(&mut self) {
        if self.ticker.cancel() {
            debug!("{}: tick timer cancelled", self.name.as_str());
        }
        self.motion_lag.disarm();
    }

    fn await_motion(&mut self, now: Instant) {
        if self.timing.has_motion_lag() {
            self.motion_lag.arm(now, self.timing.motion_lag);
        }
    }

    fn end_motion_lag(&mut self) {
        self.motion_lag.disarm();
        debug!("{}: motion lag elapsed", self.name.as_str());
    }

    fn pulse(&mut self, relay: Relay, now: Instant) {
        debug!("{}: pulse {} relay", self.name.as_str(), relay);
        if let Err(e) = self.actuator.pulse(relay, now) {
            warn!("{}: {} relay pulse failed: {}", self.name.as_str(), relay, e);
        }
    }
}
