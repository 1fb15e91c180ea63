//! Timer primitives driving the tick loop and the motion-lag window.
//!
//! Both timers are passive: they hold deadlines and are advanced by the
//! owner with the current time, which keeps them deterministic and `no_std`.

use crate::config::units::{Instant, Millis};
use crate::error::TimerError;

/// Recurring timer with at most one active schedule.
#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    /// Next firing time and period, if running.
    schedule: Option<(Instant, Millis)>,
}

impl TickTimer {
    /// Create a stopped timer.
    pub const fn new() -> Self {
        Self { schedule: None }
    }

    /// Start firing every `period`, first at `now + period`.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::AlreadyActive` if the timer is running; the
    /// running schedule is left untouched.
    pub fn start(&mut self, now: Instant, period: Millis) -> Result<(), TimerError> {
        if self.schedule.is_some() {
            return Err(TimerError::AlreadyActive);
        }
        if period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }

        self.schedule = Some((now + period, period));
        Ok(())
    }

    /// Stop the timer. Returns whether it was running.
    pub fn cancel(&mut self) -> bool {
        self.schedule.take().is_some()
    }

    /// Whether the timer is running.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.schedule.is_some()
    }

    /// Next firing time, if running.
    #[inline]
    pub fn next_due(&self) -> Option<Instant> {
        self.schedule.map(|(due, _)| due)
    }

    /// Consume one elapsed period.
    ///
    /// Returns the firing time if a period elapsed at or before `now`. Call
    /// repeatedly to catch up on several missed periods, one at a time.
    pub fn poll_due(&mut self, now: Instant) -> Option<Instant> {
        let (due, period) = self.schedule?;
        if due > now {
            return None;
        }

        self.schedule = Some((due + period, period));
        Some(due)
    }

    /// Consume the next period whether or not it has elapsed.
    ///
    /// Returns false when the timer is stopped.
    pub fn skip(&mut self) -> bool {
        match self.schedule {
            Some((due, period)) => {
                self.schedule = Some((due + period, period));
                true
            }
            None => false,
        }
    }
}

/// One-shot deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// Create a disarmed deadline.
    pub const fn new() -> Self {
        Self { at: None }
    }

    /// Arm to expire at `now + delay`, replacing any earlier arming.
    pub fn arm(&mut self, now: Instant, delay: Millis) {
        self.at = Some(now + delay);
    }

    /// Disarm without expiring.
    pub fn disarm(&mut self) {
        self.at = None;
    }

    /// Whether the deadline is pending.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    /// Expiry time, if armed.
    #[inline]
    pub fn expires_at(&self) -> Option<Instant> {
        self.at
    }

    /// Disarm and return true if the deadline passed at or before `now`.
    pub fn poll_expired(&mut self, now: Instant) -> bool {
        match self.at {
            Some(at) if at <= now => {
                self.at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_timer_single_schedule() {
        let mut timer = TickTimer::new();
        let t0 = Instant::from_millis(0);

        assert!(timer.start(t0, Millis(100)).is_ok());
        assert_eq!(timer.start(t0, Millis(50)), Err(TimerError::AlreadyActive));

        // Period unchanged
        assert_eq!(timer.next_due(), Some(Instant::from_millis(100)));
    }

    #[test]
    fn test_tick_timer_zero_period() {
        let mut timer = TickTimer::new();
        assert_eq!(
            timer.start(Instant::default(), Millis::ZERO),
            Err(TimerError::ZeroPeriod)
        );
        assert!(!timer.is_active());
    }

    #[test]
    fn test_tick_timer_catch_up() {
        let mut timer = TickTimer::new();
        timer.start(Instant::from_millis(0), Millis(100)).unwrap();

        let now = Instant::from_millis(350);
        let mut fired = heapless::Vec::<u64, 8>::new();
        while let Some(at) = timer.poll_due(now) {
            fired.push(at.as_millis()).unwrap();
        }

        assert_eq!(fired.as_slice(), &[100, 200, 300]);
        assert_eq!(timer.next_due(), Some(Instant::from_millis(400)));
    }

    #[test]
    fn test_tick_timer_cancel_and_restart() {
        let mut timer = TickTimer::new();
        timer.start(Instant::from_millis(0), Millis(100)).unwrap();

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.poll_due(Instant::from_millis(1_000)), None);

        assert!(timer.start(Instant::from_millis(1_000), Millis(10)).is_ok());
        assert_eq!(timer.next_due(), Some(Instant::from_millis(1_010)));
    }

    #[test]
    fn test_tick_timer_skip() {
        let mut timer = TickTimer::new();
        assert!(!timer.skip());

        timer.start(Instant::from_millis(0), Millis(100)).unwrap();
        assert!(timer.skip());
        assert_eq!(timer.next_due(), Some(Instant::from_millis(200)));
        assert_eq!(timer.poll_due(Instant::from_millis(150)), None);
    }

    #[test]
    fn test_deadline() {
        let mut deadline = Deadline::new();
        deadline.arm(Instant::from_millis(0), Millis(200));

        assert!(!deadline.poll_expired(Instant::from_millis(199)));
        assert!(deadline.is_armed());
        assert!(deadline.poll_expired(Instant::from_millis(200)));
        assert!(!deadline.is_armed());
        assert!(!deadline.poll_expired(Instant::from_millis(300)));
    }
}
