//! Motion module for blinds-motion.
//!
//! Provides the motion state, the time source and the timers that drive
//! position estimation.

mod clock;
mod state;
mod timer;

pub use clock::Clock;
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use state::MotionState;
pub use timer::{Deadline, TickTimer};
