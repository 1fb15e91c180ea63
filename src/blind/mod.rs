//! Blind module for blinds-motion.
//!
//! Provides the motion controller, its builder, relay actuation and status
//! reporting.

mod builder;
mod driver;
mod relay;
mod report;
#[cfg(feature = "std")]
mod shared;

pub use builder::BlindControllerBuilder;
pub use driver::BlindController;
pub use relay::{Actuator, PinActuator, Relay};
pub use report::Reporter;
#[cfg(feature = "std")]
pub use shared::{PollerHandle, SharedBlind};
