//! Configuration module for blinds-motion.
//!
//! Provides types for loading and validating blind configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod blind;
mod system;
mod timing;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use blind::{BlindConfig, DEFAULT_PULSE};
pub use system::SystemConfig;
pub use timing::BlindTiming;
pub use validation::{validate_blind, validate_config, MIN_MOTION_TIME_MS};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Instant, Millis, Percent};
