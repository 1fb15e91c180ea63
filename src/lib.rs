//! # blinds-motion
//!
//! Time-estimated position control for relay-driven window blinds with
//! embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Dead reckoning**: Position inferred from elapsed travel time, no sensor
//! - **Three-relay control**: Momentary up, down and stop pulses
//! - **Preset position**: Favourite position reached through the stop relay
//! - **Motion lag**: Startup slack before the estimate starts moving
//! - **Configuration-driven**: Define blinds in TOML files
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blinds_motion::{BlindController, PinActuator, Percent, StdClock};
//!
//! // Load configuration from TOML
//! let config = blinds_motion::load_config("blinds.toml")?;
//! let blind_config = config.blind("living_room").unwrap();
//!
//! // Drive the relays through embedded-hal pins
//! let actuator = PinActuator::from_config(blind_config, up_pin, down_pin, stop_pin)?;
//!
//! let mut blind = BlindController::builder()
//!     .from_blind_config(blind_config)
//!     .actuator(actuator)
//!     .clock(StdClock::new())
//!     .build()?;
//!
//! blind.set_target_position(Percent::new(30)?);
//! loop {
//!     blind.poll();
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing, `StdClock` and `SharedBlind`
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[macro_use]
mod fmt;

// Core modules
pub mod blind;
pub mod config;
pub mod error;
pub mod motion;

// Re-exports for ergonomic API
pub use blind::{Actuator, BlindController, BlindControllerBuilder, PinActuator, Relay, Reporter};
pub use config::{validate_config, BlindConfig, BlindTiming, SystemConfig};
pub use error::{Error, Result};
pub use motion::{Clock, MotionState};

#[cfg(feature = "std")]
pub use blind::{PollerHandle, SharedBlind};
#[cfg(feature = "std")]
pub use motion::StdClock;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Instant, Millis, Percent};
