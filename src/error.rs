//! Error types for blinds-motion library.
//!
//! Provides unified error handling across configuration, position values,
//! relay actuation and timer scheduling.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all blinds-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Position value error
    Position(PositionError),
    /// Relay actuation error
    Actuator(ActuatorError),
    /// Timer scheduling error
    Timer(TimerError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Blind name not found in configuration
    BlindNotFound(heapless::String<32>),
    /// Two relays of the same blind share a pin
    DuplicatePin {
        /// Blind name
        blind: heapless::String<32>,
        /// Pin identifier used more than once
        pin: u8,
    },
    /// Full travel time too short to yield a tick period of at least 1 ms
    MotionTimeTooShort(u32),
    /// Pulse hold duration must be > 0
    InvalidPulseDuration(u32),
    /// A required builder field was not supplied
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Position value errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// Percentage above 100
    OutOfRange(u8),
    /// Unknown position-state code
    InvalidStateCode(u8),
}

/// Relay actuation errors.
///
/// These never reach the caller of a target request; the controller logs them
/// and treats the motion as issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorError {
    /// Pin could not be driven
    PinError,
}

/// Timer scheduling errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// A recurring timer is already running
    AlreadyActive,
    /// Period must be at least 1 ms
    ZeroPeriod,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Position(e) => write!(f, "Position error: {}", e),
            Error::Actuator(e) => write!(f, "Actuator error: {}", e),
            Error::Timer(e) => write!(f, "Timer error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::BlindNotFound(name) => write!(f, "Blind '{}' not found", name),
            ConfigError::DuplicatePin { blind, pin } => {
                write!(f, "Blind '{}' uses pin {} for more than one relay", blind, pin)
            }
            ConfigError::MotionTimeTooShort(ms) => {
                write!(f, "Invalid motion time: {} ms. Must be >= 100", ms)
            }
            ConfigError::InvalidPulseDuration(ms) => {
                write!(f, "Invalid pulse duration: {} ms. Must be > 0", ms)
            }
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::OutOfRange(v) => write!(f, "Position {}% out of range. Must be 0-100", v),
            PositionError::InvalidStateCode(v) => {
                write!(f, "Invalid position state code: {}. Valid codes: 0, 1, 2", v)
            }
        }
    }
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActuatorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::AlreadyActive => write!(f, "Tick timer already active"),
            TimerError::ZeroPeriod => write!(f, "Tick period must be at least 1 ms"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PositionError> for Error {
    fn from(e: PositionError) -> Self {
        Error::Position(e)
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Error::Actuator(e)
    }
}

impl From<TimerError> for Error {
    fn from(e: TimerError) -> Self {
        Error::Timer(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PositionError {}

#[cfg(feature = "std")]
impl std::error::Error for ActuatorError {}

#[cfg(feature = "std")]
impl std::error::Error for TimerError {}
