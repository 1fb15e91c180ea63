//! Unit types for positions and time.
//!
//! Provides type-safe representations of travel percentage, durations and
//! monotonic timestamps so positions and milliseconds cannot be confused.

use core::fmt;
use core::ops::{Add, Div, Sub};

use serde::Deserialize;

use crate::error::PositionError;

/// Blind position as a percentage of travel.
///
/// 0 is fully closed, 100 is fully open. Validated at construction, so every
/// `Percent` the controller sees is within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Percent(u8);

impl Percent {
    /// Fully closed.
    pub const CLOSED: Self = Self(0);
    /// Fully open.
    pub const OPEN: Self = Self(100);

    /// Create a new Percent value with validation.
    ///
    /// # Errors
    ///
    /// Returns `PositionError::OutOfRange` if the value is above 100.
    pub const fn new(value: u8) -> Result<Self, PositionError> {
        if value <= 100 {
            Ok(Self(value))
        } else {
            Err(PositionError::OutOfRange(value))
        }
    }

    /// Create a Percent, clamping values above 100.
    #[inline]
    pub const fn saturating(value: u8) -> Self {
        if value > 100 {
            Self::OPEN
        } else {
            Self(value)
        }
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Fully open or fully closed.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        self.0 == 0 || self.0 == 100
    }

    /// Whether this is one of 0, 10, 20, ... 100.
    #[inline]
    pub const fn is_multiple_of_ten(self) -> bool {
        self.0 % 10 == 0
    }

    /// One percent further open, capped at 100.
    #[inline]
    pub const fn step_up(self) -> Self {
        Self::saturating(self.0.saturating_add(1))
    }

    /// One percent further closed, floored at 0.
    #[inline]
    pub const fn step_down(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl TryFrom<u8> for Percent {
    type Error = PositionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(p: Percent) -> Self {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u8::deserialize(deserializer)?;
        Percent::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// Duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millis(pub u32);

impl Millis {
    /// Zero duration.
    pub const ZERO: Self = Self(0);

    /// Create a new Millis value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Check for a zero duration.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Div<u32> for Millis {
    type Output = Self;

    fn div(self, rhs: u32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(feature = "std")]
impl From<Millis> for std::time::Duration {
    fn from(ms: Millis) -> Self {
        std::time::Duration::from_millis(ms.0 as u64)
    }
}

/// Monotonic timestamp in milliseconds since an arbitrary epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(pub u64);

impl Instant {
    /// Create a new Instant.
    #[inline]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Milliseconds since the epoch.
    #[inline]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Time elapsed since `earlier`, zero if `earlier` is in the future.
    #[inline]
    pub fn saturating_since(self, earlier: Instant) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<Millis> for Instant {
    type Output = Self;

    fn add(self, rhs: Millis) -> Self::Output {
        Self(self.0.saturating_add(rhs.0 as u64))
    }
}

impl Sub<Millis> for Instant {
    type Output = Self;

    fn sub(self, rhs: Millis) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0 as u64))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t+{}ms", self.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Millis.
    fn ms(self) -> Millis;
    /// Convert to Percent, clamping above 100.
    fn percent(self) -> Percent;
}

impl UnitExt for u8 {
    #[inline]
    fn ms(self) -> Millis {
        Millis(self as u32)
    }

    #[inline]
    fn percent(self) -> Percent {
        Percent::saturating(self)
    }
}

impl UnitExt for u32 {
    #[inline]
    fn ms(self) -> Millis {
        Millis(self)
    }

    #[inline]
    fn percent(self) -> Percent {
        Percent::saturating(self.min(u8::MAX as u32) as u8)
    }
}
