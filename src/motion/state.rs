//! Motion state of a blind.

use core::fmt;

use crate::error::PositionError;

/// Which way the blind is believed to be travelling.
///
/// Transitions:
///
/// | From | To | Trigger |
/// |---|---|---|
/// | Stopped | Opening / Closing | a target request picks a direction |
/// | Opening / Closing | Stopped | target reached, or stop at current position |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionState {
    /// Travelling towards 0%.
    Closing,
    /// Travelling towards 100%.
    Opening,
    /// At rest.
    #[default]
    Stopped,
}

impl MotionState {
    /// Position-state code used by window-covering host protocols
    /// (0 = decreasing, 1 = increasing, 2 = stopped).
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            MotionState::Closing => 0,
            MotionState::Opening => 1,
            MotionState::Stopped => 2,
        }
    }

    /// Whether the blind is travelling.
    #[inline]
    pub const fn is_moving(self) -> bool {
        !matches!(self, MotionState::Stopped)
    }

    /// Get the state name as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            MotionState::Closing => "Closing",
            MotionState::Opening => "Opening",
            MotionState::Stopped => "Stopped",
        }
    }
}

impl TryFrom<u8> for MotionState {
    type Error = PositionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MotionState::Closing),
            1 => Ok(MotionState::Opening),
            2 => Ok(MotionState::Stopped),
            other => Err(PositionError::InvalidStateCode(other)),
        }
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
