//! Outbound status notifications to the host integration.

use crate::config::units::Percent;
use crate::motion::MotionState;

/// Receiver of push-style status updates.
///
/// Position is pushed every ten percent of travel and when the target is
/// reached; motion state is pushed whenever it changes.
pub trait Reporter {
    /// Estimated position update.
    fn position(&mut self, position: Percent);

    /// Motion state update.
    fn state(&mut self, state: MotionState);
}

/// Discards all updates.
impl Reporter for () {
    fn position(&mut self, _position: Percent) {}

    fn state(&mut self, _state: MotionState) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn position(&mut self, position: Percent) {
        (**self).position(position);
    }

    fn state(&mut self, state: MotionState) {
        (**self).state(state);
    }
}
