//! Arm motion primitives
//!
//! Horizontal travel uses an arrival heuristic rather than exact
//! positioning: the carriage keeps moving only while each tick brings it
//! strictly closer to the target. Vertical travel is a clamped linear
//! interpolation driven by an action timer in `[0, 1]`.

use crate::container::point::lerp;

/// Lower/raise sequence state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionState {
    /// Lowering toward the slot
    GoDown,
    /// Raising back to travel height
    GoUp,
    /// No sequence running; commands accepted
    Done,
}

impl ActionState {
    /// Next state once the current phase's timer completes
    pub fn next(self) -> Self {
        match self {
            ActionState::GoDown => ActionState::GoUp,
            ActionState::GoUp | ActionState::Done => ActionState::Done,
        }
    }
}

/// Tracks whether the carriage is still closing in on its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrivalTracker {
    /// Best (smallest) distance seen since the target was set
    best: f32,
}

impl Default for ArrivalTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrivalTracker {
    pub fn new() -> Self {
        Self {
            best: f32::INFINITY,
        }
    }

    /// Forget the previous target; the next sample always counts as closer
    pub fn reset(&mut self) {
        self.best = f32::INFINITY;
    }

    /// Record a distance sample
    ///
    /// Returns true (keep moving) iff it is strictly smaller than every
    /// previous sample since the last reset.
    pub fn approach(&mut self, distance: f32) -> bool {
        if distance < self.best {
            self.best = distance;
            true
        } else {
            false
        }
    }
}

/// Vertical travel between base and lowered height
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LiftProfile {
    /// Travel height
    pub base: f32,
    /// Height at which the arm reaches a slot
    pub lowered: f32,
}

impl LiftProfile {
    pub fn new(base: f32, drop: f32) -> Self {
        Self {
            base,
            lowered: base - drop,
        }
    }

    /// Height for `state` at action timer `t`
    pub fn height(&self, state: ActionState, t: f32) -> f32 {
        match state {
            ActionState::GoDown => lerp(self.base, self.lowered, t),
            ActionState::GoUp => lerp(self.lowered, self.base, t),
            ActionState::Done => self.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_strictly_decreasing() {
        let mut tracker = ArrivalTracker::new();
        assert!(tracker.approach(10.0));
        assert!(tracker.approach(5.0));
        // Equal is not closer
        assert!(!tracker.approach(5.0));
        assert!(!tracker.approach(6.0));
        // A later sample that beats the best one counts again
        assert!(tracker.approach(1.0));
    }

    #[test]
    fn test_tracker_reset() {
        let mut tracker = ArrivalTracker::new();
        assert!(tracker.approach(0.0));
        assert!(!tracker.approach(0.0));
        tracker.reset();
        assert!(tracker.approach(100.0));
    }

    #[test]
    fn test_action_sequence() {
        assert_eq!(ActionState::GoDown.next(), ActionState::GoUp);
        assert_eq!(ActionState::GoUp.next(), ActionState::Done);
        assert_eq!(ActionState::Done.next(), ActionState::Done);
    }

    #[test]
    fn test_lift_profile() {
        let lift = LiftProfile::new(1.0, 0.25);
        assert_eq!(lift.lowered, 0.75);
        assert_eq!(lift.height(ActionState::GoDown, 0.0), 1.0);
        assert_eq!(lift.height(ActionState::GoDown, 1.0), 0.75);
        assert_eq!(lift.height(ActionState::GoDown, 2.0), 0.75);
        assert_eq!(lift.height(ActionState::GoUp, 0.0), 0.75);
        assert_eq!(lift.height(ActionState::GoUp, 1.0), 1.0);
        assert_eq!(lift.height(ActionState::Done, 0.3), 1.0);
    }
}
