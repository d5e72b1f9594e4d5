//! Station phase machine
//!
//! Every station behavior is a function of the current phase and an
//! event. Invalid pairs leave the phase unchanged.

/// Station phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StationPhase {
    /// All slots empty
    Idle,
    /// Some slots filled, or full with automatic processing disabled
    Loading,
    /// Full; waiting out the pre-roll before the timer starts
    PreRoll,
    /// Timer counting down
    Processing,
    /// Timer elapsed; result being emitted and slots cleared
    Complete,
}

/// Events that drive phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StationEvent {
    /// An item entered a slot without filling the station
    ItemLoaded,
    /// The last free slot was filled and processing is enabled
    SlotsFilled,
    /// Pre-roll delay over
    PreRollElapsed,
    /// Process timer reached zero
    TimerElapsed,
    /// Result emitted and slots cleared
    Reset,
    /// Every slot was emptied from outside (arm pick-ups)
    Emptied,
}

impl StationPhase {
    /// Station refuses new items in this phase
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            StationPhase::PreRoll | StationPhase::Processing | StationPhase::Complete
        )
    }

    /// Process timer is counting
    pub fn is_running(&self) -> bool {
        *self == StationPhase::Processing
    }

    /// Process the event and return the next phase
    pub fn transition(self, event: StationEvent) -> Self {
        use StationEvent::*;
        use StationPhase::*;

        match (self, event) {
            // Loading
            (Idle, ItemLoaded) => Loading,
            (Loading, ItemLoaded) => Loading,
            (Idle, SlotsFilled) => PreRoll,
            (Loading, SlotsFilled) => PreRoll,
            (Loading, Emptied) => Idle,

            // Timed job
            (PreRoll, PreRollElapsed) => Processing,
            (Processing, TimerElapsed) => Complete,
            (Complete, Reset) => Idle,

            // Default: stay in current phase
            _ => self,
        }
    }
}
