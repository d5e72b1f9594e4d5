//! Notification sinks for stations and arms
//!
//! All methods except the station's completion hook have empty defaults,
//! so a host only implements what it reacts to.

use crate::actuator::ActionState;
use crate::container::Item;
use crate::station::{Readout, StationPhase};

/// Receives station notifications
pub trait StationObserver {
    /// A job finished; `result` is the `;`-joined ids of the consumed items
    fn on_complete(&mut self, result: &str);

    /// Phase changed (lid closing, in-progress cue, lid opening)
    fn on_phase(&mut self, _from: StationPhase, _to: StationPhase) {}

    /// Readout changed
    fn on_readout(&mut self, _readout: &Readout) {}
}

/// Receives arm notifications
pub trait ArmObserver {
    /// Action sequence advanced
    fn on_action(&mut self, _from: ActionState, _to: ActionState) {}

    /// Motor cue started (`true`) or stopped (`false`)
    fn on_motor(&mut self, _running: bool) {}

    /// Carrier loaded from input slot `slot`
    fn on_pick(&mut self, _slot: usize, _item: &Item) {}

    /// Carrier emptied into output slot `slot`
    ///
    /// `layer` is the vessel layer the deposit shows up in; `vessel` is the
    /// destination after the deposit.
    fn on_deposit(&mut self, _slot: usize, _layer: u8, _vessel: &Item) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl StationObserver for NullObserver {
    fn on_complete(&mut self, _result: &str) {}
}

impl ArmObserver for NullObserver {}

/// Adapts a single-argument completion callback into a [`StationObserver`]
pub struct OnComplete<F>(pub F);

impl<F: FnMut(&str)> StationObserver for OnComplete<F> {
    fn on_complete(&mut self, result: &str) {
        (self.0)(result)
    }
}
