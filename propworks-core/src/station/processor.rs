//! Station job execution
//!
//! Tracks slot contents, the pre-roll delay, the job countdown and the
//! post-completion readout hold. Driven entirely by [`ProcessingStation::update`].

use alloc::string::String;
use log::{debug, info};

use super::machine::{StationEvent, StationPhase};
use super::readout::Readout;
use crate::config::{ConfigError, StationConfig};
use crate::container::{join_ids, Container, Item, Point3};
use crate::error::SlotError;
use crate::traits::{SlotStore, StationObserver};

/// A running job
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProcessingJob {
    /// Time left on the countdown (seconds, never negative)
    pub remaining_s: f32,
    /// Countdown is active (false during pre-roll)
    pub is_running: bool,
}

/// Processing station
///
/// Accepts items of one configured kind until every slot is filled, then
/// (if enabled) waits out a short pre-roll, counts down the configured
/// duration, emits the `;`-joined ids of its contents and clears itself.
#[derive(Debug, Clone)]
pub struct ProcessingStation {
    config: StationConfig,
    slots: Container,
    phase: StationPhase,
    /// Phase last reported to an observer
    reported: StationPhase,
    /// Pre-roll time left (seconds)
    preroll_left_s: f32,
    /// Countdown time left (seconds)
    remaining_s: f32,
    readout: Readout,
    next_text: String,
    /// Time left before `next_text` replaces the end text
    hold_left_s: Option<f32>,
}

impl ProcessingStation {
    /// Create an empty station
    pub fn new(config: StationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let slots = Container::new(&config.slots).map_err(|_| ConfigError::TooManySlots)?;
        Ok(Self {
            config,
            slots,
            phase: StationPhase::Idle,
            reported: StationPhase::Idle,
            preroll_left_s: 0.0,
            remaining_s: 0.0,
            readout: Readout::Blank,
            next_text: String::new(),
            hold_left_s: None,
        })
    }

    /// Station configuration
    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    /// Current phase
    pub fn phase(&self) -> StationPhase {
        self.phase
    }

    /// Station refuses new items (pre-roll, processing)
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    /// Underlying slots
    pub fn slots(&self) -> &Container {
        &self.slots
    }

    /// Current job, if the station is full and processing
    pub fn job(&self) -> Option<ProcessingJob> {
        match self.phase {
            StationPhase::PreRoll => Some(ProcessingJob {
                remaining_s: self.config.duration_s,
                is_running: false,
            }),
            StationPhase::Processing => Some(ProcessingJob {
                remaining_s: self.remaining_s,
                is_running: true,
            }),
            _ => None,
        }
    }

    /// Job progress in percent, while processing
    ///
    /// `(D - remaining) * 100 / D`, clamped to `[0, 100]`.
    pub fn progress(&self) -> Option<f32> {
        if self.phase.is_running() {
            Some(self.progress_pct())
        } else {
            None
        }
    }

    /// Countdown time left (seconds) while a job is pending
    pub fn remaining(&self) -> Option<f32> {
        self.job().map(|job| job.remaining_s)
    }

    /// What the readout shows
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// Text the readout switches to after the end text hold
    pub fn set_next_text(&mut self, text: impl Into<String>) {
        self.next_text = text.into();
    }

    /// Replace the readout immediately
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.readout = Readout::Text(text.into());
    }

    /// Place an item in the lowest free slot
    ///
    /// Declines with [`SlotError::Capacity`] while busy or full and with
    /// [`SlotError::WrongKind`] when the admission filter does not match.
    /// A declined item is dropped and the station is left unchanged.
    pub fn add(&mut self, item: Item) -> Result<usize, SlotError> {
        if self.phase.is_busy() {
            debug!("station busy, refusing '{}'", item.id);
            return Err(SlotError::Capacity);
        }
        if !item.is_accepted_by(self.config.accepts.as_ref()) {
            debug!(
                "station refusing '{}' of kind '{}'",
                item.id,
                item.kind.as_str()
            );
            return Err(SlotError::WrongKind);
        }

        let index = self.slots.add(item)?;

        if self.slots.is_full() && self.config.process_on_done {
            self.preroll_left_s = self.config.preroll_s;
            self.phase = self.phase.transition(StationEvent::SlotsFilled);
            debug!("station full, pre-roll {}s", self.config.preroll_s);
        } else {
            self.phase = self.phase.transition(StationEvent::ItemLoaded);
        }

        Ok(index)
    }

    /// Advance timers by `dt` seconds
    ///
    /// Call once per tick. Notifications go to `observer`; the completion
    /// hook fires exactly once per job.
    pub fn update(&mut self, dt: f32, observer: &mut dyn StationObserver) {
        // Report transitions made by add/take since the last tick
        if self.reported != self.phase {
            observer.on_phase(self.reported, self.phase);
            self.reported = self.phase;
        }

        if let Some(left) = self.hold_left_s {
            let left = left - dt;
            if left <= 0.0 {
                self.hold_left_s = None;
                self.readout = Readout::Text(self.next_text.clone());
                observer.on_readout(&self.readout);
            } else {
                self.hold_left_s = Some(left);
            }
        }

        match self.phase {
            StationPhase::PreRoll => {
                self.preroll_left_s -= dt;
                if self.preroll_left_s <= 0.0 {
                    self.remaining_s = self.config.duration_s;
                    self.apply(StationEvent::PreRollElapsed, observer);
                }
            }
            StationPhase::Processing => {
                self.remaining_s -= dt;
                if self.remaining_s <= 0.0 {
                    self.remaining_s = 0.0;
                    self.readout = Readout::Progress(100.0);
                    observer.on_readout(&self.readout);
                    self.finish_job(observer);
                } else {
                    self.readout = Readout::Progress(self.progress_pct());
                    observer.on_readout(&self.readout);
                }
            }
            _ => {}
        }
    }

    /// Emit the result, clear the slots and return to idle
    fn finish_job(&mut self, observer: &mut dyn StationObserver) {
        self.apply(StationEvent::TimerElapsed, observer);

        let result = join_ids(self.slots.items().map(|item| item.id.as_str()));
        info!("station complete: '{}'", result);
        observer.on_complete(&result);

        self.slots.clear();
        self.readout = Readout::Text(self.config.end_text.clone());
        observer.on_readout(&self.readout);
        self.hold_left_s = Some(self.config.display_hold_s);

        self.apply(StationEvent::Reset, observer);
    }

    fn apply(&mut self, event: StationEvent, observer: &mut dyn StationObserver) {
        let from = self.phase;
        self.phase = from.transition(event);
        if self.phase != from {
            debug!("station {:?} -> {:?}", from, self.phase);
            observer.on_phase(from, self.phase);
        }
        self.reported = self.phase;
    }

    fn progress_pct(&self) -> f32 {
        let d = self.config.duration_s;
        ((d - self.remaining_s) * 100.0 / d).clamp(0.0, 100.0)
    }
}

impl SlotStore for ProcessingStation {
    fn slot_count(&self) -> usize {
        self.slots.slot_count()
    }

    fn is_empty(&self, index: usize) -> Result<bool, SlotError> {
        self.slots.is_empty(index)
    }

    fn get(&self, index: usize) -> Result<Option<&Item>, SlotError> {
        self.slots.get(index)
    }

    fn is_sealed(&self) -> bool {
        self.phase.is_busy()
    }

    /// Contents are sealed while a job is pending
    fn get_mut(&mut self, index: usize) -> Result<Option<&mut Item>, SlotError> {
        if self.phase.is_busy() {
            return Err(SlotError::InvalidState);
        }
        self.slots.get_mut(index)
    }

    /// Contents are sealed while a job is pending
    fn take(&mut self, index: usize) -> Result<Option<Item>, SlotError> {
        if self.phase.is_busy() {
            return Err(SlotError::InvalidState);
        }
        let item = self.slots.take(index)?;
        if item.is_some() && self.slots.is_vacant() {
            self.phase = self.phase.transition(StationEvent::Emptied);
        }
        Ok(item)
    }

    fn position(&self, index: usize) -> Result<Point3, SlotError> {
        self.slots.position(index)
    }
}
