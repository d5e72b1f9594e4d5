//! Scene execution
//!
//! Wires a processing station as the arm's input slots and a plain
//! container as its outputs, then ticks both at a fixed rate while the
//! timeline feeds commands in. Every finished job is handed to the
//! creature assembler.

use std::collections::{BTreeMap, VecDeque};

use log::{debug, info, warn};
use propworks_core::assembly::{plan_print, PartInfo, PrintPlan};
use propworks_core::traits::{ArmObserver, Picker, StationObserver};
use propworks_core::{
    ActionState, Container, Item, ProcessingStation, StationPhase, TransportArm,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{Command, SceneConfig, SceneError};

/// Random picker for assembly choices
pub struct RandPicker<R: Rng>(pub R);

impl<R: Rng> Picker for RandPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// What happened during a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Ticks executed
    pub ticks: u64,
    /// Result ids of finished jobs, in order
    pub completed: Vec<String>,
    /// Print plans produced from finished jobs
    pub prints: Vec<PrintPlan>,
    /// Items the station declined
    pub refused: usize,
    /// Arm commands ignored because the arm was busy or out of range
    pub ignored: usize,
    /// Items the arm picked up
    pub picks: usize,
    /// Items the arm deposited
    pub deposits: usize,
    /// Final output vessel ids, in slot order
    pub vessels: Vec<String>,
}

/// Station notifications, mapped to the cues an engine would play
#[derive(Debug, Default)]
struct StationLog {
    finished: Vec<String>,
}

impl StationObserver for StationLog {
    fn on_complete(&mut self, result: &str) {
        self.finished.push(result.to_string());
    }

    fn on_phase(&mut self, _from: StationPhase, to: StationPhase) {
        match to {
            StationPhase::PreRoll => debug!("station: lid closing"),
            StationPhase::Processing => debug!("station: in progress"),
            StationPhase::Complete => debug!("station: lid opening"),
            _ => {}
        }
    }
}

#[derive(Debug, Default)]
struct ArmLog {
    picks: usize,
    deposits: usize,
}

impl ArmObserver for ArmLog {
    fn on_action(&mut self, _from: ActionState, to: ActionState) {
        debug!("arm: {:?}", to);
    }

    fn on_motor(&mut self, running: bool) {
        debug!("arm: motor {}", if running { "on" } else { "off" });
    }

    fn on_pick(&mut self, _slot: usize, _item: &Item) {
        self.picks += 1;
    }

    fn on_deposit(&mut self, _slot: usize, _layer: u8, _vessel: &Item) {
        self.deposits += 1;
    }
}

/// A loaded scene, ready to tick
pub struct Scene {
    dt: f32,
    total_ticks: u64,
    station: ProcessingStation,
    outputs: Container,
    arm: TransportArm,
    /// Pending commands with the tick they are due on
    timeline: VecDeque<(u64, Command)>,
    catalog: BTreeMap<String, PartInfo>,
    picker: RandPicker<StdRng>,
    station_log: StationLog,
    arm_log: ArmLog,
    summary: Summary,
}

impl Scene {
    /// Build the props described by `config`
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        let SceneConfig {
            tick_hz,
            duration_s,
            seed,
            station,
            outputs,
            vessels,
            arm,
            carriage,
            catalog,
            timeline,
            ..
        } = config;

        if tick_hz == 0 || !(duration_s.is_finite() && duration_s > 0.0) {
            return Err(SceneError::InvalidTiming);
        }

        let station = ProcessingStation::new(station)?;
        let mut outputs = Container::new(&outputs)?;
        for vessel in vessels {
            outputs.add(vessel)?;
        }
        let arm = TransportArm::new(arm, &station, &outputs, carriage)?;

        let hz = tick_hz as f32;
        let mut timeline: Vec<(u64, Command)> = timeline
            .into_iter()
            .map(|c| ((c.at_s * hz).round() as u64, c.command))
            .collect();
        // Stable sort keeps same-tick commands in file order
        timeline.sort_by_key(|(tick, _)| *tick);

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            dt: 1.0 / hz,
            total_ticks: (duration_s * hz).ceil() as u64,
            station,
            outputs,
            arm,
            timeline: timeline.into(),
            catalog,
            picker: RandPicker(rng),
            station_log: StationLog::default(),
            arm_log: ArmLog::default(),
            summary: Summary::default(),
        })
    }

    pub fn station(&self) -> &ProcessingStation {
        &self.station
    }

    pub fn outputs(&self) -> &Container {
        &self.outputs
    }

    pub fn arm(&self) -> &TransportArm {
        &self.arm
    }

    /// Simulated time at the current tick (seconds)
    pub fn now(&self) -> f32 {
        self.summary.ticks as f32 * self.dt
    }

    /// Apply due commands, then advance everything by one tick
    pub fn step(&mut self) {
        let tick = self.summary.ticks;
        while self.timeline.front().map_or(false, |(due, _)| *due <= tick) {
            if let Some((_, command)) = self.timeline.pop_front() {
                self.apply(command);
            }
        }

        self.station.update(self.dt, &mut self.station_log);
        self.arm.update(
            self.dt,
            &mut self.station,
            &mut self.outputs,
            &mut self.arm_log,
        );

        for result in std::mem::take(&mut self.station_log.finished) {
            self.assemble(&result);
            self.summary.completed.push(result);
        }

        self.summary.ticks += 1;
    }

    /// Run to the configured duration and report
    pub fn run(mut self) -> Summary {
        while self.summary.ticks < self.total_ticks {
            self.step();
        }
        if !self.timeline.is_empty() {
            warn!(
                "{} commands scheduled past the end of the scene were skipped",
                self.timeline.len()
            );
        }
        self.finish()
    }

    fn finish(self) -> Summary {
        let mut summary = self.summary;
        summary.picks = self.arm_log.picks;
        summary.deposits = self.arm_log.deposits;
        summary.vessels = self.outputs.items().map(|v| v.id.clone()).collect();
        summary
    }

    fn apply(&mut self, command: Command) {
        debug!("t={:.2}s {:?}", self.now(), command);
        let accepted = match command {
            Command::Place(item) => {
                let id = item.id.clone();
                match self.station.add(item) {
                    Ok(slot) => info!("placed '{}' in station slot {}", id, slot),
                    Err(e) => {
                        warn!("station refused '{}': {}", id, e);
                        self.summary.refused += 1;
                    }
                }
                return;
            }
            Command::Left => self.arm.move_left(),
            Command::Right => self.arm.move_right(),
            Command::Act => self.arm.act(&self.station, &self.outputs),
            Command::SetNextText(text) => {
                self.station.set_next_text(text);
                return;
            }
            Command::SetText(text) => {
                self.station.set_text(text);
                return;
            }
        };
        if !accepted {
            debug!("arm ignored command at target {}", self.arm.target_index());
            self.summary.ignored += 1;
        }
    }

    fn assemble(&mut self, result: &str) {
        match plan_print(result, &self.catalog, &mut self.picker) {
            Ok(Some(plan)) => {
                info!(
                    "print: base '{}', head {:?}, tail {:?}",
                    plan.base_key, plan.head, plan.tail
                );
                self.summary.prints.push(plan);
            }
            Ok(None) => info!("nothing printable in '{}'", result),
            Err(e) => warn!("cannot print '{}': {}", result, e),
        }
    }
}

/// Build and run a scene
pub fn run(config: SceneConfig) -> Result<Summary, SceneError> {
    let scene = Scene::new(config)?;
    Ok(scene.run())
}
