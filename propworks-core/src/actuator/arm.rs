//! Transport arm sequencer
//!
//! The arm addresses the concatenation of two containers: indices
//! `[0, inputs)` are input slots, `[inputs, inputs + outputs)` are output
//! slots. It steps its target one slot at a time, glides toward it each
//! tick, and on `act` lowers, picks or deposits, and raises again.
//!
//! Commands never fail loudly: `move_left`, `move_right` and `act` return
//! whether they were accepted.

use log::{debug, info, warn};

use super::motion::{ActionState, ArrivalTracker, LiftProfile};
use crate::config::{ArmConfig, ConfigError};
use crate::container::{Item, Point3};
use crate::error::SlotError;
use crate::traits::{ArmObserver, SlotStore};

/// Which container a combined slot index points into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotTarget {
    /// Input container slot
    Input(usize),
    /// Output container slot
    Output(usize),
}

/// Transport arm
#[derive(Debug, Clone)]
pub struct TransportArm {
    config: ArmConfig,
    input_count: usize,
    output_count: usize,
    /// Combined slot index being approached
    target: usize,
    /// +1 after stepping right, -1 after stepping left
    heading: f32,
    tracker: ArrivalTracker,
    carriage: Point3,
    lift: LiftProfile,
    action: ActionState,
    /// Progress through the current lower/raise phase, `[0, 1]`
    action_timer: f32,
    carrier: Option<Item>,
    moving: bool,
    /// Motor sound playing
    cue: bool,
    /// Last action state / cue reported to an observer
    reported_action: ActionState,
    reported_cue: bool,
}

impl TransportArm {
    /// Create an arm serving `inputs` and `outputs`, carriage at `carriage`
    ///
    /// The first target is the first output slot; the carriage's current
    /// height becomes the travel height.
    pub fn new(
        config: ArmConfig,
        inputs: &impl SlotStore,
        outputs: &impl SlotStore,
        carriage: Point3,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let input_count = inputs.slot_count();
        let output_count = outputs.slot_count();
        let total = input_count + output_count;
        if total == 0 {
            return Err(ConfigError::NoSlots);
        }
        let lift = LiftProfile::new(carriage.y, config.drop_height);

        Ok(Self {
            config,
            input_count,
            output_count,
            target: input_count.min(total - 1),
            heading: 1.0,
            tracker: ArrivalTracker::new(),
            carriage,
            lift,
            action: ActionState::Done,
            action_timer: 0.0,
            carrier: None,
            moving: false,
            cue: false,
            reported_action: ActionState::Done,
            reported_cue: false,
        })
    }

    /// Arm configuration
    pub fn config(&self) -> &ArmConfig {
        &self.config
    }

    /// Combined index of the slot being approached
    pub fn target_index(&self) -> usize {
        self.target
    }

    /// Target slot split into container and local index
    pub fn target(&self) -> SlotTarget {
        self.resolve(self.target)
    }

    /// Number of addressable slots
    pub fn slot_span(&self) -> usize {
        self.input_count + self.output_count
    }

    /// Current lower/raise state
    pub fn action_state(&self) -> ActionState {
        self.action
    }

    /// Item being carried
    pub fn carrier(&self) -> Option<&Item> {
        self.carrier.as_ref()
    }

    /// Carriage is still closing in on the target
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Carriage position
    pub fn carriage(&self) -> Point3 {
        self.carriage
    }

    /// Motor sound playing
    pub fn is_cue_playing(&self) -> bool {
        self.cue
    }

    /// Step the target one slot toward index 0
    pub fn move_left(&mut self) -> bool {
        if self.action != ActionState::Done || self.target == 0 {
            return false;
        }
        self.target -= 1;
        self.heading = -1.0;
        self.tracker.reset();
        debug!("arm target -> {}", self.target);
        true
    }

    /// Step the target one slot toward the last output
    pub fn move_right(&mut self) -> bool {
        if self.action != ActionState::Done || self.target >= self.slot_span() - 1 {
            return false;
        }
        self.target += 1;
        self.heading = 1.0;
        self.tracker.reset();
        debug!("arm target -> {}", self.target);
        true
    }

    /// Start a pick or deposit sequence at the target slot
    ///
    /// Accepted only when the carriage has stopped, no sequence is running,
    /// and either the target is an occupied, unsealed input and the carrier
    /// is empty, or the target is an occupied output vessel with room left
    /// in an unsealed store and the carrier is loaded.
    pub fn act(&mut self, inputs: &impl SlotStore, outputs: &impl SlotStore) -> bool {
        if self.moving || self.action != ActionState::Done {
            return false;
        }

        let allowed = match self.target() {
            SlotTarget::Input(slot) => self.carrier.is_none() && inputs.can_take(slot),
            SlotTarget::Output(slot) => {
                self.carrier.is_some()
                    && !outputs.is_sealed()
                    && matches!(
                        outputs.get(slot),
                        Ok(Some(vessel)) if vessel.inside.len() < self.config.vessel_capacity as usize
                    )
            }
        };
        if !allowed {
            return false;
        }

        self.action = ActionState::GoDown;
        self.action_timer = 0.0;
        self.cue = true;
        debug!("arm lowering at {:?}", self.target());
        true
    }

    /// Advance motion by `dt` seconds
    pub fn update(
        &mut self,
        dt: f32,
        inputs: &mut impl SlotStore,
        outputs: &mut impl SlotStore,
        observer: &mut dyn ArmObserver,
    ) {
        // Report changes made by act() since the last tick
        if self.reported_action != self.action {
            observer.on_action(self.reported_action, self.action);
            self.reported_action = self.action;
        }
        if self.reported_cue != self.cue {
            observer.on_motor(self.cue);
            self.reported_cue = self.cue;
        }

        self.travel(dt, &*inputs, &*outputs, observer);

        if self.action == ActionState::Done {
            return;
        }

        self.action_timer += self.config.action_rate * dt;
        self.carriage.y = self.lift.height(self.action, self.action_timer);
        if self.action_timer < 1.0 {
            return;
        }

        self.action_timer = 0.0;
        let finished = self.action;
        self.set_action(finished.next(), observer);
        match finished {
            ActionState::GoDown => self.reach(inputs, outputs, observer),
            ActionState::GoUp => self.set_cue(false, observer),
            ActionState::Done => {}
        }
    }

    /// Horizontal glide toward the target slot
    fn travel(
        &mut self,
        dt: f32,
        inputs: &impl SlotStore,
        outputs: &impl SlotStore,
        observer: &mut dyn ArmObserver,
    ) {
        let goal = match self.target_position(inputs, outputs) {
            Ok(goal) => goal,
            Err(e) => {
                warn!("arm target {} has no position: {}", self.target, e);
                return;
            }
        };

        let distance = self.carriage.horizontal_distance_sq(&goal);
        if self.tracker.approach(distance) {
            let step = self.heading * self.config.speed * dt;
            self.carriage = self.carriage.offset(&self.config.rail, step);
            if !self.moving {
                self.moving = true;
                self.set_cue(true, observer);
            }
        } else if self.moving {
            self.moving = false;
            self.set_cue(false, observer);
        }
    }

    /// Bottom of the lowering phase: pick up or deposit
    fn reach(
        &mut self,
        inputs: &mut impl SlotStore,
        outputs: &mut impl SlotStore,
        observer: &mut dyn ArmObserver,
    ) {
        match self.target() {
            SlotTarget::Input(slot) => match inputs.take(slot) {
                Ok(Some(item)) => {
                    info!("arm picked '{}' from input {}", item.id, slot);
                    observer.on_pick(slot, &item);
                    self.carrier = Some(item);
                }
                Ok(None) => warn!("arm reached empty input {}", slot),
                Err(e) => warn!("arm could not pick from input {}: {}", slot, e),
            },
            SlotTarget::Output(slot) => {
                let Some(item) = self.carrier.take() else {
                    return;
                };
                match outputs.get_mut(slot) {
                    Ok(Some(vessel)) => {
                        let count = vessel.absorb(item);
                        let layer = ArmConfig::layer_for(count);
                        info!(
                            "arm deposited into output {} (layer {}): '{}'",
                            slot, layer, vessel.id
                        );
                        observer.on_deposit(slot, layer, vessel);
                    }
                    Ok(None) => {
                        warn!("arm found no vessel at output {}", slot);
                        self.carrier = Some(item);
                    }
                    Err(e) => {
                        warn!("arm could not deposit into output {}: {}", slot, e);
                        self.carrier = Some(item);
                    }
                }
            }
        }
    }

    fn set_action(&mut self, to: ActionState, observer: &mut dyn ArmObserver) {
        if self.action != to {
            observer.on_action(self.action, to);
            self.action = to;
        }
        self.reported_action = self.action;
    }

    fn set_cue(&mut self, on: bool, observer: &mut dyn ArmObserver) {
        if self.cue != on {
            self.cue = on;
            observer.on_motor(on);
        }
        self.reported_cue = self.cue;
    }

    fn resolve(&self, index: usize) -> SlotTarget {
        if index < self.input_count {
            SlotTarget::Input(index)
        } else {
            SlotTarget::Output(index - self.input_count)
        }
    }

    fn target_position(
        &self,
        inputs: &impl SlotStore,
        outputs: &impl SlotStore,
    ) -> Result<Point3, SlotError> {
        match self.target() {
            SlotTarget::Input(slot) => inputs.position(slot),
            SlotTarget::Output(slot) => outputs.position(slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StationConfig;
    use crate::container::Container;
    use crate::station::ProcessingStation;
    use crate::traits::NullObserver;
    use alloc::string::String;
    use alloc::vec::Vec;

    // Exactly representable, so motion arithmetic in these tests is exact
    const DT: f32 = 0.25;

    #[derive(Default)]
    struct Recorder {
        actions: Vec<(ActionState, ActionState)>,
        motor: Vec<bool>,
        picks: Vec<(usize, String)>,
        deposits: Vec<(usize, u8, String)>,
    }

    impl ArmObserver for Recorder {
        fn on_action(&mut self, from: ActionState, to: ActionState) {
            self.actions.push((from, to));
        }

        fn on_motor(&mut self, running: bool) {
            self.motor.push(running);
        }

        fn on_pick(&mut self, slot: usize, item: &Item) {
            self.picks.push((slot, item.id.clone()));
        }

        fn on_deposit(&mut self, slot: usize, layer: u8, vessel: &Item) {
            self.deposits.push((slot, layer, vessel.id.clone()));
        }
    }

    struct Rig {
        arm: TransportArm,
        inputs: Container,
        outputs: Container,
    }

    impl Rig {
        /// Two inputs at x=0,1 and two outputs at x=2,3
        fn new() -> Self {
            let inputs =
                Container::new(&[Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)]).unwrap();
            let outputs =
                Container::new(&[Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0)]).unwrap();
            let arm = TransportArm::new(
                ArmConfig::default(),
                &inputs,
                &outputs,
                Point3::new(2.0, 1.0, 0.0),
            )
            .unwrap();
            Self {
                arm,
                inputs,
                outputs,
            }
        }

        fn tick(&mut self, observer: &mut dyn ArmObserver) {
            self.arm
                .update(DT, &mut self.inputs, &mut self.outputs, observer);
        }

        /// Tick until the carriage stops
        fn settle(&mut self) {
            for _ in 0..1000 {
                self.tick(&mut NullObserver);
                if !self.arm.is_moving() {
                    return;
                }
            }
            panic!("arm never settled");
        }

        fn act(&mut self) -> bool {
            self.arm.act(&self.inputs, &self.outputs)
        }

        /// Tick through a whole lower/raise sequence
        fn finish_sequence(&mut self, observer: &mut dyn ArmObserver) {
            for _ in 0..100 {
                self.tick(observer);
                if self.arm.action_state() == ActionState::Done {
                    return;
                }
            }
            panic!("sequence never finished");
        }

        fn go_to(&mut self, index: usize) {
            while self.arm.target_index() > index {
                assert!(self.arm.move_left());
            }
            while self.arm.target_index() < index {
                assert!(self.arm.move_right());
            }
            self.settle();
        }
    }

    #[test]
    fn test_initial_target_is_first_output() {
        let rig = Rig::new();
        assert_eq!(rig.arm.target_index(), 2);
        assert_eq!(rig.arm.target(), SlotTarget::Output(0));
        assert_eq!(rig.arm.action_state(), ActionState::Done);
        assert!(rig.arm.carrier().is_none());
    }

    #[test]
    fn test_move_bounds() {
        let mut rig = Rig::new();
        assert!(rig.arm.move_right());
        assert_eq!(rig.arm.target_index(), 3);
        assert!(!rig.arm.move_right());
        assert_eq!(rig.arm.target_index(), 3);

        for _ in 0..3 {
            assert!(rig.arm.move_left());
        }
        assert_eq!(rig.arm.target_index(), 0);
        assert!(!rig.arm.move_left());
        assert_eq!(rig.arm.target_index(), 0);
    }

    #[test]
    fn test_travel_stops_when_no_longer_closing_in() {
        let mut rig = Rig::new();
        rig.go_to(0);
        // Arrival is heuristic: within one step of the slot
        let x = rig.arm.carriage().x;
        assert!(x.abs() <= ArmConfig::default().speed * DT);
        assert!(!rig.arm.is_moving());
        assert!(!rig.arm.is_cue_playing());

        // Stays put once arrived
        let before = rig.arm.carriage();
        rig.tick(&mut NullObserver);
        assert_eq!(rig.arm.carriage(), before);
    }

    #[test]
    fn test_pick_completes_after_lowering_phase() {
        let mut rig = Rig::new();
        rig.inputs.add(Item::new("cat_head", "reagent")).unwrap();
        rig.go_to(0);

        let mut rec = Recorder::default();
        assert!(rig.act());
        assert_eq!(rig.arm.action_state(), ActionState::GoDown);

        // Halfway down: nothing picked yet, and a second act is ignored
        rig.tick(&mut rec);
        assert!(rig.arm.carrier().is_none());
        assert!(!rig.act());
        assert!(!rig.arm.move_left());
        assert!(!rig.arm.move_right());

        // 0.5s in: bottom reached
        rig.tick(&mut rec);
        assert_eq!(rig.arm.carrier().map(|i| i.id.as_str()), Some("cat_head"));
        assert_eq!(rig.arm.action_state(), ActionState::GoUp);
        assert_eq!(rig.inputs.is_empty(0), Ok(true));
        assert_eq!(rec.picks, [(0, String::from("cat_head"))]);

        rig.finish_sequence(&mut rec);
        assert_eq!(
            rec.actions,
            [
                (ActionState::Done, ActionState::GoDown),
                (ActionState::GoDown, ActionState::GoUp),
                (ActionState::GoUp, ActionState::Done),
            ]
        );
        assert_eq!(rec.motor, [true, false]);
        assert_eq!(rig.arm.carriage().y, 1.0);
    }

    #[test]
    fn test_lowering_reaches_drop_height() {
        let mut rig = Rig::new();
        rig.inputs.add(Item::new("a", "reagent")).unwrap();
        rig.go_to(0);
        assert!(rig.act());
        rig.tick(&mut NullObserver);
        rig.tick(&mut NullObserver);
        let lowered = 1.0 - ArmConfig::default().drop_height;
        assert!((rig.arm.carriage().y - lowered).abs() < 1e-6);
    }

    #[test]
    fn test_act_guards() {
        let mut rig = Rig::new();
        rig.outputs.add(Item::new("", "vial")).unwrap();
        rig.go_to(0);

        // Empty input
        assert!(!rig.act());

        // Empty carrier at an output
        rig.go_to(2);
        assert!(!rig.act());

        // Loaded carrier at an input
        rig.inputs.add(Item::new("a", "reagent")).unwrap();
        rig.inputs.add(Item::new("b", "reagent")).unwrap();
        rig.go_to(0);
        assert!(rig.act());
        rig.finish_sequence(&mut NullObserver);
        rig.go_to(1);
        assert!(!rig.act());

        // Output slot without a vessel
        rig.go_to(3);
        assert!(!rig.act());
    }

    #[test]
    fn test_act_refused_while_moving() {
        let mut rig = Rig::new();
        rig.inputs.add(Item::new("a", "reagent")).unwrap();
        rig.arm.move_left();
        rig.arm.move_left();
        rig.tick(&mut NullObserver);
        assert!(rig.arm.is_moving());
        rig.tick(&mut NullObserver);
        assert!(rig.arm.is_moving());
        assert!(!rig.act());
    }

    #[test]
    fn test_deposit_merges_id_and_layer() {
        let mut rig = Rig::new();
        rig.outputs.add(Item::new("", "vial")).unwrap();
        rig.inputs.add(Item::new("cat_head", "reagent")).unwrap();
        rig.inputs.add(Item::new("dino_tail", "reagent")).unwrap();

        let mut rec = Recorder::default();
        for input in 0..2 {
            rig.go_to(input);
            assert!(rig.act());
            rig.finish_sequence(&mut rec);
            rig.go_to(2);
            assert!(rig.act());
            rig.finish_sequence(&mut rec);
            assert!(rig.arm.carrier().is_none());
        }

        let vessel = rig.outputs.get(0).unwrap().unwrap();
        assert_eq!(vessel.id, "cat_head;dino_tail");
        assert_eq!(vessel.inside.len(), 2);
        assert_eq!(
            rec.deposits,
            [
                (0, 1, String::from("cat_head")),
                (0, 3, String::from("cat_head;dino_tail")),
            ]
        );
    }

    #[test]
    fn test_vessel_capacity() {
        let mut rig = Rig::new();
        let mut full = Item::new("v", "vial");
        for id in ["a", "b", "c", "d"] {
            full.absorb(Item::new(id, "reagent"));
        }
        let mut three = Item::new("w", "vial");
        for id in ["a", "b", "c"] {
            three.absorb(Item::new(id, "reagent"));
        }
        rig.outputs.add(full).unwrap();
        rig.outputs.add(three).unwrap();
        rig.inputs.add(Item::new("e", "reagent")).unwrap();

        rig.go_to(0);
        assert!(rig.act());
        rig.finish_sequence(&mut NullObserver);

        // Four deposits already: refused
        rig.go_to(2);
        assert!(!rig.act());

        // Three deposits: accepted, fourth layer is VESSEL_LAYERS[3] = 2
        let mut rec = Recorder::default();
        rig.go_to(3);
        assert!(rig.act());
        rig.finish_sequence(&mut rec);
        assert_eq!(rec.deposits, [(1, 2, String::from("w;a;b;c;e"))]);
        assert_eq!(rig.outputs.get(1).unwrap().unwrap().inside.len(), 4);
    }

    #[test]
    fn test_empty_span_rejected() {
        let empty = Container::new(&[]).unwrap();
        let result = TransportArm::new(ArmConfig::default(), &empty, &empty, Point3::ZERO);
        assert_eq!(result.err(), Some(ConfigError::NoSlots));
    }

    #[test]
    fn test_inputs_only_starts_on_last_slot() {
        let inputs = Container::new(&[Point3::ZERO, Point3::RIGHT]).unwrap();
        let outputs = Container::new(&[]).unwrap();
        let arm = TransportArm::new(ArmConfig::default(), &inputs, &outputs, Point3::ZERO).unwrap();
        assert_eq!(arm.target_index(), 1);
        assert_eq!(arm.slot_span(), 2);
    }

    /// Station at x=0 as the only input, one vessel at x=1
    fn station_rig(process_on_done: bool) -> (TransportArm, ProcessingStation, Container) {
        let config = StationConfig {
            slots: alloc::vec![Point3::new(0.0, 0.0, 0.0)],
            duration_s: 1.0,
            process_on_done,
            ..StationConfig::default()
        };
        let station = ProcessingStation::new(config).unwrap();
        let mut outputs = Container::new(&[Point3::new(1.0, 0.0, 0.0)]).unwrap();
        outputs.add(Item::new("", "vial")).unwrap();
        let arm = TransportArm::new(
            ArmConfig::default(),
            &station,
            &outputs,
            Point3::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        (arm, station, outputs)
    }

    #[test]
    fn test_act_refused_on_sealed_station() {
        let (mut arm, mut station, mut outputs) = station_rig(true);
        station.add(Item::new("cat_head", "reagent")).unwrap();
        assert!(station.is_busy());

        assert!(arm.move_left());
        for _ in 0..8 {
            arm.update(DT, &mut station, &mut outputs, &mut NullObserver);
        }
        assert!(!arm.is_moving());
        assert_eq!(arm.target(), SlotTarget::Input(0));

        assert!(!arm.act(&station, &outputs));
        assert_eq!(arm.action_state(), ActionState::Done);
        assert!(arm.carrier().is_none());
    }

    #[test]
    fn test_pick_from_holding_station() {
        let (mut arm, mut station, mut outputs) = station_rig(false);
        station.add(Item::new("cat_head", "reagent")).unwrap();
        assert!(!station.is_busy());

        assert!(arm.move_left());
        for _ in 0..8 {
            arm.update(DT, &mut station, &mut outputs, &mut NullObserver);
        }
        assert!(arm.act(&station, &outputs));
        for _ in 0..4 {
            arm.update(DT, &mut station, &mut outputs, &mut NullObserver);
        }
        assert_eq!(arm.action_state(), ActionState::Done);
        assert_eq!(arm.carrier().map(|i| i.id.as_str()), Some("cat_head"));
        assert!(station.slots().is_vacant());
    }
}
