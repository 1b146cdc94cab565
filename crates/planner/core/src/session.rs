//! Observable planner state.

use std::cell::RefCell;

use crate::error::{EmitError, RequestError};
use crate::event::ChangeEvent;
use crate::gear::{EquippedItem, Gear};
use crate::proto::{
    Buffs, ComputeStatsRequest, Consumes, Encounter, IndividualSimRequest, ItemSlot, Race, Stats,
};
use crate::request::{ClassAgent, ClassOptions, ClassSpec, RequestBuilder, Talents};

/// Every setting a request is built from, each with its own change event.
///
/// Setters take `&self` so inputs and listeners can share the session behind
/// an `Rc`. A setter whose value equals the current one does nothing;
/// otherwise it stores the value, emits the field's event, then emits
/// [`Session::changed`]. Getters return copies.
#[derive(Debug)]
pub struct Session {
    race: RefCell<Race>,
    gear: RefCell<Gear>,
    buffs: RefCell<Buffs>,
    consumes: RefCell<Consumes>,
    custom_stats: RefCell<Stats>,
    encounter: RefCell<Encounter>,
    agent: RefCell<ClassAgent>,
    talents: RefCell<Talents>,
    class_options: RefCell<ClassOptions>,

    pub race_changed: ChangeEvent,
    pub gear_changed: ChangeEvent,
    pub buffs_changed: ChangeEvent,
    pub consumes_changed: ChangeEvent,
    pub custom_stats_changed: ChangeEvent,
    pub encounter_changed: ChangeEvent,
    pub agent_changed: ChangeEvent,
    pub talents_changed: ChangeEvent,
    pub class_options_changed: ChangeEvent,
    /// Fires after any field event.
    pub changed: ChangeEvent,
}

impl Session {
    /// A session for `class` with empty gear and default everything else.
    pub fn new(class: ClassSpec) -> Self {
        Self {
            race: RefCell::new(Race::default()),
            gear: RefCell::new(Gear::empty()),
            buffs: RefCell::new(Buffs::default()),
            consumes: RefCell::new(Consumes::default()),
            custom_stats: RefCell::new(Stats::zero()),
            encounter: RefCell::new(Encounter::default()),
            agent: RefCell::new(class.agent),
            talents: RefCell::new(class.talents),
            class_options: RefCell::new(class.options),

            race_changed: ChangeEvent::new("race"),
            gear_changed: ChangeEvent::new("gear"),
            buffs_changed: ChangeEvent::new("buffs"),
            consumes_changed: ChangeEvent::new("consumes"),
            custom_stats_changed: ChangeEvent::new("custom_stats"),
            encounter_changed: ChangeEvent::new("encounter"),
            agent_changed: ChangeEvent::new("agent"),
            talents_changed: ChangeEvent::new("talents"),
            class_options_changed: ChangeEvent::new("class_options"),
            changed: ChangeEvent::new("session"),
        }
    }

    pub fn race(&self) -> Race {
        *self.race.borrow()
    }

    pub fn set_race(&self, race: Race) -> Result<(), EmitError> {
        self.update(&self.race, race, &self.race_changed)
    }

    pub fn gear(&self) -> Gear {
        self.gear.borrow().clone()
    }

    pub fn set_gear(&self, gear: Gear) -> Result<(), EmitError> {
        self.update(&self.gear, gear, &self.gear_changed)
    }

    /// Replaces the item in one slot.
    pub fn equip(&self, slot: ItemSlot, item: Option<EquippedItem>) -> Result<(), EmitError> {
        let gear = self.gear.borrow().with_equipped_item(slot, item);
        self.set_gear(gear)
    }

    pub fn buffs(&self) -> Buffs {
        self.buffs.borrow().clone()
    }

    pub fn set_buffs(&self, buffs: Buffs) -> Result<(), EmitError> {
        self.update(&self.buffs, buffs, &self.buffs_changed)
    }

    pub fn consumes(&self) -> Consumes {
        self.consumes.borrow().clone()
    }

    pub fn set_consumes(&self, consumes: Consumes) -> Result<(), EmitError> {
        self.update(&self.consumes, consumes, &self.consumes_changed)
    }

    pub fn custom_stats(&self) -> Stats {
        *self.custom_stats.borrow()
    }

    pub fn set_custom_stats(&self, stats: Stats) -> Result<(), EmitError> {
        self.update(&self.custom_stats, stats, &self.custom_stats_changed)
    }

    pub fn encounter(&self) -> Encounter {
        self.encounter.borrow().clone()
    }

    pub fn set_encounter(&self, encounter: Encounter) -> Result<(), EmitError> {
        self.update(&self.encounter, encounter, &self.encounter_changed)
    }

    pub fn agent(&self) -> ClassAgent {
        self.agent.borrow().clone()
    }

    pub fn set_agent(&self, agent: ClassAgent) -> Result<(), EmitError> {
        self.update(&self.agent, agent, &self.agent_changed)
    }

    pub fn talents(&self) -> Talents {
        self.talents.borrow().clone()
    }

    pub fn set_talents(&self, talents: Talents) -> Result<(), EmitError> {
        self.update(&self.talents, talents, &self.talents_changed)
    }

    pub fn class_options(&self) -> ClassOptions {
        self.class_options.borrow().clone()
    }

    pub fn set_class_options(&self, options: ClassOptions) -> Result<(), EmitError> {
        self.update(&self.class_options, options, &self.class_options_changed)
    }

    /// Switches agent, talents and options together.
    pub fn set_class_spec(&self, class: ClassSpec) -> Result<(), EmitError> {
        let agent = self.set_agent(class.agent);
        let talents = self.set_talents(class.talents);
        let options = self.set_class_options(class.options);
        EmitError::merge(EmitError::merge(agent, talents), options)
    }

    pub fn compute_stats_request(&self) -> Result<ComputeStatsRequest, RequestError> {
        self.with_builder(|builder| builder.compute_stats_request())
    }

    pub fn individual_sim_request(
        &self,
        iterations: i32,
        debug: bool,
    ) -> Result<IndividualSimRequest, RequestError> {
        self.with_builder(|builder| builder.individual_sim_request(iterations, debug))
    }

    fn with_builder<R>(&self, build: impl FnOnce(&RequestBuilder<'_>) -> R) -> R {
        let buffs = self.buffs.borrow();
        let consumes = self.consumes.borrow();
        let custom_stats = self.custom_stats.borrow();
        let encounter = self.encounter.borrow();
        let gear = self.gear.borrow();
        let agent = self.agent.borrow();
        let talents = self.talents.borrow();
        let class_options = self.class_options.borrow();

        build(&RequestBuilder {
            buffs: &buffs,
            consumes: &consumes,
            custom_stats: &custom_stats,
            encounter: &encounter,
            gear: &gear,
            race: self.race(),
            agent: &agent,
            talents: &talents,
            class_options: &class_options,
        })
    }

    fn update<T: PartialEq>(
        &self,
        cell: &RefCell<T>,
        value: T,
        field_event: &ChangeEvent,
    ) -> Result<(), EmitError> {
        if *cell.borrow() == value {
            return Ok(());
        }
        cell.replace(value);

        tracing::trace!(field = field_event.name(), "session field changed");
        EmitError::merge(field_event.notify(), self.changed.notify())
    }
}
