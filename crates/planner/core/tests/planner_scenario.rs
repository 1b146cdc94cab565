use std::cell::Cell;
use std::rc::Rc;

use planner_core::proto::{BalanceDruidAgent, PlayerSpec, PrimarySpell, Race, TristateEffect};
use planner_core::{
    ClassAgent, ClassSpec, EnchantId, EquippedItem, Gear, GemId, IconId, IconInput, Input,
    InputConfig, InputWidget, ItemId, ItemSlot, RequestError, Session,
};
use serde_json::json;

/// A numeric text field standing in for a real UI control.
#[derive(Default)]
struct NumberField {
    value: i32,
}

impl InputWidget<i32> for NumberField {
    fn input_value(&self) -> i32 {
        self.value
    }

    fn set_input_value(&mut self, value: i32) {
        self.value = value;
    }

    fn set_enabled(&mut self, _enabled: bool) {}
}

#[derive(Default)]
struct RaceDropdown {
    selected: Race,
    enabled: bool,
}

impl InputWidget<Race> for RaceDropdown {
    fn input_value(&self) -> Race {
        self.selected
    }

    fn set_input_value(&mut self, value: Race) {
        self.selected = value;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

fn druid_session() -> Rc<Session> {
    let class = ClassSpec::from_raw(
        &json!({ "primary_spell": "starfire", "faerie_fire": false }),
        &json!({ "moonkin_form": true, "natures_grace": true }),
        &json!({ "innervate_target": { "target_index": 0 } }),
    )
    .expect("druid inputs should classify");
    Rc::new(Session::new(class))
}

/// End-to-end planning session.
///
/// 1. A balance druid session is created from opaque class inputs
/// 2. Controls are bound to race, encounter and a buff icon
/// 3. Edits flow widget → session → every other bound widget
/// 4. Gear is equipped slot by slot
/// 5. Requests built from the final state are deterministic
#[test]
fn test_complete_planning_scenario() {
    // ================================================================
    // PHASE 1: Session setup
    // ================================================================
    let session = druid_session();
    let any_change = Rc::new(Cell::new(0));
    let sink = Rc::clone(&any_change);
    session.changed.subscribe(move |_| sink.set(sink.get() + 1));

    // ================================================================
    // PHASE 2: Bind controls
    // ================================================================
    let race_config = InputConfig::new(
        |session: &Session| &session.race_changed,
        |session: &Session| session.race(),
        |session: &Session, race| session.set_race(race),
    )
    .label("Race");
    let race_input = Input::new(Rc::clone(&session), race_config, RaceDropdown::default());
    race_input.init();

    let duration_config = InputConfig::new(
        |session: &Session| &session.encounter_changed,
        |session: &Session| session.encounter().duration as i32,
        |session: &Session, seconds: i32| {
            let mut encounter = session.encounter();
            encounter.duration = f64::from(seconds);
            session.set_encounter(encounter)
        },
    )
    .label("Duration");
    let duration_input = Input::new(Rc::clone(&session), duration_config, NumberField::default());
    duration_input.init();
    assert_eq!(duration_input.displayed_value(), 180);

    let moonkin = IconInput::tristate_buff(IconId::Spell(24907), IconId::Item(32387), "moonkin_aura")
        .expect("moonkin_aura is a buff field");
    let moonkin_input = Input::new(Rc::clone(&session), moonkin.input_config(), NumberField::default());
    moonkin_input.init();

    // ================================================================
    // PHASE 3: Edits
    // ================================================================
    race_input
        .edit(|dropdown| dropdown.selected = Race::NightElf)
        .expect("no listener fails");
    assert_eq!(session.race(), Race::NightElf);
    assert!(race_input.with_widget(|dropdown| dropdown.enabled));

    duration_input
        .edit(|field| field.value = 300)
        .expect("no listener fails");
    assert_eq!(session.encounter().duration, 300.0);

    moonkin_input
        .edit(|field| field.value = 1)
        .expect("no listener fails");
    assert_eq!(session.buffs().moonkin_aura, TristateEffect::Regular);

    let mut buffs = session.buffs();
    buffs.moonkin_aura = TristateEffect::Improved;
    session.set_buffs(buffs).expect("no listener fails");
    assert_eq!(moonkin_input.displayed_value(), 2);

    assert_eq!(any_change.get(), 4);

    // ================================================================
    // PHASE 4: Gear
    // ================================================================
    let weapon = EquippedItem::new(ItemId(12345));
    let helm = EquippedItem::new(ItemId(24266))
        .with_enchant(Some(EnchantId(29191)))
        .with_gem(0, Some(GemId(34220)))
        .expect("first socket exists");
    session
        .equip(ItemSlot::MainHand, Some(weapon))
        .expect("no listener fails");
    session
        .equip(ItemSlot::Head, Some(helm.clone()))
        .expect("no listener fails");
    assert_eq!(session.gear().equipped_count(), 2);
    assert_eq!(session.gear().get(ItemSlot::Head), Some(&helm));

    // ================================================================
    // PHASE 5: Requests
    // ================================================================
    let first = session
        .individual_sim_request(500, false)
        .expect("druid inputs are consistent");
    let second = session
        .individual_sim_request(500, false)
        .expect("druid inputs are consistent");
    assert_eq!(first, second);

    assert_eq!(first.player.options.race, Race::NightElf);
    assert_eq!(first.encounter.duration, 300.0);
    assert_eq!(first.gcd_min, 0.75);
    assert_eq!(first.player.equipment.items[0].gems, vec![34220]);
    match &first.player.options.spec {
        Some(PlayerSpec::BalanceDruid(druid)) => {
            assert_eq!(druid.agent.primary_spell, PrimarySpell::Starfire);
            assert!(druid.talents.moonkin_form);
            assert!(druid.talents.natures_grace);
        }
        other => panic!("expected balance druid payload, got {other:?}"),
    }
}

/// The widget, not the object, is the source of an edit; re-emitting the
/// object's event afterwards must not move either side.
#[test]
fn test_edit_then_reemit_is_stable() {
    let session = druid_session();
    session.set_race(Race::Tauren).expect("no listeners yet");

    let config = InputConfig::new(
        |session: &Session| &session.race_changed,
        |session: &Session| session.race(),
        |session: &Session, race| session.set_race(race),
    );
    let input = Input::new(Rc::clone(&session), config, RaceDropdown::default());
    input.init();
    assert_eq!(input.displayed_value(), Race::Tauren);

    input.edit(|dropdown| dropdown.selected = Race::Troll30).expect("no listener fails");
    assert_eq!(session.race(), Race::Troll30);

    session.race_changed.notify().expect("no listener fails");
    assert_eq!(input.displayed_value(), Race::Troll30);
    assert_eq!(session.race(), Race::Troll30);
}

/// Changing only the agent to another class leaves talents and options
/// behind; the request must fail instead of mixing classes.
#[test]
fn test_agent_switch_without_talents_is_rejected() {
    let session = druid_session();
    let shaman = ClassAgent::classify(&json!({ "type": "cl_on_clearcast" }))
        .expect("shaman agent shape");

    session.set_agent(shaman).expect("no listeners");
    let error = session
        .compute_stats_request()
        .expect_err("druid talents do not fit a shaman agent");
    assert!(matches!(error, RequestError::UnrecognizedConfiguration { .. }));

    let shaman_class = ClassSpec::from_raw(
        &json!({ "type": "cl_on_clearcast" }),
        &json!({ "lightning_overload": 5 }),
        &json!({ "water_shield": true }),
    )
    .expect("shaman inputs should classify");
    session.set_class_spec(shaman_class).expect("no listeners");

    let request = session
        .compute_stats_request()
        .expect("consistent shaman inputs");
    assert_eq!(
        request.player.options.spec.as_ref().map(PlayerSpec::class_name),
        Some("elemental_shaman")
    );
}

#[test]
fn test_main_hand_only_gear_wire_sequence() {
    let gear = Gear::empty().with_equipped_item(ItemSlot::MainHand, Some(EquippedItem::new(ItemId(12345))));
    let agent = BalanceDruidAgent {
        primary_spell: PrimarySpell::Wrath,
        faerie_fire: true,
    };
    let session = druid_session();
    session.set_agent(ClassAgent::BalanceDruid(agent)).expect("no listeners");
    session.set_gear(gear).expect("no listeners");

    let request = session.compute_stats_request().expect("consistent druid inputs");
    let items = &request.player.equipment.items;

    assert_eq!(items.len(), 17);
    assert_eq!(items.iter().filter(|item| item.id == 12345).count(), 1);
    assert_eq!(items.iter().filter(|item| item.is_empty()).count(), 16);
}
