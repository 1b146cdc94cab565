//! Icon toggles bound to buff and consumable fields.

use std::rc::Rc;

use super::config::InputConfig;
use crate::error::{BindingError, EmitError, PickerError};
use crate::event::ChangeEvent;
use crate::proto::{BuffField, ConsumeField};
use crate::session::Session;

/// Spell or item whose icon represents a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconId {
    Spell(u32),
    Item(u32),
}

/// Group of icons of which at most one may be active.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[strum(serialize_all = "title_case")]
pub enum ExclusivityTag {
    BattleElixir,
    GuardianElixir,
    Drums,
    Food,
    Potion,
    Rune,
    WeaponImbue,
}

/// Settings field an icon writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconTarget {
    Buff(BuffField),
    Consume(ConsumeField),
}

impl IconTarget {
    pub fn field_name(&self) -> &'static str {
        match *self {
            Self::Buff(field) => field.into(),
            Self::Consume(field) => field.into(),
        }
    }
}

/// A clickable icon cycling through `states` integer states of one field.
///
/// Two states is a plain on/off toggle; three is missing/regular/improved.
/// Built only through the factories, which keep `states` at 2 or more.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconInput {
    pub id: IconId,
    /// Icon shown in the highest state of a tristate input.
    pub improved_id: Option<IconId>,
    states: i32,
    pub exclusivity_tags: Vec<ExclusivityTag>,
    pub target: IconTarget,
}

impl IconInput {
    pub fn boolean_buff(
        id: IconId,
        field: &str,
        exclusivity_tags: &[ExclusivityTag],
    ) -> Result<Self, BindingError> {
        Ok(Self {
            id,
            improved_id: None,
            states: 2,
            exclusivity_tags: exclusivity_tags.to_vec(),
            target: IconTarget::Buff(BuffField::from_name(field)?),
        })
    }

    pub fn tristate_buff(id: IconId, improved_id: IconId, field: &str) -> Result<Self, BindingError> {
        Ok(Self {
            id,
            improved_id: Some(improved_id),
            states: 3,
            exclusivity_tags: Vec::new(),
            target: IconTarget::Buff(BuffField::from_name(field)?),
        })
    }

    /// A counter buff; `states` is clamped to at least 2.
    pub fn multistate_buff(id: IconId, states: i32, field: &str) -> Result<Self, BindingError> {
        Ok(Self {
            id,
            improved_id: None,
            states: states.max(2),
            exclusivity_tags: Vec::new(),
            target: IconTarget::Buff(BuffField::from_name(field)?),
        })
    }

    pub fn boolean_consume(
        id: IconId,
        field: &str,
        exclusivity_tags: &[ExclusivityTag],
    ) -> Result<Self, BindingError> {
        Ok(Self {
            id,
            improved_id: None,
            states: 2,
            exclusivity_tags: exclusivity_tags.to_vec(),
            target: IconTarget::Consume(ConsumeField::from_name(field)?),
        })
    }

    pub fn states(&self) -> i32 {
        self.states
    }

    /// Clamps `value` into `0..states`.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(0, self.states - 1)
    }

    pub fn excludes(&self, other: &Self) -> bool {
        self.exclusivity_tags
            .iter()
            .any(|tag| other.exclusivity_tags.contains(tag))
    }

    /// Current state of this icon's field.
    pub fn value(&self, session: &Session) -> i32 {
        match self.target {
            IconTarget::Buff(field) => session.buffs().state(field),
            IconTarget::Consume(field) => session.consumes().state(field),
        }
    }

    /// Writes `value`, clamped, to this icon's field.
    pub fn set_value(&self, session: &Session, value: i32) -> Result<(), EmitError> {
        let value = self.clamp(value);
        match self.target {
            IconTarget::Buff(field) => {
                let mut buffs = session.buffs();
                buffs.set_state(field, value);
                session.set_buffs(buffs)
            }
            IconTarget::Consume(field) => {
                let mut consumes = session.consumes();
                consumes.set_state(field, value);
                session.set_consumes(consumes)
            }
        }
    }

    /// Binding of this icon to a session, for use with [`super::Input`].
    pub fn input_config(&self) -> InputConfig<Session, i32> {
        let icon = Rc::new(self.clone());
        let getter = Rc::clone(&icon);
        let changed_event: fn(&Session) -> &ChangeEvent = match self.target {
            IconTarget::Buff(_) => |session| &session.buffs_changed,
            IconTarget::Consume(_) => |session| &session.consumes_changed,
        };

        InputConfig::new(
            changed_event,
            move |session: &Session| getter.value(session),
            move |session: &Session, value| icon.set_value(session, value),
        )
        .label_tooltip(self.target.field_name())
    }
}

/// A row of icons where activating one deactivates its exclusive siblings.
pub struct IconPicker {
    session: Rc<Session>,
    icons: Vec<IconInput>,
}

impl IconPicker {
    pub fn new(session: Rc<Session>, icons: Vec<IconInput>) -> Self {
        Self { session, icons }
    }

    pub fn icons(&self) -> &[IconInput] {
        &self.icons
    }

    fn icon(&self, index: usize) -> Result<&IconInput, BindingError> {
        self.icons.get(index).ok_or(BindingError::UnknownIcon {
            index,
            count: self.icons.len(),
        })
    }

    /// Current state of the icon at `index`, as stored in the session.
    pub fn value(&self, index: usize) -> Result<i32, BindingError> {
        Ok(self.icon(index)?.value(&self.session))
    }

    /// Sets the icon at `index`, switching off every sibling that shares an
    /// exclusivity tag when the new value is active.
    ///
    /// Buffs and consumables are each written once, so each event fires at
    /// most once per call.
    pub fn set_value(&self, index: usize, value: i32) -> Result<(), PickerError> {
        let icon = self.icon(index)?;

        let mut buffs = self.session.buffs();
        let mut consumes = self.session.consumes();
        let mut write = |target: IconTarget, state: i32| match target {
            IconTarget::Buff(field) => buffs.set_state(field, state),
            IconTarget::Consume(field) => consumes.set_state(field, state),
        };

        let value = icon.clamp(value);
        write(icon.target, value);
        if value > 0 {
            for (other_index, other) in self.icons.iter().enumerate() {
                if other_index != index && other.target != icon.target && icon.excludes(other) {
                    tracing::debug!(
                        field = other.target.field_name(),
                        by = icon.target.field_name(),
                        "deactivating exclusive icon"
                    );
                    write(other.target, 0);
                }
            }
        }

        let buffs_result = self.session.set_buffs(buffs);
        let consumes_result = self.session.set_consumes(consumes);
        EmitError::merge(buffs_result, consumes_result).map_err(PickerError::from)
    }

    /// Advances the icon at `index` to its next state, wrapping to 0.
    ///
    /// A stored value outside `0..states` is clamped before stepping.
    pub fn increment(&self, index: usize) -> Result<(), PickerError> {
        let icon = self.icon(index)?;
        let current = icon.clamp(icon.value(&self.session));
        self.set_value(index, (current + 1).rem_euclid(icon.states))
    }

    /// Moves the icon at `index` to its previous state, wrapping to the top.
    pub fn decrement(&self, index: usize) -> Result<(), PickerError> {
        let icon = self.icon(index)?;
        let current = icon.clamp(icon.value(&self.session));
        self.set_value(index, (current - 1).rem_euclid(icon.states))
    }
}

/// Buff and debuff icons offered to caster specs.
pub fn buff_icons() -> Result<Vec<IconInput>, BindingError> {
    use IconId::{Item, Spell};

    Ok(vec![
        IconInput::boolean_buff(Spell(27127), "arcane_brilliance", &[])?,
        IconInput::multistate_buff(Spell(28142), 5, "atiesh_mage")?,
        IconInput::multistate_buff(Spell(28143), 5, "atiesh_warlock")?,
        IconInput::boolean_buff(Spell(25898), "blessing_of_kings", &[])?,
        IconInput::tristate_buff(Spell(27143), Spell(20245), "blessing_of_wisdom")?,
        IconInput::multistate_buff(Spell(2825), 11, "bloodlust")?,
        IconInput::boolean_buff(Spell(31025), "braided_eternium_chain", &[])?,
        IconInput::boolean_buff(Spell(31035), "chain_of_the_twilight_owl", &[])?,
        IconInput::tristate_buff(Spell(25312), Spell(33182), "divine_spirit")?,
        IconInput::boolean_buff(Spell(31033), "eye_of_the_night", &[])?,
        IconInput::tristate_buff(Spell(26991), Spell(17055), "gift_of_the_wild")?,
        IconInput::boolean_buff(Spell(25607), "jade_pendant_of_blasting", &[])?,
        IconInput::tristate_buff(Spell(25570), Spell(16208), "mana_spring_totem")?,
        IconInput::boolean_buff(Spell(16190), "mana_tide_totem", &[])?,
        IconInput::tristate_buff(Spell(24907), Item(32387), "moonkin_aura")?,
        IconInput::multistate_buff(Spell(30706), 5, "totem_of_wrath")?,
        IconInput::tristate_buff(Spell(3738), Spell(37212), "wrath_of_air_totem")?,
        IconInput::boolean_buff(Spell(35476), "drums_of_battle", &[ExclusivityTag::Drums])?,
        IconInput::boolean_buff(Spell(35478), "drums_of_restoration", &[ExclusivityTag::Drums])?,
        IconInput::boolean_buff(Spell(20337), "improved_seal_of_the_crusader", &[])?,
        IconInput::boolean_buff(Spell(27164), "judgement_of_wisdom", &[])?,
        IconInput::boolean_buff(Spell(33195), "misery", &[])?,
    ])
}

/// Consumable icons offered to caster specs.
pub fn consume_icons() -> Result<Vec<IconInput>, BindingError> {
    use ExclusivityTag::{BattleElixir, Drums, Food, GuardianElixir, Potion, Rune, WeaponImbue};
    use IconId::{Item, Spell};

    Ok(vec![
        IconInput::boolean_consume(Item(28103), "adepts_elixir", &[BattleElixir])?,
        IconInput::boolean_consume(Item(27657), "blackened_basilisk", &[Food])?,
        IconInput::boolean_consume(Item(20749), "brilliant_wizard_oil", &[WeaponImbue])?,
        IconInput::boolean_consume(Item(12662), "dark_rune", &[Rune])?,
        IconInput::boolean_consume(Item(22839), "destruction_potion", &[Potion])?,
        IconInput::boolean_consume(Spell(35476), "drums_of_battle", &[Drums])?,
        IconInput::boolean_consume(Spell(35478), "drums_of_restoration", &[Drums])?,
        IconInput::boolean_consume(Item(32067), "elixir_of_draenic_wisdom", &[GuardianElixir])?,
        IconInput::boolean_consume(Item(22833), "elixir_of_major_fire_power", &[BattleElixir])?,
        IconInput::boolean_consume(Item(22827), "elixir_of_major_frost_power", &[BattleElixir])?,
        IconInput::boolean_consume(Item(22840), "elixir_of_major_mageblood", &[GuardianElixir])?,
        IconInput::boolean_consume(Item(22835), "elixir_of_major_shadow_power", &[BattleElixir])?,
        IconInput::boolean_consume(
            Item(22861),
            "flask_of_blinding_light",
            &[BattleElixir, GuardianElixir],
        )?,
        IconInput::boolean_consume(
            Item(22853),
            "flask_of_mighty_restoration",
            &[BattleElixir, GuardianElixir],
        )?,
        IconInput::boolean_consume(
            Item(22866),
            "flask_of_pure_death",
            &[BattleElixir, GuardianElixir],
        )?,
        IconInput::boolean_consume(
            Item(13512),
            "flask_of_supreme_power",
            &[BattleElixir, GuardianElixir],
        )?,
        IconInput::boolean_consume(Item(33825), "skullfish_soup", &[Food])?,
        IconInput::boolean_consume(Item(22832), "super_mana_potion", &[Potion])?,
        IconInput::boolean_consume(Item(22522), "superior_wizard_oil", &[WeaponImbue])?,
    ])
}
