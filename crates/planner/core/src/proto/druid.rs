//! Balance druid messages.

use super::common::RaidTarget;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PrimarySpell {
    #[default]
    Unknown,
    Starfire,
    Wrath,
    Adaptive,
}

/// Rotation choices of a balance druid.
///
/// Both fields are required so the shape cannot be mistaken for another
/// class's agent.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BalanceDruidAgent {
    pub primary_spell: PrimarySpell,
    pub faerie_fire: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DruidTalents {
    // Balance
    pub starlight_wrath: i32,
    pub focused_starlight: i32,
    pub improved_moonfire: i32,
    pub insect_swarm: bool,
    pub vengeance: i32,
    pub lunar_guidance: i32,
    pub natures_grace: bool,
    pub moonglow: i32,
    pub moonfury: i32,
    pub balance_of_power: i32,
    pub dreamstate: i32,
    pub moonkin_form: bool,
    pub improved_faerie_fire: i32,
    pub wrath_of_cenarius: i32,
    pub force_of_nature: bool,

    // Restoration
    pub improved_mark_of_the_wild: i32,
    pub intensity: i32,
    pub omen_of_clarity: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BalanceDruidOptions {
    pub innervate_target: RaidTarget,
}

/// Class payload embedded in `PlayerOptions` for a balance druid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BalanceDruid {
    pub agent: BalanceDruidAgent,
    pub talents: DruidTalents,
    pub options: BalanceDruidOptions,
}
