//! Elemental shaman messages.

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    #[default]
    Unknown,
    FixedLbcl,
    ClOnClearcast,
    ClOnCd,
    Adaptive,
}

/// Rotation choice of an elemental shaman.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementalShamanAgent {
    #[serde(rename = "type")]
    pub kind: AgentType,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShamanTalents {
    // Elemental
    pub convection: i32,
    pub concussion: i32,
    pub call_of_flame: i32,
    pub elemental_focus: bool,
    pub reverberation: i32,
    pub call_of_thunder: i32,
    pub improved_fire_totems: i32,
    pub elemental_devastation: i32,
    pub elemental_fury: bool,
    pub unrelenting_storm: i32,
    pub elemental_precision: i32,
    pub lightning_mastery: i32,
    pub elemental_mastery: bool,
    pub lightning_overload: i32,
    pub totem_of_wrath: bool,

    // Restoration
    pub tidal_mastery: i32,
    pub natures_guidance: i32,
    pub mana_tide_totem: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementalShamanOptions {
    pub water_shield: bool,
}

/// Class payload embedded in `PlayerOptions` for an elemental shaman.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ElementalShaman {
    pub agent: ElementalShamanAgent,
    pub talents: ShamanTalents,
    pub options: ElementalShamanOptions,
}
