//! Request envelopes consumed by the simulation engine.

use super::common::{Buffs, Consumes, Encounter, EquipmentSpec, Race};
use super::druid::BalanceDruid;
use super::shaman::ElementalShaman;

/// Class-specific payload. The variant name is the capability-class tag.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSpec {
    BalanceDruid(BalanceDruid),
    ElementalShaman(ElementalShaman),
}

impl PlayerSpec {
    /// Name of the capability class this payload belongs to.
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::BalanceDruid(_) => "balance_druid",
            Self::ElementalShaman(_) => "elemental_shaman",
        }
    }
}

/// Generic player options plus at most one class payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerOptions {
    pub race: Race,
    pub consumes: Consumes,
    pub spec: Option<PlayerSpec>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    /// Custom stat weights, one entry per `Stat` in stat order.
    pub custom_stats: Vec<f64>,
    pub equipment: EquipmentSpec,
    pub options: PlayerOptions,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComputeStatsRequest {
    pub player: Player,
    pub buffs: Buffs,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IndividualSimRequest {
    pub player: Player,
    pub buffs: Buffs,
    pub encounter: Encounter,
    pub iterations: i32,
    /// Minimum global cooldown in seconds.
    pub gcd_min: f64,
    pub debug: bool,
}
