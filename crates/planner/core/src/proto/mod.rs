//! Structured messages exchanged with the simulation engine.
//!
//! Every type here is plain data with `serde` derives. Field order and enum
//! declaration order are part of the wire contract (see [`crate::wire`] when
//! the `wire` feature is enabled).

pub mod api;
pub mod common;
pub mod druid;
pub mod fields;
pub mod shaman;
pub mod stats;

pub use api::{ComputeStatsRequest, IndividualSimRequest, Player, PlayerOptions, PlayerSpec};
pub use common::{
    BuffField, Buffs, ConsumeField, Consumes, Encounter, EquipmentSpec, ItemSlot, ItemSpec,
    Potions, Race, RaidTarget, TristateEffect,
};
pub use druid::{BalanceDruid, BalanceDruidAgent, BalanceDruidOptions, DruidTalents, PrimarySpell};
pub use fields::StateValue;
pub use shaman::{
    AgentType, ElementalShaman, ElementalShamanAgent, ElementalShamanOptions, ShamanTalents,
};
pub use stats::{Stat, Stats};
