//! Character stats and stat-weight vectors.

use strum::{EnumCount, IntoEnumIterator};

/// Character stat. Declaration order is the index into [`Stats`] and the
/// order of every numeric stat sequence on the wire.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumCount,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Strength,
    Agility,
    Stamina,
    Intellect,
    Spirit,
    SpellCrit,
    SpellHit,
    Healing,
    SpellPower,
    SpellHaste,
    Mp5,
    SpellPenetration,
    FireSpellPower,
    NatureSpellPower,
    FrostSpellPower,
    ShadowSpellPower,
    HolySpellPower,
    ArcaneSpellPower,
    AttackPower,
    MeleeHit,
    MeleeHaste,
    MeleeCrit,
    Expertise,
    ArmorPenetration,
    Mana,
    Energy,
    Rage,
    Armor,
}

/// One value per [`Stat`]. Used for custom stat weights and EP weights.
///
/// This is an immutable value type; `with_stat` returns a modified copy.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stats([f64; Stat::COUNT]);

impl Stats {
    pub const fn zero() -> Self {
        Self([0.0; Stat::COUNT])
    }

    /// Builds a stats vector from sparse entries; missing stats are 0.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Stat, f64)>,
    {
        let mut values = [0.0; Stat::COUNT];
        for (stat, value) in entries {
            values[stat as usize] = value;
        }
        Self(values)
    }

    pub fn get(&self, stat: Stat) -> f64 {
        self.0[stat as usize]
    }

    #[must_use]
    pub fn with_stat(mut self, stat: Stat, value: f64) -> Self {
        self.0[stat as usize] = value;
        self
    }

    /// Ordered numeric sequence, one entry per stat.
    pub fn as_array(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Non-zero entries in stat order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        Stat::iter()
            .map(|stat| (stat, self.get(stat)))
            .filter(|(_, value)| *value != 0.0)
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::zero()
    }
}
