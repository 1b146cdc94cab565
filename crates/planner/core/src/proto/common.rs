//! Message types shared by every capability class.

use strum::{EnumCount, IntoEnumIterator};

use super::fields::state_fields;
use crate::error::GearError;

/// Equipment slot. Declaration order is the wire order of
/// [`EquipmentSpec::items`].
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
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ItemSlot {
    Head,
    Neck,
    Shoulder,
    Back,
    Chest,
    Wrist,
    Hands,
    Waist,
    Legs,
    Feet,
    Finger1,
    Finger2,
    Trinket1,
    Trinket2,
    MainHand,
    OffHand,
    Ranged,
}

impl ItemSlot {
    /// Ordinal of this slot in the fixed enumeration.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolves a slot ordinal.
    pub fn from_index(index: usize) -> Result<Self, GearError> {
        if index >= Self::COUNT {
            return Err(GearError::InvalidSlotReference { index });
        }
        Self::iter()
            .nth(index)
            .ok_or(GearError::InvalidSlotReference { index })
    }

    /// Resolves a slot by its snake_case name.
    pub fn from_name(name: &str) -> Result<Self, GearError> {
        name.parse()
            .map_err(|_| GearError::UnknownSlotName(name.to_owned()))
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    #[default]
    Unknown,
    BloodElf,
    Draenei,
    Dwarf,
    Gnome,
    Human,
    NightElf,
    Orc,
    Tauren,
    Troll10,
    Troll30,
    Undead,
}

/// Strength of a buff that has a talent-improved version.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TristateEffect {
    #[default]
    Missing = 0,
    Regular = 1,
    Improved = 2,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Potions {
    #[default]
    UnknownPotion = 0,
    SuperManaPotion = 1,
    DestructionPotion = 2,
}

state_fields! {
    /// Raid, party and individual buffs plus target debuffs.
    pub struct Buffs, fields = BuffField {
        arcane_brilliance: bool => ArcaneBrilliance,
        gift_of_the_wild: TristateEffect => GiftOfTheWild,
        blessing_of_kings: bool => BlessingOfKings,
        blessing_of_wisdom: TristateEffect => BlessingOfWisdom,
        divine_spirit: TristateEffect => DivineSpirit,
        moonkin_aura: TristateEffect => MoonkinAura,
        /// Mana returned per second by a shadow priest's Vampiric Touch.
        shadow_priest_dps: i32 => ShadowPriestDps,

        judgement_of_wisdom: bool => JudgementOfWisdom,
        improved_seal_of_the_crusader: bool => ImprovedSealOfTheCrusader,
        misery: bool => Misery,
        curse_of_elements: TristateEffect => CurseOfElements,

        bloodlust: i32 => Bloodlust,
        mana_spring_totem: TristateEffect => ManaSpringTotem,
        mana_tide_totem: bool => ManaTideTotem,
        totem_of_wrath: i32 => TotemOfWrath,
        wrath_of_air_totem: TristateEffect => WrathOfAirTotem,
        drums_of_battle: bool => DrumsOfBattle,
        drums_of_restoration: bool => DrumsOfRestoration,
        draenei_racial_caster: bool => DraeneiRacialCaster,

        atiesh_mage: i32 => AtieshMage,
        atiesh_warlock: i32 => AtieshWarlock,
        braided_eternium_chain: bool => BraidedEterniumChain,
        chain_of_the_twilight_owl: bool => ChainOfTheTwilightOwl,
        eye_of_the_night: bool => EyeOfTheNight,
        jade_pendant_of_blasting: bool => JadePendantOfBlasting,
    }
}

state_fields! {
    /// Consumables used by the simulated player.
    pub struct Consumes, fields = ConsumeField {
        flask_of_blinding_light: bool => FlaskOfBlindingLight,
        flask_of_mighty_restoration: bool => FlaskOfMightyRestoration,
        flask_of_pure_death: bool => FlaskOfPureDeath,
        flask_of_supreme_power: bool => FlaskOfSupremePower,

        adepts_elixir: bool => AdeptsElixir,
        elixir_of_major_fire_power: bool => ElixirOfMajorFirePower,
        elixir_of_major_frost_power: bool => ElixirOfMajorFrostPower,
        elixir_of_major_shadow_power: bool => ElixirOfMajorShadowPower,
        elixir_of_draenic_wisdom: bool => ElixirOfDraenicWisdom,
        elixir_of_major_mageblood: bool => ElixirOfMajorMageblood,

        brilliant_wizard_oil: bool => BrilliantWizardOil,
        superior_wizard_oil: bool => SuperiorWizardOil,

        blackened_basilisk: bool => BlackenedBasilisk,
        skullfish_soup: bool => SkullfishSoup,

        default_potion: Potions => DefaultPotion,
        starting_potion: Potions => StartingPotion,
        num_starting_potions: i32 => NumStartingPotions,
        destruction_potion: bool => DestructionPotion,
        super_mana_potion: bool => SuperManaPotion,
        dark_rune: bool => DarkRune,

        drums_of_battle: bool => DrumsOfBattle,
        drums_of_restoration: bool => DrumsOfRestoration,
    }
}

/// Fight parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Encounter {
    /// Fight length in seconds.
    pub duration: f64,
    pub num_targets: i32,
    pub target_armor: f64,
}

impl Default for Encounter {
    fn default() -> Self {
        Self {
            duration: 180.0,
            num_targets: 1,
            target_armor: 0.0,
        }
    }
}

/// Target of a raid-targeted ability. Index 0 is the simulated player.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(default)]
pub struct RaidTarget {
    pub target_index: i32,
}

/// Wire form of one equipped item. The default value is the canonical
/// "no item" specification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ItemSpec {
    pub id: u32,
    pub enchant: u32,
    /// Gem ids in socket order; 0 marks an empty socket.
    pub gems: Vec<u32>,
}

impl ItemSpec {
    /// True for the canonical "no item" specification.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Wire form of a full gear set: one entry per [`ItemSlot`], in slot order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EquipmentSpec {
    pub items: Vec<ItemSpec>,
}
