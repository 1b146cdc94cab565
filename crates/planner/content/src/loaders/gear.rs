//! Gear set loader.

use std::collections::HashSet;
use std::path::Path;

use planner_core::proto::ItemSpec;
use planner_core::{EquippedItem, Gear, ItemSlot};
use serde::{Deserialize, Deserializer, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One equipped item as written in data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearEntry {
    #[serde(deserialize_with = "slot_by_name")]
    pub slot: ItemSlot,
    pub id: u32,
    #[serde(default)]
    pub enchant: u32,
    /// Gem ids in socket order; 0 leaves a socket empty.
    #[serde(default)]
    pub gems: Vec<u32>,
}

impl GearEntry {
    /// Builds a gear set, rejecting repeated slots and malformed items.
    pub fn into_gear(entries: Vec<GearEntry>) -> LoadResult<Gear> {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(entries.len());

        for entry in entries {
            if !seen.insert(entry.slot) {
                anyhow::bail!("Slot {} is listed more than once", entry.slot);
            }
            let spec = ItemSpec {
                id: entry.id,
                enchant: entry.enchant,
                gems: entry.gems,
            };
            let item = EquippedItem::from_spec(&spec)
                .map_err(|e| anyhow::anyhow!("Invalid item in slot {}: {}", entry.slot, e))?;
            if let Some(item) = item {
                items.push((entry.slot, item));
            }
        }

        Ok(Gear::new(items))
    }
}

fn slot_by_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ItemSlot, D::Error> {
    let name = String::deserialize(deserializer)?;
    ItemSlot::from_name(&name).map_err(serde::de::Error::custom)
}

/// Gear set structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearSet {
    pub items: Vec<GearEntry>,
}

/// Loader for gear sets from RON files.
pub struct GearLoader;

impl GearLoader {
    /// Load a gear set from a RON file.
    ///
    /// Slots not listed in the file are empty.
    pub fn load(path: &Path) -> LoadResult<Gear> {
        let content = read_file(path)?;
        let gear = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            equipped = gear.equipped_count(),
            "loaded gear set"
        );
        Ok(gear)
    }

    pub fn parse(content: &str) -> LoadResult<Gear> {
        let set: GearSet = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse gear set RON: {}", e))?;

        GearEntry::into_gear(set.items)
    }
}
