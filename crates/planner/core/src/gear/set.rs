//! Immutable gear set covering every equipment slot.

use strum::{EnumCount, IntoEnumIterator};

use super::item::EquippedItem;
use crate::error::GearError;
use crate::proto::{EquipmentSpec, ItemSlot, ItemSpec};

/// A full gear set: exactly one optional item per [`ItemSlot`].
///
/// This is an immutable type. Items are stored in a fixed array indexed by
/// slot ordinal, so every slot is always present and "no item" is an explicit
/// `None`. [`Gear::with_equipped_item`] copies the whole array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Gear {
    items: [Option<EquippedItem>; ItemSlot::COUNT],
}

impl Gear {
    /// Gear with every slot empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds gear from a partial slot mapping; unspecified slots are empty.
    ///
    /// When a slot appears more than once the last entry wins.
    pub fn new<I>(partial: I) -> Self
    where
        I: IntoIterator<Item = (ItemSlot, EquippedItem)>,
    {
        let mut gear = Self::default();
        for (slot, item) in partial {
            gear.items[slot.index()] = Some(item);
        }
        gear
    }

    /// Builds gear from a partial mapping keyed by slot ordinal.
    ///
    /// Fails fast on the first ordinal outside the slot enumeration.
    pub fn from_indexed<I>(partial: I) -> Result<Self, GearError>
    where
        I: IntoIterator<Item = (usize, Option<EquippedItem>)>,
    {
        let mut gear = Self::default();
        for (index, item) in partial {
            let slot = ItemSlot::from_index(index)?;
            gear.items[slot.index()] = item;
        }
        Ok(gear)
    }

    /// Item equipped in `slot`, if any.
    pub fn get(&self, slot: ItemSlot) -> Option<&EquippedItem> {
        self.items[slot.index()].as_ref()
    }

    /// Returns a new gear set equal to this one except for `slot`.
    ///
    /// `self` is left untouched; callers replace their reference.
    #[must_use]
    pub fn with_equipped_item(&self, slot: ItemSlot, item: Option<EquippedItem>) -> Self {
        let mut items = self.items.clone();
        items[slot.index()] = item;
        Self { items }
    }

    /// Every slot in slot order with its optional item.
    pub fn iter(&self) -> impl Iterator<Item = (ItemSlot, Option<&EquippedItem>)> + '_ {
        ItemSlot::iter().map(move |slot| (slot, self.get(slot)))
    }

    /// Number of slots holding an item.
    pub fn equipped_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_some()).count()
    }

    /// Wire sequence: one item spec per slot, in slot order. Empty slots
    /// encode as the canonical empty [`ItemSpec`]; the length is always
    /// [`ItemSlot::COUNT`].
    pub fn to_wire_sequence(&self) -> Vec<ItemSpec> {
        self.items
            .iter()
            .map(|item| item.as_ref().map_or_else(ItemSpec::default, EquippedItem::as_spec))
            .collect()
    }

    pub fn as_spec(&self) -> EquipmentSpec {
        EquipmentSpec {
            items: self.to_wire_sequence(),
        }
    }

    /// Decodes a wire sequence. Missing trailing entries are empty slots;
    /// entries past the last slot are rejected.
    pub fn from_spec(spec: &EquipmentSpec) -> Result<Self, GearError> {
        if spec.items.len() > ItemSlot::COUNT {
            return Err(GearError::InvalidSlotReference {
                index: ItemSlot::COUNT,
            });
        }

        let mut gear = Self::default();
        for (index, item_spec) in spec.items.iter().enumerate() {
            gear.items[index] = EquippedItem::from_spec(item_spec)?;
        }
        Ok(gear)
    }
}
