//! A single equipped item with its enchant and gems.

use arrayvec::ArrayVec;

use crate::config::PlannerConfig;
use crate::error::GearError;
use crate::proto::ItemSpec;

/// Item identifier from the item catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u32);

/// Enchant identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnchantId(pub u32);

/// Gem identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GemId(pub u32);

type Sockets = ArrayVec<Option<GemId>, { PlannerConfig::MAX_GEM_SOCKETS }>;

/// An item plus its optional enchant and gems, in socket order.
///
/// Immutable: the `with_*` methods return a modified copy. Equality is
/// structural, so two items with the same gems in different sockets differ.
/// Trailing empty sockets are never stored, so `[a]` and `[a, empty]` are the
/// same value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EquippedItem {
    item: ItemId,
    enchant: Option<EnchantId>,
    gems: Sockets,
}

impl EquippedItem {
    /// Creates an item with no enchant and no gems.
    pub fn new(item: ItemId) -> Self {
        Self {
            item,
            enchant: None,
            gems: ArrayVec::new(),
        }
    }

    pub fn item(&self) -> ItemId {
        self.item
    }

    pub fn enchant(&self) -> Option<EnchantId> {
        self.enchant
    }

    /// Gem in each socket, in socket order.
    pub fn gems(&self) -> &[Option<GemId>] {
        &self.gems
    }

    #[must_use]
    pub fn with_enchant(&self, enchant: Option<EnchantId>) -> Self {
        Self {
            enchant,
            ..self.clone()
        }
    }

    /// Returns a copy with `gem` placed in `socket`.
    pub fn with_gem(&self, socket: usize, gem: Option<GemId>) -> Result<Self, GearError> {
        if socket >= PlannerConfig::MAX_GEM_SOCKETS {
            return Err(GearError::InvalidSocket { socket });
        }

        let mut gems = self.gems.clone();
        while gems.len() <= socket {
            gems.push(None);
        }
        gems[socket] = gem;
        while matches!(gems.last(), Some(None)) {
            gems.pop();
        }

        Ok(Self {
            gems,
            ..self.clone()
        })
    }

    /// Wire specification of this item. Empty sockets encode as gem id 0.
    pub fn as_spec(&self) -> ItemSpec {
        ItemSpec {
            id: self.item.0,
            enchant: self.enchant.map_or(0, |enchant| enchant.0),
            gems: self
                .gems
                .iter()
                .map(|gem| gem.map_or(0, |gem| gem.0))
                .collect(),
        }
    }

    /// Decodes a wire specification. The canonical empty spec decodes to `None`;
    /// an enchant or gem without an item id is rejected.
    pub fn from_spec(spec: &ItemSpec) -> Result<Option<Self>, GearError> {
        if spec.id == 0 {
            if spec.enchant != 0 || spec.gems.iter().any(|gem| *gem != 0) {
                return Err(GearError::MissingItemId);
            }
            return Ok(None);
        }

        let mut item = Self::new(ItemId(spec.id))
            .with_enchant((spec.enchant != 0).then_some(EnchantId(spec.enchant)));
        for (socket, gem) in spec.gems.iter().enumerate() {
            item = item.with_gem(socket, (*gem != 0).then_some(GemId(*gem)))?;
        }
        Ok(Some(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gem_order_is_significant() {
        let base = EquippedItem::new(ItemId(29093));
        let red_blue = base
            .with_gem(0, Some(GemId(24030)))
            .and_then(|item| item.with_gem(1, Some(GemId(24056))))
            .unwrap();
        let blue_red = base
            .with_gem(0, Some(GemId(24056)))
            .and_then(|item| item.with_gem(1, Some(GemId(24030))))
            .unwrap();

        assert_ne!(red_blue, blue_red);
    }

    #[test]
    fn trailing_empty_sockets_are_normalized() {
        let base = EquippedItem::new(ItemId(1));
        let one = base.with_gem(0, Some(GemId(7))).unwrap();
        let padded = one.with_gem(2, None).unwrap();

        assert_eq!(one, padded);
        assert_eq!(padded.gems().len(), 1);
    }

    #[test]
    fn socket_beyond_maximum_is_rejected() {
        let item = EquippedItem::new(ItemId(1));
        assert_eq!(
            item.with_gem(PlannerConfig::MAX_GEM_SOCKETS, Some(GemId(1))),
            Err(GearError::InvalidSocket {
                socket: PlannerConfig::MAX_GEM_SOCKETS
            })
        );
    }

    #[test]
    fn spec_encodes_empty_sockets_as_zero() {
        let item = EquippedItem::new(ItemId(32235))
            .with_enchant(Some(EnchantId(29191)))
            .with_gem(1, Some(GemId(34220)))
            .unwrap();

        let spec = item.as_spec();
        assert_eq!(spec.id, 32235);
        assert_eq!(spec.enchant, 29191);
        assert_eq!(spec.gems, vec![0, 34220]);
        assert_eq!(EquippedItem::from_spec(&spec), Ok(Some(item)));
    }

    #[test]
    fn empty_spec_decodes_to_no_item() {
        assert_eq!(EquippedItem::from_spec(&ItemSpec::default()), Ok(None));
        let zero_sockets = ItemSpec {
            gems: vec![0, 0],
            ..ItemSpec::default()
        };
        assert_eq!(EquippedItem::from_spec(&zero_sockets), Ok(None));
    }

    #[test]
    fn enchant_without_item_is_rejected() {
        let enchanted_nothing = ItemSpec {
            enchant: 29191,
            ..ItemSpec::default()
        };
        let gemmed_nothing = ItemSpec {
            gems: vec![0, 34220],
            ..ItemSpec::default()
        };

        assert_eq!(
            EquippedItem::from_spec(&enchanted_nothing),
            Err(GearError::MissingItemId)
        );
        assert_eq!(
            EquippedItem::from_spec(&gemmed_nothing),
            Err(GearError::MissingItemId)
        );
    }
}
