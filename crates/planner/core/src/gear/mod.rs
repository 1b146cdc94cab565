//! Equipment model: immutable items and gear sets.

mod item;
mod set;

pub use item::{EnchantId, EquippedItem, GemId, ItemId};
pub use set::Gear;
