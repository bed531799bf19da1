//! Shop catalog oracle.

use crate::state::{InventoryItem, ItemId, ItemKind, Rarity, StatBonuses};

/// One immutable shop listing.
///
/// `quantity` is the stack size granted per purchase; the price buys the
/// whole stack. Purchasing clones the listing into an [`InventoryItem`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopItem {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub rarity: Rarity,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: StatBonuses,
    pub quantity: u32,
    pub price: u32,
}

impl ShopItem {
    /// Clones this listing into a fresh inventory stack.
    pub fn to_inventory_item(&self) -> InventoryItem {
        InventoryItem {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            rarity: self.rarity,
            bonuses: self.bonuses,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Supplies the static shop catalog.
pub trait ShopOracle: Send + Sync {
    /// Resolves a single listing by id.
    fn listing(&self, id: &ItemId) -> Option<ShopItem>;

    /// Returns the full catalog, in display order.
    fn catalog(&self) -> Vec<ShopItem>;
}
