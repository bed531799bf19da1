//! Equipment slots.
//!
//! Five named slots are modeled; only the weapon slot has a working equip
//! path in the current rules. An equipped item is tracked as a single unit
//! and never simultaneously appears in the inventory.

use super::{InventoryItem, ItemId};

/// One named position in the equipment mapping.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EquipSlot {
    Weapon,
    Helmet,
    Chest,
    Legs,
    Boots,
}

/// Equipment state for a character.
///
/// Slots own the full item record (not a handle): equipping moves the entry
/// out of the inventory, unequipping moves it back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<InventoryItem>,
    pub helmet: Option<InventoryItem>,
    pub chest: Option<InventoryItem>,
    pub legs: Option<InventoryItem>,
    pub boots: Option<InventoryItem>,
}

impl Equipment {
    /// Creates empty equipment (all slots free).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the item in the given slot, if any.
    pub fn slot(&self, slot: EquipSlot) -> Option<&InventoryItem> {
        self.slot_ref(slot).as_ref()
    }

    /// Places an item in a slot, returning the previously equipped item if any.
    pub fn equip(&mut self, slot: EquipSlot, item: InventoryItem) -> Option<InventoryItem> {
        self.slot_mut(slot).replace(item)
    }

    /// Clears a slot, returning its occupant if any was equipped.
    pub fn take(&mut self, slot: EquipSlot) -> Option<InventoryItem> {
        self.slot_mut(slot).take()
    }

    /// Returns true if any slot holds an item with the given id.
    pub fn contains_id(&self, id: &ItemId) -> bool {
        self.occupied().any(|(_, item)| &item.id == id)
    }

    /// Iterates over occupied slots.
    pub fn occupied(&self) -> impl Iterator<Item = (EquipSlot, &InventoryItem)> {
        [
            (EquipSlot::Weapon, &self.weapon),
            (EquipSlot::Helmet, &self.helmet),
            (EquipSlot::Chest, &self.chest),
            (EquipSlot::Legs, &self.legs),
            (EquipSlot::Boots, &self.boots),
        ]
        .into_iter()
        .filter_map(|(slot, item)| item.as_ref().map(|item| (slot, item)))
    }

    fn slot_ref(&self, slot: EquipSlot) -> &Option<InventoryItem> {
        match slot {
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Helmet => &self.helmet,
            EquipSlot::Chest => &self.chest,
            EquipSlot::Legs => &self.legs,
            EquipSlot::Boots => &self.boots,
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<InventoryItem> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Helmet => &mut self.helmet,
            EquipSlot::Chest => &mut self.chest,
            EquipSlot::Legs => &mut self.legs,
            EquipSlot::Boots => &mut self.boots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ItemKind, Rarity, StatBonuses};
    use core::str::FromStr;

    fn sword() -> InventoryItem {
        InventoryItem {
            id: ItemId::from("iron_sword"),
            name: "Iron Sword".to_owned(),
            kind: ItemKind::Weapon,
            rarity: Rarity::Common,
            bonuses: StatBonuses::default(),
            quantity: 1,
            price: 150,
        }
    }

    #[test]
    fn equip_returns_displaced_item() {
        let mut equipment = Equipment::empty();
        assert!(equipment.equip(EquipSlot::Weapon, sword()).is_none());

        let mut axe = sword();
        axe.id = ItemId::from("steel_axe");
        let displaced = equipment.equip(EquipSlot::Weapon, axe).unwrap();
        assert_eq!(displaced.id, ItemId::from("iron_sword"));
        assert!(equipment.contains_id(&ItemId::from("steel_axe")));
    }

    #[test]
    fn take_empties_the_slot() {
        let mut equipment = Equipment::empty();
        equipment.equip(EquipSlot::Weapon, sword());
        assert!(equipment.take(EquipSlot::Weapon).is_some());
        assert!(equipment.take(EquipSlot::Weapon).is_none());
        assert_eq!(equipment.occupied().count(), 0);
    }

    #[test]
    fn slot_names_parse_case_insensitively() {
        assert_eq!(EquipSlot::from_str("weapon").unwrap(), EquipSlot::Weapon);
        assert_eq!(EquipSlot::from_str("Boots").unwrap(), EquipSlot::Boots);
        assert!(EquipSlot::from_str("ring").is_err());
    }
}
