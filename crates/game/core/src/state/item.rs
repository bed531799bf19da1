//! Inventory item state types.

use super::StatBonuses;

/// Reference to a catalog item definition (lookup via the shop oracle).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Item category. Only weapons currently have an equip path; armor slots are
/// modeled but armor, potions, and materials are inert in inventory.
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
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
    Material,
}

/// Item rarity tier, display metadata for the presentation layer.
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
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// One inventory entry, cloned from the catalog definition at purchase time.
///
/// `quantity` is a stacking count; repeated purchases of the same id grow the
/// existing stack rather than appending a second entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub rarity: Rarity,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: StatBonuses,
    pub quantity: u32,
    pub price: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn kind_parses_snake_case() {
        assert_eq!(ItemKind::from_str("weapon").unwrap(), ItemKind::Weapon);
        assert_eq!(ItemKind::from_str("Material").unwrap(), ItemKind::Material);
        assert!(ItemKind::from_str("relic").is_err());
    }

    #[test]
    fn rarity_displays_snake_case() {
        assert_eq!(Rarity::Legendary.to_string(), "legendary");
    }
}
