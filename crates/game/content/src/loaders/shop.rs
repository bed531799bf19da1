//! Shop catalog loader.

use std::path::Path;

use hero_core::ShopItem;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Shop catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopCatalog {
    pub items: Vec<ShopItem>,
}

/// Loader for the shop catalog from RON files.
pub struct ShopLoader;

impl ShopLoader {
    /// Load shop listings from a RON file containing a [`ShopCatalog`].
    pub fn load(path: &Path) -> LoadResult<Vec<ShopItem>> {
        let content = read_file(path)?;
        parse_shop(&content)
    }
}

/// Parses a [`ShopCatalog`] RON document.
pub fn parse_shop(content: &str) -> LoadResult<Vec<ShopItem>> {
    let catalog: ShopCatalog = ron::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse shop catalog RON: {}", e))?;

    Ok(catalog.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero_core::{ItemId, ItemKind};

    #[test]
    fn parses_listing_with_partial_bonuses() {
        let items = parse_shop(
            r#"
ShopCatalog(
    items: [
        (
            id: "iron_sword",
            name: "Iron Sword",
            kind: weapon,
            rarity: common,
            bonuses: (strength: 5),
            quantity: 1,
            price: 150,
        ),
        (
            id: "healing_potion",
            name: "Healing Potion",
            kind: potion,
            rarity: common,
            quantity: 5,
            price: 50,
        ),
    ],
)
"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, ItemId::from("iron_sword"));
        assert_eq!(items[0].bonuses.strength, 5);
        assert_eq!(items[0].bonuses.defense, 0);
        // Omitted bonuses deserialize as all-zero.
        assert!(items[1].bonuses.is_empty());
        assert_eq!(items[1].kind, ItemKind::Potion);
        assert_eq!(items[1].quantity, 5);
    }
}
