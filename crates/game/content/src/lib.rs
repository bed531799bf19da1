//! Data-driven catalog content and loaders.
//!
//! This crate houses the static game content and provides loaders for RON
//! data files:
//! - Class templates (base stats + fixed skill lists)
//! - Shop catalog (items, prices, stack sizes)
//! - World map locations (level-gated, display only)
//!
//! Content is consumed by runtime oracles and never appears in character
//! state. The builtin catalog embeds the same RON files shipped under
//! `data/`, so the two can never drift apart.

pub mod loaders;

pub use loaders::{
    ClassCatalog, ClassLoader, ContentBundle, ContentFactory, LoadResult, LocationLoader,
    ShopCatalog, ShopLoader, WorldCatalog,
};

/// Parses the embedded builtin catalog.
///
/// Fails only if the shipped data files are malformed, which the test suite
/// guards against.
pub fn builtin() -> LoadResult<ContentBundle> {
    Ok(ContentBundle {
        classes: loaders::parse_classes(include_str!("../data/classes.ron"))?,
        shop: loaders::parse_shop(include_str!("../data/shop.ron"))?,
        locations: loaders::parse_locations(include_str!("../data/locations.ron"))?,
    })
}

#[cfg(test)]
mod tests {
    use hero_core::{CharacterClass, ItemKind, Rarity};

    use super::*;

    #[test]
    fn builtin_catalog_parses_and_covers_every_class() {
        let bundle = builtin().expect("embedded catalog must parse");

        assert_eq!(bundle.classes.len(), 3);
        for class in [
            CharacterClass::Warrior,
            CharacterClass::Mage,
            CharacterClass::Archer,
        ] {
            let template = bundle
                .classes
                .iter()
                .find(|t| t.class == class)
                .unwrap_or_else(|| panic!("missing template for {class}"));
            assert!(!template.skills.is_empty());
            assert!(template.skills.iter().all(|s| s.level == 0 && !s.unlocked));
        }
    }

    #[test]
    fn builtin_matches_the_shipped_data_files() {
        let embedded = builtin().unwrap();
        let loaded = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
            .load_all()
            .unwrap();
        assert_eq!(embedded, loaded);
    }

    #[test]
    fn builtin_shop_spans_all_kinds_and_rarities() {
        let bundle = builtin().unwrap();

        for kind in [
            ItemKind::Weapon,
            ItemKind::Armor,
            ItemKind::Potion,
            ItemKind::Material,
        ] {
            assert!(
                bundle.shop.iter().any(|item| item.kind == kind),
                "no {kind} in shop"
            );
        }
        for rarity in [
            Rarity::Common,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ] {
            assert!(
                bundle.shop.iter().any(|item| item.rarity == rarity),
                "no {rarity} item in shop"
            );
        }
        assert!(bundle.shop.iter().all(|item| item.quantity >= 1));
        // Stackable consumables exist for the stacking rules to matter.
        assert!(bundle.shop.iter().any(|item| item.quantity > 1));
    }

    #[test]
    fn builtin_locations_are_sorted_by_level_gate() {
        let bundle = builtin().unwrap();
        assert_eq!(bundle.locations.len(), 5);
        assert!(
            bundle
                .locations
                .windows(2)
                .all(|pair| pair[0].required_level <= pair[1].required_level)
        );
        assert_eq!(bundle.locations[0].required_level, 1);
    }
}
