//! [`hero_core::ShopOracle`] backed by loaded shop listings.

use hero_core::{ItemId, ShopItem, ShopOracle};

/// ShopOracle implementation over a static listing vector.
pub struct ShopOracleImpl {
    items: Vec<ShopItem>,
}

impl ShopOracleImpl {
    pub fn new(items: Vec<ShopItem>) -> Self {
        Self { items }
    }
}

impl ShopOracle for ShopOracleImpl {
    fn listing(&self, id: &ItemId) -> Option<ShopItem> {
        self.items.iter().find(|item| &item.id == id).cloned()
    }

    fn catalog(&self) -> Vec<ShopItem> {
        self.items.clone()
    }
}
