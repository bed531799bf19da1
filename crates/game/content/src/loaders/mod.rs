//! RON catalog loaders.
//!
//! Each loader pairs a `*Catalog` wrapper struct (the RON document root) with
//! a `load` entry point. All loaders return [`LoadResult`] with file and
//! parse context attached.

mod classes;
mod factory;
mod locations;
mod shop;

pub use classes::{ClassCatalog, ClassLoader, parse_classes};
pub use factory::{ContentBundle, ContentFactory};
pub use locations::{LocationLoader, WorldCatalog, parse_locations};
pub use shop::{ShopCatalog, ShopLoader, parse_shop};

use std::path::Path;

/// Result type for content loading operations.
pub type LoadResult<T> = anyhow::Result<T>;

/// Reads a data file into a string with path context on failure.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
}
