//! Filesystem content factory.

use std::path::{Path, PathBuf};

use hero_core::{ClassTemplate, Location, ShopItem};

use crate::loaders::{ClassLoader, LoadResult, LocationLoader, ShopLoader};

/// Everything the runtime oracles need, loaded as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBundle {
    pub classes: Vec<ClassTemplate>,
    pub shop: Vec<ShopItem>,
    pub locations: Vec<Location>,
}

/// Loads catalogs from a data directory with the conventional file names
/// (`classes.ron`, `shop.ron`, `locations.ron`).
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_classes(&self) -> LoadResult<Vec<ClassTemplate>> {
        ClassLoader::load(&self.data_dir.join("classes.ron"))
    }

    pub fn load_shop(&self) -> LoadResult<Vec<ShopItem>> {
        ShopLoader::load(&self.data_dir.join("shop.ron"))
    }

    pub fn load_locations(&self) -> LoadResult<Vec<Location>> {
        LocationLoader::load(&self.data_dir.join("locations.ron"))
    }

    /// Load all three catalogs from the data directory.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            classes: self.load_classes()?,
            shop: self.load_shop()?,
            locations: self.load_locations()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_all_reads_the_shipped_data_dir() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        let bundle = factory.load_all().unwrap();

        assert_eq!(bundle.classes.len(), 3);
        assert!(!bundle.shop.is_empty());
        assert_eq!(bundle.locations.len(), 5);
    }

    #[test]
    fn missing_directory_reports_the_path() {
        let factory = ContentFactory::new("/nonexistent/data");
        let err = factory.load_classes().unwrap_err();
        assert!(err.to_string().contains("classes.ron"));
    }
}
