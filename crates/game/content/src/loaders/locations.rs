//! World map location loader.

use std::path::Path;

use hero_core::Location;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// World catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldCatalog {
    pub locations: Vec<Location>,
}

/// Loader for world locations from RON files.
pub struct LocationLoader;

impl LocationLoader {
    /// Load locations from a RON file containing a [`WorldCatalog`].
    pub fn load(path: &Path) -> LoadResult<Vec<Location>> {
        let content = read_file(path)?;
        parse_locations(&content)
    }
}

/// Parses a [`WorldCatalog`] RON document.
pub fn parse_locations(content: &str) -> LoadResult<Vec<Location>> {
    let catalog: WorldCatalog = ron::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse world catalog RON: {}", e))?;

    Ok(catalog.locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_gated_locations() {
        let locations = parse_locations(
            r#"
WorldCatalog(
    locations: [
        (id: "village", name: "Village", description: "Home.", required_level: 1),
        (id: "peak", name: "Peak", description: "High up.", required_level: 12),
    ],
)
"#,
        )
        .unwrap();

        assert_eq!(locations.len(), 2);
        assert!(locations[0].is_unlocked_at(1));
        assert!(!locations[1].is_unlocked_at(11));
        assert!(locations[1].is_unlocked_at(12));
    }
}
