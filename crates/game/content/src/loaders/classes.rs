//! Class template loader.

use std::path::Path;

use hero_core::ClassTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Class catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: Vec<ClassTemplate>,
}

/// Loader for class templates from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load class templates from a RON file containing a [`ClassCatalog`].
    pub fn load(path: &Path) -> LoadResult<Vec<ClassTemplate>> {
        let content = read_file(path)?;
        parse_classes(&content)
    }
}

/// Parses a [`ClassCatalog`] RON document.
pub fn parse_classes(content: &str) -> LoadResult<Vec<ClassTemplate>> {
    let catalog: ClassCatalog = ron::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON: {}", e))?;

    Ok(catalog.classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero_core::CharacterClass;
    use std::io::Write;

    const MINIMAL: &str = r#"
ClassCatalog(
    classes: [
        (
            class: warrior,
            name: "Warrior",
            description: "Test warrior.",
            primary_stat: "strength",
            base_stats: (health: 100, mana: 10, strength: 10, intelligence: 1, agility: 5, defense: 8),
            skills: [
                (id: "slam", name: "Slam", description: "Slams.", max_level: 5, required_level: 1, cost: 100),
            ],
        ),
    ],
)
"#;

    #[test]
    fn parses_minimal_catalog_with_locked_skills() {
        let classes = parse_classes(MINIMAL).unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].class, CharacterClass::Warrior);
        // level/unlocked are serde defaults
        assert_eq!(classes[0].skills[0].level, 0);
        assert!(!classes[0].skills[0].unlocked);
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let classes = ClassLoader::load(file.path()).unwrap();
        assert_eq!(classes[0].name, "Warrior");
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_classes("ClassCatalog(classes: [").is_err());
    }
}
