//! [`hero_core::ClassOracle`] backed by loaded class templates.

use anyhow::bail;
use hero_core::{CharacterClass, ClassOracle, ClassTemplate};
use strum::IntoEnumIterator;

/// ClassOracle implementation over a validated template list.
#[derive(Debug)]
pub struct ClassOracleImpl {
    templates: Vec<ClassTemplate>,
}

impl ClassOracleImpl {
    /// Validates that every playable class has exactly one template.
    ///
    /// The [`ClassOracle`] trait promises infallible lookups, so coverage is
    /// enforced here instead of at query time.
    pub fn new(templates: Vec<ClassTemplate>) -> anyhow::Result<Self> {
        for class in CharacterClass::iter() {
            match templates.iter().filter(|t| t.class == class).count() {
                1 => {}
                0 => bail!("class catalog is missing a template for '{class}'"),
                n => bail!("class catalog has {n} templates for '{class}'"),
            }
        }
        Ok(Self { templates })
    }

    /// All templates, in catalog order.
    pub fn templates(&self) -> &[ClassTemplate] {
        &self.templates
    }
}

impl ClassOracle for ClassOracleImpl {
    fn template(&self, class: CharacterClass) -> ClassTemplate {
        self.templates
            .iter()
            .find(|t| t.class == class)
            .cloned()
            .expect("constructor verified one template per class")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero_core::BaseStats;

    fn template(class: CharacterClass) -> ClassTemplate {
        ClassTemplate {
            class,
            name: class.to_string(),
            description: String::new(),
            primary_stat: "strength".to_owned(),
            base_stats: BaseStats {
                health: 100,
                mana: 50,
                strength: 10,
                intelligence: 10,
                agility: 10,
                defense: 10,
            },
            skills: Vec::new(),
        }
    }

    #[test]
    fn rejects_incomplete_catalog() {
        let err = ClassOracleImpl::new(vec![template(CharacterClass::Warrior)]).unwrap_err();
        assert!(err.to_string().contains("missing a template"));
    }

    #[test]
    fn rejects_duplicate_templates() {
        let mut templates: Vec<_> = CharacterClass::iter().map(template).collect();
        templates.push(template(CharacterClass::Mage));
        let err = ClassOracleImpl::new(templates).unwrap_err();
        assert!(err.to_string().contains("2 templates"));
    }

    #[test]
    fn looks_up_every_class() {
        let oracle =
            ClassOracleImpl::new(CharacterClass::iter().map(template).collect()).unwrap();
        for class in CharacterClass::iter() {
            assert_eq!(oracle.template(class).class, class);
        }
    }
}
