//! Class template oracle.

use crate::state::{CharacterClass, Skill};

/// Base attribute values a class starts with.
///
/// Health and mana here are maxima; creation fills the meters to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub health: u32,
    pub mana: u32,
    pub strength: u32,
    pub intelligence: u32,
    pub agility: u32,
    pub defense: u32,
}

/// Static definition of a playable class: display metadata, base stats, and
/// the fixed skill list every character of this class is created with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTemplate {
    pub class: CharacterClass,
    pub name: String,
    pub description: String,
    /// Display label for the class's signature attribute.
    pub primary_stat: String,
    pub base_stats: BaseStats,
    pub skills: Vec<Skill>,
}

/// Supplies class defaults for character creation.
///
/// `CharacterClass` is a closed enumeration, so lookups are infallible.
pub trait ClassOracle: Send + Sync {
    fn template(&self, class: CharacterClass) -> ClassTemplate;
}
