//! The character aggregate.

use crate::env::ClassTemplate;

use super::{Equipment, InventoryItem, ItemId, ResourceMeter, Skill, SkillId, Stats};

/// Opaque unique identifier assigned at creation, immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u64);

impl core::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playable class. Fixed at creation.
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
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CharacterClass {
    Warrior,
    Mage,
    Archer,
}

/// Canonical snapshot of one character.
///
/// The record is mutable by replacement only: transitions run against a clone
/// and the session installs the result on success. Skill list membership is
/// fixed at creation; inventory entries are unique by id on the purchase
/// path; an equipped item never simultaneously appears in the inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    pub stats: Stats,
    pub skills: Vec<Skill>,
    pub inventory: Vec<InventoryItem>,
    pub equipment: Equipment,
    pub gold: u32,
}

impl Character {
    /// Gold granted to every freshly created character.
    pub const STARTING_GOLD: u32 = 500;

    /// Experience required for the (not yet implemented) first level-up.
    pub const EXPERIENCE_TO_NEXT_LEVEL: u32 = 100;

    /// Creates a level-1 character from a class template.
    ///
    /// Meters start full, attributes are copied from the class base stats,
    /// the class skill list starts fully locked, and inventory and equipment
    /// start empty. The result satisfies every state invariant by
    /// construction.
    pub fn create(id: CharacterId, name: impl Into<String>, template: &ClassTemplate) -> Self {
        let base = &template.base_stats;
        Self {
            id,
            name: name.into(),
            class: template.class,
            level: 1,
            experience: 0,
            experience_to_next_level: Self::EXPERIENCE_TO_NEXT_LEVEL,
            stats: Stats {
                health: ResourceMeter::full(base.health),
                mana: ResourceMeter::full(base.mana),
                strength: base.strength,
                intelligence: base.intelligence,
                agility: base.agility,
                defense: base.defense,
            },
            skills: template
                .skills
                .iter()
                .cloned()
                .map(|mut skill| {
                    skill.level = 0;
                    skill.unlocked = false;
                    skill
                })
                .collect(),
            inventory: Vec::new(),
            equipment: Equipment::empty(),
            gold: Self::STARTING_GOLD,
        }
    }

    /// Returns the inventory entry with the given id, if present.
    pub fn inventory_item(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| &item.id == id)
    }

    /// Returns the index of the inventory entry with the given id.
    pub fn inventory_position(&self, id: &ItemId) -> Option<usize> {
        self.inventory.iter().position(|item| &item.id == id)
    }

    /// Returns the skill with the given id, if it belongs to this character.
    pub fn skill(&self, id: &SkillId) -> Option<&Skill> {
        self.skills.iter().find(|skill| &skill.id == id)
    }

    /// Mutable access to the skill with the given id.
    pub fn skill_mut(&mut self, id: &SkillId) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|skill| &skill.id == id)
    }

    /// Deducts gold, or returns `None` when the balance is insufficient.
    ///
    /// Gold is a `u32`, so a successful deduction can never leave the
    /// balance negative.
    pub fn spend_gold(&mut self, amount: u32) -> Option<u32> {
        let remaining = self.gold.checked_sub(amount)?;
        self.gold = remaining;
        Some(remaining)
    }
}
