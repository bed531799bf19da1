//! Authoritative character state representation.
//!
//! This module owns the data structures that describe the character, its
//! skills, inventory, and equipment. Runtime layers clone or query this state
//! but mutate it exclusively through the engine.
mod character;
mod delta;
mod equipment;
mod item;
mod skill;
mod stats;

pub use character::{Character, CharacterClass, CharacterId};
pub use delta::{GoldChange, StateDelta};
pub use equipment::{EquipSlot, Equipment};
pub use item::{InventoryItem, ItemId, ItemKind, Rarity};
pub use skill::{Skill, SkillId};
pub use stats::{ResourceMeter, StatBonuses, Stats};
