//! Player actions and their transition rules.
//!
//! Each action is a small struct implementing [`ActionTransition`]; the
//! [`Action`] enum is the closed set the engine dispatches on. Every
//! transition either produces a typed outcome or rejects with a typed error;
//! rejections always leave the character unchanged by value.
mod equip;
mod purchase;
mod skills;
mod transition;
mod unequip;

pub use equip::{EquipAction, EquipError, EquipOutcome};
pub use purchase::{PurchaseAction, PurchaseError, PurchaseOutcome};
pub use skills::{
    UnlockSkillAction, UnlockSkillError, UnlockSkillOutcome, UpgradeSkillAction,
    UpgradeSkillError, UpgradeSkillOutcome,
};
pub use transition::ActionTransition;
pub use unequip::{UnequipAction, UnequipOutcome};

use crate::state::{EquipSlot, ItemId, SkillId};

/// Closed set of actions the engine can execute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Purchase(PurchaseAction),
    Equip(EquipAction),
    Unequip(UnequipAction),
    UnlockSkill(UnlockSkillAction),
    UpgradeSkill(UpgradeSkillAction),
}


impl Action {
    pub fn purchase(item: impl Into<ItemId>) -> Self {
        Self::Purchase(PurchaseAction::new(item))
    }

    pub fn equip(item: impl Into<ItemId>) -> Self {
        Self::Equip(EquipAction::new(item))
    }

    pub fn unequip(slot: EquipSlot) -> Self {
        Self::Unequip(UnequipAction::new(slot))
    }

    pub fn unlock_skill(skill: impl Into<SkillId>) -> Self {
        Self::UnlockSkill(UnlockSkillAction::new(skill))
    }

    pub fn upgrade_skill(skill: impl Into<SkillId>) -> Self {
        Self::UpgradeSkill(UpgradeSkillAction::new(skill))
    }

    /// Stable label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Purchase(_) => "purchase",
            Self::Equip(_) => "equip",
            Self::Unequip(_) => "unequip",
            Self::UnlockSkill(_) => "unlock_skill",
            Self::UpgradeSkill(_) => "upgrade_skill",
        }
    }
}
