//! State change summaries.
//!
//! The engine compares the pre- and post-states of a successful transition
//! and reports which parts of the record changed. The runtime uses this for
//! logging and notification detail; it never feeds back into the rules.

use super::Character;

/// Gold balance change across one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldChange {
    pub before: u32,
    pub after: u32,
}

impl GoldChange {
    /// Gold spent by the transition. Nothing in the current rules grants
    /// gold, so `before >= after` always holds.
    pub fn spent(&self) -> u32 {
        self.before.saturating_sub(self.after)
    }
}

/// Field-level summary of what a transition touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    pub gold: Option<GoldChange>,
    pub inventory_changed: bool,
    pub equipment_changed: bool,
    pub skills_changed: bool,
}

impl StateDelta {
    /// Computes the delta between two snapshots.
    pub fn from_states(before: &Character, after: &Character) -> Self {
        Self {
            gold: (before.gold != after.gold).then_some(GoldChange {
                before: before.gold,
                after: after.gold,
            }),
            inventory_changed: before.inventory != after.inventory,
            equipment_changed: before.equipment != after.equipment,
            skills_changed: before.skills != after.skills,
        }
    }

    /// Returns true when the transition was a no-op.
    pub fn is_empty(&self) -> bool {
        self.gold.is_none()
            && !self.inventory_changed
            && !self.equipment_changed
            && !self.skills_changed
    }
}
