//! Unequip transition.

use core::convert::Infallible;

use crate::action::ActionTransition;
use crate::env::CatalogEnv;
use crate::state::{Character, EquipSlot, ItemId};

/// Clears an equipment slot, returning its occupant to the inventory.
///
/// The returned item becomes a fresh inventory entry; an empty slot is a
/// no-op rather than an error, matching the presentation layer's "nothing to
/// take off" case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnequipAction {
    pub slot: EquipSlot,
}

impl UnequipAction {
    pub fn new(slot: EquipSlot) -> Self {
        Self { slot }
    }
}

/// Result of an unequip attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnequipOutcome {
    /// The slot was cleared and the item appended to the inventory.
    Unequipped {
        slot: EquipSlot,
        item: ItemId,
        name: String,
    },

    /// The slot was already empty. State unchanged.
    SlotEmpty { slot: EquipSlot },
}

impl ActionTransition for UnequipAction {
    type Error = Infallible;
    type Outcome = UnequipOutcome;

    fn apply(
        &self,
        state: &mut Character,
        _env: &CatalogEnv<'_>,
    ) -> Result<Self::Outcome, Self::Error> {
        match state.equipment.take(self.slot) {
            Some(item) => {
                let id = item.id.clone();
                let name = item.name.clone();
                state.inventory.push(item);
                Ok(UnequipOutcome::Unequipped {
                    slot: self.slot,
                    item: id,
                    name,
                })
            }
            None => Ok(UnequipOutcome::SlotEmpty { slot: self.slot }),
        }
    }

    fn post_validate(&self, state: &Character, _env: &CatalogEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(
            state.equipment.slot(self.slot).is_none(),
            "slot {} must be empty after unequip",
            self.slot
        );
        Ok(())
    }
}
