//! Equip transition.

use crate::action::ActionTransition;
use crate::env::CatalogEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Character, EquipSlot, ItemId, ItemKind};

/// Moves a weapon from the inventory into the weapon slot.
///
/// A previously equipped weapon swaps back into the inventory as its own
/// entry; it is never merged into an existing stack, because equipped items
/// are tracked as a single unit. Only weapons have an equip path in the
/// current rules; other kinds are an explicit no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipAction {
    pub item: ItemId,
}

impl EquipAction {
    pub fn new(item: impl Into<ItemId>) -> Self {
        Self { item: item.into() }
    }
}

/// Result of an equip attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipOutcome {
    /// The weapon is now equipped; `displaced` names the weapon that swapped
    /// back into the inventory, if any.
    Equipped {
        item: ItemId,
        name: String,
        displaced: Option<ItemId>,
    },

    /// The item exists but is not a weapon; armor, potions, and materials
    /// are inert in inventory. State unchanged.
    NotEquippable { item: ItemId, kind: ItemKind },
}

/// Rejection reasons for an equip attempt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    /// The id is not present in the inventory. Caller error, handled as a
    /// defensive no-op.
    #[error("item '{0}' is not in the inventory")]
    ItemNotFound(ItemId),
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "EQUIP_ITEM_NOT_FOUND"
    }
}

impl ActionTransition for EquipAction {
    type Error = EquipError;
    type Outcome = EquipOutcome;

    fn pre_validate(&self, state: &Character, _env: &CatalogEnv<'_>) -> Result<(), Self::Error> {
        if state.inventory_item(&self.item).is_none() {
            return Err(EquipError::ItemNotFound(self.item.clone()));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut Character,
        _env: &CatalogEnv<'_>,
    ) -> Result<Self::Outcome, Self::Error> {
        let position = state
            .inventory_position(&self.item)
            .ok_or_else(|| EquipError::ItemNotFound(self.item.clone()))?;

        if state.inventory[position].kind != ItemKind::Weapon {
            return Ok(EquipOutcome::NotEquippable {
                item: self.item.clone(),
                kind: state.inventory[position].kind,
            });
        }

        let item = state.inventory.remove(position);
        let name = item.name.clone();
        let displaced = state.equipment.equip(EquipSlot::Weapon, item);
        let displaced_id = displaced.as_ref().map(|weapon| weapon.id.clone());
        if let Some(weapon) = displaced {
            state.inventory.push(weapon);
        }

        Ok(EquipOutcome::Equipped {
            item: self.item.clone(),
            name,
            displaced: displaced_id,
        })
    }

    fn post_validate(&self, state: &Character, _env: &CatalogEnv<'_>) -> Result<(), Self::Error> {
        // Instance exclusion (the occupant left the inventory before the slot
        // was filled) is enforced by the remove-then-equip order in apply; a
        // displaced weapon may be value-identical to the new occupant, so no
        // inventory scan can observe it. Only the kind invariant is checkable
        // here.
        debug_assert!(
            state
                .equipment
                .slot(EquipSlot::Weapon)
                .is_none_or(|weapon| weapon.kind == ItemKind::Weapon),
            "weapon slot must only ever hold a weapon"
        );
        Ok(())
    }
}
