//! Shop purchase transition.

use crate::action::ActionTransition;
use crate::env::{CatalogEnv, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Character, ItemId};

/// Buys one shop listing into the inventory.
///
/// Purchasing an id already present in the inventory grows that stack by the
/// catalog quantity; otherwise a fresh entry is appended. The price is
/// deducted exactly once regardless of stack size.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurchaseAction {
    pub item: ItemId,
}

impl PurchaseAction {
    pub fn new(item: impl Into<ItemId>) -> Self {
        Self { item: item.into() }
    }
}

/// Result of a successful purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurchaseOutcome {
    pub item: ItemId,
    pub name: String,
    /// Units added to the inventory (the catalog stack size).
    pub quantity_added: u32,
    /// True when an existing stack grew instead of a new entry appearing.
    pub stacked: bool,
    pub gold_spent: u32,
}

/// Rejection reasons for a purchase.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    /// The id does not resolve against the shop catalog. Caller error,
    /// handled as a defensive no-op.
    #[error("item '{0}' is not sold in the shop")]
    ItemNotFound(ItemId),

    /// Gold below the listing price.
    #[error("insufficient funds: {required} gold required, {available} available")]
    InsufficientFunds { required: u32, available: u32 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for PurchaseError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotFound(_) => ErrorSeverity::Validation,
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
            Self::Oracle(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotFound(_) => "PURCHASE_ITEM_NOT_FOUND",
            Self::InsufficientFunds { .. } => "PURCHASE_INSUFFICIENT_FUNDS",
            Self::Oracle(e) => e.error_code(),
        }
    }
}

impl ActionTransition for PurchaseAction {
    type Error = PurchaseError;
    type Outcome = PurchaseOutcome;

    fn pre_validate(&self, state: &Character, env: &CatalogEnv<'_>) -> Result<(), Self::Error> {
        let listing = env
            .shop()?
            .listing(&self.item)
            .ok_or_else(|| PurchaseError::ItemNotFound(self.item.clone()))?;

        if state.gold < listing.price {
            return Err(PurchaseError::InsufficientFunds {
                required: listing.price,
                available: state.gold,
            });
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut Character,
        env: &CatalogEnv<'_>,
    ) -> Result<Self::Outcome, Self::Error> {
        let listing = env
            .shop()?
            .listing(&self.item)
            .ok_or_else(|| PurchaseError::ItemNotFound(self.item.clone()))?;

        state
            .spend_gold(listing.price)
            .ok_or(PurchaseError::InsufficientFunds {
                required: listing.price,
                available: state.gold,
            })?;

        let stacked = match state.inventory.iter_mut().find(|i| i.id == listing.id) {
            Some(existing) => {
                existing.quantity += listing.quantity;
                true
            }
            None => {
                state.inventory.push(listing.to_inventory_item());
                false
            }
        };

        Ok(PurchaseOutcome {
            item: listing.id.clone(),
            name: listing.name.clone(),
            quantity_added: listing.quantity,
            stacked,
            gold_spent: listing.price,
        })
    }

    fn post_validate(&self, state: &Character, _env: &CatalogEnv<'_>) -> Result<(), Self::Error> {
        // A displaced weapon may legally coexist with a stack of the same id,
        // so presence is the postcondition here, not global uniqueness.
        debug_assert!(
            state.inventory.iter().any(|i| i.id == self.item),
            "purchase must leave a stack for {}",
            self.item
        );
        Ok(())
    }
}
