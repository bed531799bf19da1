//! Session-level error types.
//!
//! The engine reports per-action error enums wrapped in phase information;
//! callers of the session want one flat rejection vocabulary. The
//! [`From<ExecuteError>`] impl performs that flattening.

use hero_core::{
    EquipError, ExecuteError, ItemId, OracleError, PurchaseError, SkillId, UnlockSkillError,
    UpgradeSkillError,
};

/// Why the rules rejected an action.
///
/// Every variant corresponds to a recoverable or caller-error rejection; the
/// character record is unchanged whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("insufficient funds: {required} gold required, {available} available")]
    InsufficientFunds { required: u32, available: u32 },

    #[error("level too low: requires level {required}, character is level {current}")]
    LevelTooLow { required: u32, current: u32 },

    /// The slot string did not parse into an equipment slot.
    #[error("'{0}' is not an equipment slot")]
    InvalidSlot(String),

    #[error("item '{0}' not found")]
    ItemNotFound(ItemId),

    #[error("skill '{0}' not found")]
    SkillNotFound(SkillId),

    #[error("skill '{0}' has not been unlocked")]
    SkillNotUnlocked(SkillId),

    #[error("location '{location}' requires level {required}, character is level {current}")]
    LocationLocked {
        location: String,
        required: u32,
        current: u32,
    },

    #[error("no such location '{0}'")]
    UnknownLocation(String),
}

/// Errors surfaced by [`crate::Session`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The session has no character yet.
    #[error("no character has been created in this session")]
    NoCharacter,

    /// The session already holds a character.
    #[error("a character already exists in this session")]
    CharacterExists,

    /// The rules rejected the action.
    #[error("action rejected: {0}")]
    Rejected(#[from] RejectReason),

    /// An oracle was missing or failed; indicates session miswiring, not a
    /// player mistake.
    #[error("oracle failure: {0}")]
    Oracle(#[from] OracleError),
}

impl From<ExecuteError> for SessionError {
    fn from(err: ExecuteError) -> Self {
        match err {
            ExecuteError::Purchase(e) => match e.error {
                PurchaseError::ItemNotFound(id) => RejectReason::ItemNotFound(id).into(),
                PurchaseError::InsufficientFunds {
                    required,
                    available,
                } => RejectReason::InsufficientFunds {
                    required,
                    available,
                }
                .into(),
                PurchaseError::Oracle(oracle) => SessionError::Oracle(oracle),
            },
            ExecuteError::Equip(e) => match e.error {
                EquipError::ItemNotFound(id) => RejectReason::ItemNotFound(id).into(),
            },
            // Unequip is infallible; the empty match proves it.
            ExecuteError::Unequip(e) => match e.error {},
            ExecuteError::UnlockSkill(e) => match e.error {
                UnlockSkillError::SkillNotFound(id) => RejectReason::SkillNotFound(id).into(),
                UnlockSkillError::LevelTooLow { required, current } => {
                    RejectReason::LevelTooLow { required, current }.into()
                }
                UnlockSkillError::InsufficientFunds {
                    required,
                    available,
                } => RejectReason::InsufficientFunds {
                    required,
                    available,
                }
                .into(),
            },
            ExecuteError::UpgradeSkill(e) => match e.error {
                UpgradeSkillError::SkillNotFound(id) => RejectReason::SkillNotFound(id).into(),
                UpgradeSkillError::NotUnlocked(id) => RejectReason::SkillNotUnlocked(id).into(),
                UpgradeSkillError::InsufficientFunds {
                    required,
                    available,
                } => RejectReason::InsufficientFunds {
                    required,
                    available,
                }
                .into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero_core::{TransitionPhase, TransitionPhaseError};

    #[test]
    fn execute_errors_flatten_to_reject_reasons() {
        let err = ExecuteError::Purchase(TransitionPhaseError::new(
            TransitionPhase::PreValidate,
            PurchaseError::InsufficientFunds {
                required: 150,
                available: 10,
            },
        ));
        assert_eq!(
            SessionError::from(err),
            SessionError::Rejected(RejectReason::InsufficientFunds {
                required: 150,
                available: 10
            })
        );

        let err = ExecuteError::UpgradeSkill(TransitionPhaseError::new(
            TransitionPhase::PreValidate,
            UpgradeSkillError::NotUnlocked(SkillId::from("firebolt")),
        ));
        assert_eq!(
            SessionError::from(err),
            SessionError::Rejected(RejectReason::SkillNotUnlocked(SkillId::from("firebolt")))
        );
    }

    #[test]
    fn oracle_failures_stay_distinct_from_rejections() {
        let err = ExecuteError::Purchase(TransitionPhaseError::new(
            TransitionPhase::PreValidate,
            PurchaseError::Oracle(OracleError::ShopNotAvailable),
        ));
        assert_eq!(
            SessionError::from(err),
            SessionError::Oracle(OracleError::ShopNotAvailable)
        );
    }
}
