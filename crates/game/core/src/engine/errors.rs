//! Error types for the action execution pipeline.

use crate::action::{
    ActionTransition, EquipAction, PurchaseAction, UnequipAction, UnlockSkillAction,
    UpgradeSkillAction,
};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("purchase action failed: {0}")]
    Purchase(TransitionPhaseError<<PurchaseAction as ActionTransition>::Error>),

    #[error("equip action failed: {0}")]
    Equip(TransitionPhaseError<<EquipAction as ActionTransition>::Error>),

    /// Unreachable today (the unequip transition is infallible); the variant
    /// keeps the dispatch total if unequip ever gains a precondition.
    #[error("unequip action failed: {0}")]
    Unequip(TransitionPhaseError<<UnequipAction as ActionTransition>::Error>),

    #[error("skill unlock action failed: {0}")]
    UnlockSkill(TransitionPhaseError<<UnlockSkillAction as ActionTransition>::Error>),

    #[error("skill upgrade action failed: {0}")]
    UpgradeSkill(TransitionPhaseError<<UpgradeSkillAction as ActionTransition>::Error>),
}

impl ExecuteError {
    /// Returns the phase that rejected the action.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Purchase(e) => e.phase,
            Self::Equip(e) => e.phase,
            Self::Unequip(e) => e.phase,
            Self::UnlockSkill(e) => e.phase,
            Self::UpgradeSkill(e) => e.phase,
        }
    }
}
