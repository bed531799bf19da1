//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionTransition};
use crate::env::CatalogEnv;
use crate::state::Character;

use super::ActionResult;
use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the
/// outcome.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the character and produce the outcome
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut Character,
    env: &CatalogEnv<'_>,
) -> Result<T::Outcome, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let outcome = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(outcome)
}

/// Routes an action to its transition and wraps the outcome in
/// [`ActionResult`]. Internal implementation of `GameEngine::execute`.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut Character,
    env: &CatalogEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Purchase(transition) => drive_transition(transition, state, env)
            .map(ActionResult::Purchase)
            .map_err(ExecuteError::Purchase),
        Action::Equip(transition) => drive_transition(transition, state, env)
            .map(ActionResult::Equip)
            .map_err(ExecuteError::Equip),
        Action::Unequip(transition) => drive_transition(transition, state, env)
            .map(ActionResult::Unequip)
            .map_err(ExecuteError::Unequip),
        Action::UnlockSkill(transition) => drive_transition(transition, state, env)
            .map(ActionResult::UnlockSkill)
            .map_err(ExecuteError::UnlockSkill),
        Action::UpgradeSkill(transition) => drive_transition(transition, state, env)
            .map(ActionResult::UpgradeSkill)
            .map_err(ExecuteError::UpgradeSkill),
    }
}
