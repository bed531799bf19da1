//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`Character`] state.
//! It orchestrates the transition phases and surfaces rich error information
//! for the runtime. All state mutation flows through the same execute()
//! pipeline; rejected actions leave the state unchanged by value.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{
    Action, EquipOutcome, PurchaseOutcome, UnequipOutcome, UnlockSkillOutcome,
    UpgradeSkillOutcome,
};
use crate::env::CatalogEnv;
use crate::state::{Character, StateDelta};

/// Action-specific execution result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Purchase(PurchaseOutcome),
    Equip(EquipOutcome),
    Unequip(UnequipOutcome),
    UnlockSkill(UnlockSkillOutcome),
    UpgradeSkill(UpgradeSkillOutcome),
}

impl ActionResult {
    /// Returns true for the explicit no-op outcomes (maxed skill, empty
    /// slot, non-equippable item) that change nothing but are not errors.
    pub fn is_no_op(&self) -> bool {
        matches!(
            self,
            Self::Equip(EquipOutcome::NotEquippable { .. })
                | Self::Unequip(UnequipOutcome::SlotEmpty { .. })
                | Self::UpgradeSkill(UpgradeSkillOutcome::AlreadyMaxed { .. })
        )
    }
}

/// Complete outcome of action execution.
///
/// Contains both state change metadata (delta) and the action-specific
/// outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// State change metadata (which fields changed).
    pub delta: StateDelta,

    /// Action-specific execution result.
    pub result: ActionResult,
}

/// Engine that executes actions against a character record.
///
/// All mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate. The engine borrows the record
/// exclusively, so no two transitions can ever be in flight against the same
/// character.
pub struct GameEngine<'a> {
    state: &'a mut Character,
}

impl<'a> GameEngine<'a> {
    /// Creates a new engine borrowing the given character.
    pub fn new(state: &'a mut Character) -> Self {
        Self { state }
    }

    /// Executes an action by routing it through the transition pipeline.
    ///
    /// Returns [`ExecutionOutcome`] containing both the field-level delta and
    /// the action outcome. On rejection the character is unchanged by value:
    /// every precondition is checked before the first mutation.
    pub fn execute(
        &mut self,
        env: CatalogEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();

        let result = transition::execute_transition(action, self.state, &env)?;

        let delta = StateDelta::from_states(&before, self.state);
        Ok(ExecutionOutcome { delta, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::testing::{fixture_character, fixture_env, FixtureShop};
    use crate::action::PurchaseError;
    use crate::state::ItemId;

    #[test]
    fn execute_reports_delta_for_purchase() {
        let shop = FixtureShop::default();
        let env = fixture_env(&shop);
        let mut character = fixture_character();

        let outcome = GameEngine::new(&mut character)
            .execute(env, &Action::purchase("iron_sword"))
            .unwrap();

        let gold = outcome.delta.gold.unwrap();
        assert_eq!(gold.spent(), 150);
        assert!(outcome.delta.inventory_changed);
        assert!(!outcome.delta.skills_changed);
        assert!(!outcome.result.is_no_op());
        assert_eq!(character.gold, 350);
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let shop = FixtureShop::default();
        let env = fixture_env(&shop);
        let mut character = fixture_character();
        character.gold = 10;
        let before = character.clone();

        let err = GameEngine::new(&mut character)
            .execute(env, &Action::purchase("iron_sword"))
            .unwrap_err();

        assert!(matches!(
            err,
            ExecuteError::Purchase(TransitionPhaseError {
                phase: TransitionPhase::PreValidate,
                error: PurchaseError::InsufficientFunds { .. },
            })
        ));
        assert_eq!(character, before);
    }

    #[test]
    fn no_op_outcome_has_empty_delta() {
        let shop = FixtureShop::default();
        let env = fixture_env(&shop);
        let mut character = fixture_character();
        {
            let skill = character
                .skill_mut(&crate::state::SkillId::from("power_strike"))
                .unwrap();
            skill.unlocked = true;
            skill.level = skill.max_level;
        }

        let outcome = GameEngine::new(&mut character)
            .execute(env, &Action::upgrade_skill("power_strike"))
            .unwrap();

        assert!(outcome.result.is_no_op());
        assert!(outcome.delta.is_empty());
    }

    #[test]
    fn spending_sequence_drains_gold_to_exactly_zero() {
        let shop = FixtureShop::default();
        let mut character = fixture_character();

        // (action, expected gold afterwards, expected success)
        let steps = [
            (Action::purchase("iron_sword"), 350, true),
            (Action::purchase("healing_potion"), 300, true),
            (Action::unlock_skill("power_strike"), 200, true),
            (Action::purchase("steel_axe"), 200, false), // costs 320
            (Action::upgrade_skill("power_strike"), 0, true), // costs 100 * 2
            (Action::purchase("iron_ore"), 0, false),    // costs 40
        ];

        for (action, expected_gold, expected_ok) in steps {
            let env = fixture_env(&shop);
            let result = GameEngine::new(&mut character).execute(env, &action);
            assert_eq!(result.is_ok(), expected_ok, "step {action:?}");
            assert_eq!(character.gold, expected_gold, "step {action:?}");
        }

        assert!(character.inventory_item(&ItemId::from("iron_sword")).is_some());
        assert!(character.inventory_item(&ItemId::from("steel_axe")).is_none());
    }
}
