//! Skill unlock and upgrade transitions.

use crate::action::ActionTransition;
use crate::env::CatalogEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Character, SkillId};

/// Unlocks a locked skill at tier 1 for its base cost.
///
/// The level gate is checked before the gold check, so a character failing
/// both is told about the level first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockSkillAction {
    pub skill: SkillId,
}

impl UnlockSkillAction {
    pub fn new(skill: impl Into<SkillId>) -> Self {
        Self {
            skill: skill.into(),
        }
    }
}

/// Result of a successful unlock.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockSkillOutcome {
    pub skill: SkillId,
    pub name: String,
    pub gold_spent: u32,
}

/// Rejection reasons for a skill unlock.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnlockSkillError {
    /// The skill does not belong to this character's class. Caller error,
    /// handled as a defensive no-op.
    #[error("skill '{0}' does not exist for this character")]
    SkillNotFound(SkillId),

    /// Character level below the skill's gate.
    #[error("level too low: requires level {required}, character is level {current}")]
    LevelTooLow { required: u32, current: u32 },

    /// Gold below the unlock cost.
    #[error("insufficient funds: {required} gold required, {available} available")]
    InsufficientFunds { required: u32, available: u32 },
}

impl GameError for UnlockSkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SkillNotFound(_) => ErrorSeverity::Validation,
            Self::LevelTooLow { .. } | Self::InsufficientFunds { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SkillNotFound(_) => "SKILL_NOT_FOUND",
            Self::LevelTooLow { .. } => "SKILL_LEVEL_TOO_LOW",
            Self::InsufficientFunds { .. } => "SKILL_INSUFFICIENT_FUNDS",
        }
    }
}

impl ActionTransition for UnlockSkillAction {
    type Error = UnlockSkillError;
    type Outcome = UnlockSkillOutcome;

    fn pre_validate(&self, state: &Character, _env: &CatalogEnv<'_>) -> Result<(), Self::Error> {
        let skill = state
            .skill(&self.skill)
            .ok_or_else(|| UnlockSkillError::SkillNotFound(self.skill.clone()))?;

        // Level gate first, gold second; both-fail reports the level error.
        if state.level < skill.required_level {
            return Err(UnlockSkillError::LevelTooLow {
                required: skill.required_level,
                current: state.level,
            });
        }

        if state.gold < skill.cost {
            return Err(UnlockSkillError::InsufficientFunds {
                required: skill.cost,
                available: state.gold,
            });
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut Character,
        _env: &CatalogEnv<'_>,
    ) -> Result<Self::Outcome, Self::Error> {
        let gold = state.gold;
        let skill = state
            .skill_mut(&self.skill)
            .ok_or_else(|| UnlockSkillError::SkillNotFound(self.skill.clone()))?;

        if gold < skill.cost {
            return Err(UnlockSkillError::InsufficientFunds {
                required: skill.cost,
                available: gold,
            });
        }

        skill.unlocked = true;
        skill.level = 1;
        let cost = skill.cost;
        let name = skill.name.clone();
        state.gold -= cost;

        Ok(UnlockSkillOutcome {
            skill: self.skill.clone(),
            name,
            gold_spent: cost,
        })
    }

    fn post_validate(&self, state: &Character, _env: &CatalogEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(
            state
                .skill(&self.skill)
                .is_some_and(|s| s.unlocked && s.level == 1),
            "skill {} must be unlocked at tier 1",
            self.skill
        );
        Ok(())
    }
}

/// Raises an unlocked skill by one tier.
///
/// The cost scales linearly with the next level number
/// (`cost * (level + 1)`); a skill already at its maximum tier is an explicit
/// no-op outcome rather than an error or a silent success.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeSkillAction {
    pub skill: SkillId,
}

impl UpgradeSkillAction {
    pub fn new(skill: impl Into<SkillId>) -> Self {
        Self {
            skill: skill.into(),
        }
    }
}

/// Result of an upgrade attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpgradeSkillOutcome {
    /// The skill advanced one tier.
    Upgraded {
        skill: SkillId,
        name: String,
        level: u32,
        gold_spent: u32,
    },

    /// The skill is already at its maximum tier. State unchanged.
    AlreadyMaxed { skill: SkillId, level: u32 },
}

/// Rejection reasons for a skill upgrade.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UpgradeSkillError {
    /// The skill does not belong to this character's class. Caller error,
    /// handled as a defensive no-op.
    #[error("skill '{0}' does not exist for this character")]
    SkillNotFound(SkillId),

    /// Upgrade attempted on a skill that was never unlocked.
    #[error("skill '{0}' has not been unlocked yet")]
    NotUnlocked(SkillId),

    /// Gold below the scaled upgrade cost.
    #[error("insufficient funds: {required} gold required, {available} available")]
    InsufficientFunds { required: u32, available: u32 },
}

impl GameError for UpgradeSkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SkillNotFound(_) | Self::NotUnlocked(_) => ErrorSeverity::Validation,
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SkillNotFound(_) => "SKILL_NOT_FOUND",
            Self::NotUnlocked(_) => "SKILL_NOT_UNLOCKED",
            Self::InsufficientFunds { .. } => "SKILL_INSUFFICIENT_FUNDS",
        }
    }
}

impl ActionTransition for UpgradeSkillAction {
    type Error = UpgradeSkillError;
    type Outcome = UpgradeSkillOutcome;

    fn pre_validate(&self, state: &Character, _env: &CatalogEnv<'_>) -> Result<(), Self::Error> {
        let skill = state
            .skill(&self.skill)
            .ok_or_else(|| UpgradeSkillError::SkillNotFound(self.skill.clone()))?;

        if !skill.unlocked {
            return Err(UpgradeSkillError::NotUnlocked(self.skill.clone()));
        }

        // Maxed skills short-circuit in apply as a no-op outcome; the gold
        // check only applies when an upgrade is actually possible.
        if !skill.is_maxed() && state.gold < skill.upgrade_cost() {
            return Err(UpgradeSkillError::InsufficientFunds {
                required: skill.upgrade_cost(),
                available: state.gold,
            });
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut Character,
        _env: &CatalogEnv<'_>,
    ) -> Result<Self::Outcome, Self::Error> {
        let gold = state.gold;
        let skill = state
            .skill_mut(&self.skill)
            .ok_or_else(|| UpgradeSkillError::SkillNotFound(self.skill.clone()))?;

        if skill.is_maxed() {
            return Ok(UpgradeSkillOutcome::AlreadyMaxed {
                skill: self.skill.clone(),
                level: skill.level,
            });
        }

        let cost = skill.upgrade_cost();
        if gold < cost {
            return Err(UpgradeSkillError::InsufficientFunds {
                required: cost,
                available: gold,
            });
        }

        skill.level += 1;
        let level = skill.level;
        let name = skill.name.clone();
        state.gold -= cost;

        Ok(UpgradeSkillOutcome::Upgraded {
            skill: self.skill.clone(),
            name,
            level,
            gold_spent: cost,
        })
    }

    fn post_validate(&self, state: &Character, _env: &CatalogEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(
            state.skill(&self.skill).is_some_and(|s| s.level <= s.max_level),
            "skill {} must never exceed its maximum tier",
            self.skill
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::testing::{fixture_character, fixture_env, FixtureShop};

    #[test]
    fn unlock_sets_tier_one_and_deducts_cost() {
        let shop = FixtureShop::default();
        let env = fixture_env(&shop);
        let mut character = fixture_character();

        let action = UnlockSkillAction::new("power_strike");
        action.pre_validate(&character, &env).unwrap();
        let outcome = action.apply(&mut character, &env).unwrap();
        action.post_validate(&character, &env).unwrap();

        assert_eq!(outcome.gold_spent, 100);
        assert_eq!(character.gold, 400);
        let skill = character.skill(&SkillId::from("power_strike")).unwrap();
        assert!(skill.unlocked);
        assert_eq!(skill.level, 1);
        // Exactly one skill mutated.
        assert!(
            character
                .skills
                .iter()
                .filter(|s| s.id != SkillId::from("power_strike"))
                .all(|s| !s.unlocked && s.level == 0)
        );
    }

    #[test]
    fn unlock_reports_level_gate_before_gold() {
        let shop = FixtureShop::default();
        let env = fixture_env(&shop);
        let mut character = fixture_character();
        character.level = 2;
        character.gold = 0; // both checks would fail

        let err = UnlockSkillAction::new("whirlwind")
            .pre_validate(&character, &env)
            .unwrap_err();
        assert_eq!(
            err,
            UnlockSkillError::LevelTooLow {
                required: 5,
                current: 2
            }
        );
    }

    #[test]
    fn unlock_rejects_insufficient_funds() {
        let shop = FixtureShop::default();
        let env = fixture_env(&shop);
        let mut character = fixture_character();
        character.gold = 50;

        let err = UnlockSkillAction::new("power_strike")
            .pre_validate(&character, &env)
            .unwrap_err();
        assert_eq!(
            err,
            UnlockSkillError::InsufficientFunds {
                required: 100,
                available: 50
            }
        );
    }

    #[test]
    fn upgrade_cost_follows_linear_curve() {
        let shop = FixtureShop::default();
        let env = fixture_env(&shop);
        let mut character = fixture_character();
        character.gold = 2000;
        UnlockSkillAction::new("power_strike")
            .apply(&mut character, &env)
            .unwrap();

        // Level 1 -> 2 costs 100 * 2.
        let outcome = UpgradeSkillAction::new("power_strike")
            .apply(&mut character, &env)
            .unwrap();
        assert_eq!(
            outcome,
            UpgradeSkillOutcome::Upgraded {
                skill: SkillId::from("power_strike"),
                name: "Power Strike".to_owned(),
                level: 2,
                gold_spent: 200,
            }
        );

        // Level 2 -> 3 costs 100 * 3.
        let outcome = UpgradeSkillAction::new("power_strike")
            .apply(&mut character, &env)
            .unwrap();
        assert!(matches!(
            outcome,
            UpgradeSkillOutcome::Upgraded {
                level: 3,
                gold_spent: 300,
                ..
            }
        ));
    }

    #[test]
    fn upgrade_at_max_level_is_a_no_op() {
        let shop = FixtureShop::default();
        let env = fixture_env(&shop);
        let mut character = fixture_character();
        {
            let skill = character.skill_mut(&SkillId::from("power_strike")).unwrap();
            skill.unlocked = true;
            skill.level = skill.max_level;
        }
        let before = character.clone();

        let action = UpgradeSkillAction::new("power_strike");
        action.pre_validate(&character, &env).unwrap();
        let outcome = action.apply(&mut character, &env).unwrap();

        assert_eq!(
            outcome,
            UpgradeSkillOutcome::AlreadyMaxed {
                skill: SkillId::from("power_strike"),
                level: 5,
            }
        );
        assert_eq!(character, before);
    }

    #[test]
    fn upgrade_requires_unlock() {
        let shop = FixtureShop::default();
        let env = fixture_env(&shop);
        let character = fixture_character();

        let err = UpgradeSkillAction::new("power_strike")
            .pre_validate(&character, &env)
            .unwrap_err();
        assert_eq!(
            err,
            UpgradeSkillError::NotUnlocked(SkillId::from("power_strike"))
        );
    }
}
