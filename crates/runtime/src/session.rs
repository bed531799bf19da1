//! Single-character game session.
//!
//! The [`Session`] owns the canonical character record and the oracle set.
//! Every action runs against a clone of the record through
//! [`hero_core::GameEngine`]; the clone replaces the record only on success,
//! so a rejected action can never leave partial mutations behind. Exactly one
//! notification is emitted per attempted action.

use std::str::FromStr;
use std::sync::Arc;

use hero_core::{
    Action, ActionResult, Character, CharacterClass, CharacterId, ClassOracle, EquipOutcome,
    EquipSlot,
    ExecutionOutcome, GameEngine, ItemId, Location, RngOracle, ShopItem, ShopOracle, SkillId,
    UnequipOutcome, UpgradeSkillOutcome, WorldOracle,
};

use crate::error::{RejectReason, SessionError};
use crate::notify::{Notification, NotificationKind, NotificationSink, TracingSink};
use crate::oracle::OracleManager;

/// A world location paired with whether the session's character may enter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationView {
    pub location: Location,
    pub unlocked: bool,
}

/// Result of the exploration stub.
///
/// Exploration performs no state transition until the combat system exists;
/// it only resolves and gates the location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExploreOutcome {
    pub location: String,
    pub name: String,
    pub message: String,
}

/// Orchestrates one character against the catalog oracles.
pub struct Session {
    oracles: OracleManager,
    sink: Arc<dyn NotificationSink>,
    character: Option<Character>,
    seed: u64,
}

impl Session {
    pub fn new(oracles: OracleManager, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            oracles,
            sink,
            character: None,
            seed: 0,
        }
    }

    /// Session that reports notifications through tracing.
    pub fn with_tracing(oracles: OracleManager) -> Self {
        Self::new(oracles, Arc::new(TracingSink))
    }

    /// Overrides the seed feeding id and display-name rolls. Sessions with
    /// the same seed and action sequence are byte-for-byte reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn next_seed(&mut self) -> u64 {
        let seed = self.seed;
        self.seed = self.seed.wrapping_add(1);
        seed
    }

    /// Returns the session's character.
    pub fn character(&self) -> Result<&Character, SessionError> {
        self.character.as_ref().ok_or(SessionError::NoCharacter)
    }

    /// Creates the session's character from its class template.
    ///
    /// The id and the numeric suffix in the display name are deterministic
    /// rolls from the session seed.
    pub fn create_character(
        &mut self,
        class: CharacterClass,
    ) -> Result<&Character, SessionError> {
        if self.character.is_some() {
            return Err(SessionError::CharacterExists);
        }

        let id_seed = self.next_seed();
        let name_seed = self.next_seed();
        let rng = *self.oracles.rng();
        let template = self.oracles.classes().template(class);

        let id = CharacterId(u64::from(rng.next_u32(id_seed)));
        let name = format!("{} #{}", template.name, rng.range(name_seed, 0, 999));
        let character = Character::create(id, name, &template);

        tracing::info!(
            id = %character.id,
            name = %character.name,
            %class,
            gold = character.gold,
            "character created"
        );
        self.sink.notify(Notification::new(
            NotificationKind::Success,
            "Character created",
            format!("{} enters the world", character.name),
        ));

        Ok(self.character.insert(character))
    }

    /// Executes an action against the character record.
    ///
    /// The record is replaced by the post-transition snapshot on success and
    /// left untouched on rejection.
    pub fn execute(&mut self, action: Action) -> Result<ExecutionOutcome, SessionError> {
        let current = self.character.as_ref().ok_or(SessionError::NoCharacter)?;
        let mut snapshot = current.clone();

        let result = {
            let env = self.oracles.as_catalog_env();
            GameEngine::new(&mut snapshot).execute(env, &action)
        };

        match result {
            Ok(outcome) => {
                tracing::info!(
                    action = action.kind(),
                    gold = snapshot.gold,
                    no_op = outcome.result.is_no_op(),
                    "action applied"
                );
                self.sink.notify(notification_for(&outcome.result));
                self.character = Some(snapshot);
                Ok(outcome)
            }
            Err(err) => {
                let err = SessionError::from(err);
                tracing::warn!(action = action.kind(), error = %err, "action rejected");
                self.notify_failure(&err);
                Err(err)
            }
        }
    }

    pub fn purchase(&mut self, item: impl Into<ItemId>) -> Result<ExecutionOutcome, SessionError> {
        self.execute(Action::purchase(item))
    }

    pub fn equip(&mut self, item: impl Into<ItemId>) -> Result<ExecutionOutcome, SessionError> {
        self.execute(Action::equip(item))
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Result<ExecutionOutcome, SessionError> {
        self.execute(Action::unequip(slot))
    }

    /// Unequips by slot name, e.g. from user input. Slot names parse
    /// case-insensitively; an unknown name is rejected before the engine
    /// is involved.
    pub fn unequip_slot(&mut self, slot: &str) -> Result<ExecutionOutcome, SessionError> {
        match EquipSlot::from_str(slot) {
            Ok(parsed) => self.unequip(parsed),
            Err(_) => {
                let err = SessionError::from(RejectReason::InvalidSlot(slot.to_owned()));
                tracing::warn!(slot, error = %err, "action rejected");
                self.notify_failure(&err);
                Err(err)
            }
        }
    }

    pub fn unlock_skill(
        &mut self,
        skill: impl Into<SkillId>,
    ) -> Result<ExecutionOutcome, SessionError> {
        self.execute(Action::unlock_skill(skill))
    }

    pub fn upgrade_skill(
        &mut self,
        skill: impl Into<SkillId>,
    ) -> Result<ExecutionOutcome, SessionError> {
        self.execute(Action::upgrade_skill(skill))
    }

    /// The full shop catalog, in display order.
    pub fn shop_catalog(&self) -> Vec<ShopItem> {
        self.oracles.shop().catalog()
    }

    /// All world locations annotated with the character's access.
    pub fn locations(&self) -> Result<Vec<LocationView>, SessionError> {
        let level = self.character()?.level;
        Ok(self
            .oracles
            .world()
            .locations()
            .into_iter()
            .map(|location| LocationView {
                unlocked: location.is_unlocked_at(level),
                location,
            })
            .collect())
    }

    /// Resolves and gates a location. Combat does not exist yet, so a
    /// successful exploration changes no state.
    pub fn explore(&mut self, location_id: &str) -> Result<ExploreOutcome, SessionError> {
        let character = self.character.as_ref().ok_or(SessionError::NoCharacter)?;

        let Some(location) = self.oracles.world().location(location_id) else {
            let err = SessionError::from(RejectReason::UnknownLocation(location_id.to_owned()));
            tracing::warn!(location = location_id, error = %err, "exploration rejected");
            self.notify_failure(&err);
            return Err(err);
        };

        if !location.is_unlocked_at(character.level) {
            let err = SessionError::from(RejectReason::LocationLocked {
                location: location.id.clone(),
                required: location.required_level,
                current: character.level,
            });
            tracing::warn!(location = location_id, error = %err, "exploration rejected");
            self.notify_failure(&err);
            return Err(err);
        }

        tracing::info!(location = %location.id, "exploration attempted");
        let outcome = ExploreOutcome {
            location: location.id,
            name: location.name.clone(),
            message: "Combat system coming soon!".to_owned(),
        };
        self.sink.notify(Notification::new(
            NotificationKind::Info,
            format!("Exploring {}", outcome.name),
            outcome.message.clone(),
        ));
        Ok(outcome)
    }

    fn notify_failure(&self, err: &SessionError) {
        self.sink.notify(Notification::new(
            NotificationKind::Failure,
            "Action failed",
            err.to_string(),
        ));
    }
}

/// Builds the user-facing notification for an accepted action.
fn notification_for(result: &ActionResult) -> Notification {
    match result {
        ActionResult::Purchase(outcome) => Notification::new(
            NotificationKind::Success,
            "Item purchased",
            format!(
                "Bought {} (x{}) for {} gold",
                outcome.name, outcome.quantity_added, outcome.gold_spent
            ),
        ),
        ActionResult::Equip(EquipOutcome::Equipped {
            name, displaced, ..
        }) => Notification::new(
            NotificationKind::Success,
            "Item equipped",
            match displaced {
                Some(previous) => format!("Equipped {name}, stowed {previous}"),
                None => format!("Equipped {name}"),
            },
        ),
        ActionResult::Equip(EquipOutcome::NotEquippable { item, kind }) => Notification::new(
            NotificationKind::Info,
            "Cannot equip",
            format!("{item} is a {kind}; only weapons can be equipped"),
        ),
        ActionResult::Unequip(UnequipOutcome::Unequipped { name, .. }) => Notification::new(
            NotificationKind::Success,
            "Item unequipped",
            format!("Returned {name} to the inventory"),
        ),
        ActionResult::Unequip(UnequipOutcome::SlotEmpty { slot }) => Notification::new(
            NotificationKind::Info,
            "Nothing equipped",
            format!("The {slot} slot is already empty"),
        ),
        ActionResult::UnlockSkill(outcome) => Notification::new(
            NotificationKind::Success,
            "Skill unlocked",
            format!("Learned {} for {} gold", outcome.name, outcome.gold_spent),
        ),
        ActionResult::UpgradeSkill(UpgradeSkillOutcome::Upgraded {
            name,
            level,
            gold_spent,
            ..
        }) => Notification::new(
            NotificationKind::Success,
            "Skill upgraded",
            format!("{name} is now level {level} ({gold_spent} gold)"),
        ),
        ActionResult::UpgradeSkill(UpgradeSkillOutcome::AlreadyMaxed { skill, level }) => {
            Notification::new(
                NotificationKind::Info,
                "Skill already maxed",
                format!("{skill} is at its maximum level {level}"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemorySink;

    fn session_with_sink() -> (Session, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let oracles = OracleManager::builtin().expect("builtin content must load");
        (Session::new(oracles, sink.clone()), sink)
    }

    #[test]
    fn creation_is_deterministic_per_seed() {
        let (session_a, _) = session_with_sink();
        let (session_b, _) = session_with_sink();
        let mut session_a = session_a.with_seed(99);
        let mut session_b = session_b.with_seed(99);

        let a = session_a.create_character(CharacterClass::Mage).unwrap().clone();
        let b = session_b.create_character(CharacterClass::Mage).unwrap().clone();

        assert_eq!(a, b);
        assert!(a.name.starts_with("Mage #"));
    }

    #[test]
    fn second_creation_is_rejected() {
        let (mut session, _) = session_with_sink();
        session.create_character(CharacterClass::Warrior).unwrap();
        assert_eq!(
            session.create_character(CharacterClass::Archer).unwrap_err(),
            SessionError::CharacterExists
        );
    }

    #[test]
    fn actions_require_a_character() {
        let (mut session, sink) = session_with_sink();
        assert_eq!(
            session.purchase("iron_sword").unwrap_err(),
            SessionError::NoCharacter
        );
        // NoCharacter is a session misuse, not an attempted action.
        assert!(sink.last().is_none());
    }

    #[test]
    fn unknown_slot_name_is_rejected_with_notification() {
        let (mut session, sink) = session_with_sink();
        session.create_character(CharacterClass::Warrior).unwrap();

        let err = session.unequip_slot("ring").unwrap_err();
        assert_eq!(
            err,
            SessionError::Rejected(RejectReason::InvalidSlot("ring".to_owned()))
        );
        assert_eq!(sink.last().unwrap().kind, NotificationKind::Failure);

        // Slot names parse case-insensitively.
        let outcome = session.unequip_slot("Weapon").unwrap();
        assert!(outcome.result.is_no_op());
    }
}
