//! Pure character progression and economy rules.
//!
//! `hero-core` defines the canonical rules (actions, engine, character state)
//! and exposes pure APIs that can be reused by the runtime and offline tools.
//! All state mutation flows through [`engine::GameEngine`], and supporting
//! crates depend on the types re-exported here.
pub mod action;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionTransition, EquipAction, EquipError, EquipOutcome, PurchaseAction,
    PurchaseError, PurchaseOutcome, UnequipAction, UnequipOutcome, UnlockSkillAction,
    UnlockSkillError, UnlockSkillOutcome, UpgradeSkillAction, UpgradeSkillError,
    UpgradeSkillOutcome,
};
pub use engine::{
    ActionResult, ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase,
    TransitionPhaseError,
};
pub use env::{
    BaseStats, CatalogEnv, ClassOracle, ClassTemplate, Env, Location, OracleError, PcgRng,
    RngOracle, ShopItem, ShopOracle, WorldOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Character, CharacterClass, CharacterId, EquipSlot, Equipment, GoldChange, InventoryItem,
    ItemId, ItemKind, Rarity, ResourceMeter, Skill, SkillId, StatBonuses, StateDelta, Stats,
};
