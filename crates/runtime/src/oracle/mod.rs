//! Runtime wrappers around static catalog content.
//!
//! These implementations expose the `hero-core` oracle traits and bundle them
//! into an [`OracleManager`] so the session can build [`hero_core::Env`]
//! snapshots on demand. The data is immutable at runtime; dynamic state lives
//! in the session's character record.
mod classes;
mod shop;
mod world;

use std::sync::Arc;

use hero_content::ContentBundle;
use hero_core::{CatalogEnv, Env, PcgRng};

pub use classes::ClassOracleImpl;
pub use shop::ShopOracleImpl;
pub use world::WorldOracleImpl;

/// Manages all oracle implementations and provides unified access.
#[derive(Clone)]
pub struct OracleManager {
    classes: Arc<ClassOracleImpl>,
    shop: Arc<ShopOracleImpl>,
    world: Arc<WorldOracleImpl>,
    rng: PcgRng,
}

impl OracleManager {
    /// Builds the oracle set from a loaded content bundle.
    ///
    /// Fails when the class catalog does not cover every playable class,
    /// since the class oracle promises infallible lookups.
    pub fn new(bundle: ContentBundle) -> anyhow::Result<Self> {
        Ok(Self {
            classes: Arc::new(ClassOracleImpl::new(bundle.classes)?),
            shop: Arc::new(ShopOracleImpl::new(bundle.shop)),
            world: Arc::new(WorldOracleImpl::new(bundle.locations)),
            rng: PcgRng, // PcgRng is stateless
        })
    }

    /// Builds the oracle set from the embedded builtin catalog.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::new(hero_content::builtin()?)
    }

    /// Converts the oracle manager into a catalog environment for the engine.
    pub fn as_catalog_env(&self) -> CatalogEnv<'_> {
        Env::with_all(
            self.classes.as_ref(),
            self.shop.as_ref(),
            self.world.as_ref(),
            &self.rng,
        )
        .into_catalog_env()
    }

    pub fn classes(&self) -> &ClassOracleImpl {
        &self.classes
    }

    pub fn shop(&self) -> &ShopOracleImpl {
        &self.shop
    }

    pub fn world(&self) -> &WorldOracleImpl {
        &self.world
    }

    pub fn rng(&self) -> &PcgRng {
        &self.rng
    }
}
