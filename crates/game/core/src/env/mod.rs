//! Traits describing read-only catalog data.
//!
//! Oracles expose class templates, shop listings, and world locations. The
//! [`Env`] aggregate bundles them so the engine can access everything it
//! needs without hard coupling to concrete implementations. Catalog data is
//! fixed at process start and never mutated by the engine.
mod classes;
mod error;
mod rng;
mod shop;
mod world;

pub use classes::{BaseStats, ClassOracle, ClassTemplate};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle};
pub use shop::{ShopItem, ShopOracle};
pub use world::{Location, WorldOracle};

/// Aggregates the read-only oracles required by the action pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, C, S, W, R>
where
    C: ClassOracle + ?Sized,
    S: ShopOracle + ?Sized,
    W: WorldOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    classes: Option<&'a C>,
    shop: Option<&'a S>,
    world: Option<&'a W>,
    rng: Option<&'a R>,
}

/// Trait-object form of [`Env`] used throughout the engine.
pub type CatalogEnv<'a> = Env<
    'a,
    dyn ClassOracle + 'a,
    dyn ShopOracle + 'a,
    dyn WorldOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, C, S, W, R> Env<'a, C, S, W, R>
where
    C: ClassOracle + ?Sized,
    S: ShopOracle + ?Sized,
    W: WorldOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        classes: Option<&'a C>,
        shop: Option<&'a S>,
        world: Option<&'a W>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            classes,
            shop,
            world,
            rng,
        }
    }

    pub fn with_all(classes: &'a C, shop: &'a S, world: &'a W, rng: &'a R) -> Self {
        Self::new(Some(classes), Some(shop), Some(world), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            classes: None,
            shop: None,
            world: None,
            rng: None,
        }
    }

    /// Returns the ClassOracle, or an error if not available.
    pub fn classes(&self) -> Result<&'a C, OracleError> {
        self.classes.ok_or(OracleError::ClassesNotAvailable)
    }

    /// Returns the ShopOracle, or an error if not available.
    pub fn shop(&self) -> Result<&'a S, OracleError> {
        self.shop.ok_or(OracleError::ShopNotAvailable)
    }

    /// Returns the WorldOracle, or an error if not available.
    pub fn world(&self) -> Result<&'a W, OracleError> {
        self.world.ok_or(OracleError::WorldNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, C, S, W, R> Env<'a, C, S, W, R>
where
    C: ClassOracle + 'a,
    S: ShopOracle + 'a,
    W: WorldOracle + 'a,
    R: RngOracle + 'a,
{
    /// Erases the concrete oracle types into the trait-object alias.
    pub fn into_catalog_env(self) -> CatalogEnv<'a> {
        Env::new(
            self.classes.map(|c| c as &dyn ClassOracle),
            self.shop.map(|s| s as &dyn ShopOracle),
            self.world.map(|w| w as &dyn WorldOracle),
            self.rng.map(|r| r as &dyn RngOracle),
        )
    }
}
