//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemId;

/// Errors that occur when accessing catalog data.
///
/// Missing oracles are fatal: the engine cannot proceed without its reference
/// data. Unresolved lookups are caller errors handled as defensive no-ops.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ClassOracle is not available in the environment.
    #[error("ClassOracle not available")]
    ClassesNotAvailable,

    /// ShopOracle is not available in the environment.
    #[error("ShopOracle not available")]
    ShopNotAvailable,

    /// WorldOracle is not available in the environment.
    #[error("WorldOracle not available")]
    WorldNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    /// Shop listing was not found by id.
    #[error("shop listing '{0}' not found")]
    ItemNotFound(ItemId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            ClassesNotAvailable | ShopNotAvailable | WorldNotAvailable | RngNotAvailable => {
                ErrorSeverity::Fatal
            }
            ItemNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ClassesNotAvailable => "ORACLE_CLASSES_NOT_AVAILABLE",
            ShopNotAvailable => "ORACLE_SHOP_NOT_AVAILABLE",
            WorldNotAvailable => "ORACLE_WORLD_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
        }
    }
}
