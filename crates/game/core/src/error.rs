//! Common error infrastructure for hero-core.
//!
//! Domain-specific errors (e.g. `PurchaseError`, `UnlockSkillError`) are
//! defined in their respective modules alongside the actions they validate.
//! This module provides the shared classification layer.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the player can succeed later (earn gold, gain levels)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Fatal**: required reference data is missing, the engine cannot proceed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable rejection - the same action may succeed once the
    /// character's gold or level changes.
    Recoverable,

    /// Validation error - the referenced id/slot does not exist in the
    /// current state or catalog. Retrying without changes cannot succeed.
    Validation,

    /// Fatal error - a required oracle is unavailable.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all hero-core errors.
///
/// Provides a uniform interface for classification across the per-action
/// error enums. Implementors derive Display/Error via `thiserror`.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for categorization, log filtering, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
