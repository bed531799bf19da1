//! Session orchestration over the pure rules engine.
//!
//! `hero-runtime` owns the mutable character record and the catalog oracles,
//! drives actions through [`hero_core::GameEngine`], and translates engine
//! errors into caller-facing rejection reasons. It also emits one
//! notification per attempted action so a presentation layer can surface
//! toasts without reimplementing the rules.
pub mod error;
pub mod notify;
pub mod oracle;
pub mod session;

pub use error::{RejectReason, SessionError};
pub use notify::{MemorySink, Notification, NotificationKind, NotificationSink, TracingSink};
pub use oracle::{ClassOracleImpl, OracleManager, ShopOracleImpl, WorldOracleImpl};
pub use session::{ExploreOutcome, LocationView, Session};
