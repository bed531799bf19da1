//! World map oracle.
//!
//! Locations are pure reference data: the engine never mutates them and no
//! transition consumes them. They gate on character level for display and
//! for the exploration stub in the runtime.

/// One world-map location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Minimum character level required to enter.
    pub required_level: u32,
}

impl Location {
    /// Returns true when a character of the given level may enter.
    pub fn is_unlocked_at(&self, level: u32) -> bool {
        level >= self.required_level
    }
}

/// Supplies the static world map.
pub trait WorldOracle: Send + Sync {
    /// Returns all locations, in display order.
    fn locations(&self) -> Vec<Location>;

    /// Resolves a single location by id.
    fn location(&self, id: &str) -> Option<Location> {
        self.locations().into_iter().find(|l| l.id == id)
    }
}
