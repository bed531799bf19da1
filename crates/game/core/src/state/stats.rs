//! Stat blocks and resource meters.

/// A depletable resource pool (health, mana).
///
/// The constructors keep `current <= maximum`; transitions that touch meters
/// must go through them rather than writing the fields directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter clamped so that `current <= maximum`.
    pub fn clamped(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Creates a meter filled to its maximum.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Returns true if the meter invariant holds.
    pub fn is_valid(&self) -> bool {
        self.current <= self.maximum
    }
}

/// Current character stats.
///
/// Health and mana are meters (current/maximum pairs); the remaining four
/// attributes are plain values copied from the class template at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub health: ResourceMeter,
    pub mana: ResourceMeter,
    pub strength: u32,
    pub intelligence: u32,
    pub agility: u32,
    pub defense: u32,
}

impl Stats {
    /// Returns true if both meter invariants hold.
    pub fn is_valid(&self) -> bool {
        self.health.is_valid() && self.mana.is_valid()
    }
}

/// Partial stat bonuses granted by an item.
///
/// Every field defaults to zero so catalog entries only list the stats they
/// actually modify.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBonuses {
    pub health: u32,
    pub mana: u32,
    pub strength: u32,
    pub intelligence: u32,
    pub agility: u32,
    pub defense: u32,
}

impl StatBonuses {
    /// Returns true if no stat is modified.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
