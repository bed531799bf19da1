//! Skill records.
//!
//! A character's skill list is fixed at creation (determined by class); only
//! the per-skill `level` and `unlocked` fields mutate afterwards.

/// Reference to a skill definition within a character's skill list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillId(pub String);

impl SkillId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SkillId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SkillId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for SkillId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One entry in a character's skill tree.
///
/// `level == 0` means locked; `unlocked` tracks the same fact explicitly and
/// the two must stay in sync through every transition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub description: String,
    /// Current tier, 0 while locked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: u32,
    pub max_level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unlocked: bool,
    /// Character level gate for unlocking.
    pub required_level: u32,
    /// Base gold cost unit; upgrades scale from this.
    pub cost: u32,
}

impl Skill {
    /// Returns true once the skill has reached its maximum tier.
    pub fn is_maxed(&self) -> bool {
        self.level >= self.max_level
    }

    /// Gold cost of the next tier.
    ///
    /// Scales linearly with the *next* level number: upgrading from level `L`
    /// costs `cost * (L + 1)`. This is the game's core economy curve.
    pub fn upgrade_cost(&self) -> u32 {
        self.cost * (self.level + 1)
    }
}
