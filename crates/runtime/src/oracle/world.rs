//! [`hero_core::WorldOracle`] backed by loaded world locations.

use hero_core::{Location, WorldOracle};

/// WorldOracle implementation over a static location list.
pub struct WorldOracleImpl {
    locations: Vec<Location>,
}

impl WorldOracleImpl {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }
}

impl WorldOracle for WorldOracleImpl {
    fn locations(&self) -> Vec<Location> {
        self.locations.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lookup_finds_by_id() {
        let oracle = WorldOracleImpl::new(vec![Location {
            id: "village".to_owned(),
            name: "Novice Village".to_owned(),
            description: String::new(),
            required_level: 1,
        }]);

        assert_eq!(oracle.location("village").unwrap().required_level, 1);
        assert!(oracle.location("atlantis").is_none());
    }
}
