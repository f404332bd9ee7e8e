use super::attributes::{AttributeType, Attributes};
use super::health::{HealthPool, SecurityStatus};
use super::resources::ResourceBundle;
use serde::{Deserialize, Serialize};

/// Attributes, health and resources of one defender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub attributes: Attributes,
    pub health: HealthPool,
    pub resources: ResourceBundle,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self::new(Attributes::new())
    }
}

impl CharacterStats {
    /// Stats at full health with the default resource bundle.
    pub fn new(attributes: Attributes) -> Self {
        Self {
            attributes,
            health: HealthPool::full(attributes.max_health()),
            resources: ResourceBundle::default(),
        }
    }

    pub fn attribute(&self, attr: AttributeType) -> u32 {
        self.attributes.get(attr)
    }

    /// Health derived from attributes alone (no level bonus).
    pub fn max_health(&self) -> u32 {
        self.attributes.max_health()
    }

    pub fn current_health(&self) -> u32 {
        self.health.current()
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health.take_damage(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health.heal(amount);
    }

    pub fn security_status(&self) -> SecurityStatus {
        self.health.security_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_start_full() {
        let stats = CharacterStats::default();
        assert_eq!(stats.max_health(), 1025);
        assert_eq!(stats.current_health(), 1025);
        assert_eq!(stats.security_status(), SecurityStatus::Safe);
    }

    #[test]
    fn test_damage_moves_through_status_bands() {
        let attrs = Attributes::new()
            .with(AttributeType::Elasticity, 10)
            .with(AttributeType::FaultTolerance, 0);
        let mut stats = CharacterStats::new(attrs);
        assert_eq!(stats.max_health(), 100);

        stats.take_damage(30);
        assert_eq!(stats.current_health(), 70);
        assert_eq!(stats.security_status(), SecurityStatus::Caution);

        stats.heal(20);
        assert_eq!(stats.current_health(), 90);
        assert_eq!(stats.security_status(), SecurityStatus::Safe);

        stats.take_damage(60);
        assert_eq!(stats.security_status(), SecurityStatus::Danger);
    }
}
