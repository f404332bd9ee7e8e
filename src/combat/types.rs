use serde::{Deserialize, Serialize};

/// A threat facing the defender for one encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threat {
    pub name: String,
    pub attack_type: String,
    /// Remaining offense. Player attacks wear it down; at or below zero the
    /// threat is defeated.
    pub power: i32,
    /// Attacks still needed to neutralize the threat.
    pub persistence: u32,
    /// Carried for display only.
    pub adaptability: u32,
}

impl Threat {
    pub fn new(name: &str, attack_type: &str, power: i32, persistence: u32, adaptability: u32) -> Self {
        Self {
            name: name.to_string(),
            attack_type: attack_type.to_string(),
            power,
            persistence,
            adaptability,
        }
    }

    /// Fallback threat for regions without a template.
    pub fn generic() -> Self {
        Self::new("Generic Threat", "Unknown", 20, 2, 50)
    }

    pub fn is_defeated(&self) -> bool {
        self.power <= 0
    }

    pub fn is_worn_down(&self) -> bool {
        self.persistence == 0
    }

    /// Either exit condition ends the encounter in the defender's favour.
    pub fn is_neutralized(&self) -> bool {
        self.is_defeated() || self.is_worn_down()
    }

    /// Applies one successful player attack.
    pub fn take_hit(&mut self, damage: u32) {
        let damage = i32::try_from(damage).unwrap_or(i32::MAX);
        self.power = self.power.saturating_sub(damage);
        self.persistence = self.persistence.saturating_sub(1);
    }
}

/// Threat spawned when landing in a given region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatTemplate {
    pub region: String,
    pub threat: Threat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleState {
    InProgress,
    DefenderDefeated,
    ThreatNeutralized,
}

impl BattleState {
    pub fn is_over(&self) -> bool {
        !matches!(self, BattleState::InProgress)
    }
}
