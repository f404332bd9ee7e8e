use crate::character::ResourceCost;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Buff,
    Debuff,
}

impl StatusKind {
    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Buff => "buff",
            StatusKind::Debuff => "debuff",
        }
    }
}

/// A timed effect placed on a defender by a spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub name: String,
    /// Rounds remaining.
    pub duration: u32,
    pub effect_value: u32,
    pub kind: StatusKind,
    #[serde(default)]
    pub description: Option<String>,
}

impl StatusEffect {
    /// Advances one round. Returns true once the effect has expired.
    pub fn tick(&mut self) -> bool {
        self.duration = self.duration.saturating_sub(1);
        self.duration == 0
    }
}

/// A castable spell keyed by a short identifier such as `lambda_edge`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub key: String,
    pub name: String,
    pub description: String,
    pub cost: ResourceCost,
    pub effect: StatusEffect,
}

impl Spell {
    pub fn matches_key(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key.trim())
    }
}
