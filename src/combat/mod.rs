//! Threats and the battle state machine.

pub mod logic;
pub mod types;

pub use logic::{
    attack_damage, mitigate_threat_damage, roll_threat_damage, Battle, BattleEvent, PlayerAction,
};
pub use types::{BattleState, Threat, ThreatTemplate};
