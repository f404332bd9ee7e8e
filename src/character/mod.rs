//! Defender attributes, health, resources and the defender itself.

pub mod attributes;
pub mod defender;
pub mod health;
pub mod resources;
pub mod stats;

pub use attributes::{AttributeType, Attributes};
pub use defender::Defender;
pub use health::{HealthPool, SecurityStatus};
pub use resources::{ResourceBundle, ResourceCost, ResourceKind};
pub use stats::CharacterStats;
