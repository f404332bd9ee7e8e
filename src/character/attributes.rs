use crate::core::constants::{ELASTICITY_HEALTH_FACTOR, FAULT_TOLERANCE_HEALTH_FACTOR};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    Elasticity,
    Agility,
    FaultTolerance,
    Availability,
    Resilience,
    Intelligence,
    Adaptability,
}

impl AttributeType {
    pub fn all() -> [AttributeType; 7] {
        [
            AttributeType::Elasticity,
            AttributeType::Agility,
            AttributeType::FaultTolerance,
            AttributeType::Availability,
            AttributeType::Resilience,
            AttributeType::Intelligence,
            AttributeType::Adaptability,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributeType::Elasticity => "Elasticity",
            AttributeType::Agility => "Agility",
            AttributeType::FaultTolerance => "Fault Tolerance",
            AttributeType::Availability => "Availability",
            AttributeType::Resilience => "Resilience",
            AttributeType::Intelligence => "Intelligence",
            AttributeType::Adaptability => "Adaptability",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Elasticity => 0,
            AttributeType::Agility => 1,
            AttributeType::FaultTolerance => 2,
            AttributeType::Availability => 3,
            AttributeType::Resilience => 4,
            AttributeType::Intelligence => 5,
            AttributeType::Adaptability => 6,
        }
    }
}

/// The seven system-property attributes of a defender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    values: [u32; 7],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    /// Starting profile for a new defender.
    pub fn new() -> Self {
        Self {
            values: [70, 75, 65, 85, 80, 10, 10],
        }
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: AttributeType, value: u32) {
        self.values[attr.index()] = value;
    }

    pub fn with(mut self, attr: AttributeType, value: u32) -> Self {
        self.set(attr, value);
        self
    }

    /// Max Health = Elasticity × 10 + Fault Tolerance × 5
    pub fn max_health(&self) -> u32 {
        self.get(AttributeType::Elasticity) * ELASTICITY_HEALTH_FACTOR
            + self.get(AttributeType::FaultTolerance) * FAULT_TOLERANCE_HEALTH_FACTOR
    }
}
