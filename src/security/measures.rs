use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Defensive,
    Offensive,
    Hybrid,
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Defensive => "defensive",
            Strategy::Offensive => "offensive",
            Strategy::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog entry. `cost` is paid in preparation points on activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityMeasure {
    pub name: String,
    pub description: String,
    pub cost: u32,
    pub effectiveness: u32,
    pub strategy: Strategy,
}

impl SecurityMeasure {
    pub fn new(
        name: &str,
        description: &str,
        cost: u32,
        effectiveness: u32,
        strategy: Strategy,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            cost,
            effectiveness,
            strategy,
        }
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// Sum of effectiveness over measures with the given strategy.
pub fn total_effectiveness(measures: &[SecurityMeasure], strategy: Strategy) -> u32 {
    measures
        .iter()
        .filter(|m| m.strategy == strategy)
        .map(|m| m.effectiveness)
        .sum()
}
