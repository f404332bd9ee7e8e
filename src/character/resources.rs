//! Infrastructure resource counters spent to cast spells.

use crate::core::error::ActionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Compute,
    Network,
    Storage,
    Memory,
    Latency,
    Security,
    Integrity,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Compute,
        ResourceKind::Network,
        ResourceKind::Storage,
        ResourceKind::Memory,
        ResourceKind::Latency,
        ResourceKind::Security,
        ResourceKind::Integrity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Compute => "compute",
            ResourceKind::Network => "network",
            ResourceKind::Storage => "storage",
            ResourceKind::Memory => "memory",
            ResourceKind::Latency => "latency",
            ResourceKind::Security => "security",
            ResourceKind::Integrity => "integrity",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-resource cost. Resources not named cost nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceCost(BTreeMap<ResourceKind, u32>);

impl ResourceCost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: ResourceKind, amount: u32) -> Self {
        self.0.insert(kind, amount);
        self
    }

    pub fn get(&self, kind: ResourceKind) -> u32 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, u32)> + '_ {
        self.0.iter().map(|(kind, amount)| (*kind, *amount))
    }
}

impl fmt::Display for ResourceCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(kind, amount)| format!("{} {}", amount, kind))
            .collect();
        if parts.is_empty() {
            f.write_str("free")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceBundle {
    pub compute: u32,
    pub network: u32,
    pub storage: u32,
    pub memory: u32,
    pub latency: u32,
    pub security: u32,
    pub integrity: u32,
}

impl Default for ResourceBundle {
    fn default() -> Self {
        Self {
            compute: 100,
            network: 50,
            storage: 10,
            memory: 128,
            latency: 5,
            security: 3,
            integrity: 95,
        }
    }
}

impl ResourceBundle {
    pub fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Compute => self.compute,
            ResourceKind::Network => self.network,
            ResourceKind::Storage => self.storage,
            ResourceKind::Memory => self.memory,
            ResourceKind::Latency => self.latency,
            ResourceKind::Security => self.security,
            ResourceKind::Integrity => self.integrity,
        }
    }

    fn get_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Compute => &mut self.compute,
            ResourceKind::Network => &mut self.network,
            ResourceKind::Storage => &mut self.storage,
            ResourceKind::Memory => &mut self.memory,
            ResourceKind::Latency => &mut self.latency,
            ResourceKind::Security => &mut self.security,
            ResourceKind::Integrity => &mut self.integrity,
        }
    }

    /// First resource the cost cannot be covered from, if any.
    pub fn shortfall(&self, cost: &ResourceCost) -> Option<ActionError> {
        cost.iter().find_map(|(kind, needed)| {
            let available = self.get(kind);
            (available < needed).then_some(ActionError::InsufficientResources {
                resource: kind,
                needed,
                available,
            })
        })
    }

    pub fn has_sufficient(&self, cost: &ResourceCost) -> bool {
        self.shortfall(cost).is_none()
    }

    /// Deducts every counter named in `cost`, or nothing at all.
    pub fn consume(&mut self, cost: &ResourceCost) -> Result<(), ActionError> {
        if let Some(err) = self.shortfall(cost) {
            return Err(err);
        }
        for (kind, amount) in cost.iter() {
            *self.get_mut(kind) -= amount;
        }
        Ok(())
    }
}
