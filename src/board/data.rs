//! Region and availability-zone definitions.

use crate::character::AttributeType;
use serde::{Deserialize, Serialize};

/// An availability zone inside a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityZone {
    pub name: String,
    /// Attribute the zone is themed around. Informational only.
    #[serde(default)]
    pub bonus: Option<AttributeType>,
}

impl AvailabilityZone {
    pub fn new(name: &str, bonus: Option<AttributeType>) -> Self {
        Self {
            name: name.to_string(),
            bonus,
        }
    }
}

/// A cloud region on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub zones: Vec<AvailabilityZone>,
    #[serde(default)]
    pub special_access_required: bool,
}

/// The ordered ring of regions players move around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    regions: Vec<Region>,
}

impl Board {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Returns the builtin regions, in board order.
pub fn builtin_regions() -> Vec<Region> {
    vec![
        Region {
            name: "US East (N. Virginia)".to_string(),
            zones: vec![
                AvailabilityZone::new("us-east-1a", Some(AttributeType::Agility)),
                AvailabilityZone::new("us-east-1b", Some(AttributeType::Elasticity)),
                AvailabilityZone::new("us-east-1c", None),
            ],
            special_access_required: false,
        },
        Region {
            name: "US West (Oregon)".to_string(),
            zones: vec![
                AvailabilityZone::new("us-west-2a", Some(AttributeType::Resilience)),
                AvailabilityZone::new("us-west-2b", None),
                AvailabilityZone::new("us-west-2c", Some(AttributeType::FaultTolerance)),
            ],
            special_access_required: false,
        },
        Region {
            name: "Special Region".to_string(),
            zones: vec![AvailabilityZone::new(
                "special-az-1",
                Some(AttributeType::Availability),
            )],
            special_access_required: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_regions() {
        let regions = builtin_regions();
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].name, "US East (N. Virginia)");
        assert_eq!(regions[0].zones.len(), 3);
        assert!(!regions[0].special_access_required);
        assert!(regions[2].special_access_required);
    }

    #[test]
    fn test_every_region_has_a_zone() {
        for region in builtin_regions() {
            assert!(!region.zones.is_empty(), "{} has no zones", region.name);
        }
    }

    #[test]
    fn test_board_lookup() {
        let board = Board::new(builtin_regions());
        assert_eq!(board.len(), 3);
        assert!(!board.is_empty());
        assert_eq!(board.region(1).map(|r| r.name.as_str()), Some("US West (Oregon)"));
        assert!(board.region(3).is_none());
    }
}
