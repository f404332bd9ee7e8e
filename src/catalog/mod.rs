//! Immutable game catalog: board, security measures, spells and threat
//! templates. Built once and shared by every defender in a game.

mod data;

pub use data::{
    builtin_defensive_measures, builtin_offensive_measures, builtin_spells, builtin_threats,
};

use crate::board::{builtin_regions, Board};
use crate::combat::{Threat, ThreatTemplate};
use crate::core::error::ConfigError;
use crate::security::{SecurityMeasure, Spell};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub board: Board,
    pub offensive_measures: Vec<SecurityMeasure>,
    pub defensive_measures: Vec<SecurityMeasure>,
    #[serde(default)]
    pub hybrid_measures: Vec<SecurityMeasure>,
    pub spells: Vec<Spell>,
    pub threats: Vec<ThreatTemplate>,
    #[serde(default = "Threat::generic")]
    pub default_threat: Threat,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            board: Board::new(builtin_regions()),
            offensive_measures: builtin_offensive_measures(),
            defensive_measures: builtin_defensive_measures(),
            hybrid_measures: Vec::new(),
            spells: builtin_spells(),
            threats: builtin_threats(),
            default_threat: Threat::generic(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            what: "catalog",
            source,
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            what: "catalog",
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.is_empty() {
            return Err(invalid("board has no regions".to_string()));
        }
        if let Some(region) = self.board.regions().iter().find(|r| r.zones.is_empty()) {
            return Err(invalid(format!(
                "region '{}' has no availability zones",
                region.name
            )));
        }

        let mut seen = HashSet::new();
        for measure in self.measures() {
            if !seen.insert(measure.name.to_ascii_lowercase()) {
                return Err(invalid(format!("duplicate measure '{}'", measure.name)));
            }
        }

        let mut seen = HashSet::new();
        for spell in &self.spells {
            if !seen.insert(spell.key.to_ascii_lowercase()) {
                return Err(invalid(format!("duplicate spell '{}'", spell.key)));
            }
        }
        Ok(())
    }

    /// Every measure: defensive, then offensive, then hybrid.
    pub fn measures(&self) -> impl Iterator<Item = &SecurityMeasure> {
        self.defensive_measures
            .iter()
            .chain(self.offensive_measures.iter())
            .chain(self.hybrid_measures.iter())
    }

    /// Case-insensitive lookup across all measure lists.
    pub fn find_measure(&self, name: &str) -> Option<&SecurityMeasure> {
        self.measures().find(|m| m.matches_name(name))
    }

    pub fn find_spell(&self, key: &str) -> Option<&Spell> {
        self.spells.iter().find(|s| s.matches_key(key))
    }

    /// Fresh threat for the named region, or the default threat.
    pub fn threat_for_region(&self, region: &str) -> Threat {
        self.threats
            .iter()
            .find(|t| t.region == region)
            .map(|t| t.threat.clone())
            .unwrap_or_else(|| self.default_threat.clone())
    }
}

fn invalid(reason: String) -> ConfigError {
    ConfigError::Invalid {
        what: "catalog",
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.board.len(), 3);
        assert_eq!(catalog.measures().count(), 4);
        assert_eq!(catalog.spells.len(), 2);
    }

    #[test]
    fn test_find_measure_any_case() {
        let catalog = Catalog::builtin();
        let m = catalog.find_measure("ENCRYPTION").unwrap();
        assert_eq!(m.name, "Encryption");
        assert!(catalog.find_measure("ids alert").is_some());
        assert!(catalog.find_measure("antivirus").is_none());
    }

    #[test]
    fn test_find_spell() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find_spell("Lambda_Edge").unwrap().name, "Lambda Edge");
        assert!(catalog.find_spell("fireball").is_none());
    }

    #[test]
    fn test_threat_for_known_regions() {
        let catalog = Catalog::builtin();
        let threat = catalog.threat_for_region("US East (N. Virginia)");
        assert_eq!(threat.name, "DDoS Attack");
        assert_eq!(threat.power, 25);
        assert_eq!(threat.persistence, 3);

        let threat = catalog.threat_for_region("US West (Oregon)");
        assert_eq!(threat.name, "Data Breach");

        let threat = catalog.threat_for_region("Special Region");
        assert_eq!(threat.name, "Advanced Threat");
        assert_eq!(threat.adaptability, 80);
    }

    #[test]
    fn test_threat_for_unknown_region_is_generic() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.threat_for_region("Mars Base"), Threat::generic());
    }

    #[test]
    fn test_threat_generation_is_deterministic_and_fresh() {
        let catalog = Catalog::builtin();
        let mut first = catalog.threat_for_region("US West (Oregon)");
        first.take_hit(100);
        let second = catalog.threat_for_region("US West (Oregon)");
        assert_eq!(second.power, 30);
        assert_eq!(second.persistence, 4);
    }

    #[test]
    fn test_json_round_trip_preserves_catalog() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(Catalog::from_json_str(&json).unwrap(), catalog);
    }

    #[test]
    fn test_duplicate_measure_rejected() {
        let mut catalog = Catalog::builtin();
        let mut dup = catalog.defensive_measures[0].clone();
        dup.name = dup.name.to_uppercase();
        catalog.hybrid_measures.push(dup);
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_empty_board_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.board = Board::new(vec![]);
        assert!(catalog.validate().is_err());
    }
}
