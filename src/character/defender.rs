//! The player's defender: stats, preparation budget, active measures and
//! spellbook.

use super::attributes::AttributeType;
use super::health::SecurityStatus;
use super::stats::CharacterStats;
use crate::catalog::Catalog;
use crate::core::constants::{LEVEL_HEALTH_BONUS, STARTING_LEVEL, STARTING_PREPARATION_POINTS};
use crate::core::error::ActionError;
use crate::security::{total_effectiveness, SecurityMeasure, Spell, StatusEffect, Strategy};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Defender {
    pub name: String,
    pub stats: CharacterStats,
    pub level: u32,
    pub preparation_points: u32,
    pub active_measures: Vec<SecurityMeasure>,
    pub status_effects: Vec<StatusEffect>,
    starting_preparation_points: u32,
    level_health_bonus: u32,
    catalog: Arc<Catalog>,
}

impl Defender {
    pub fn new(name: String, stats: CharacterStats, catalog: Arc<Catalog>) -> Self {
        Self::with_budget(
            name,
            stats,
            catalog,
            STARTING_PREPARATION_POINTS,
            LEVEL_HEALTH_BONUS,
        )
    }

    /// Defender with explicit starting preparation points and per-level
    /// health bonus.
    pub fn with_budget(
        name: String,
        stats: CharacterStats,
        catalog: Arc<Catalog>,
        starting_preparation_points: u32,
        level_health_bonus: u32,
    ) -> Self {
        let mut defender = Self {
            name,
            stats,
            level: STARTING_LEVEL,
            preparation_points: starting_preparation_points,
            active_measures: Vec::new(),
            status_effects: Vec::new(),
            starting_preparation_points,
            level_health_bonus,
            catalog,
        };
        let max = defender.calculate_max_health();
        defender.stats.health.set_max(max);
        defender.stats.health.restore();
        defender
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Stat-derived health plus the level bonus.
    pub fn calculate_max_health(&self) -> u32 {
        self.stats
            .max_health()
            .saturating_add(self.level.saturating_mul(self.level_health_bonus))
    }

    pub fn max_health(&self) -> u32 {
        self.stats.health.max()
    }

    pub fn current_health(&self) -> u32 {
        self.stats.health.current()
    }

    pub fn is_alive(&self) -> bool {
        self.stats.health.is_alive()
    }

    pub fn security_status(&self) -> SecurityStatus {
        self.stats.security_status()
    }

    pub fn attribute(&self, attr: AttributeType) -> u32 {
        self.stats.attribute(attr)
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.stats.take_damage(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.stats.heal(amount);
    }

    /// Activates a catalog measure by name, paying its cost in preparation
    /// points. Repeated activation of the same measure stacks.
    pub fn activate(&mut self, measure_name: &str) -> Result<SecurityMeasure, ActionError> {
        let measure = self
            .catalog
            .find_measure(measure_name)
            .cloned()
            .ok_or_else(|| ActionError::UnknownMeasure(measure_name.trim().to_string()))?;

        if measure.cost > self.preparation_points {
            debug!(
                measure = %measure.name,
                cost = measure.cost,
                available = self.preparation_points,
                "measure rejected"
            );
            return Err(ActionError::InsufficientPreparationPoints {
                measure: measure.name,
                needed: measure.cost,
                available: self.preparation_points,
            });
        }

        self.preparation_points -= measure.cost;
        self.active_measures.push(measure.clone());
        debug!(
            measure = %measure.name,
            remaining = self.preparation_points,
            "measure activated"
        );
        Ok(measure)
    }

    pub fn has_active_measures(&self) -> bool {
        !self.active_measures.is_empty()
    }

    pub fn offensive_power(&self) -> u32 {
        total_effectiveness(&self.active_measures, Strategy::Offensive)
    }

    pub fn defensive_power(&self) -> u32 {
        total_effectiveness(&self.active_measures, Strategy::Defensive)
    }

    /// Deducts `amount` preparation points if they are all available.
    pub fn spend_preparation_points(&mut self, amount: u32) -> bool {
        if self.preparation_points < amount {
            return false;
        }
        self.preparation_points -= amount;
        true
    }

    pub fn spells(&self) -> &[Spell] {
        &self.catalog.spells
    }

    /// Casts a spell by key, consuming its resource cost and applying its
    /// status effect.
    pub fn cast_spell(&mut self, spell_key: &str) -> Result<Spell, ActionError> {
        let spell = self
            .catalog
            .find_spell(spell_key)
            .cloned()
            .ok_or_else(|| ActionError::UnknownSpell(spell_key.trim().to_string()))?;

        self.stats.resources.consume(&spell.cost)?;
        self.status_effects.push(spell.effect.clone());
        debug!(spell = %spell.name, "spell cast");
        Ok(spell)
    }

    /// Ticks every status effect, dropping and returning the expired ones.
    pub fn update_status_effects(&mut self) -> Vec<StatusEffect> {
        let mut expired = Vec::new();
        self.status_effects.retain_mut(|effect| {
            if effect.tick() {
                expired.push(effect.clone());
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn level_up(&mut self) {
        self.level += 1;
        let max = self.calculate_max_health();
        self.stats.health.set_max(max);
        self.stats.health.restore();
        info!(defender = %self.name, level = self.level, max_health = max, "level up");
    }

    /// Restores health and preparation points and clears measures and
    /// effects. Level and resources carry over.
    pub fn reset_for_session(&mut self) {
        self.stats.health.restore();
        self.preparation_points = self.starting_preparation_points;
        self.active_measures.clear();
        self.status_effects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Attributes, ResourceKind};

    fn defender() -> Defender {
        Defender::new(
            "CloudGuardian".to_string(),
            CharacterStats::default(),
            Arc::new(Catalog::builtin()),
        )
    }

    #[test]
    fn test_new_defender() {
        let d = defender();
        assert_eq!(d.level, 1);
        assert_eq!(d.stats.max_health(), 1025);
        assert_eq!(d.max_health(), 1045); // 1025 + 1 * 20
        assert_eq!(d.current_health(), 1045);
        assert_eq!(d.preparation_points, 100);
        assert!(d.active_measures.is_empty());
        assert!(d.is_alive());
    }

    #[test]
    fn test_activate_measure_spends_points() {
        let mut d = defender();
        let m = d.activate("firewall rule").unwrap();
        assert_eq!(m.name, "Firewall Rule");
        assert_eq!(d.preparation_points, 85);
        assert_eq!(d.active_measures.len(), 1);
    }

    #[test]
    fn test_activate_stacks_duplicates() {
        let mut d = defender();
        d.activate("Backup").unwrap();
        d.activate("backup").unwrap();
        assert_eq!(d.active_measures.len(), 2);
        assert_eq!(d.preparation_points, 40);
        assert_eq!(d.defensive_power(), 60);
    }

    #[test]
    fn test_activate_too_expensive_leaves_state() {
        let mut d = defender();
        d.preparation_points = 20;
        let err = d.activate("Backup").unwrap_err();
        assert_eq!(
            err,
            ActionError::InsufficientPreparationPoints {
                measure: "Backup".to_string(),
                needed: 30,
                available: 20,
            }
        );
        assert_eq!(d.preparation_points, 20);
        assert!(d.active_measures.is_empty());
    }

    #[test]
    fn test_activate_exact_budget() {
        let mut d = defender();
        d.preparation_points = 30;
        assert!(d.activate("Backup").is_ok());
        assert_eq!(d.preparation_points, 0);
    }

    #[test]
    fn test_activate_unknown_measure() {
        let mut d = defender();
        assert_eq!(
            d.activate("  antivirus "),
            Err(ActionError::UnknownMeasure("antivirus".to_string()))
        );
        assert_eq!(d.preparation_points, 100);
    }

    #[test]
    fn test_offensive_and_defensive_power() {
        let mut d = defender();
        d.activate("Firewall Rule").unwrap();
        d.activate("IDS Alert").unwrap();
        d.activate("Encryption").unwrap();
        assert_eq!(d.offensive_power(), 35);
        assert_eq!(d.defensive_power(), 25);
    }

    #[test]
    fn test_cast_spell_consumes_resources_and_applies_effect() {
        let mut d = defender();
        let spell = d.cast_spell("lambda_edge").unwrap();
        assert_eq!(spell.name, "Lambda Edge");
        assert_eq!(d.stats.resources.get(ResourceKind::Compute), 80);
        assert_eq!(d.stats.resources.get(ResourceKind::Network), 35);
        assert_eq!(d.status_effects.len(), 1);
        assert_eq!(d.status_effects[0].name, "Edge Computing");
    }

    #[test]
    fn test_cast_spell_insufficient_resources() {
        let mut d = defender();
        d.cast_spell("cloudfront").unwrap();
        d.cast_spell("cloudfront").unwrap();
        // network is now 0
        let before = d.stats.resources;
        let err = d.cast_spell("cloudfront").unwrap_err();
        assert!(matches!(
            err,
            ActionError::InsufficientResources {
                resource: ResourceKind::Network,
                ..
            }
        ));
        assert_eq!(d.stats.resources, before);
        assert_eq!(d.status_effects.len(), 2);
    }

    #[test]
    fn test_cast_unknown_spell() {
        let mut d = defender();
        assert_eq!(
            d.cast_spell("fireball"),
            Err(ActionError::UnknownSpell("fireball".to_string()))
        );
    }

    #[test]
    fn test_status_effects_expire() {
        let mut d = defender();
        d.cast_spell("lambda_edge").unwrap();
        assert!(d.update_status_effects().is_empty());
        assert!(d.update_status_effects().is_empty());
        let expired = d.update_status_effects();
        assert_eq!(expired.len(), 1);
        assert!(d.status_effects.is_empty());
    }

    #[test]
    fn test_level_up() {
        let mut d = defender();
        d.take_damage(500);
        d.level_up();
        assert_eq!(d.level, 2);
        assert_eq!(d.max_health(), 1025 + 2 * 20);
        assert_eq!(d.current_health(), d.max_health());
        assert_eq!(d.stats.max_health(), 1025);
    }

    #[test]
    fn test_take_damage_and_heal_clamp() {
        let mut d = defender();
        d.take_damage(2000);
        assert_eq!(d.current_health(), 0);
        assert!(!d.is_alive());
        d.heal(5000);
        assert_eq!(d.current_health(), d.max_health());
    }

    #[test]
    fn test_spend_preparation_points() {
        let mut d = defender();
        assert!(d.spend_preparation_points(10));
        assert_eq!(d.preparation_points, 90);
        assert!(!d.spend_preparation_points(91));
        assert_eq!(d.preparation_points, 90);
    }

    #[test]
    fn test_reset_for_session() {
        let mut d = defender();
        d.activate("Encryption").unwrap();
        d.cast_spell("lambda_edge").unwrap();
        d.take_damage(300);
        d.level_up();
        d.take_damage(10);

        d.reset_for_session();
        assert_eq!(d.current_health(), d.max_health());
        assert_eq!(d.preparation_points, 100);
        assert!(d.active_measures.is_empty());
        assert!(d.status_effects.is_empty());
        assert_eq!(d.level, 2);
    }

    #[test]
    fn test_custom_stats_change_max_health() {
        let attrs = Attributes::new()
            .with(AttributeType::Elasticity, 10)
            .with(AttributeType::FaultTolerance, 0);
        let d = Defender::new(
            "Tiny".to_string(),
            CharacterStats::new(attrs),
            Arc::new(Catalog::builtin()),
        );
        assert_eq!(d.max_health(), 120);
    }
}
