//! Builtin measure, spell and threat tables.

use crate::character::{ResourceCost, ResourceKind};
use crate::combat::{Threat, ThreatTemplate};
use crate::security::{SecurityMeasure, Spell, StatusEffect, StatusKind, Strategy};

pub fn builtin_offensive_measures() -> Vec<SecurityMeasure> {
    vec![
        SecurityMeasure::new(
            "Firewall Rule",
            "Blocks hostile traffic at the subnet edge and pushes back on the attacker",
            15,
            15,
            Strategy::Offensive,
        ),
        SecurityMeasure::new(
            "IDS Alert",
            "Intrusion detection that flags and counters suspicious activity",
            25,
            20,
            Strategy::Offensive,
        ),
    ]
}

pub fn builtin_defensive_measures() -> Vec<SecurityMeasure> {
    vec![
        SecurityMeasure::new(
            "Encryption",
            "Encrypts data at rest and in transit, blunting incoming attacks",
            25,
            25,
            Strategy::Defensive,
        ),
        SecurityMeasure::new(
            "Backup",
            "Point-in-time snapshots that absorb the impact of a breach",
            30,
            30,
            Strategy::Defensive,
        ),
    ]
}

pub fn builtin_spells() -> Vec<Spell> {
    vec![
        Spell {
            key: "lambda_edge".to_string(),
            name: "Lambda Edge".to_string(),
            description: "Run compute at edge locations for a short burst".to_string(),
            cost: ResourceCost::new()
                .with(ResourceKind::Compute, 20)
                .with(ResourceKind::Network, 15),
            effect: StatusEffect {
                name: "Edge Computing".to_string(),
                duration: 3,
                effect_value: 15,
                kind: StatusKind::Buff,
                description: Some("Increased computing power at edge locations".to_string()),
            },
        },
        Spell {
            key: "cloudfront".to_string(),
            name: "CloudFront Shield".to_string(),
            description: "Front the service with a CDN shield".to_string(),
            cost: ResourceCost::new()
                .with(ResourceKind::Compute, 25)
                .with(ResourceKind::Network, 25),
            effect: StatusEffect {
                name: "Edge Shield".to_string(),
                duration: 3,
                effect_value: 15,
                kind: StatusKind::Buff,
                description: Some("Traffic absorbed by edge caches".to_string()),
            },
        },
    ]
}

pub fn builtin_threats() -> Vec<ThreatTemplate> {
    vec![
        ThreatTemplate {
            region: "US East (N. Virginia)".to_string(),
            threat: Threat::new("DDoS Attack", "Network Flood", 25, 3, 60),
        },
        ThreatTemplate {
            region: "US West (Oregon)".to_string(),
            threat: Threat::new("Data Breach", "Unauthorized Access", 30, 4, 70),
        },
        ThreatTemplate {
            region: "Special Region".to_string(),
            threat: Threat::new("Advanced Threat", "Multi-vector Attack", 35, 5, 80),
        },
    ]
}
