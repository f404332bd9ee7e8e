//! Integration test: config and catalog files
//!
//! Loads game configs and catalogs from JSON files on disk and checks the
//! engine rejects inconsistent combinations.

use cloud_defender::catalog::Catalog;
use cloud_defender::combat::{BattleEvent, PlayerAction};
use cloud_defender::core::{ConfigError, GameConfig, GameEngine};
use cloud_defender::security::StatusKind;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

fn temp_file(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cloud-defender-{}.json", uuid::Uuid::new_v4()));
    fs::write(&path, contents).unwrap();
    path
}

const SMALL_CATALOG: &str = r#"{
    "board": [
        { "name": "Lab", "zones": [{ "name": "lab-1a", "bonus": "agility" }] },
        { "name": "Edge", "zones": [{ "name": "edge-1" }, { "name": "edge-2" }] }
    ],
    "offensive_measures": [
        { "name": "Honeypot", "description": "Lure and strike", "cost": 40, "effectiveness": 30, "strategy": "offensive" }
    ],
    "defensive_measures": [],
    "hybrid_measures": [
        { "name": "WAF", "description": "Filter and block", "cost": 20, "effectiveness": 10, "strategy": "hybrid" }
    ],
    "spells": [
        {
            "key": "throttle",
            "name": "Throttle",
            "description": "Rate-limit your own traffic",
            "cost": { "compute": 10 },
            "effect": { "name": "Rate Limited", "duration": 2, "effect_value": 5, "kind": "debuff" }
        }
    ],
    "threats": [
        { "region": "Edge", "threat": { "name": "Botnet", "attack_type": "Swarm", "power": 40, "persistence": 2, "adaptability": 5 } }
    ]
}"#;

#[test]
fn test_catalog_from_file() {
    let path = temp_file(SMALL_CATALOG);
    let catalog = Catalog::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(catalog.board.len(), 2);
    assert_eq!(catalog.default_threat.name, "Generic Threat");
    assert_eq!(catalog.threat_for_region("Edge").name, "Botnet");
    assert_eq!(catalog.threat_for_region("Lab").name, "Generic Threat");
    assert_eq!(catalog.find_measure("waf").map(|m| m.cost), Some(20));
}

#[test]
fn test_custom_catalog_drives_engine() {
    let catalog = Catalog::from_json_str(SMALL_CATALOG).unwrap();
    let mut engine = GameEngine::new(GameConfig::default(), Arc::new(catalog)).unwrap();
    engine.add_player("Alice").unwrap();
    engine.activate_measure(0, "WAF").unwrap();
    let battle = engine.begin_encounter(0, 1).unwrap();
    assert_eq!(battle.threat.name, "Botnet");
}

#[test]
fn test_debuff_spell_from_catalog() {
    let catalog = Catalog::from_json_str(SMALL_CATALOG).unwrap();
    let mut engine = GameEngine::new(GameConfig::default(), Arc::new(catalog)).unwrap();
    engine.add_player("Alice").unwrap();
    engine.activate_measure(0, "WAF").unwrap();
    let mut battle = engine.begin_encounter(0, 0).unwrap();

    let events = engine
        .play_round(
            0,
            &mut battle,
            PlayerAction::CastSpell("Throttle".to_string()),
            &mut ChaCha8Rng::seed_from_u64(12345),
        )
        .unwrap();
    assert_eq!(
        events[0],
        BattleEvent::SpellCast {
            spell: "Throttle".to_string(),
            effect: "Rate Limited".to_string(),
            kind: StatusKind::Debuff,
        }
    );
    let defender = &engine.seat(0).unwrap().defender;
    assert_eq!(defender.stats.resources.compute, 90);
    assert_eq!(defender.status_effects[0].kind, StatusKind::Debuff);
}

#[test]
fn test_missing_catalog_file() {
    let path = std::env::temp_dir().join("cloud-defender-does-not-exist.json");
    match Catalog::from_file(&path) {
        Err(ConfigError::Read { what, .. }) => assert_eq!(what, "catalog"),
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn test_catalog_with_zoneless_region_rejected() {
    let json = r#"{
        "board": [{ "name": "Void", "zones": [] }],
        "offensive_measures": [],
        "defensive_measures": [],
        "spells": [],
        "threats": []
    }"#;
    assert!(matches!(
        Catalog::from_json_str(json),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
fn test_partial_config_file() {
    let path = temp_file(r#"{ "max_sessions": 2, "winning_score": 300 }"#);
    let config = GameConfig::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.max_sessions, 2);
    assert_eq!(config.winning_score, 300);
    assert_eq!(config.starting_preparation_points, 100);
    assert_eq!(config.regional_charge, 10);
}

#[test]
fn test_invalid_config_rejected() {
    assert!(matches!(
        GameConfig::from_json_str(r#"{ "die_sides": 0 }"#),
        Err(ConfigError::Invalid { .. })
    ));
    assert!(matches!(
        GameConfig::from_json_str("not json"),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_home_region_must_exist_on_custom_board() {
    let catalog = Catalog::from_json_str(SMALL_CATALOG).unwrap();
    let config = GameConfig {
        home_region: 2,
        ..GameConfig::default()
    };
    assert!(GameEngine::new(config, Arc::new(catalog)).is_err());
}
