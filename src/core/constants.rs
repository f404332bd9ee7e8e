// Preparation and charges
pub const STARTING_PREPARATION_POINTS: u32 = 100;
pub const REGIONAL_CHARGE: u32 = 10;

// Defender progression
pub const STARTING_LEVEL: u32 = 1;
pub const LEVEL_HEALTH_BONUS: u32 = 20;
pub const THREAT_DEFEAT_POINTS: u32 = 100;

// Character stat formula: max_health = elasticity * 10 + fault_tolerance * 5
pub const ELASTICITY_HEALTH_FACTOR: u32 = 10;
pub const FAULT_TOLERANCE_HEALTH_FACTOR: u32 = 5;

// Security status bands, in percent of max health
pub const SAFE_HEALTH_PERCENT: u32 = 75;
pub const CAUTION_HEALTH_PERCENT: u32 = 40;

// Combat
pub const THREAT_DAMAGE_SPREAD: u32 = 5;

// Movement
pub const DIE_SIDES: u32 = 6;
pub const HOME_REGION_INDEX: usize = 0;

// Session orchestration
pub const MAX_SESSIONS: u32 = 5;
pub const WINNING_SCORE: u32 = 500;

// Player names
pub const MAX_PLAYER_NAME_LEN: usize = 16;

// Per-user data directory (under $HOME)
pub const DATA_DIR_NAME: &str = ".cloud-defender";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const CATALOG_FILE_NAME: &str = "catalog.json";
