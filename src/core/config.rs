//! Rule tunables, overridable from a JSON file.

use super::constants::*;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_preparation_points: u32,
    pub regional_charge: u32,
    pub threat_defeat_points: u32,
    pub level_health_bonus: u32,
    pub threat_damage_spread: u32,
    pub die_sides: u32,
    pub home_region: usize,
    pub max_sessions: u32,
    pub winning_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_preparation_points: STARTING_PREPARATION_POINTS,
            regional_charge: REGIONAL_CHARGE,
            threat_defeat_points: THREAT_DEFEAT_POINTS,
            level_health_bonus: LEVEL_HEALTH_BONUS,
            threat_damage_spread: THREAT_DAMAGE_SPREAD,
            die_sides: DIE_SIDES,
            home_region: HOME_REGION_INDEX,
            max_sessions: MAX_SESSIONS,
            winning_score: WINNING_SCORE,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                what: "game config",
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            what: "game config",
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Loads the user's config file if one exists, defaults otherwise.
    pub fn load_user_or_default() -> Result<Self, ConfigError> {
        match user_file_path(CONFIG_FILE_NAME) {
            Ok(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.die_sides == 0 {
            return Err(invalid("die_sides must be at least 1"));
        }
        if self.max_sessions == 0 {
            return Err(invalid("max_sessions must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::Invalid {
        what: "game config",
        reason: reason.to_string(),
    }
}

/// Path of a file inside the per-user data directory (`~/.cloud-defender`).
pub fn user_file_path(file_name: &str) -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(DATA_DIR_NAME).join(file_name))
}
