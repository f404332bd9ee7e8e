//! Player tokens and movement around the board.

use super::data::Board;
use crate::core::constants::MAX_PLAYER_NAME_LEN;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the player chose to generate their step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveMethod {
    Roll,
    Draw,
}

impl MoveMethod {
    /// Uniform step count in `1..=sides`.
    pub fn steps(&self, sides: u32, rng: &mut impl Rng) -> u32 {
        match self {
            MoveMethod::Roll => roll_die(sides, rng),
            MoveMethod::Draw => draw_card(sides, rng),
        }
    }
}

pub fn roll_die(sides: u32, rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=sides.max(1))
}

/// Card draws use the same distribution as the die.
pub fn draw_card(sides: u32, rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=sides.max(1))
}

/// Where a move ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub region_index: usize,
    pub zone_index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: usize,
    pub home_region: usize,
    pub home_zone: usize,
}

impl Player {
    /// New player starting on (and at home in) `home_region`, first zone.
    pub fn new(name: String, home_region: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            position: home_region,
            home_region,
            home_zone: 0,
        }
    }

    pub fn is_home(&self, region_index: usize) -> bool {
        region_index == self.home_region
    }

    /// Advances `steps` regions (wrapping) and picks a zone uniformly.
    /// Returns `None` on an empty board or a region with no zones.
    pub fn move_by(&mut self, board: &Board, steps: u32, rng: &mut impl Rng) -> Option<Landing> {
        if board.is_empty() {
            return None;
        }
        let region_index = (self.position + steps as usize) % board.len();
        let region = board.region(region_index)?;
        if region.zones.is_empty() {
            return None;
        }
        self.position = region_index;
        let zone_index = rng.gen_range(0..region.zones.len());
        Some(Landing {
            region_index,
            zone_index,
        })
    }
}

pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if trimmed.chars().count() > MAX_PLAYER_NAME_LEN {
        return Err(format!(
            "Name must be {} characters or less",
            MAX_PLAYER_NAME_LEN
        ));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        );
    }

    Ok(())
}
