//! Board topology and player movement.
//!
//! Regions form a ring; a move advances the player's position modulo the
//! number of regions and lands on a random availability zone.

mod data;
mod movement;

pub use data::{builtin_regions, AvailabilityZone, Board, Region};
pub use movement::{draw_card, roll_die, validate_name, Landing, MoveMethod, Player};
