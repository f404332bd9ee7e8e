//! Maps free-text answers onto the fixed prompt vocabulary.
//!
//! Matching is trimmed and case-insensitive. `None` means the answer was not
//! recognized and the caller picks the fallback.

use crate::board::MoveMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupCommand {
    Measure,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleCommand {
    Attack,
    CastSpell,
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

pub fn parse_move(input: &str) -> Option<MoveMethod> {
    match normalize(input).as_str() {
        "roll" => Some(MoveMethod::Roll),
        "draw" => Some(MoveMethod::Draw),
        _ => None,
    }
}

pub fn parse_setup(input: &str) -> Option<SetupCommand> {
    match normalize(input).as_str() {
        "measure" => Some(SetupCommand::Measure),
        "done" => Some(SetupCommand::Done),
        _ => None,
    }
}

pub fn parse_battle(input: &str) -> Option<BattleCommand> {
    match normalize(input).as_str() {
        "attack" => Some(BattleCommand::Attack),
        "cast spell" => Some(BattleCommand::CastSpell),
        _ => None,
    }
}

/// Only an explicit "yes" continues.
pub fn parse_continue(input: &str) -> bool {
    normalize(input) == "yes"
}

pub fn parse_player_count(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
