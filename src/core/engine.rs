//! Turn and session orchestration.
//!
//! A turn runs movement, regional charge, setup, threat generation and the
//! battle, in that order. Front-ends drive each phase through the methods
//! below and collect player input between them.

use super::config::GameConfig;
use super::error::{ActionError, ConfigError};
use crate::board::{validate_name, Board, Landing, MoveMethod, Player};
use crate::catalog::Catalog;
use crate::character::{CharacterStats, Defender};
use crate::combat::{Battle, BattleEvent, BattleState, PlayerAction};
use crate::security::SecurityMeasure;
use rand::Rng;
use std::sync::Arc;
use tracing::{info, warn};

/// A player and their defender.
#[derive(Debug, Clone)]
pub struct Seat {
    pub player: Player,
    pub defender: Defender,
    /// Points banked from finished sessions.
    pub score: u32,
    /// Points earned in the session in progress.
    pub session_points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeOutcome {
    /// Landed in the home region; nothing owed.
    Home,
    Charged { amount: u32, remaining: u32 },
    /// Not enough preparation points. The charge is skipped.
    Insufficient { amount: u32, available: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnStart {
    pub steps: u32,
    pub landing: Landing,
    pub region_name: String,
    pub zone_name: String,
    pub charge: ChargeOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    /// Game over for this session.
    DefenderDefeated,
    ThreatNeutralized { points: u32, new_level: u32 },
    /// The battle was abandoned before either side prevailed.
    Unresolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub points_earned: u32,
    pub total_score: u32,
    pub reached_winning_score: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub player_id: String,
    pub name: String,
    pub score: u32,
}

pub struct GameEngine {
    config: GameConfig,
    catalog: Arc<Catalog>,
    seats: Vec<Seat>,
    session: u32,
}

impl GameEngine {
    pub fn new(config: GameConfig, catalog: Arc<Catalog>) -> Result<Self, ConfigError> {
        config.validate()?;
        catalog.validate()?;
        if config.home_region >= catalog.board.len() {
            return Err(ConfigError::Invalid {
                what: "game config",
                reason: format!(
                    "home_region {} is outside a board of {} regions",
                    config.home_region,
                    catalog.board.len()
                ),
            });
        }
        Ok(Self {
            config,
            catalog,
            seats: Vec::new(),
            session: 1,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn board(&self) -> &Board {
        &self.catalog.board
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, seat: usize) -> Result<&Seat, ActionError> {
        self.seats.get(seat).ok_or(ActionError::UnknownSeat(seat))
    }

    pub fn seat_mut(&mut self, seat: usize) -> Result<&mut Seat, ActionError> {
        self.seats.get_mut(seat).ok_or(ActionError::UnknownSeat(seat))
    }

    /// Seats a new player with a fresh default defender. Returns the seat index.
    pub fn add_player(&mut self, name: &str) -> Result<usize, ActionError> {
        self.add_player_with_stats(name, CharacterStats::default())
    }

    pub fn add_player_with_stats(
        &mut self,
        name: &str,
        stats: CharacterStats,
    ) -> Result<usize, ActionError> {
        validate_name(name).map_err(ActionError::InvalidName)?;
        let name = name.trim().to_string();
        let player = Player::new(name.clone(), self.config.home_region);
        let defender = Defender::with_budget(
            format!("{}'s Defender", name),
            stats,
            Arc::clone(&self.catalog),
            self.config.starting_preparation_points,
            self.config.level_health_bonus,
        );
        if let Some(region) = self.catalog.board.region(player.home_region) {
            info!(player = %name, home = %region.name, "player seated");
        }
        self.seats.push(Seat {
            player,
            defender,
            score: 0,
            session_points: 0,
        });
        Ok(self.seats.len() - 1)
    }

    /// Current session number, starting at 1.
    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn has_sessions_remaining(&self) -> bool {
        self.session <= self.config.max_sessions
    }

    /// Moves on to the next session. Returns false once the session limit
    /// has been used up.
    pub fn advance_session(&mut self) -> bool {
        self.session += 1;
        self.has_sessions_remaining()
    }

    /// Movement phase: generates steps, moves the player and applies the
    /// regional charge.
    pub fn start_turn(
        &mut self,
        seat: usize,
        method: MoveMethod,
        rng: &mut impl Rng,
    ) -> Result<TurnStart, ActionError> {
        let steps = method.steps(self.config.die_sides, rng);
        self.move_seat(seat, steps, rng)
    }

    /// Moves a seat by a known number of steps and applies the regional charge.
    pub fn move_seat(
        &mut self,
        seat: usize,
        steps: u32,
        rng: &mut impl Rng,
    ) -> Result<TurnStart, ActionError> {
        let catalog = Arc::clone(&self.catalog);
        let regional_charge = self.config.regional_charge;
        let entry = self.seat_mut(seat)?;

        let landing = entry
            .player
            .move_by(&catalog.board, steps, rng)
            .ok_or(ActionError::NoLanding)?;
        let region = catalog
            .board
            .region(landing.region_index)
            .ok_or(ActionError::NoLanding)?;
        let zone_name = region
            .zones
            .get(landing.zone_index)
            .map(|z| z.name.clone())
            .unwrap_or_default();

        let charge = if entry.player.is_home(landing.region_index) {
            ChargeOutcome::Home
        } else if entry.defender.spend_preparation_points(regional_charge) {
            ChargeOutcome::Charged {
                amount: regional_charge,
                remaining: entry.defender.preparation_points,
            }
        } else {
            warn!(
                player = %entry.player.name,
                region = %region.name,
                available = entry.defender.preparation_points,
                "regional charge not covered"
            );
            ChargeOutcome::Insufficient {
                amount: regional_charge,
                available: entry.defender.preparation_points,
            }
        };

        info!(
            player = %entry.player.name,
            steps,
            region = %region.name,
            zone = %zone_name,
            "player moved"
        );
        Ok(TurnStart {
            steps,
            landing,
            region_name: region.name.clone(),
            zone_name,
            charge,
        })
    }

    /// Setup phase: activates one measure for the seat's defender.
    pub fn activate_measure(
        &mut self,
        seat: usize,
        measure_name: &str,
    ) -> Result<SecurityMeasure, ActionError> {
        self.seat_mut(seat)?.defender.activate(measure_name)
    }

    /// Ends setup and spawns the threat for the landed region. Refused
    /// until at least one measure is active.
    pub fn begin_encounter(&self, seat: usize, region_index: usize) -> Result<Battle, ActionError> {
        let entry = self.seat(seat)?;
        if !entry.defender.has_active_measures() {
            return Err(ActionError::NoActiveMeasures);
        }
        let region = self
            .catalog
            .board
            .region(region_index)
            .map(|r| r.name.as_str())
            .unwrap_or_default();
        let threat = self.catalog.threat_for_region(region);
        info!(player = %entry.player.name, threat = %threat.name, "threat encountered");
        Ok(Battle::with_damage_spread(
            threat,
            self.config.threat_damage_spread,
        ))
    }

    pub fn play_round(
        &mut self,
        seat: usize,
        battle: &mut Battle,
        action: PlayerAction,
        rng: &mut impl Rng,
    ) -> Result<Vec<BattleEvent>, ActionError> {
        let entry = self.seat_mut(seat)?;
        Ok(battle.play_round(&mut entry.defender, action, rng))
    }

    /// Books the result of a finished battle: a neutralized threat awards
    /// points and a level.
    pub fn settle_encounter(
        &mut self,
        seat: usize,
        battle: &Battle,
    ) -> Result<EncounterOutcome, ActionError> {
        let points = self.config.threat_defeat_points;
        let entry = self.seat_mut(seat)?;
        let outcome = match battle.state() {
            BattleState::DefenderDefeated => {
                info!(player = %entry.player.name, "defender compromised");
                EncounterOutcome::DefenderDefeated
            }
            BattleState::ThreatNeutralized => {
                entry.defender.level_up();
                entry.session_points = entry.session_points.saturating_add(points);
                EncounterOutcome::ThreatNeutralized {
                    points,
                    new_level: entry.defender.level,
                }
            }
            BattleState::InProgress => EncounterOutcome::Unresolved,
        };
        Ok(outcome)
    }

    /// Banks the session's points and restores the defender for the next
    /// session.
    pub fn end_session(&mut self, seat: usize) -> Result<SessionSummary, ActionError> {
        let winning_score = self.config.winning_score;
        let entry = self.seat_mut(seat)?;
        let points_earned = entry.session_points;
        entry.score = entry.score.saturating_add(points_earned);
        entry.session_points = 0;
        entry.defender.reset_for_session();

        let summary = SessionSummary {
            points_earned,
            total_score: entry.score,
            reached_winning_score: entry.score >= winning_score,
        };
        info!(
            player = %entry.player.name,
            points_earned,
            total = entry.score,
            "session ended"
        );
        Ok(summary)
    }

    /// Scores in seating order.
    pub fn standings(&self) -> Vec<Standing> {
        self.seats
            .iter()
            .map(|s| Standing {
                player_id: s.player.id.clone(),
                name: s.player.name.clone(),
                score: s.score,
            })
            .collect()
    }

    /// Highest score; ties go to the earliest seat.
    pub fn leader(&self) -> Option<&Seat> {
        self.seats
            .iter()
            .reduce(|best, s| if s.score > best.score { s } else { best })
    }

    /// First seat at or above the winning score.
    pub fn winner(&self) -> Option<&Seat> {
        self.seats
            .iter()
            .find(|s| s.score >= self.config.winning_score)
    }
}
