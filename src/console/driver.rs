//! Line-based console front-end over [`GameEngine`].

use super::prompt::{
    parse_battle, parse_continue, parse_move, parse_player_count, parse_setup, BattleCommand,
    SetupCommand,
};
use super::ConsoleError;
use crate::board::MoveMethod;
use crate::character::{Defender, ResourceKind, SecurityStatus};
use crate::combat::{Battle, BattleEvent, PlayerAction};
use crate::core::{ActionError, ChargeOutcome, EncounterOutcome, GameEngine};
use crate::security::SecurityMeasure;
use crossterm::style::{style, Color, Stylize};
use rand::Rng;
use std::io::{BufRead, Write};

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnEnd {
    Continue,
    GameOver,
}

pub struct ConsoleGame<R, W, G> {
    engine: GameEngine,
    input: R,
    output: W,
    rng: G,
    color: bool,
}

impl<R: BufRead, W: Write, G: Rng> ConsoleGame<R, W, G> {
    pub fn new(engine: GameEngine, input: R, output: W, rng: G) -> Self {
        Self {
            engine,
            input,
            output,
            rng,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn into_parts(self) -> (GameEngine, W) {
        (self.engine, self.output)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        // Undecodable bytes fall through to the prompt's usual fallback.
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    /// Asks for the player count (unless given) and each player's name.
    pub fn seat_players(&mut self, count: Option<usize>) -> Result<(), ConsoleError> {
        let count = match count {
            Some(n) if n > 0 => n,
            _ => loop {
                let answer = self.ask("Enter the number of players: ")?;
                match parse_player_count(&answer) {
                    Some(n) => break n,
                    None => self.say("Please enter a positive whole number.")?,
                }
            },
        };

        for i in 0..count {
            loop {
                let name = self.ask(&format!("Enter the name for Player {}: ", i + 1))?;
                match self.engine.add_player(&name) {
                    Ok(seat) => {
                        let entry = self.engine.seat(seat)?;
                        let home = self
                            .engine
                            .board()
                            .region(entry.player.home_region)
                            .map(|r| {
                                let zone = r
                                    .zones
                                    .get(entry.player.home_zone)
                                    .map(|z| z.name.as_str())
                                    .unwrap_or_default();
                                format!("{} - {}", r.name, zone)
                            })
                            .unwrap_or_default();
                        let line = format!("{}'s home region is {}.", entry.player.name, home);
                        self.say(&line)?;
                        break;
                    }
                    Err(e) => self.say(&e.to_string())?,
                }
            }
        }
        Ok(())
    }

    /// Seats players if none are seated yet, then runs sessions until someone
    /// reaches the winning score or the session limit is used up.
    pub fn run(&mut self, players: Option<usize>) -> Result<(), ConsoleError> {
        self.say("=== Welcome to the Cloud Security Battle ===")?;
        if self.engine.seats().is_empty() {
            self.seat_players(players)?;
        }

        while self.engine.has_sessions_remaining() {
            let header = format!("\n=== Game Session {} ===", self.engine.session());
            self.say(&header)?;

            for seat in 0..self.engine.seats().len() {
                let name = self.engine.seat(seat)?.player.name.clone();
                self.say(&format!("\n--- {}'s Turn ---", name))?;
                self.run_session(seat)?;

                let summary = self.engine.end_session(seat)?;
                self.say(&format!(
                    "{} earned {} points this session.",
                    name, summary.points_earned
                ))?;
                self.say(&format!("Total Points: {}", summary.total_score))?;

                if summary.reached_winning_score {
                    let line = format!(
                        "\nCongratulations, {}! You have won the game with {} points!",
                        name, summary.total_score
                    );
                    self.say(&self.paint(&line, Color::Green))?;
                    return Ok(());
                }
            }
            self.engine.advance_session();
        }

        self.say("\n=== Game Over ===")?;
        self.say("Final Scores:")?;
        for standing in self.engine.standings() {
            self.say(&format!("- {}: {} points", standing.name, standing.score))?;
        }
        if let Some(leader) = self.engine.leader() {
            let line = format!(
                "\nCongratulations, {}! You have won the game with {} points!",
                leader.player.name, leader.score
            );
            self.say(&self.paint(&line, Color::Green))?;
        }
        Ok(())
    }

    /// Plays turns for one seat until they stop or their defender falls.
    fn run_session(&mut self, seat: usize) -> Result<(), ConsoleError> {
        loop {
            self.say("\n=== New Turn ===")?;
            if self.run_turn(seat)? == TurnEnd::GameOver {
                return Ok(());
            }
            let answer = self.ask("Do you want to continue to the next turn? (yes/no): ")?;
            if !parse_continue(&answer) {
                self.say("Ending the current game session.")?;
                return Ok(());
            }
        }
    }

    fn run_turn(&mut self, seat: usize) -> Result<TurnEnd, ConsoleError> {
        let answer =
            self.ask("Do you want to 'roll' the die or 'draw' a card to move? (roll/draw): ")?;
        let method = match parse_move(&answer) {
            Some(method) => method,
            None => {
                self.say("Invalid choice. Defaulting to rolling the die.")?;
                MoveMethod::Roll
            }
        };

        let turn = self.engine.start_turn(seat, method, &mut self.rng)?;
        match method {
            MoveMethod::Roll => self.say(&format!("You rolled a {}.", turn.steps))?,
            MoveMethod::Draw => {
                self.say(&format!("You drew a card and move {} steps.", turn.steps))?
            }
        }
        let name = self.engine.seat(seat)?.player.name.clone();
        self.say(&format!(
            "{} landed on {} - {}.",
            name, turn.region_name, turn.zone_name
        ))?;

        match turn.charge {
            ChargeOutcome::Home => {}
            ChargeOutcome::Charged { amount, .. } => self.say(&format!(
                "Operating in {} incurs a charge of {} preparation points.",
                turn.region_name, amount
            ))?,
            ChargeOutcome::Insufficient { .. } => {
                let line = self.paint(
                    "Insufficient preparation points to cover regional charges.",
                    Color::Yellow,
                );
                self.say(&line)?
            }
        }

        self.setup_phase(seat)?;

        self.say("\n--- Threat Encounter ---")?;
        let mut battle = self
            .engine
            .begin_encounter(seat, turn.landing.region_index)?;
        let t = &battle.threat;
        let details = format!(
            "Threat Details: {} ({}), Power: {}, Persistence: {}, Adaptability: {}",
            t.name, t.attack_type, t.power, t.persistence, t.adaptability
        );
        self.say(&details)?;
        self.run_battle(seat, &mut battle)
    }

    fn setup_phase(&mut self, seat: usize) -> Result<(), ConsoleError> {
        self.say("\n--- Setup Phase ---")?;
        let points = self.engine.seat(seat)?.defender.preparation_points;
        self.say(&format!("Preparation Points: {}", points))?;

        let catalog = self.engine.catalog();
        let sections = [
            ("Available Defensive Measures:", catalog.defensive_measures.clone()),
            ("Available Offensive Measures:", catalog.offensive_measures.clone()),
            ("Available Hybrid Measures:", catalog.hybrid_measures.clone()),
        ];
        for (title, measures) in sections {
            if measures.is_empty() {
                continue;
            }
            self.say(title)?;
            for measure in &measures {
                self.say(&describe_measure(measure))?;
            }
        }

        loop {
            let answer = self.ask(
                "Enter 'measure' to implement a security measure or 'done' to finish setup: ",
            )?;
            match parse_setup(&answer) {
                Some(SetupCommand::Measure) => {
                    let name = self.ask("Enter the measure name to implement: ")?;
                    match self.engine.activate_measure(seat, &name) {
                        Ok(measure) => {
                            let remaining = self.engine.seat(seat)?.defender.preparation_points;
                            self.say(&format!(
                                "Implemented {}. Preparation points remaining: {}",
                                measure.name, remaining
                            ))?;
                        }
                        Err(e) => {
                            let line = self.paint(&e.to_string(), Color::Yellow);
                            self.say(&line)?;
                        }
                    }
                }
                Some(SetupCommand::Done) => {
                    if self.engine.seat(seat)?.defender.has_active_measures() {
                        self.say("Setup phase completed.")?;
                        return Ok(());
                    }
                    let line = ActionError::NoActiveMeasures.to_string();
                    self.say(&line)?;
                }
                None => self.say("Invalid action. Please enter 'measure' or 'done'.")?,
            }
        }
    }

    fn run_battle(&mut self, seat: usize, battle: &mut Battle) -> Result<TurnEnd, ConsoleError> {
        let line = format!(
            "\nA threat '{}' has emerged! Preparing for battle...",
            battle.threat.name
        );
        self.say(&line)?;
        self.print_defender(seat)?;

        while !battle.is_over() {
            self.say(&format!("\n--- Round {} ---", battle.round))?;
            let action = self.choose_action(seat)?;
            let events = self
                .engine
                .play_round(seat, battle, action, &mut self.rng)?;
            for event in &events {
                self.report(event)?;
            }
        }

        match self.engine.settle_encounter(seat, battle)? {
            EncounterOutcome::DefenderDefeated => {
                let line = self.paint("Your defender has been compromised! Game Over.", Color::Red);
                self.say(&line)?;
                Ok(TurnEnd::GameOver)
            }
            EncounterOutcome::ThreatNeutralized { points, new_level } => {
                self.say(&format!(
                    "Successfully defeated the threat: {}! +{} points.",
                    battle.threat.name, points
                ))?;
                let defender = &self.engine.seat(seat)?.defender;
                let line = format!(
                    "{} leveled up! Level: {}, Max Health: {}",
                    defender.name,
                    new_level,
                    defender.max_health()
                );
                self.say(&line)?;
                Ok(TurnEnd::Continue)
            }
            EncounterOutcome::Unresolved => {
                self.say("The threat remains active.")?;
                Ok(TurnEnd::Continue)
            }
        }
    }

    fn choose_action(&mut self, seat: usize) -> Result<PlayerAction, ConsoleError> {
        let answer = self.ask("Do you want to 'attack' or 'cast spell'? ")?;
        match parse_battle(&answer) {
            Some(BattleCommand::Attack) => Ok(PlayerAction::Attack),
            Some(BattleCommand::CastSpell) => {
                self.say("Available Spells:")?;
                let spells = self.engine.seat(seat)?.defender.spells().to_vec();
                for spell in &spells {
                    self.say(&format!(
                        "- {}: {} ({}) - {}",
                        spell.key, spell.name, spell.cost, spell.description
                    ))?;
                }
                let key = self.ask("Enter the spell key to cast: ")?;
                Ok(PlayerAction::CastSpell(key))
            }
            None => {
                self.say("Invalid action. Skipping turn.")?;
                Ok(PlayerAction::Pass)
            }
        }
    }

    fn report(&mut self, event: &BattleEvent) -> Result<(), ConsoleError> {
        let line = match event {
            BattleEvent::PlayerAttack { damage } => {
                format!("Attacked the threat! Dealt {} damage.", damage)
            }
            BattleEvent::SpellCast { spell, effect, kind } => {
                format!("Cast spell: {}. {} ({}) is active.", spell, effect, kind.label())
            }
            BattleEvent::SpellFailed { error } => self.paint(&error.to_string(), Color::Yellow),
            BattleEvent::TurnSkipped => return Ok(()),
            BattleEvent::ThreatAttack { damage } => {
                format!("The threat dealt {} damage to your defender.", damage)
            }
            BattleEvent::EffectExpired { name } => format!("{} has worn off.", name),
            BattleEvent::DefenderDefeated => {
                self.paint("Defender has been defeated!", Color::Red)
            }
            BattleEvent::ThreatNeutralized => {
                self.paint("Threat has been neutralized!", Color::Green)
            }
        };
        self.say(&line)
    }

    fn print_defender(&mut self, seat: usize) -> Result<(), ConsoleError> {
        let defender = self.engine.seat(seat)?.defender.clone();
        let status = self.paint(
            defender.security_status().label(),
            status_color(defender.security_status()),
        );
        self.say(&format!("Defender: {}", defender.name))?;
        self.say(&format!("Level: {}", defender.level))?;
        self.say(&format!(
            "Preparation Points: {}",
            defender.preparation_points
        ))?;
        self.say(&format!(
            "Health: {}/{} [{}]",
            defender.current_health(),
            defender.max_health(),
            status
        ))?;
        self.say(&format!("Resources: {}", describe_resources(&defender)))
    }
}

fn status_color(status: SecurityStatus) -> Color {
    match status {
        SecurityStatus::Safe => Color::Green,
        SecurityStatus::Caution => Color::Yellow,
        SecurityStatus::Danger => Color::Red,
    }
}

fn describe_measure(measure: &SecurityMeasure) -> String {
    format!(
        "- {}: {} (Cost: {}, Effectiveness: {})",
        measure.name, measure.description, measure.cost, measure.effectiveness
    )
}

fn describe_resources(defender: &Defender) -> String {
    ResourceKind::ALL
        .iter()
        .map(|kind| format!("{} {}", kind, defender.stats.resources.get(*kind)))
        .collect::<Vec<_>>()
        .join(", ")
}
