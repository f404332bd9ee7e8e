//! Round-by-round battle resolution between a defender and a threat.

use super::types::{BattleState, Threat};
use crate::character::{AttributeType, Defender};
use crate::core::constants::THREAT_DAMAGE_SPREAD;
use crate::core::error::ActionError;
use crate::security::StatusKind;
use rand::Rng;
use tracing::debug;

/// What the player does on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    CastSpell(String),
    /// Unrecognized input; the player's turn is lost.
    Pass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    PlayerAttack {
        damage: u32,
    },
    SpellCast {
        spell: String,
        effect: String,
        kind: StatusKind,
    },
    /// The spell was unknown or unaffordable; nothing was spent.
    SpellFailed {
        error: ActionError,
    },
    TurnSkipped,
    ThreatAttack {
        damage: u32,
    },
    EffectExpired {
        name: String,
    },
    DefenderDefeated,
    ThreatNeutralized,
}

/// Offensive effectiveness scaled by agility: `power * (1 + agility / 100)`.
pub fn attack_damage(defender: &Defender) -> u32 {
    let power = defender.offensive_power() as u64;
    let agility = defender.attribute(AttributeType::Agility) as u64;
    let damage = power * (100 + agility) / 100;
    u32::try_from(damage).unwrap_or(u32::MAX)
}

/// Applies active defensive measures, then the fault tolerance + resilience
/// percentage reduction, to a raw threat hit.
pub fn mitigate_threat_damage(raw_damage: u32, defender: &Defender) -> u32 {
    let after_measures = raw_damage.saturating_sub(defender.defensive_power()) as u64;
    let reduction_percent = defender.attribute(AttributeType::FaultTolerance) as u64
        + defender.attribute(AttributeType::Resilience) as u64;
    if reduction_percent >= 100 {
        return 0;
    }
    (after_measures * (100 - reduction_percent) / 100) as u32
}

/// Rolls a raw hit uniformly in `[power - spread, power + spread]`
/// (floored at zero) and mitigates it.
pub fn roll_threat_damage(
    threat: &Threat,
    defender: &Defender,
    spread: u32,
    rng: &mut impl Rng,
) -> u32 {
    let power = threat.power as i64;
    let spread = spread as i64;
    let roll = rng.gen_range(power - spread..=power + spread);
    let raw = u32::try_from(roll.max(0)).unwrap_or(u32::MAX);
    mitigate_threat_damage(raw, defender)
}

#[derive(Debug, Clone)]
pub struct Battle {
    pub threat: Threat,
    /// Number of the round about to be played, starting at 1.
    pub round: u32,
    state: BattleState,
    damage_spread: u32,
}

impl Battle {
    pub fn new(threat: Threat) -> Self {
        Self::with_damage_spread(threat, THREAT_DAMAGE_SPREAD)
    }

    pub fn with_damage_spread(threat: Threat, damage_spread: u32) -> Self {
        Self {
            threat,
            round: 1,
            state: BattleState::InProgress,
            damage_spread,
        }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn threat_defeated(&self) -> bool {
        self.threat.is_defeated()
    }

    /// Plays one full round: player turn, threat turn (if the threat still
    /// has power), status effect upkeep, then the end-of-round check.
    /// Returns no events once the battle is over.
    pub fn play_round(
        &mut self,
        defender: &mut Defender,
        action: PlayerAction,
        rng: &mut impl Rng,
    ) -> Vec<BattleEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }

        match action {
            PlayerAction::Attack => {
                let damage = attack_damage(defender);
                self.threat.take_hit(damage);
                events.push(BattleEvent::PlayerAttack { damage });
            }
            PlayerAction::CastSpell(key) => match defender.cast_spell(&key) {
                Ok(spell) => events.push(BattleEvent::SpellCast {
                    spell: spell.name,
                    effect: spell.effect.name,
                    kind: spell.effect.kind,
                }),
                Err(error) => events.push(BattleEvent::SpellFailed { error }),
            },
            PlayerAction::Pass => events.push(BattleEvent::TurnSkipped),
        }

        if !self.threat.is_defeated() {
            let damage = roll_threat_damage(&self.threat, defender, self.damage_spread, rng);
            defender.take_damage(damage);
            events.push(BattleEvent::ThreatAttack { damage });
        }

        for effect in defender.update_status_effects() {
            events.push(BattleEvent::EffectExpired { name: effect.name });
        }

        debug!(
            round = self.round,
            threat_power = self.threat.power,
            threat_persistence = self.threat.persistence,
            defender_health = defender.current_health(),
            "battle round"
        );
        self.round += 1;

        if !defender.is_alive() {
            self.state = BattleState::DefenderDefeated;
            events.push(BattleEvent::DefenderDefeated);
        } else if self.threat.is_neutralized() {
            self.state = BattleState::ThreatNeutralized;
            events.push(BattleEvent::ThreatNeutralized);
        }

        events
    }

    /// Plays rounds until the battle ends, asking `choose` for each action.
    pub fn run<F>(&mut self, defender: &mut Defender, mut choose: F, rng: &mut impl Rng) -> BattleState
    where
        F: FnMut(&Battle, &Defender) -> PlayerAction,
    {
        while !self.is_over() {
            let action = choose(self, defender);
            self.play_round(defender, action, rng);
        }
        self.state
    }
}
