use crate::action::{ActionTransition, AttackError};
use crate::combat::{AttackSeeds, resolve_attack};
use crate::config::Ruleset;
use crate::env::DuelEnv;
use crate::state::{DuelState, LogEntry, Phase, Side};

/// One robot fires one of its weapons at the other.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub attacker: Side,
    /// Index into the attacker's loadout.
    pub weapon: usize,
}

impl AttackAction {
    pub fn new(attacker: Side, weapon: usize) -> Self {
        Self { attacker, weapon }
    }

    pub fn defender(&self) -> Side {
        self.attacker.opponent()
    }
}

impl ActionTransition for AttackAction {
    type Error = AttackError;

    fn pre_validate(&self, state: &DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        if state.phase != Phase::Fighting {
            return Err(AttackError::NotFighting);
        }

        if let Some(winner) = state.winner() {
            return Err(AttackError::DuelOver { winner });
        }

        let config = env.config();
        if config.ruleset.enforces_turns() && !state.turn.is_turn_of(self.attacker) {
            return Err(AttackError::NotYourTurn {
                attacker: self.attacker,
                current: state.turn.current,
            });
        }

        let weapon = state
            .combatant(self.attacker)
            .weapon(self.weapon)
            .ok_or(AttackError::UnknownWeapon {
                side: self.attacker,
                index: self.weapon,
            })?;

        if config.ruleset == Ruleset::Accuracy && weapon.accuracy.is_none() {
            return Err(AttackError::MissingAccuracy {
                weapon: weapon.name.clone(),
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        let defender = self.defender();
        let weapon = state
            .combatant(self.attacker)
            .weapon(self.weapon)
            .cloned()
            .ok_or(AttackError::UnknownWeapon {
                side: self.attacker,
                index: self.weapon,
            })?;

        let seeds = AttackSeeds::derive(state.game_seed, state.nonce, self.attacker);
        let result = resolve_attack(
            state.combatant(self.attacker),
            state.combatant(defender),
            &weapon,
            env,
            seeds,
        );

        state.combatant_mut(defender).health = result.remaining_health;
        state.nonce += 1;
        state.turn.advance();
        state.log.record(LogEntry {
            sequence: u64::from(state.turn.resolved),
            attacker: self.attacker,
            result,
        });

        Ok(())
    }

    fn post_validate(&self, state: &DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        let max = env.config().starting_health;
        for side in Side::BOTH {
            let health = state.combatant(side).health;
            if health > max {
                return Err(AttackError::HealthOutOfRange { side, health, max });
            }
        }

        match state.log.latest() {
            Some(entry) if entry.attacker == self.attacker => Ok(()),
            _ => Err(AttackError::MissingLogEntry),
        }
    }
}
