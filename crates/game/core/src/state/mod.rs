//! Authoritative duel state representation.
//!
//! Front-ends clone or query this state but mutate it exclusively through the
//! engine.
pub mod combatant;
pub mod delta;
pub mod log;
pub mod turn;
pub mod weapon;

pub use combatant::{Combatant, Side};
pub use delta::DuelDelta;
pub use log::{CombatLog, LogEntry};
pub use turn::TurnState;
pub use weapon::Weapon;

use crate::config::DuelConfig;

/// Coarse stage of a duel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Weapons and names are being configured; no attacks yet.
    #[default]
    Setup,
    Fighting,
}

/// Canonical snapshot of the deterministic duel state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified. Combined with
    /// `nonce` to generate unique seeds for each roll.
    pub game_seed: u64,

    /// Number of attacks resolved over the whole session.
    ///
    /// Survives restarts so a rematch draws fresh rolls.
    pub nonce: u64,

    pub phase: Phase,
    pub combatants: [Combatant; 2],
    pub turn: TurnState,
    pub log: CombatLog,
}

impl DuelState {
    pub const DEFAULT_NAMES: [&'static str; 2] = ["Robot Alpha", "Robot Beta"];

    /// Creates a fresh duel from two prepared combatants.
    ///
    /// Health is reset to the configured starting value.
    pub fn new(config: &DuelConfig, combatants: [Combatant; 2], game_seed: u64) -> Self {
        let mut state = Self {
            game_seed,
            nonce: 0,
            phase: Phase::Setup,
            combatants,
            turn: TurnState::new(DuelConfig::FIRST_SIDE),
            log: CombatLog::new(),
        };
        state.reset(config);
        state
    }

    /// Creates a duel where both robots carry the same loadout.
    pub fn with_shared_loadout(config: &DuelConfig, weapons: Vec<Weapon>, game_seed: u64) -> Self {
        let [alpha, beta] = Self::DEFAULT_NAMES;
        let combatants = [
            Combatant::new(alpha, config.starting_health, weapons.clone()),
            Combatant::new(beta, config.starting_health, weapons),
        ];
        Self::new(config, combatants, game_seed)
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    /// The surviving side once the other has been destroyed.
    ///
    /// `None` while both stand, and also when neither does.
    pub fn winner(&self) -> Option<Side> {
        Side::BOTH.into_iter().find(|&side| {
            !self.combatant(side).is_defeated() && self.combatant(side.opponent()).is_defeated()
        })
    }

    pub fn is_over(&self) -> bool {
        self.combatants.iter().any(Combatant::is_defeated)
    }

    /// Restores both robots to full health, clears the history and hands the
    /// first turn back to robot 0. Weapons and names are kept.
    pub(crate) fn reset(&mut self, config: &DuelConfig) {
        for combatant in &mut self.combatants {
            combatant.health = config.starting_health;
        }
        self.log.clear();
        self.turn = TurnState::new(DuelConfig::FIRST_SIDE);
        self.phase = if config.ruleset.starts_in_setup() {
            Phase::Setup
        } else {
            Phase::Fighting
        };
    }
}
