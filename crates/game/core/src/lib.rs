//! Deterministic duel rules and data types shared across clients.
//!
//! `duel-core` defines the canonical rules (actions, combat resolution, duel
//! state) and exposes pure APIs that front-ends drive. All state mutation
//! flows through [`engine::DuelEngine`]; randomness is injected through
//! [`env::DuelEnv`] so every fight can be replayed from its seed.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionTransition, AttackAction, AttackError, EditWeaponAction, RenameAction,
    RestartAction, SetupError, StartAction,
};
pub use combat::{AttackOutcome, AttackResult, AttackSeeds, resolve_attack};
pub use config::{DiceRules, DuelConfig, Ruleset};
pub use engine::{DuelEngine, ExecuteError, TransitionPhase, TransitionPhaseError, reduce};
pub use env::{DuelEnv, PcgRng, RngOracle, ScriptedRng};
pub use error::{ErrorSeverity, GameError, NeverError};
pub use state::{
    CombatLog, Combatant, DuelDelta, DuelState, LogEntry, Phase, Side, TurnState, Weapon,
};
