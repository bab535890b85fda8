//! Action execution errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Phase, Side};

/// Reasons an attack is refused or found inconsistent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error("the duel has not started")]
    NotFighting,

    #[error("the duel is over, {winner} won")]
    DuelOver { winner: Side },

    #[error("{attacker} cannot attack, it is {current}'s turn")]
    NotYourTurn { attacker: Side, current: Side },

    #[error("{side} has no weapon in slot {index}")]
    UnknownWeapon { side: Side, index: usize },

    #[error("weapon '{weapon}' has no accuracy value")]
    MissingAccuracy { weapon: String },

    #[error("{side} health {health} exceeds the starting health {max}")]
    HealthOutOfRange { side: Side, health: u32, max: u32 },

    #[error("attack resolved without a log entry")]
    MissingLogEntry,
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        use AttackError::*;
        match self {
            NotFighting | DuelOver { .. } | NotYourTurn { .. } => ErrorSeverity::Recoverable,
            UnknownWeapon { .. } | MissingAccuracy { .. } => ErrorSeverity::Validation,
            HealthOutOfRange { .. } | MissingLogEntry => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use AttackError::*;
        match self {
            NotFighting => "ATTACK_NOT_FIGHTING",
            DuelOver { .. } => "ATTACK_DUEL_OVER",
            NotYourTurn { .. } => "ATTACK_NOT_YOUR_TURN",
            UnknownWeapon { .. } => "ATTACK_UNKNOWN_WEAPON",
            MissingAccuracy { .. } => "ATTACK_MISSING_ACCURACY",
            HealthOutOfRange { .. } => "ATTACK_HEALTH_OUT_OF_RANGE",
            MissingLogEntry => "ATTACK_MISSING_LOG_ENTRY",
        }
    }
}

/// Reasons a setup edit (weapon stats, names, start) is refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    #[error("loadouts cannot be edited during the {phase} phase")]
    EditsLocked { phase: Phase },

    #[error("{side} has no weapon in slot {index}")]
    UnknownWeapon { side: Side, index: usize },

    #[error("robot names cannot be empty")]
    EmptyName,

    #[error("the duel has already started")]
    AlreadyFighting,
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        use SetupError::*;
        match self {
            EditsLocked { .. } | AlreadyFighting => ErrorSeverity::Recoverable,
            UnknownWeapon { .. } | EmptyName => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use SetupError::*;
        match self {
            EditsLocked { .. } => "SETUP_EDITS_LOCKED",
            UnknownWeapon { .. } => "SETUP_UNKNOWN_WEAPON",
            EmptyName => "SETUP_EMPTY_NAME",
            AlreadyFighting => "SETUP_ALREADY_FIGHTING",
        }
    }
}
