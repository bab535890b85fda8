//! Shared error classification for duel-core.
//!
//! Each action defines its own error enum next to its validation code
//! (`AttackError`, `SetupError`). They all implement [`GameError`] so that a
//! front-end can pick a presentation without matching on every variant.

/// How a rejected action should be treated by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request was legal in principle but not right now, e.g. firing out
    /// of turn or after the duel ended.
    Recoverable,

    /// The request itself is malformed: unknown weapon slot, blank name.
    Validation,

    /// The engine caught its own inconsistency after applying an action.
    /// The state has been rolled back but this points at a bug.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Implemented by every error an action transition can return.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable upper-case identifier, e.g. `ATTACK_NOT_YOUR_TURN`.
    ///
    /// Falls back to the Rust type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Error type of transitions that cannot fail, such as a restart.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("uninhabited error")]
pub enum NeverError {}

impl GameError for NeverError {
    fn severity(&self) -> ErrorSeverity {
        match *self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{AttackError, SetupError};
    use crate::state::Side;

    #[test]
    fn action_errors_are_classified() {
        let out_of_turn = AttackError::NotYourTurn {
            attacker: Side::Beta,
            current: Side::Alpha,
        };
        assert!(out_of_turn.severity().is_recoverable());
        assert_eq!(out_of_turn.error_code(), "ATTACK_NOT_YOUR_TURN");

        assert_eq!(SetupError::EmptyName.severity(), ErrorSeverity::Validation);
        assert!(AttackError::MissingLogEntry.severity().is_internal());
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
    }
}
