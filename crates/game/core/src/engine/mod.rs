//! Action execution pipeline.
//!
//! The [`DuelEngine`] is the authoritative reducer for [`DuelState`]. It runs
//! every action through its transition phases and surfaces rich error
//! information for front-ends.

use crate::action::{
    Action, ActionTransition, AttackAction, EditWeaponAction, RenameAction, StartAction,
};
use crate::env::DuelEnv;
use crate::state::{DuelDelta, DuelState};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("attack failed: {0}")]
    Attack(TransitionPhaseError<<AttackAction as ActionTransition>::Error>),

    #[error("weapon edit failed: {0}")]
    EditWeapon(TransitionPhaseError<<EditWeaponAction as ActionTransition>::Error>),

    #[error("rename failed: {0}")]
    Rename(TransitionPhaseError<<RenameAction as ActionTransition>::Error>),

    #[error("start failed: {0}")]
    Start(TransitionPhaseError<<StartAction as ActionTransition>::Error>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Attack(e) => e.phase,
            ExecuteError::EditWeapon(e) => e.phase,
            ExecuteError::Rename(e) => e.phase,
            ExecuteError::Start(e) => e.phase,
        }
    }

    /// Underlying error classification, see [`crate::GameError`].
    pub fn severity(&self) -> crate::ErrorSeverity {
        use crate::GameError;
        match self {
            ExecuteError::Attack(e) => e.error.severity(),
            ExecuteError::EditWeapon(e) => e.error.severity(),
            ExecuteError::Rename(e) => e.error.severity(),
            ExecuteError::Start(e) => e.error.severity(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        use crate::GameError;
        match self {
            ExecuteError::Attack(e) => e.error.error_code(),
            ExecuteError::EditWeapon(e) => e.error.error_code(),
            ExecuteError::Rename(e) => e.error.error_code(),
            ExecuteError::Start(e) => e.error.error_code(),
        }
    }
}

type TransitionResult<E> = Result<(), TransitionPhaseError<E>>;

macro_rules! dispatch_transition {
    ($action:expr, $state:expr, $env:expr, { $($variant:ident),+ $(,)? }) => {{
        match $action {
            $(
                Action::$variant(transition) => {
                    drive_transition(transition, $state, $env).map_err(ExecuteError::$variant)
                }
            )+
            Action::Restart(transition) => match drive_transition(transition, $state, $env) {
                Ok(()) => Ok(()),
                Err(never) => match never.error {},
            },
        }
    }};
}

/// Engine that validates and applies actions to a borrowed [`DuelState`].
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
///
/// A failed pre-validation leaves the state untouched. A failure in a later
/// phase rolls the state back to the snapshot taken before the action, so a
/// partially applied attack is never observable.
pub struct DuelEngine<'a> {
    state: &'a mut DuelState,
}

impl<'a> DuelEngine<'a> {
    pub fn new(state: &'a mut DuelState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &DuelState {
        self.state
    }

    /// Executes an action by routing it through the matching transition.
    ///
    /// Returns a [`DuelDelta`] describing what changed.
    pub fn execute(&mut self, env: &DuelEnv<'_>, action: &Action) -> Result<DuelDelta, ExecuteError> {
        let before = self.state.clone();

        let outcome = dispatch_transition!(action, self.state, env, {
            Attack,
            EditWeapon,
            Rename,
            Start,
        });

        if let Err(error) = outcome {
            *self.state = before;
            return Err(error);
        }

        Ok(DuelDelta::from_states(action.clone(), &before, self.state))
    }
}

/// Pure form of [`DuelEngine::execute`]: `(state, action) -> new state`.
pub fn reduce(
    state: &DuelState,
    env: &DuelEnv<'_>,
    action: &Action,
) -> Result<(DuelState, DuelDelta), ExecuteError> {
    let mut next = state.clone();
    let delta = DuelEngine::new(&mut next).execute(env, action)?;
    Ok((next, delta))
}

#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut DuelState,
    env: &DuelEnv<'_>,
) -> TransitionResult<T::Error>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}
