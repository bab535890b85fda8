use crate::env::DuelEnv;
use crate::state::DuelState;

/// Defines how a concrete action variant mutates duel state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks receive
/// read-only access to configuration and the RNG via [`DuelEnv`].
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the state directly. Implementations
    /// should assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
