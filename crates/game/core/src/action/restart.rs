use crate::action::ActionTransition;
use crate::env::DuelEnv;
use crate::error::NeverError;
use crate::state::DuelState;

/// Resets both robots to starting health, clears the history and hands the
/// turn back to robot 0.
///
/// Accuracy rules return to the setup screen; dice rules go straight back
/// into the fight. Loadouts and names are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartAction;

impl ActionTransition for RestartAction {
    type Error = NeverError;

    fn apply(&self, state: &mut DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        state.reset(env.config());
        Ok(())
    }
}
