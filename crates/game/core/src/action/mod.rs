//! Action domain definitions.
//!
//! Every state change in a duel is expressed as an [`Action`] and executed by
//! [`crate::engine::DuelEngine`] through the [`ActionTransition`] hooks.
pub mod attack;
pub mod error;
pub mod restart;
pub mod setup;
pub mod transition;

pub use attack::AttackAction;
pub use error::{AttackError, SetupError};
pub use restart::RestartAction;
pub use setup::{EditWeaponAction, RenameAction, StartAction};
pub use transition::ActionTransition;

use crate::state::Side;

/// Anything a front-end can ask the engine to do.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Attack(AttackAction),
    EditWeapon(EditWeaponAction),
    Rename(RenameAction),
    Start(StartAction),
    Restart(RestartAction),
}

impl Action {
    pub fn attack(attacker: Side, weapon: usize) -> Self {
        Self::Attack(AttackAction::new(attacker, weapon))
    }

    pub fn rename(side: Side, name: impl Into<String>) -> Self {
        Self::Rename(RenameAction::new(side, name))
    }

    pub fn start() -> Self {
        Self::Start(StartAction)
    }

    pub fn restart() -> Self {
        Self::Restart(RestartAction)
    }

    /// Stable name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Attack(_) => "attack",
            Action::EditWeapon(_) => "edit_weapon",
            Action::Rename(_) => "rename",
            Action::Start(_) => "start",
            Action::Restart(_) => "restart",
        }
    }
}

impl From<EditWeaponAction> for Action {
    fn from(action: EditWeaponAction) -> Self {
        Self::EditWeapon(action)
    }
}
