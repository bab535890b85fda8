//! Loadout editing, renaming and starting the duel.
//!
//! Under accuracy rules edits are only accepted on the setup screen; under
//! dice rules they are accepted at any time. Values are not range-checked:
//! an accuracy above 100 always hits and a huge damage value one-shots.

use crate::action::{ActionTransition, SetupError};
use crate::env::DuelEnv;
use crate::state::{DuelState, Phase, Side};

fn ensure_editable(state: &DuelState, env: &DuelEnv<'_>) -> Result<(), SetupError> {
    if state.phase == Phase::Setup || env.config().ruleset.allows_inline_edits() {
        Ok(())
    } else {
        Err(SetupError::EditsLocked { phase: state.phase })
    }
}

/// Overwrites the stats of one weapon slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditWeaponAction {
    /// `None` edits the slot on both robots (shared loadout).
    pub side: Option<Side>,
    pub index: usize,
    pub damage: Option<u32>,
    pub accuracy: Option<u32>,
}

impl EditWeaponAction {
    pub fn shared(index: usize) -> Self {
        Self {
            side: None,
            index,
            damage: None,
            accuracy: None,
        }
    }

    pub fn for_side(side: Side, index: usize) -> Self {
        Self {
            side: Some(side),
            ..Self::shared(index)
        }
    }

    #[must_use]
    pub fn damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    #[must_use]
    pub fn accuracy(mut self, accuracy: u32) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    fn sides(&self) -> &'static [Side] {
        match self.side {
            Some(Side::Alpha) => &[Side::Alpha],
            Some(Side::Beta) => &[Side::Beta],
            None => &Side::BOTH,
        }
    }
}

impl ActionTransition for EditWeaponAction {
    type Error = SetupError;

    fn pre_validate(&self, state: &DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        ensure_editable(state, env)?;
        for &side in self.sides() {
            if state.combatant(side).weapon(self.index).is_none() {
                return Err(SetupError::UnknownWeapon {
                    side,
                    index: self.index,
                });
            }
        }
        Ok(())
    }

    fn apply(&self, state: &mut DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        for &side in self.sides() {
            let weapon = state
                .combatant_mut(side)
                .weapon_mut(self.index)
                .ok_or(SetupError::UnknownWeapon {
                    side,
                    index: self.index,
                })?;
            if let Some(damage) = self.damage {
                weapon.damage = damage;
            }
            if let Some(accuracy) = self.accuracy {
                weapon.accuracy = Some(accuracy);
            }
        }
        Ok(())
    }
}

/// Renames one robot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenameAction {
    pub side: Side,
    pub name: String,
}

impl RenameAction {
    pub fn new(side: Side, name: impl Into<String>) -> Self {
        Self {
            side,
            name: name.into(),
        }
    }
}

impl ActionTransition for RenameAction {
    type Error = SetupError;

    fn pre_validate(&self, state: &DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        ensure_editable(state, env)?;
        if self.name.trim().is_empty() {
            return Err(SetupError::EmptyName);
        }
        Ok(())
    }

    fn apply(&self, state: &mut DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        state.combatant_mut(self.side).name = self.name.trim().to_string();
        Ok(())
    }
}

/// Leaves the setup screen and opens the fight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartAction;

impl ActionTransition for StartAction {
    type Error = SetupError;

    fn pre_validate(&self, state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        if state.phase != Phase::Setup {
            return Err(SetupError::AlreadyFighting);
        }
        Ok(())
    }

    fn apply(&self, state: &mut DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        state.reset(env.config());
        state.phase = Phase::Fighting;
        Ok(())
    }
}
