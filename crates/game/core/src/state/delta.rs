//! Summary of what a single action changed.

use super::{DuelState, LogEntry, Phase, Side};
use crate::action::Action;

/// Observable difference between the state before and after an action.
///
/// Front-ends use it to decide what to announce without diffing the full
/// state themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelDelta {
    pub action: Action,
    /// The log entry produced, if the action resolved an attack.
    pub attack: Option<LogEntry>,
    pub health_before: [u32; 2],
    pub health_after: [u32; 2],
    pub turn_before: Side,
    pub turn_after: Side,
    pub phase_before: Phase,
    pub phase_after: Phase,
}

impl DuelDelta {
    pub fn from_states(action: Action, before: &DuelState, after: &DuelState) -> Self {
        let attack = if after.nonce > before.nonce {
            after.log.latest().cloned()
        } else {
            None
        };

        Self {
            action,
            attack,
            health_before: health_of(before),
            health_after: health_of(after),
            turn_before: before.turn.current,
            turn_after: after.turn.current,
            phase_before: before.phase,
            phase_after: after.phase,
        }
    }

    /// The side whose health dropped to zero in this action.
    pub fn destroyed(&self) -> Option<Side> {
        Side::BOTH.into_iter().find(|side| {
            self.health_before[side.index()] > 0 && self.health_after[side.index()] == 0
        })
    }
}

fn health_of(state: &DuelState) -> [u32; 2] {
    [
        state.combatant(Side::Alpha).health,
        state.combatant(Side::Beta).health,
    ]
}
