use super::Side;

/// Turn bookkeeping.
///
/// The turn flips after every resolved attack, hit or miss. Whether it is
/// enforced depends on the ruleset; see [`crate::Ruleset::enforces_turns`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub current: Side,
    /// Attacks resolved since the last start or restart.
    pub resolved: u32,
}

impl TurnState {
    pub fn new(first: Side) -> Self {
        Self {
            current: first,
            resolved: 0,
        }
    }

    pub fn is_turn_of(&self, side: Side) -> bool {
        self.current == side
    }

    /// Hands the turn to the defender of the attack that just resolved.
    pub fn advance(&mut self) {
        self.current = self.current.opponent();
        self.resolved = self.resolved.saturating_add(1);
    }
}
