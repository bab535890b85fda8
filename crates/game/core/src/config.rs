//! Duel configuration and rule-set selection.

use crate::state::Side;

/// Which combat rules govern the duel.
///
/// The two rule-sets disagree on both hit and damage mechanics and are kept
/// fully separate rather than blended.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Ruleset {
    /// d100 against the weapon's accuracy, fixed damage, free turn order.
    #[default]
    Accuracy,
    /// Fixed die threshold, random damage up to the weapon maximum,
    /// strictly alternating turns.
    Dice,
}

impl Ruleset {
    /// Whether only the turn holder may attack.
    pub const fn enforces_turns(&self) -> bool {
        matches!(self, Self::Dice)
    }

    /// Whether the duel opens on the weapon setup screen.
    pub const fn starts_in_setup(&self) -> bool {
        matches!(self, Self::Accuracy)
    }

    /// Whether names and weapon stats may be edited while fighting.
    pub const fn allows_inline_edits(&self) -> bool {
        matches!(self, Self::Dice)
    }
}

/// Die parameters for [`Ruleset::Dice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiceRules {
    /// Faces on the hit die.
    pub sides: u32,
    /// Minimum hit roll that connects.
    pub hit_threshold: u32,
}

impl DiceRules {
    pub const DEFAULT_SIDES: u32 = 6;
    pub const DEFAULT_HIT_THRESHOLD: u32 = 4;
}

impl Default for DiceRules {
    fn default() -> Self {
        Self {
            sides: Self::DEFAULT_SIDES,
            hit_threshold: Self::DEFAULT_HIT_THRESHOLD,
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelConfig {
    pub ruleset: Ruleset,
    /// Health each robot starts (and restarts) with.
    pub starting_health: u32,
    /// Only consulted under [`Ruleset::Dice`].
    pub dice: DiceRules,
}

impl DuelConfig {
    pub const DEFAULT_STARTING_HEALTH: u32 = 100;

    /// Sides of the percentile die used by [`Ruleset::Accuracy`].
    pub const PERCENTILE_SIDES: u32 = 100;

    /// The side that holds the first turn after start or restart.
    pub const FIRST_SIDE: Side = Side::Alpha;

    pub fn new(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            starting_health: Self::DEFAULT_STARTING_HEALTH,
            dice: DiceRules::default(),
        }
    }

    pub fn accuracy() -> Self {
        Self::new(Ruleset::Accuracy)
    }

    pub fn dice() -> Self {
        Self::new(Ruleset::Dice)
    }

    #[must_use]
    pub fn with_starting_health(mut self, starting_health: u32) -> Self {
        self.starting_health = starting_health;
        self
    }

    /// Sides of the die rolled for the hit check under the active rules.
    pub fn hit_die_sides(&self) -> u32 {
        match self.ruleset {
            Ruleset::Accuracy => Self::PERCENTILE_SIDES,
            Ruleset::Dice => self.dice.sides,
        }
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self::new(Ruleset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruleset_parses_case_insensitively() {
        assert_eq!("DICE".parse::<Ruleset>(), Ok(Ruleset::Dice));
        assert_eq!("accuracy".parse::<Ruleset>(), Ok(Ruleset::Accuracy));
        assert!("poker".parse::<Ruleset>().is_err());
        assert_eq!(Ruleset::Dice.to_string(), "dice");
    }

    #[test]
    fn hit_die_follows_ruleset() {
        assert_eq!(DuelConfig::accuracy().hit_die_sides(), 100);
        assert_eq!(DuelConfig::dice().hit_die_sides(), 6);
    }
}
