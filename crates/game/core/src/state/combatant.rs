use super::Weapon;

/// Identifies one of the two robots in a duel.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    #[default]
    Alpha,
    Beta,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Alpha, Side::Beta];

    pub const fn index(self) -> usize {
        match self {
            Side::Alpha => 0,
            Side::Beta => 1,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Side::Alpha),
            1 => Some(Side::Beta),
            _ => None,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Side::Alpha => Side::Beta,
            Side::Beta => Side::Alpha,
        }
    }
}

/// A robot with health and a weapon loadout.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub health: u32,
    pub weapons: Vec<Weapon>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, health: u32, weapons: Vec<Weapon>) -> Self {
        Self {
            name: name.into(),
            health,
            weapons,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn weapon(&self, index: usize) -> Option<&Weapon> {
        self.weapons.get(index)
    }

    pub fn weapon_mut(&mut self, index: usize) -> Option<&mut Weapon> {
        self.weapons.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips_and_round_trips_index() {
        assert_eq!(Side::Alpha.opponent(), Side::Beta);
        assert_eq!(Side::Beta.opponent().opponent(), Side::Beta);
        for side in Side::BOTH {
            assert_eq!(Side::from_index(side.index()), Some(side));
        }
        assert_eq!(Side::from_index(2), None);
    }

    #[test]
    fn defeated_only_at_zero_health() {
        let mut robot = Combatant::new("Robot Alpha", 1, Vec::new());
        assert!(!robot.is_defeated());
        robot.health = 0;
        assert!(robot.is_defeated());
    }
}
