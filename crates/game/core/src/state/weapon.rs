/// A weapon in a robot's loadout.
///
/// How `damage` is read depends on the ruleset: under accuracy rules it is the
/// fixed damage dealt on a hit, under dice rules it is the upper bound of the
/// damage roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
    /// Hit threshold in percent. Only read under accuracy rules.
    #[cfg_attr(feature = "serde", serde(default))]
    pub accuracy: Option<u32>,
}

impl Weapon {
    /// Weapon for accuracy rules: fixed damage, percentage hit chance.
    pub fn new(name: impl Into<String>, damage: u32, accuracy: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            accuracy: Some(accuracy),
        }
    }

    /// Weapon for dice rules: damage rolled in `[1, max_damage]`.
    pub fn with_max_damage(name: impl Into<String>, max_damage: u32) -> Self {
        Self {
            name: name.into(),
            damage: max_damage,
            accuracy: None,
        }
    }
}
