//! Built-in weapon definitions and the registry that hands out loadouts.

use anyhow::{Result, bail};
use duel_core::Weapon;

/// Static weapon definition compiled into the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeaponSpec {
    pub name: &'static str,
    pub damage: u32,
    pub accuracy: u32,
}

impl WeaponSpec {
    pub fn to_weapon(self) -> Weapon {
        Weapon::new(self.name, self.damage, self.accuracy)
    }
}

/// Default arsenal. Under dice rules `damage` acts as the damage ceiling and
/// `accuracy` is ignored.
pub const DEFAULT_WEAPONS: [WeaponSpec; 3] = [
    WeaponSpec {
        name: "Laser",
        damage: 20,
        accuracy: 70,
    },
    WeaponSpec {
        name: "Missile",
        damage: 30,
        accuracy: 50,
    },
    WeaponSpec {
        name: "Plasma Cannon",
        damage: 25,
        accuracy: 60,
    },
];

/// Ordered list of weapon definitions available to both robots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeaponRegistry {
    weapons: Vec<Weapon>,
}

impl WeaponRegistry {
    pub fn builtin() -> Self {
        Self {
            weapons: DEFAULT_WEAPONS.iter().map(|spec| spec.to_weapon()).collect(),
        }
    }

    /// Builds a registry from loaded definitions.
    ///
    /// Rejects an empty list and duplicate weapon names, since the UI
    /// addresses weapons by slot and shows them by name.
    pub fn from_weapons(weapons: Vec<Weapon>) -> Result<Self> {
        if weapons.is_empty() {
            bail!("weapon registry must contain at least one weapon");
        }
        for (index, weapon) in weapons.iter().enumerate() {
            if weapon.name.trim().is_empty() {
                bail!("weapon in slot {} has an empty name", index);
            }
            if weapons[..index].iter().any(|w| w.name == weapon.name) {
                bail!("duplicate weapon name '{}'", weapon.name);
            }
        }
        Ok(Self { weapons })
    }

    pub fn get(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter()
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// A fresh copy of the full arsenal for one robot.
    pub fn loadout(&self) -> Vec<Weapon> {
        self.weapons.clone()
    }
}

impl Default for WeaponRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_arsenal_matches_defaults() {
        let registry = WeaponRegistry::builtin();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("Laser"), Some(&Weapon::new("Laser", 20, 70)));
        assert_eq!(
            registry.get("Plasma Cannon").map(|w| (w.damage, w.accuracy)),
            Some((25, Some(60)))
        );
        let names: Vec<_> = registry.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Laser", "Missile", "Plasma Cannon"]);
    }

    #[test]
    fn rejects_duplicates_and_empty_lists() {
        assert!(WeaponRegistry::from_weapons(Vec::new()).is_err());
        let dup = vec![Weapon::new("Laser", 1, 1), Weapon::new("Laser", 2, 2)];
        let err = WeaponRegistry::from_weapons(dup).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
        assert!(WeaponRegistry::from_weapons(vec![Weapon::new(" ", 1, 1)]).is_err());
    }
}
