//! Hit rolls and hit checks.

use crate::config::{DuelConfig, Ruleset};
use crate::env::RngOracle;
use crate::state::Weapon;

/// Draw the hit roll for the active ruleset (d100 or the configured die).
pub fn roll_hit(config: &DuelConfig, rng: &(impl RngOracle + ?Sized), seed: u64) -> u32 {
    rng.roll_die(seed, config.hit_die_sides())
}

/// The value the hit roll is compared against.
///
/// Under accuracy rules this is the weapon's accuracy (a weapon without one
/// never hits); under dice rules it is the fixed die threshold.
pub fn hit_threshold(config: &DuelConfig, weapon: &Weapon) -> u32 {
    match config.ruleset {
        Ruleset::Accuracy => weapon.accuracy.unwrap_or(0),
        Ruleset::Dice => config.dice.hit_threshold,
    }
}

/// Check if an attack hits.
///
/// # Formula
///
/// ```text
/// accuracy rules: hit iff roll <= accuracy
/// dice rules:     hit iff roll >= hit_threshold
/// ```
pub fn check_hit(config: &DuelConfig, weapon: &Weapon, roll: u32) -> bool {
    let threshold = hit_threshold(config, weapon);
    match config.ruleset {
        Ruleset::Accuracy => roll <= threshold,
        Ruleset::Dice => roll >= threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_hits_at_or_below_threshold() {
        let config = DuelConfig::accuracy();
        let laser = Weapon::new("Laser", 20, 70);
        assert!(check_hit(&config, &laser, 1));
        assert!(check_hit(&config, &laser, 70));
        assert!(!check_hit(&config, &laser, 71));
        assert!(!check_hit(&config, &laser, 100));
    }

    #[test]
    fn accuracy_without_value_never_hits() {
        let config = DuelConfig::accuracy();
        let blank = Weapon::with_max_damage("Blank", 10);
        assert!((1..=100).all(|roll| !check_hit(&config, &blank, roll)));
    }

    #[test]
    fn dice_hits_on_four_or_more_regardless_of_weapon() {
        let config = DuelConfig::dice();
        let sniper = Weapon::new("Sniper", 10, 100);
        let hits: Vec<_> = (1..=6)
            .filter(|&roll| check_hit(&config, &sniper, roll))
            .collect();
        assert_eq!(hits, [4, 5, 6]);
    }
}
